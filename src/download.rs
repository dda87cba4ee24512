use crate::catalog::ModelMetadata;
use crate::config::Config;
use crate::paths;
use crate::transfer::{self, TransferCommand};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One download attempt, consumed exactly once
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// Raw category string from the catalog
    pub category: String,
    pub filename: String,
    pub url: String,
    /// Encoded preview image bytes for the `.jpeg` sidecar
    pub image: Option<Vec<u8>>,
}

impl DownloadRequest {
    /// Build a request from fetched metadata plus optional preview bytes
    #[must_use]
    pub fn from_metadata(meta: &ModelMetadata, image: Option<Vec<u8>>) -> Self {
        Self {
            category: meta.category.clone(),
            filename: meta.file_name.clone(),
            url: meta.download_url.clone(),
            image,
        }
    }
}

/// Terminal outcome of a download attempt, surfaced to the user verbatim.
///
/// There is no retry anywhere in this pipeline; re-invoking the download is
/// the user's call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Category, filename or URL was missing from the request
    MissingInfo,
    /// Category has no known storage directory; carries the raw string
    UnsupportedCategory(String),
    /// Target file already present; nothing is ever overwritten
    AlreadyExists(PathBuf),
    Success { path: PathBuf, log: String },
    Failure { log: String },
}

impl DownloadOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::AlreadyExists(_))
    }
}

impl fmt::Display for DownloadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInfo => write!(f, "Download information missing"),
            Self::UnsupportedCategory(category) => {
                write!(f, "This model type is not supported yet: {category}")
            }
            Self::AlreadyExists(path) => {
                write!(f, "Already exists, not downloading again:\n{}", path.display())
            }
            Self::Success { path, log } => {
                write!(f, "Download successful, saved to:\n{}\n{log}", path.display())
            }
            Self::Failure { log } => write!(f, "Download failed, error output:\n{log}"),
        }
    }
}

/// Run one download request to completion.
///
/// Each step is a hard precondition returning immediately on failure, except
/// the preview-image sidecar which is best-effort and never blocks the
/// transfer.
#[must_use]
pub fn run(request: &DownloadRequest, config: &Config) -> DownloadOutcome {
    if request.category.is_empty() || request.filename.is_empty() || request.url.is_empty() {
        return DownloadOutcome::MissingInfo;
    }

    let Some(target_dir) = paths::resolve(&request.category, config) else {
        return DownloadOutcome::UnsupportedCategory(request.category.clone());
    };

    if let Some(image) = request.image.as_deref() {
        if !image.is_empty() {
            save_preview_image(&target_dir, &request.filename, image);
        }
    }

    let target_file = target_dir.join(&request.filename);
    if target_file.exists() {
        return DownloadOutcome::AlreadyExists(target_file);
    }

    let command = TransferCommand::select(
        transfer::aria2c_available(),
        &target_dir,
        &request.filename,
        &request.url,
    );
    tracing::info!(
        "Downloading {} to {} with {}",
        request.filename,
        target_dir.display(),
        command.program()
    );

    let output = match command.run() {
        Ok(o) => o,
        Err(e) => {
            return DownloadOutcome::Failure {
                log: format!("Failed to run {}: {e}", command.program()),
            }
        }
    };

    if output.success {
        DownloadOutcome::Success {
            path: target_file,
            log: output.log,
        }
    } else {
        DownloadOutcome::Failure { log: output.log }
    }
}

/// Write the preview image sidecar next to the model file, best-effort.
///
/// An existing sidecar is left untouched.
fn save_preview_image(dir: &Path, filename: &str, image: &[u8]) {
    let path = dir.join(sidecar_name(filename));
    if path.exists() {
        return;
    }

    if let Err(e) = fs::write(&path, image) {
        tracing::warn!("Failed to save preview image {}: {e}", path.display());
    }
}

/// Model filename with its extension replaced by `.jpeg`
fn sidecar_name(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, _)) => format!("{stem}.jpeg"),
        None => format!("{filename}.jpeg"),
    }
}
