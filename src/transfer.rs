use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Accelerated downloader binary, optional on the host
pub const ARIA2C_BIN: &str = "aria2c";

/// Fallback fetch binary, assumed present on the host
pub const CURL_BIN: &str = "curl";

// aria2c tuning: 16 connections over 16 segments, 1 MiB minimum split,
// continuing partial downloads.
const CONNECTIONS: &str = "16";
const SEGMENTS: &str = "16";
const MIN_SPLIT_SIZE: &str = "1M";

/// The two transfer modes, chosen fresh on every download call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferCommand {
    /// Single-connection fetch writing directly to the target path
    Basic { target: PathBuf, url: String },
    /// Multi-connection resumable download into the target directory
    Accelerated {
        dir: PathBuf,
        filename: String,
        url: String,
    },
}

/// Probe for aria2c by spawning it with all stdio discarded.
///
/// Only a missing executable counts as unavailable; a found binary that
/// exits non-zero (as a bare `aria2c` invocation does) is still available.
#[must_use]
pub fn aria2c_available() -> bool {
    match Command::new(ARIA2C_BIN)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(mut child) => {
            let _ = child.wait();
            true
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            tracing::warn!("aria2c probe failed to spawn: {e}");
            false
        }
    }
}

/// Captured result of one transfer execution
#[derive(Debug)]
pub struct TransferOutput {
    pub success: bool,
    /// Combined stdout/stderr text of the child process
    pub log: String,
}

impl TransferCommand {
    /// Choose the command variant for the probed tool availability
    #[must_use]
    pub fn select(accelerated: bool, dir: &Path, filename: &str, url: &str) -> Self {
        if accelerated {
            Self::Accelerated {
                dir: dir.to_path_buf(),
                filename: filename.to_string(),
                url: url.to_string(),
            }
        } else {
            Self::Basic {
                target: dir.join(filename),
                url: url.to_string(),
            }
        }
    }

    /// Program this command invokes
    #[must_use]
    pub fn program(&self) -> &'static str {
        match self {
            Self::Basic { .. } => CURL_BIN,
            Self::Accelerated { .. } => ARIA2C_BIN,
        }
    }

    /// Full argument vector, program first
    #[must_use]
    pub fn argv(&self) -> Vec<OsString> {
        match self {
            Self::Basic { target, url } => vec![
                CURL_BIN.into(),
                "-L".into(),
                "-o".into(),
                target.clone().into_os_string(),
                url.into(),
            ],
            Self::Accelerated { dir, filename, url } => vec![
                ARIA2C_BIN.into(),
                "-c".into(),
                "-x".into(),
                CONNECTIONS.into(),
                "-s".into(),
                SEGMENTS.into(),
                "-k".into(),
                MIN_SPLIT_SIZE.into(),
                "-d".into(),
                dir.clone().into_os_string(),
                "-o".into(),
                filename.into(),
                url.into(),
            ],
        }
    }

    /// Run the transfer as a child process, blocking until it exits
    pub fn run(&self) -> io::Result<TransferOutput> {
        let argv = self.argv();
        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .output()?;

        let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !log.is_empty() && !log.ends_with('\n') {
                log.push('\n');
            }
            log.push_str(stderr.trim_end());
        }

        Ok(TransferOutput {
            success: output.status.success(),
            log,
        })
    }
}
