use crate::error::{FetchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Target directory layout.
///
/// `models_dir` and `data_dir` are the two WebUI base paths; per-category
/// override fields win over the defaults derived from them when set and
/// non-empty.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct PathsConfig {
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lora_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeddings_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypernetwork_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lycoris_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vae_dir: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct CatalogConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

// Default value functions
fn default_models_dir() -> PathBuf {
    PathBuf::from("models")
}
fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_api_base() -> String {
    "https://api.tzone03.xyz".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            data_dir: default_data_dir(),
            checkpoint_dir: None,
            lora_dir: None,
            embeddings_dir: None,
            hypernetwork_dir: None,
            lycoris_dir: None,
            vae_dir: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the user config directory, or defaults if absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| {
            FetchError::Config(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    /// Path to the user config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FetchError::Config("Cannot determine config directory".to_string()))?;

        Ok(config_dir.join("modelfetch").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.models_dir, PathBuf::from("models"));
        assert_eq!(config.paths.data_dir, PathBuf::from("."));
        assert!(config.paths.lora_dir.is_none());
        assert_eq!(config.catalog.api_base, "https://api.tzone03.xyz");
    }

    #[test]
    fn test_partial_config_merges_defaults() {
        let config: Config = toml::from_str(
            r#"
            [paths]
            lora_dir = "/custom/lora"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.lora_dir, Some(PathBuf::from("/custom/lora")));
        assert_eq!(config.paths.models_dir, PathBuf::from("models"));
        assert_eq!(config.catalog.api_base, "https://api.tzone03.xyz");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.paths.models_dir, PathBuf::from("models"));
        assert!(config.paths.checkpoint_dir.is_none());
    }

    #[test]
    fn test_api_base_override() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            api_base = "https://mirror.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.api_base, "https://mirror.example.com");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.paths.vae_dir = Some(PathBuf::from("/models/vae"));

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.paths.vae_dir, Some(PathBuf::from("/models/vae")));
    }
}
