use crate::config::Config;
use std::path::PathBuf;

/// Classification of a catalog model artifact
///
/// Each recognized category maps to exactly one storage directory in the
/// WebUI layout. Categories the catalog may report but that have no known
/// storage location (e.g. `AestheticGradient`, `Controlnet`) stay
/// unrecognized on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCategory {
    Checkpoint,
    Lora,
    TextualInversion,
    Hypernetwork,
    LoCon,
    Vae,
}

impl ModelCategory {
    /// Parse the raw category string reported by the catalog
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Checkpoint" => Some(Self::Checkpoint),
            "LORA" => Some(Self::Lora),
            "TextualInversion" => Some(Self::TextualInversion),
            "Hypernetwork" => Some(Self::Hypernetwork),
            "LoCon" => Some(Self::LoCon),
            "VAE" => Some(Self::Vae),
            _ => None,
        }
    }
}

/// Resolve the target directory for a raw catalog category.
///
/// A non-empty per-category override from the config wins; otherwise the
/// default is built from the configured base paths. Unrecognized categories
/// return `None` rather than guessing a path. Pure function of
/// (category, config); creates nothing on disk.
#[must_use]
pub fn resolve(category: &str, config: &Config) -> Option<PathBuf> {
    let category = ModelCategory::parse(category)?;
    let paths = &config.paths;

    let (override_dir, default_dir) = match category {
        ModelCategory::Checkpoint => (
            &paths.checkpoint_dir,
            paths.models_dir.join("Stable-diffusion"),
        ),
        ModelCategory::Lora => (&paths.lora_dir, paths.models_dir.join("Lora")),
        ModelCategory::TextualInversion => {
            (&paths.embeddings_dir, paths.data_dir.join("embeddings"))
        }
        ModelCategory::Hypernetwork => (
            &paths.hypernetwork_dir,
            paths.models_dir.join("hypernetworks"),
        ),
        ModelCategory::LoCon => (&paths.lycoris_dir, paths.models_dir.join("LyCORIS")),
        ModelCategory::Vae => (&paths.vae_dir, paths.models_dir.join("VAE")),
    };

    match override_dir {
        Some(dir) if !dir.as_os_str().is_empty() => Some(dir.clone()),
        _ => Some(default_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(ModelCategory::parse("Checkpoint"), Some(ModelCategory::Checkpoint));
        assert_eq!(ModelCategory::parse("LORA"), Some(ModelCategory::Lora));
        assert_eq!(
            ModelCategory::parse("TextualInversion"),
            Some(ModelCategory::TextualInversion)
        );
        assert_eq!(
            ModelCategory::parse("Hypernetwork"),
            Some(ModelCategory::Hypernetwork)
        );
        assert_eq!(ModelCategory::parse("LoCon"), Some(ModelCategory::LoCon));
        assert_eq!(ModelCategory::parse("VAE"), Some(ModelCategory::Vae));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(ModelCategory::parse("lora"), None);
        assert_eq!(ModelCategory::parse("checkpoint"), None);
        assert_eq!(ModelCategory::parse("vae"), None);
    }

    #[test]
    fn test_unknown_category_resolves_to_none() {
        let config = Config::default();
        assert_eq!(resolve("AestheticGradient", &config), None);
        assert_eq!(resolve("Controlnet", &config), None);
        assert_eq!(resolve("", &config), None);
    }

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(
            resolve("Checkpoint", &config),
            Some(Path::new("models").join("Stable-diffusion"))
        );
        assert_eq!(resolve("LORA", &config), Some(Path::new("models").join("Lora")));
        assert_eq!(
            resolve("TextualInversion", &config),
            Some(Path::new(".").join("embeddings"))
        );
        assert_eq!(
            resolve("Hypernetwork", &config),
            Some(Path::new("models").join("hypernetworks"))
        );
        assert_eq!(resolve("LoCon", &config), Some(Path::new("models").join("LyCORIS")));
        assert_eq!(resolve("VAE", &config), Some(Path::new("models").join("VAE")));
    }

    #[test]
    fn test_override_wins_over_default() {
        let mut config = Config::default();
        config.paths.lora_dir = Some(PathBuf::from("/custom/lora"));

        assert_eq!(resolve("LORA", &config), Some(PathBuf::from("/custom/lora")));
        // Other categories keep their defaults
        assert_eq!(
            resolve("Checkpoint", &config),
            Some(Path::new("models").join("Stable-diffusion"))
        );
    }

    #[test]
    fn test_empty_override_falls_back_to_default() {
        let mut config = Config::default();
        config.paths.vae_dir = Some(PathBuf::new());

        assert_eq!(resolve("VAE", &config), Some(Path::new("models").join("VAE")));
    }

    #[test]
    fn test_custom_base_paths() {
        let mut config = Config::default();
        config.paths.models_dir = PathBuf::from("/srv/webui/models");
        config.paths.data_dir = PathBuf::from("/srv/webui");

        assert_eq!(
            resolve("Checkpoint", &config),
            Some(PathBuf::from("/srv/webui/models/Stable-diffusion"))
        );
        assert_eq!(
            resolve("TextualInversion", &config),
            Some(PathBuf::from("/srv/webui/embeddings"))
        );
    }
}
