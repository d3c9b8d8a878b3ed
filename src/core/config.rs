//! Configuration management

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub translator: TranslatorConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("fluent-translator");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from the default location, writing defaults if absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Translator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Default language: "auto" or a catalog code such as "en_US"
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Root directory holding one sub-directory per language
    #[serde(default = "default_translations_dir")]
    pub translations_dir: PathBuf,
    /// Wrap placeables in Unicode isolation marks
    #[serde(default)]
    pub use_isolating: bool,
}

fn default_language() -> String { "en_US".to_string() }
fn default_translations_dir() -> PathBuf { PathBuf::from("i18n") }

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            translations_dir: default_translations_dir(),
            use_isolating: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.translator.default_language, "en_US");
        assert_eq!(config.translator.translations_dir, PathBuf::from("i18n"));
        assert!(!config.translator.use_isolating);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            r#"
            [translator]
            default_language = "fr_FR"
            "#,
        )
        .unwrap();
        assert_eq!(config.translator.default_language, "fr_FR");
        assert_eq!(config.translator.translations_dir, PathBuf::from("i18n"));
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::parse("[translator]\nuse_isolating = \"maybe\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.translator.default_language = "de_DE".into();
        config.translator.translations_dir = PathBuf::from("locales");
        config.translator.use_isolating = true;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.translator.default_language, "de_DE");
        assert_eq!(loaded.translator.translations_dir, PathBuf::from("locales"));
        assert!(loaded.translator.use_isolating);
    }
}
