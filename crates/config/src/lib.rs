//! Configuration management for warpwrap.
//!
//! This crate loads the optional project file `warpwrap.json`, writes the
//! built-in defaults out when it is missing, and resolves XDG directories.

mod settings;
mod xdg;

pub use settings::{Config, LoggingSettings};
pub use xdg::get_cache_dir;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const TAGS: &[&str] = &[
        "div", "span", "section", "article", "header", "footer", "nav", "aside", "custom",
    ];
    pub const AUTO_FORMAT: bool = true;
    pub const JSX_SUPPORT: bool = true;
    pub const BULK_WRAP: bool = true;
    pub const USE_LAST_TAG: bool = false;
    pub const MIN_LOG_LEVEL: &str = "info";
}

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "warpwrap.json";

impl Config {
    /// Load configuration from a project root.
    ///
    /// When the file is missing, the defaults are written out and returned;
    /// failing to write them is logged and otherwise ignored. A malformed
    /// file is an error and is left untouched on disk.
    pub fn load_from(root: &Path) -> Result<Self> {
        let config_path = Self::file_path_in(root);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            Self::validate_content(&content)
                .with_context(|| format!("Error parsing {}", config_path.display()))
        } else {
            let config = Self::default();
            match config.save_to(&config_path) {
                Ok(()) => warpwrap_logger::info(format!(
                    "Created default config: {}",
                    config_path.display()
                )),
                Err(e) => warpwrap_logger::warn(format!("{:#}", e)),
            }
            Ok(config)
        }
    }

    /// Save configuration as pretty-printed JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Get path to the config file inside a project root.
    pub fn file_path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }


    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        serde_json::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_tags.len(), 9);
        assert_eq!(config.default_tags.first().map(String::as_str), Some("div"));
        assert!(config.auto_format);
        assert!(config.jsx_support);
        assert!(config.bulk_wrap);
        assert!(!config.use_last_tag);
        assert!(config.template().is_none());
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config, Config::default());

        let written = std::fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(written.contains("\"defaultTags\""));
        assert!(written.contains("\"jsxSupport\": true"));
        assert_eq!(Config::validate_content(&written).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "defaultTags": ["p", "em"], "jsxSupport": false }"#,
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();
        assert_eq!(config.default_tags, vec!["p", "em"]);
        assert!(!config.jsx_support);
        assert!(config.auto_format);
        assert_eq!(config.logging.min_level, "info");
    }

    #[test]
    fn test_malformed_file_is_an_error_and_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ defaultTags: [").unwrap();

        let err = Config::load_from(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Error parsing"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ defaultTags: [");
    }

    #[test]
    fn test_template_ignores_blank() {
        let config = Config {
            custom_template: "   ".to_string(),
            ..Config::default()
        };
        assert!(config.template().is_none());
    }
}
