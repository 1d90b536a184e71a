//! Configuration structures stored in `warpwrap.json`.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Project configuration.
///
/// Keys are camelCase on disk. Every key is optional and falls back to its
/// built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Tags offered by the tag chooser; `custom` asks for a free-form name
    #[serde(default = "default_tags")]
    pub default_tags: Vec<String>,

    /// Ask the editor to format the document after wrapping
    #[serde(default = "default_auto_format")]
    pub auto_format: bool,

    /// Emit `className` instead of `class`
    #[serde(default = "default_jsx_support")]
    pub jsx_support: bool,

    /// Wrap every selection instead of only the first non-empty one
    #[serde(default = "default_bulk_wrap")]
    pub bulk_wrap: bool,

    /// List the previously used tag first in the chooser
    #[serde(default = "default_use_last_tag")]
    pub use_last_tag: bool,

    /// Layout for fresh wraps with `{indent}`, `{tag}`, `{attributes}` and
    /// `{content}` placeholders; empty means the built-in layout
    #[serde(default)]
    pub custom_template: String,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingSettings {
    /// Log file path (optional, defaults to the cache directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_tags() -> Vec<String> {
    defaults::TAGS.iter().map(|tag| tag.to_string()).collect()
}

fn default_auto_format() -> bool {
    defaults::AUTO_FORMAT
}

fn default_jsx_support() -> bool {
    defaults::JSX_SUPPORT
}

fn default_bulk_wrap() -> bool {
    defaults::BULK_WRAP
}

fn default_use_last_tag() -> bool {
    defaults::USE_LAST_TAG
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tags: default_tags(),
            auto_format: default_auto_format(),
            jsx_support: default_jsx_support(),
            bulk_wrap: default_bulk_wrap(),
            use_last_tag: default_use_last_tag(),
            custom_template: String::new(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}

impl Config {
    /// The custom template, if one is configured
    pub fn template(&self) -> Option<&str> {
        if self.custom_template.trim().is_empty() {
            None
        } else {
            Some(&self.custom_template)
        }
    }
}
