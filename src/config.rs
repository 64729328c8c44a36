//! Service configuration.
//!
//! Read from an optional JSON file with camelCase keys. Every field has a
//! default, so an empty object (or no file at all) gives the bundled
//! resources, the per-user corrections file and a localhost bind address.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "kiwispell";

/// Default corrections file name
pub const CORRECTIONS_FILE_NAME: &str = "corrections.json";

/// Default HTTP bind address
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Error types for configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {0}")]
    ReadError(String),
    /// Config file is not valid JSON or has unknown keys
    #[error("Invalid config: {0}")]
    ParseError(String),
    /// No platform config directory and no explicit corrections path
    #[error("Could not determine config directory")]
    ConfigDirNotFound,
}

/// Resource locations and server settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// US English word list (bundled list when absent)
    pub us_dictionary: Option<PathBuf>,
    /// British English -ise word list (bundled list when absent)
    pub gb_dictionary: Option<PathBuf>,
    /// JSON object of US -> UK word pairs (bundled table when absent)
    pub translations: Option<PathBuf>,
    /// JSON object of built-in phrase replacements (bundled table when absent)
    pub phrase_map: Option<PathBuf>,
    /// JSON object of exception words (bundled table when absent)
    pub exceptions: Option<PathBuf>,
    /// Persisted corrections file
    pub corrections_path: Option<PathBuf>,
    /// HTTP bind address
    pub bind: Option<String>,
}

impl Config {
    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            crate::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        crate::debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    /// Parse configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Corrections file, defaulting to `{config_dir}/kiwispell/corrections.json`
    pub fn corrections_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.corrections_path {
            return Ok(path.clone());
        }
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;
        Ok(config_dir.join(APP_DIR_NAME).join(CORRECTIONS_FILE_NAME))
    }

    /// Bind address for the HTTP server
    pub fn bind(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
