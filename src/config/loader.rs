use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/cookie-consent/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("cookie-consent").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The app id is not blank
    /// - At least one category is offered
    /// - Category ids are non-empty and unique
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dialog.app_id.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "dialog.app_id must not be empty".to_string(),
            });
        }

        if self.categories.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one cookie category must be configured".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("Category '{}' has an empty id", category.label),
                });
            }
            if !seen.insert(category.id.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Duplicate category id '{}'", category.id),
                });
            }
        }

        Ok(())
    }
}
