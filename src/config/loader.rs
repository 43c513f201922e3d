use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::FileConfig;

/// Errors that can occur when resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} not set.")]
    MissingVar { name: &'static str },

    #[error("Failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}'")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl FileConfig {
    /// Loads and validates the configuration file at `path`.
    ///
    /// Unlike the environment variables, a named file that does not exist is
    /// an error: the build asked for it explicitly.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The placeholder is not empty
    /// - The response file prefix is a non-empty plain file name
    /// - Response files may nest at least one level
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "placeholder must not be empty".to_string(),
            });
        }

        if self.response_file_prefix.is_empty()
            || self.response_file_prefix.contains(std::path::is_separator)
        {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "response_file_prefix '{}' must be a non-empty file name",
                    self.response_file_prefix
                ),
            });
        }

        if self.max_nesting == 0 {
            return Err(ConfigError::ValidationError {
                message: "max_nesting must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
