//! Runtime settings resolved from the process environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::loader::ConfigError;
use crate::config::types::FileConfig;

/// Path of the compiler to run. Mandatory.
pub const BINARY_PATH_VAR: &str = "WRAPPER_WRAP_BINARY";
/// When present, print the invocation instead of running it.
pub const LOG_ONLY_VAR: &str = "__WRAPPER_LOG_ONLY";
/// Optional path of a TOML [`FileConfig`].
pub const CONFIG_PATH_VAR: &str = "WRAPPER_CONFIG";

/// Everything the wrapper needs to know before touching argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Compiler executable.
    pub tool: PathBuf,
    /// Print instead of exec.
    pub log_only: bool,
    pub placeholder: String,
    pub temp_dir: PathBuf,
    pub response_file_prefix: String,
    pub max_nesting: usize,
}

impl Settings {
    /// Resolve settings from the real process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Resolve settings from an arbitrary variable lookup.
    ///
    /// Layering: built-in defaults, then the file named by
    /// `WRAPPER_CONFIG`, then the wrapper's own variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let tool = lookup(BINARY_PATH_VAR)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar {
                name: BINARY_PATH_VAR,
            })?;

        let file = match lookup(CONFIG_PATH_VAR).filter(|value| !value.is_empty()) {
            Some(path) => FileConfig::load(Path::new(&path))?,
            None => FileConfig::default(),
        };

        let temp_dir = file
            .temp_dir
            .or_else(|| lookup("TMPDIR").filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(std::env::temp_dir);

        Ok(Self {
            tool: PathBuf::from(tool),
            log_only: lookup(LOG_ONLY_VAR).is_some(),
            placeholder: file.placeholder,
            temp_dir,
            response_file_prefix: file.response_file_prefix,
            max_nesting: file.max_nesting,
        })
    }

    /// Variables consumed by the wrapper; the compiler never sees them.
    pub fn scrubbed_vars() -> &'static [&'static str] {
        &[BINARY_PATH_VAR, LOG_ONLY_VAR]
    }
}
