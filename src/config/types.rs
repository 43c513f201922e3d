use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Optional on-disk configuration, named by `WRAPPER_CONFIG`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Token replaced by the working directory (default: `{BAZEL_EXECUTION_ROOT}`).
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Directory for generated response files (default: `$TMPDIR` or `/tmp`).
    #[serde(default)]
    pub temp_dir: Option<PathBuf>,
    /// File name prefix of generated response files (default: `wrapper_params.`).
    #[serde(default = "default_response_file_prefix")]
    pub response_file_prefix: String,
    /// How deep `@file` references may nest (default: 32).
    #[serde(default = "default_max_nesting")]
    pub max_nesting: usize,
}

fn default_placeholder() -> String {
    "{BAZEL_EXECUTION_ROOT}".to_string()
}

fn default_response_file_prefix() -> String {
    "wrapper_params.".to_string()
}

fn default_max_nesting() -> usize {
    32
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            temp_dir: None,
            response_file_prefix: default_response_file_prefix(),
            max_nesting: default_max_nesting(),
        }
    }
}
