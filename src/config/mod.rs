//! Configuration: environment contract plus an optional TOML file.

mod loader;
mod settings;
mod types;

pub use loader::ConfigError;
pub use settings::{Settings, BINARY_PATH_VAR, CONFIG_PATH_VAR, LOG_ONLY_VAR};
pub use types::FileConfig;
