//! Running the wrapped compiler.

mod runner;

pub use runner::{exit_code, write_log_only, CompilerCommand, SpawnError};
