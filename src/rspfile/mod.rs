//! Response files: `@path` arguments whose file holds more arguments.
//!
//! ```text
//! read:  line → unescape_line → split_words → args
//! write: args → quote_arg (one per line) → ResponseFile
//! ```

mod grammar;
mod reader;
mod writer;

use std::path::PathBuf;

use thiserror::Error;

pub use grammar::{quote_arg, render, split_words, unescape_line};
pub use reader::{parse_words, read_response_file};
pub use writer::ResponseFile;

/// Prefix that marks an argument as a response file reference.
pub const RESPONSE_FILE_MARKER: char = '@';

/// Errors that can occur while reading or writing response files.
#[derive(Debug, Error)]
pub enum RspFileError {
    #[error("Failed to create response file in '{dir}'")]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write response file '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read response file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Response file '{path}' is not valid UTF-8")]
    InvalidEncoding { path: PathBuf },
}

/// The path named by a `@path` argument, if `arg` is one.
pub fn response_file_path(arg: &str) -> Option<&str> {
    arg.strip_prefix(RESPONSE_FILE_MARKER)
}
