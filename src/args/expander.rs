//! Argument expander — raw args → flat compiler args.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::args::placeholder::Placeholder;
use crate::rspfile::{read_response_file, response_file_path, RspFileError};

/// Errors that abort argument expansion.
#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("Response file '{path}' includes itself")]
    Cycle { path: PathBuf },

    #[error("Response file '{path}' nested deeper than {limit} levels")]
    TooDeep { path: PathBuf, limit: usize },

    #[error(transparent)]
    ResponseFile(#[from] RspFileError),
}

/// Expands `@file` references recursively and substitutes the placeholder
/// in every argument, including those read from files.
#[derive(Debug)]
pub struct ArgExpander {
    placeholder: Placeholder,
    max_nesting: usize,
    /// Files currently being expanded, outermost first.
    stack: Vec<PathBuf>,
    /// Every file inlined so far, in the order it was opened.
    expanded: Vec<PathBuf>,
}

impl ArgExpander {
    pub fn new(placeholder: Placeholder, max_nesting: usize) -> Self {
        Self {
            placeholder,
            max_nesting,
            stack: Vec::new(),
            expanded: Vec::new(),
        }
    }

    /// Expand every argument of `raw`, preserving order.
    pub fn expand_all<S: AsRef<str>>(&mut self, raw: &[S]) -> Result<Vec<String>, ExpandError> {
        let mut out = Vec::with_capacity(raw.len());
        for arg in raw {
            self.expand(arg.as_ref(), &mut out)?;
        }
        Ok(out)
    }

    /// Expand a single argument into `out`.
    ///
    /// A `@path` argument naming a readable file is replaced by the words of
    /// that file; any other argument is pushed after substitution.
    pub fn expand(&mut self, arg: &str, out: &mut Vec<String>) -> Result<(), ExpandError> {
        let arg = self.placeholder.apply(arg);

        if let Some(path) = response_file_path(&arg) {
            let path = Path::new(path);
            if let Some(words) = read_response_file(path)? {
                self.enter(path)?;
                let result = words.iter().try_for_each(|word| self.expand(word, out));
                self.stack.pop();
                return result;
            }
        }

        out.push(arg.into_owned());
        Ok(())
    }

    /// Response files inlined so far.
    pub fn expanded_files(&self) -> &[PathBuf] {
        &self.expanded
    }

    pub fn into_expanded_files(self) -> Vec<PathBuf> {
        self.expanded
    }

    fn enter(&mut self, path: &Path) -> Result<(), ExpandError> {
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        if self.stack.contains(&key) {
            return Err(ExpandError::Cycle { path: key });
        }
        if self.stack.len() >= self.max_nesting {
            return Err(ExpandError::TooDeep {
                path: path.to_path_buf(),
                limit: self.max_nesting,
            });
        }

        tracing::debug!(
            path = %path.display(),
            depth = self.stack.len() + 1,
            "Expanding response file"
        );
        self.stack.push(key);
        self.expanded.push(path.to_path_buf());
        Ok(())
    }
}
