use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use super::grammar::{split_words, unescape_line};
use super::RspFileError;

/// Read the words of a response file.
///
/// Returns `Ok(None)` when `path` cannot be opened as a readable
/// non-directory file. Such arguments are not response files at all
/// (`@loader_path/../lib` on a linker line, for instance) and are left to
/// the caller to forward unchanged.
pub fn read_response_file(path: &Path) -> Result<Option<Vec<String>>, RspFileError> {
    match fs::metadata(path) {
        Ok(meta) if !meta.is_dir() => {}
        Ok(_) => {
            tracing::debug!(path = %path.display(), "Directory, not a response file");
            return Ok(None);
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "No response file at path");
            return Ok(None);
        }
    }

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "Not a readable response file");
            return Ok(None);
        }
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| RspFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let content = String::from_utf8(bytes).map_err(|_| RspFileError::InvalidEncoding {
        path: path.to_path_buf(),
    })?;

    Ok(Some(parse_words(&content)))
}

/// Split response-file content into words, line by line.
pub fn parse_words(content: &str) -> Vec<String> {
    let mut words = Vec::new();
    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let unescaped = unescape_line(line);
        words.extend(split_words(&unescaped).map(str::to_owned));
    }
    words
}
