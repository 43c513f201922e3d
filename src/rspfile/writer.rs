use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::grammar::render;
use super::{RspFileError, RESPONSE_FILE_MARKER};

/// A response file written to a temporary location.
///
/// The file is deleted when this value is dropped, so it must outlive the
/// process that reads it.
#[derive(Debug)]
pub struct ResponseFile {
    file: NamedTempFile,
}

impl ResponseFile {
    /// Write `args` into a new uniquely named file `<prefix>XXXXXX` in `dir`.
    pub fn write<S: AsRef<str>>(
        args: &[S],
        dir: &Path,
        prefix: &str,
    ) -> Result<Self, RspFileError> {
        let mut file = tempfile::Builder::new()
            .prefix(prefix)
            .rand_bytes(6)
            .tempfile_in(dir)
            .map_err(|source| RspFileError::Create {
                dir: dir.to_path_buf(),
                source,
            })?;

        let path = file.path().to_path_buf();
        let write_err = |source: std::io::Error| RspFileError::Write {
            path: path.clone(),
            source,
        };
        let content = render(args);
        file.as_file_mut()
            .write_all(content.as_bytes())
            .map_err(write_err)?;
        file.as_file_mut().flush().map_err(write_err)?;

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// The `@path` argument that points a compiler at this file.
    ///
    /// Built from the raw path so a non-UTF-8 temp directory survives intact.
    pub fn as_arg(&self) -> OsString {
        let mut arg = OsString::from(RESPONSE_FILE_MARKER.to_string());
        arg.push(self.path());
        arg
    }

    /// Read the serialized content back from disk.
    pub fn contents(&self) -> Result<String, RspFileError> {
        fs::read_to_string(self.path()).map_err(|source| RspFileError::Read {
            path: self.path().to_path_buf(),
            source,
        })
    }
}
