use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::rspfile::ResponseFile;

/// Errors from launching or waiting on the compiler.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("Failed to spawn '{tool}'")]
    Spawn {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to wait on '{tool}'")]
    Wait {
        tool: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The compiler invocation: `tool @response_file`.
#[derive(Debug, Clone)]
pub struct CompilerCommand {
    tool: PathBuf,
    response_arg: OsString,
    env_remove: Vec<String>,
}

impl CompilerCommand {
    pub fn new(tool: impl Into<PathBuf>, response_file: &ResponseFile) -> Self {
        Self {
            tool: tool.into(),
            response_arg: response_file.as_arg(),
            env_remove: Vec::new(),
        }
    }

    /// Variables to drop from the inherited environment.
    pub fn env_remove(mut self, names: &[&str]) -> Self {
        self.env_remove.extend(names.iter().map(|name| name.to_string()));
        self
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// The single argument handed to the compiler.
    pub fn response_arg(&self) -> &OsStr {
        &self.response_arg
    }

    /// Build the [`Command`]; stdio is inherited.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.tool);
        cmd.arg(&self.response_arg);
        for name in &self.env_remove {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Spawn the compiler and wait for it to exit.
    pub fn run(&self) -> Result<ExitStatus, SpawnError> {
        tracing::debug!(tool = %self.tool.display(), arg = ?self.response_arg, "Spawning compiler");

        let mut child = self.to_command().spawn().map_err(|source| SpawnError::Spawn {
            tool: self.tool.clone(),
            source,
        })?;

        child.wait().map_err(|source| SpawnError::Wait {
            tool: self.tool.clone(),
            source,
        })
    }
}

/// Map a child exit status to the wrapper's own exit code.
///
/// Exit codes pass through; death by signal `n` becomes `128 + n`.
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(u8::MAX);
        }
    }

    1
}

/// Print the tool path and the response file verbatim, instead of running.
pub fn write_log_only<W: Write>(tool: &Path, response_file: &Path, out: &mut W) -> io::Result<()> {
    write_path(tool, out)?;
    out.write_all(b"\n")?;
    let mut file = File::open(response_file)?;
    io::copy(&mut file, out)?;
    out.flush()
}

#[cfg(unix)]
fn write_path<W: Write>(path: &Path, out: &mut W) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write>(path: &Path, out: &mut W) -> io::Result<()> {
    write!(out, "{}", path.display())
}
