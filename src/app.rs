//! Orchestration: argv → response file → compiler.

use std::io;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::args::build_invocation;
use crate::config::Settings;
use crate::rspfile::ResponseFile;
use crate::spawn::{exit_code, write_log_only, CompilerCommand};

/// Run one wrapped compiler invocation and return the exit code to report.
///
/// The generated response file lives until this function returns.
pub fn run(raw_args: &[String], cwd: &Path, settings: &Settings) -> Result<u8> {
    let cwd = cwd
        .to_str()
        .ok_or_else(|| anyhow!("Working directory '{}' is not valid UTF-8", cwd.display()))?;

    let invocation = build_invocation(raw_args, cwd, settings)?;

    let response_file = ResponseFile::write(
        &invocation.args,
        &settings.temp_dir,
        &settings.response_file_prefix,
    )?;
    tracing::info!(
        path = %response_file.path().display(),
        args = invocation.args.len(),
        "Response file written"
    );

    if settings.log_only {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_log_only(&invocation.tool, response_file.path(), &mut out)
            .context("Failed to print the compiler invocation")?;
        return Ok(0);
    }

    let status = CompilerCommand::new(&invocation.tool, &response_file)
        .env_remove(Settings::scrubbed_vars())
        .run()?;

    tracing::info!(tool = %invocation.tool.display(), status = %status, "Compiler exited");
    Ok(exit_code(status))
}
