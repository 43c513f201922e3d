use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};

use ccwrap::config::Settings;

fn main() -> ExitCode {
    ccwrap::logging::init_tracing();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Wrapper failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<u8> {
    let settings = Settings::from_env()?;
    let raw_args = collect_args()?;
    let cwd = std::env::current_dir().context("Failed to determine the working directory")?;
    ccwrap::app::run(&raw_args, &cwd, &settings)
}

/// Every argument after argv[0], verbatim. The wrapper owns no flags.
fn collect_args() -> Result<Vec<String>> {
    std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow!("Argument {:?} is not valid UTF-8", arg))
        })
        .collect()
}
