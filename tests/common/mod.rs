//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::{Path, PathBuf};
use std::process::Command;

use ccwrap::config::Settings;
use tempfile::TempDir;

/// Placeholder token used by the wrapper unless configured otherwise.
pub const PLACEHOLDER: &str = "{BAZEL_EXECUTION_ROOT}";

pub fn raw_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Write `content` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// `@path` argument for a file.
pub fn at(path: &Path) -> String {
    format!("@{}", path.display())
}

/// Default settings with response files going to `temp_dir`.
pub fn settings(temp_dir: &Path) -> Settings {
    Settings {
        tool: PathBuf::from("/usr/bin/clang"),
        log_only: false,
        placeholder: PLACEHOLDER.to_string(),
        temp_dir: temp_dir.to_path_buf(),
        response_file_prefix: "wrapper_params.".to_string(),
        max_nesting: 32,
    }
}

pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Command for the wrapper binary, with the wrapper's variables cleared and
/// `dir` as both working directory and `TMPDIR`.
pub fn wrapper_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ccwrap"));
    cmd.current_dir(dir)
        .env("TMPDIR", dir)
        .env_remove("WRAPPER_WRAP_BINARY")
        .env_remove("__WRAPPER_LOG_ONLY")
        .env_remove("WRAPPER_CONFIG")
        .env_remove("WRAPPER_LOG");
    cmd
}

/// Names of leftover generated response files in `dir`.
pub fn leftover_response_files(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .expect("Failed to list dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("wrapper_params."))
        .collect()
}

/// Install an executable shell script (unix only).
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = write_file(dir, name, &format!("#!/bin/sh\n{body}\n"));
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}
