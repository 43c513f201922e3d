mod common;

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

use ccwrap::config::{ConfigError, FileConfig, Settings};
use common::{temp_dir, write_file};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
    let map: HashMap<String, OsString> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), OsString::from(v)))
        .collect();
    move |name| map.get(name).cloned()
}

// ── FileConfig ───────────────────────────────────────────────────────

/// Test that FileConfig::default() produces the expected values.
#[test]
fn test_file_config_default_values() {
    let config = FileConfig::default();

    assert_eq!(config.placeholder, "{BAZEL_EXECUTION_ROOT}");
    assert_eq!(config.temp_dir, None);
    assert_eq!(config.response_file_prefix, "wrapper_params.");
    assert_eq!(config.max_nesting, 32);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_full_config() {
    let dir = temp_dir();
    let path = write_file(
        dir.path(),
        "wrapper.toml",
        r#"
placeholder = "%EXECROOT%"
temp_dir = "/var/tmp"
response_file_prefix = "cc_args."
max_nesting = 4
"#,
    );

    let config = FileConfig::load(&path).unwrap();
    assert_eq!(config.placeholder, "%EXECROOT%");
    assert_eq!(config.temp_dir, Some(PathBuf::from("/var/tmp")));
    assert_eq!(config.response_file_prefix, "cc_args.");
    assert_eq!(config.max_nesting, 4);
}

#[test]
fn test_load_partial_config_uses_defaults() {
    let dir = temp_dir();
    let path = write_file(dir.path(), "wrapper.toml", "max_nesting = 2\n");

    let config = FileConfig::load(&path).unwrap();
    assert_eq!(config.max_nesting, 2);
    assert_eq!(config.placeholder, "{BAZEL_EXECUTION_ROOT}");
    assert_eq!(config.response_file_prefix, "wrapper_params.");
}

#[test]
fn test_load_rejects_unknown_keys() {
    let dir = temp_dir();
    let path = write_file(dir.path(), "wrapper.toml", "placehodler = \"x\"\n");

    let err = FileConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn test_load_missing_file_is_read_error() {
    let dir = temp_dir();
    let err = FileConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn test_validation_fails_empty_placeholder() {
    let config = FileConfig {
        placeholder: String::new(),
        ..FileConfig::default()
    };

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("placeholder"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_prefix_with_separator() {
    let config = FileConfig {
        response_file_prefix: "../escape".to_string(),
        ..FileConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_fails_zero_nesting() {
    let config = FileConfig {
        max_nesting: 0,
        ..FileConfig::default()
    };
    assert!(config.validate().is_err());
}

// ── Settings ─────────────────────────────────────────────────────────

#[test]
fn test_settings_require_binary() {
    let err = Settings::from_lookup(lookup(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingVar { .. }));
    assert_eq!(err.to_string(), "WRAPPER_WRAP_BINARY not set.");
}

#[test]
fn test_settings_treat_empty_binary_as_missing() {
    let err = Settings::from_lookup(lookup(&[("WRAPPER_WRAP_BINARY", "")])).unwrap_err();
    assert!(matches!(err, ConfigError::MissingVar { .. }));
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::from_lookup(lookup(&[
        ("WRAPPER_WRAP_BINARY", "/opt/llvm/bin/clang"),
        ("TMPDIR", "/scratch"),
    ]))
    .unwrap();

    assert_eq!(settings.tool, PathBuf::from("/opt/llvm/bin/clang"));
    assert!(!settings.log_only);
    assert_eq!(settings.placeholder, "{BAZEL_EXECUTION_ROOT}");
    assert_eq!(settings.temp_dir, PathBuf::from("/scratch"));
    assert_eq!(settings.response_file_prefix, "wrapper_params.");
    assert_eq!(settings.max_nesting, 32);
}

#[test]
fn test_settings_log_only_set_even_when_empty() {
    let settings = Settings::from_lookup(lookup(&[
        ("WRAPPER_WRAP_BINARY", "clang"),
        ("__WRAPPER_LOG_ONLY", ""),
    ]))
    .unwrap();
    assert!(settings.log_only);
}

#[test]
fn test_settings_layer_config_file() {
    let dir = temp_dir();
    let path = write_file(
        dir.path(),
        "wrapper.toml",
        "placeholder = \"@@ROOT@@\"\ntemp_dir = \"/from/file\"\n",
    );

    let settings = Settings::from_lookup(lookup(&[
        ("WRAPPER_WRAP_BINARY", "clang"),
        ("WRAPPER_CONFIG", path.to_str().unwrap()),
        ("TMPDIR", "/from/env"),
    ]))
    .unwrap();

    assert_eq!(settings.placeholder, "@@ROOT@@");
    assert_eq!(settings.temp_dir, PathBuf::from("/from/file"));
}

#[test]
fn test_settings_invalid_config_file_is_error() {
    let dir = temp_dir();
    let path = write_file(dir.path(), "wrapper.toml", "max_nesting = 0\n");

    let result = Settings::from_lookup(lookup(&[
        ("WRAPPER_WRAP_BINARY", "clang"),
        ("WRAPPER_CONFIG", path.to_str().unwrap()),
    ]));
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_scrubbed_vars() {
    let vars = Settings::scrubbed_vars();
    assert!(vars.contains(&"WRAPPER_WRAP_BINARY"));
    assert!(vars.contains(&"__WRAPPER_LOG_ONLY"));
}
