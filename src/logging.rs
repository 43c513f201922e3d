use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Variable naming the log file base path.
pub const LOG_PATH_VAR: &str = "WRAPPER_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: stdout and stderr belong to the
/// compiler. Set `WRAPPER_LOG` to a file path to enable logging, and
/// `RUST_LOG` to adjust the filter (default `info`).
///
/// Log files are created with unique names so that parallel compiler
/// invocations do not clobber each other: `{path}.{timestamp}.{pid}`
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_VAR).ok().filter(|p| !p.is_empty()) else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // An unwritable log path disables logging; stderr belongs to the compiler.
    let Ok(file) = std::fs::File::create(&unique_path) else {
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
