use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
const LOG_PATH_ENV: &str = "BANNER_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: stdout belongs to command output and the
/// TUI owns the terminal, so writing log lines there would corrupt the
/// display. Set `BANNER_LOG` to a file path to enable logging; `RUST_LOG`
/// controls the filter and defaults to `info`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok() else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        eprintln!("Warning: failed to open log file: {log_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
