use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path.
pub const LOG_PATH_ENV: &str = "LIGHTBOARD_LOG";

/// Where log output may go for the current run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Full-screen UI owns the terminal; only file logging is allowed.
    Tui,
    /// Plain-text output on stdout; logs may go to stderr.
    Headless,
}

/// Initialize tracing.
///
/// Set `LIGHTBOARD_LOG` to a file path to log to a file. Log files get
/// unique names so that several instances can run side by side:
/// `{path}.{timestamp}.{pid}`.
///
/// Without it, TUI mode installs no subscriber (writing to the terminal
/// would corrupt the display) and headless mode logs warnings to stderr.
pub fn init_tracing(mode: LogMode) {
    if let Ok(log_path) = std::env::var(LOG_PATH_ENV) {
        init_file_tracing(&log_path);
        return;
    }

    if mode == LogMode::Tui {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

fn init_file_tracing(log_path: &str) {
    let unique_path = unique_log_path(log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

fn unique_log_path(log_path: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", log_path, timestamp, pid)
}
