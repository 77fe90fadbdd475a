use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "RFANDOM_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default. Set `RFANDOM_LOG` to a file path to
/// enable it; the filter comes from `RUST_LOG` and defaults to `info`.
///
/// Returns the file actually written to, which is
/// `{path}.{timestamp}.{pid}` so concurrent instances don't clash.
pub fn init_tracing() -> Option<PathBuf> {
    let log_path = std::env::var(LOG_ENV_VAR).ok()?;
    let log_file = unique_log_path(&log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", log_file.display(), e);
            return None;
        }
    };

    // Plain text: the file is read with a pager, not a terminal.
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(log_file)
}

fn unique_log_path(base: &str, pid: u32) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base, timestamp, pid))
}
