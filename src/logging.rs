use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "LSH_LOG";

/// Initialize tracing when `LSH_LOG` names a file.
///
/// Logging is off by default: the shell's stdout and stderr belong to the
/// user and the programs they run. The filter is taken from `RUST_LOG` and
/// defaults to `info`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV) else {
        return;
    };

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "lsh: cannot open log file {}: {e}",
                log_path.to_string_lossy()
            );
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

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
