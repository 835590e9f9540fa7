use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable enabling diagnostics logging.
pub const LOG_ENV: &str = "SPARK_LAUNCHER_LOG";

/// Initialize tracing on stderr.
///
/// Logging is disabled by default: stdout carries the command for the
/// calling script and stderr is shown to the operator. Set
/// `SPARK_LAUNCHER_LOG` to a filter directive (e.g. `debug`) to enable it.
pub fn init_tracing() {
    let Some(directive) = std::env::var(LOG_ENV).ok().filter(|v| !v.is_empty()) else {
        return;
    };

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
