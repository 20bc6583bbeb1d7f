//! Tracing/logging initialization.
//!
//! Logs are written to stderr so stdout stays free for program output.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogFormat, TracingConfig};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &TracingConfig) {
    let (filter, rejected_filter) = match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if let Some(err) = rejected_filter {
        ::tracing::warn!(
            filter = %config.filter,
            error = %err,
            "invalid log filter; using {DEFAULT_FILTER}"
        );
    }

    if let Some(raw) = &config.unknown_format {
        ::tracing::warn!(format = %raw, "unknown log format; using json");
    }
}
