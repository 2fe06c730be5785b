// Tracing log adapter - Structured logging using tracing crate

use tracing_subscriber::EnvFilter;

use crate::adapters::toml_config::LogFormat;
use crate::error::{ReelError, ReelResult};

/// Build the event filter. `RUST_LOG` wins over the configured level.
pub fn build_filter(level: &str) -> ReelResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| ReelError::Config {
        message: format!("Invalid log level '{}': {}", level, e),
    })
}

/// Install the global subscriber, writing to stderr.
///
/// Calling this twice is harmless: the second subscriber is ignored.
pub fn init_logging(level: &str, format: LogFormat) -> ReelResult<()> {
    let filter = build_filter(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    tracing::debug!(level, ?format, "logging initialized");
    Ok(())
}
