//! Logging initialization.
//!
//! Shutdown failures are only ever reported through the log stream, so the
//! subscriber must come up with a usable level or not at all.

use crate::config::{validate_log_level, LogFormat};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("{0}")]
    InvalidLevel(String),

    #[error("logging already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Install the global subscriber, writing to stdout.
///
/// `level` is the default verbosity; directives in `RUST_LOG` are layered on
/// top of it. JSON events are flattened so `message` sits at the top level.
pub fn init_logging(level: &str, format: &LogFormat) -> Result<(), LoggingError> {
    let level = parse_level(level)?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(layer.json().flatten_event(true)).try_init()?,
        LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
    }

    Ok(())
}

fn parse_level(level: &str) -> Result<Level, LoggingError> {
    validate_log_level(level).map_err(LoggingError::InvalidLevel)?;
    level
        .parse()
        .map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}
