//! Leveled, structured logging capability used during shutdown.

use std::fmt;
use tracing::{error, info, warn};

/// A structured key/value attached to a log message.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub key: &'static str,
    pub value: &'a dyn fmt::Display,
}

impl<'a> Field<'a> {
    pub fn new(key: &'static str, value: &'a dyn fmt::Display) -> Self {
        Self { key, value }
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Sink for shutdown progress.
///
/// Owned by the caller; the orchestrator only writes to it.
pub trait Logger {
    fn info(&self, message: &str, fields: &[Field<'_>]);
    fn warn(&self, message: &str, fields: &[Field<'_>]);
    fn error(&self, message: &str, fields: &[Field<'_>]);
}

impl<L: Logger + ?Sized> Logger for &L {
    fn info(&self, message: &str, fields: &[Field<'_>]) {
        (**self).info(message, fields)
    }

    fn warn(&self, message: &str, fields: &[Field<'_>]) {
        (**self).warn(message, fields)
    }

    fn error(&self, message: &str, fields: &[Field<'_>]) {
        (**self).error(message, fields)
    }
}

/// Forwards to the `tracing` macros.
///
/// Structured fields are rendered as space separated `key=value` pairs under
/// a single `fields` attribute, since `tracing` field names are fixed at
/// compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str, fields: &[Field<'_>]) {
        if fields.is_empty() {
            info!("{message}");
        } else {
            info!(fields = %render_fields(fields), "{message}");
        }
    }

    fn warn(&self, message: &str, fields: &[Field<'_>]) {
        if fields.is_empty() {
            warn!("{message}");
        } else {
            warn!(fields = %render_fields(fields), "{message}");
        }
    }

    fn error(&self, message: &str, fields: &[Field<'_>]) {
        if fields.is_empty() {
            error!("{message}");
        } else {
            error!(fields = %render_fields(fields), "{message}");
        }
    }
}

/// Render fields as `key=value key=value`.
pub fn render_fields(fields: &[Field<'_>]) -> String {
    fields
        .iter()
        .map(|field| format!("{field:?}"))
        .collect::<Vec<_>>()
        .join(" ")
}
