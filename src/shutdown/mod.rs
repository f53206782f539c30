//! Signal-driven shutdown orchestration.

mod completion;
mod orchestrator;
mod terminator;

pub use completion::{Completion, ShutdownReport};
pub use orchestrator::GracefulShutdown;
pub use terminator::{ProcessTerminator, Terminator, EXIT_SUCCESS};

use crate::logger::Logger;
use crate::resource::Closeable;
use crate::signal::{OsSignals, SignalError};
use std::convert::Infallible;

/// Wait for an OS termination signal, close `resources` in order, and hand
/// control back through the returned [`Completion`].
///
/// Fails only if the signal listeners cannot be registered.
pub async fn handle<L, I>(logger: &L, resources: I) -> Result<Completion, SignalError>
where
    L: Logger + Sync + ?Sized,
    I: IntoIterator,
    I::Item: Closeable,
{
    let signals = OsSignals::register()?;
    Ok(GracefulShutdown::new(signals).handle(logger, resources).await)
}

/// Like [`handle`], but exits the process with [`EXIT_SUCCESS`] once every
/// resource has been closed.
///
/// Returns only if the signal listeners cannot be registered.
pub async fn handle_and_terminate<L, I>(logger: &L, resources: I) -> Result<Infallible, SignalError>
where
    L: Logger + Sync + ?Sized,
    I: IntoIterator,
    I::Item: Closeable,
{
    let signals = OsSignals::register()?;
    let report = GracefulShutdown::new(signals)
        .run(logger, resources)
        .await;
    tracing::debug!(?report, "exiting process");
    ProcessTerminator::exit(EXIT_SUCCESS)
}
