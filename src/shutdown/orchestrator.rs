//! The shutdown orchestrator: wait for a signal, then close everything.

use crate::logger::{Field, Logger};
use crate::resource::Closeable;
use crate::shutdown::{Completion, ProcessTerminator, ShutdownReport, Terminator, EXIT_SUCCESS};
use crate::signal::{SignalSource, SignalWatcher};
use tracing::{debug, info};

/// Coordinates one graceful shutdown.
///
/// Consumed by [`handle`](Self::handle) or
/// [`handle_and_terminate`](Self::handle_and_terminate), so each instance
/// drives exactly one shutdown. Resources are closed one at a time in the
/// order they are supplied; a failed close is logged and the next resource is
/// closed anyway. No timeouts are applied, so a close that never returns
/// stalls the shutdown.
pub struct GracefulShutdown<S, T = ProcessTerminator> {
    source: S,
    terminator: T,
}

impl<S: SignalSource> GracefulShutdown<S> {
    /// Orchestrator that waits on `source` and exits the real process in
    /// terminate mode.
    pub fn new(source: S) -> Self {
        Self {
            source,
            terminator: ProcessTerminator,
        }
    }
}

impl<S: SignalSource, T: Terminator> GracefulShutdown<S, T> {
    /// Replace how the process is ended in terminate mode.
    pub fn with_terminator<U: Terminator>(self, terminator: U) -> GracefulShutdown<S, U> {
        GracefulShutdown {
            source: self.source,
            terminator,
        }
    }

    /// Wait for a signal, close `resources`, and return the completed
    /// notification. The process keeps running.
    pub async fn handle<L, I>(self, logger: &L, resources: I) -> Completion
    where
        L: Logger + Sync + ?Sized,
        I: IntoIterator,
        I::Item: Closeable,
    {
        let report = self.run(logger, resources).await;
        Completion::finished(report)
    }

    /// Wait for a signal, close `resources`, then terminate with
    /// [`EXIT_SUCCESS`].
    ///
    /// With [`ProcessTerminator`] this never returns.
    pub async fn handle_and_terminate<L, I>(self, logger: &L, resources: I)
    where
        L: Logger + Sync + ?Sized,
        I: IntoIterator,
        I::Item: Closeable,
    {
        let GracefulShutdown { source, terminator } = self;
        let report = close_all(source, logger, resources).await;
        debug!(?report, code = EXIT_SUCCESS, "terminating");
        terminator.terminate(EXIT_SUCCESS);
    }

    pub(crate) async fn run<L, I>(self, logger: &L, resources: I) -> ShutdownReport
    where
        L: Logger + Sync + ?Sized,
        I: IntoIterator,
        I::Item: Closeable,
    {
        close_all(self.source, logger, resources).await
    }
}

async fn close_all<S, L, I>(source: S, logger: &L, resources: I) -> ShutdownReport
where
    S: SignalSource,
    L: Logger + Sync + ?Sized,
    I: IntoIterator,
    I::Item: Closeable,
{
    info!("waiting for termination signal");
    let signal = SignalWatcher::spawn(source).wait().await;

    logger.warn(
        &format!("system call receipt -> {signal}"),
        &[Field::new("signal", &signal.name())],
    );
    logger.info("closing resources...", &[]);

    let mut closed = 0;
    let mut failed = 0;

    for (index, mut resource) in resources.into_iter().enumerate() {
        logger.info(
            &format!("trying to close resource {index}"),
            &[Field::new("index", &index)],
        );

        match resource.close() {
            Ok(()) => closed += 1,
            Err(e) => {
                failed += 1;
                logger.error(
                    &format!("error on close resource: {e}"),
                    &[Field::new("index", &index), Field::new("error", &e)],
                );
            }
        }
    }

    logger.warn(
        "system was terminated by a system call",
        &[Field::new("closed", &closed), Field::new("failed", &failed)],
    );

    ShutdownReport {
        signal,
        closed,
        failed,
    }
}
