//! One-shot completion notification.

use crate::signal::SignalEvent;
use tokio::sync::watch;

/// Summary of a finished shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShutdownReport {
    /// The signal that started the shutdown.
    pub signal: SignalEvent,
    /// Resources whose close succeeded.
    pub closed: usize,
    /// Resources whose close reported a failure.
    pub failed: usize,
}

impl ShutdownReport {
    /// Every resource that was asked to close.
    pub fn attempted(&self) -> usize {
        self.closed + self.failed
    }
}

/// Notification that a shutdown has finished.
///
/// Carries exactly one value and is closed as soon as it is created: waiting
/// on it, from any clone and any number of times, resolves immediately with
/// the same [`ShutdownReport`].
#[derive(Debug, Clone)]
pub struct Completion {
    receiver: watch::Receiver<Option<ShutdownReport>>,
}

impl Completion {
    pub(crate) fn finished(report: ShutdownReport) -> Self {
        let (sender, receiver) = watch::channel(None);
        sender.send_replace(Some(report));
        Self { receiver }
    }

    /// Resolve with the shutdown report.
    pub async fn wait(&mut self) -> ShutdownReport {
        loop {
            if let Some(report) = *self.receiver.borrow_and_update() {
                return report;
            }
            if self.receiver.changed().await.is_err() {
                return std::future::pending().await;
            }
        }
    }

    /// The shutdown report, if the value has been delivered.
    pub fn report(&self) -> Option<ShutdownReport> {
        *self.receiver.borrow()
    }

    /// Whether the notification can no longer change.
    pub fn is_closed(&self) -> bool {
        self.receiver.has_changed().is_err()
    }
}
