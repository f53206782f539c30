//! Single-shot watcher that turns a signal source into one notification.

use crate::signal::{SignalEvent, SignalSource};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Waits for the first signal from a [`SignalSource`].
///
/// The source runs on its own task and posts into a channel with room for
/// exactly one event, so it never blocks on a slow reader and at most one
/// event is ever observed. Dropping the watcher stops the task and releases
/// the source.
pub struct SignalWatcher {
    receiver: mpsc::Receiver<SignalEvent>,
    task: JoinHandle<()>,
}

impl SignalWatcher {
    /// Start watching `source`. Must be called inside a tokio runtime.
    pub fn spawn<S: SignalSource>(mut source: S) -> Self {
        let (sender, receiver) = mpsc::channel(1);

        let task = tokio::spawn(async move {
            match source.next().await {
                Some(event) => {
                    debug!(signal = %event, "signal watcher received signal");
                    let _ = sender.try_send(event);
                }
                None => debug!("signal source closed before delivering a signal"),
            }
        });

        Self { receiver, task }
    }

    /// Block until the first signal arrives.
    ///
    /// If the source closes without delivering anything this never resolves.
    pub async fn wait(mut self) -> SignalEvent {
        match self.receiver.recv().await {
            Some(event) => event,
            None => std::future::pending().await,
        }
    }
}

impl Drop for SignalWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}
