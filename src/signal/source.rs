//! Signal sources: the process-wide OS listeners and an in-process channel.

use crate::signal::SignalEvent;
use std::future::Future;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

/// Errors raised while registering signal listeners.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("failed to register {signal} listener: {source}")]
    Register {
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("no termination signals requested")]
    EmptySet,
}

/// Something that produces termination signals.
///
/// `next` resolves with the next delivered signal, or `None` once the source
/// can never deliver again.
pub trait SignalSource: Send + 'static {
    fn next(&mut self) -> impl Future<Output = Option<SignalEvent>> + Send;
}

/// Listeners for real OS signals.
///
/// Registration is process-wide and must happen inside a tokio runtime.
/// While an `OsSignals` exists, the default action of its signals (usually
/// terminating the process) is replaced by delivery to this source.
pub struct OsSignals {
    #[cfg(unix)]
    listeners: Vec<(SignalEvent, tokio::signal::unix::Signal)>,
    #[cfg(not(unix))]
    events: Vec<SignalEvent>,
}

impl OsSignals {
    /// Listen for every termination signal.
    pub fn register() -> Result<Self, SignalError> {
        Self::listen(&SignalEvent::ALL)
    }

    /// Listen for the given signals. Repeated entries are registered once.
    pub fn listen(events: &[SignalEvent]) -> Result<Self, SignalError> {
        let mut unique: Vec<SignalEvent> = Vec::with_capacity(events.len());
        for event in events {
            if !unique.contains(event) {
                unique.push(*event);
            }
        }

        if unique.is_empty() {
            return Err(SignalError::EmptySet);
        }

        debug!(signals = ?unique, "registering termination signal listeners");

        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            let listeners = unique
                .into_iter()
                .map(|event| {
                    let kind = match event {
                        SignalEvent::Interrupt => SignalKind::interrupt(),
                        SignalEvent::Terminate => SignalKind::terminate(),
                        SignalEvent::Quit => SignalKind::quit(),
                    };
                    signal(kind)
                        .map(|listener| (event, listener))
                        .map_err(|source| SignalError::Register {
                            signal: event.name(),
                            source,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Self { listeners })
        }

        #[cfg(not(unix))]
        {
            Ok(Self { events: unique })
        }
    }

    /// Signals this source is listening for.
    pub fn events(&self) -> Vec<SignalEvent> {
        #[cfg(unix)]
        {
            self.listeners.iter().map(|(event, _)| *event).collect()
        }
        #[cfg(not(unix))]
        {
            self.events.clone()
        }
    }
}

#[cfg(unix)]
impl SignalSource for OsSignals {
    async fn next(&mut self) -> Option<SignalEvent> {
        let pending = self.listeners.iter_mut().map(|(event, listener)| {
            let event = *event;
            Box::pin(async move { listener.recv().await.map(|()| event) })
        });

        let (received, _, _) = futures::future::select_all(pending).await;
        received
    }
}

// Only Ctrl-C is observable off unix.
#[cfg(not(unix))]
impl SignalSource for OsSignals {
    async fn next(&mut self) -> Option<SignalEvent> {
        if !self.events.contains(&SignalEvent::Interrupt) {
            return std::future::pending().await;
        }
        tokio::signal::ctrl_c()
            .await
            .ok()
            .map(|()| SignalEvent::Interrupt)
    }
}

/// In-process signal source fed by a [`SignalTrigger`].
///
/// Useful for tests and for requesting shutdown programmatically.
pub struct ChannelSignals {
    receiver: mpsc::UnboundedReceiver<SignalEvent>,
}

/// Sending half of a [`ChannelSignals`] source.
#[derive(Clone)]
pub struct SignalTrigger {
    sender: mpsc::UnboundedSender<SignalEvent>,
}

impl ChannelSignals {
    /// Create a connected trigger and source.
    pub fn channel() -> (SignalTrigger, ChannelSignals) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (SignalTrigger { sender }, ChannelSignals { receiver })
    }
}

impl SignalTrigger {
    /// Deliver a signal. Returns `false` if the source is gone.
    pub fn trigger(&self, event: SignalEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

impl SignalSource for ChannelSignals {
    async fn next(&mut self) -> Option<SignalEvent> {
        self.receiver.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_delivers_in_order() {
        let (trigger, mut source) = ChannelSignals::channel();
        assert!(trigger.trigger(SignalEvent::Quit));
        assert!(trigger.trigger(SignalEvent::Interrupt));

        assert_eq!(source.next().await, Some(SignalEvent::Quit));
        assert_eq!(source.next().await, Some(SignalEvent::Interrupt));
    }

    #[tokio::test]
    async fn test_channel_closes_with_trigger() {
        let (trigger, mut source) = ChannelSignals::channel();
        drop(trigger);
        assert_eq!(source.next().await, None);
    }

    #[tokio::test]
    async fn test_trigger_after_source_dropped() {
        let (trigger, source) = ChannelSignals::channel();
        drop(source);
        assert!(!trigger.trigger(SignalEvent::Terminate));
    }

    #[tokio::test]
    async fn test_listen_deduplicates() {
        let signals = OsSignals::listen(&[
            SignalEvent::Terminate,
            SignalEvent::Quit,
            SignalEvent::Quit,
            SignalEvent::Interrupt,
        ])
        .unwrap();
        assert_eq!(
            signals.events(),
            vec![
                SignalEvent::Terminate,
                SignalEvent::Quit,
                SignalEvent::Interrupt
            ]
        );
    }

    #[tokio::test]
    async fn test_listen_empty_set() {
        let result = OsSignals::listen(&[]);
        assert!(matches!(result, Err(SignalError::EmptySet)));
    }
}
