//! Termination signal delivery.
//!
//! A [`SignalSource`] yields [`SignalEvent`]s; the [`SignalWatcher`] runs one on
//! a background task and hands the first event to whoever is waiting.

mod event;
mod source;
mod watcher;

pub use event::SignalEvent;
pub use source::{ChannelSignals, OsSignals, SignalError, SignalSource, SignalTrigger};
pub use watcher::SignalWatcher;
