//! Termination signal identities.

use std::fmt;

/// A termination signal recognized by the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalEvent {
    /// `SIGINT`, usually Ctrl-C in a terminal.
    Interrupt,
    /// `SIGTERM`, the default signal sent by `kill`, systemd and Kubernetes.
    Terminate,
    /// `SIGQUIT`.
    Quit,
}

impl SignalEvent {
    /// Every termination signal, in registration order.
    pub const ALL: [SignalEvent; 3] = [
        SignalEvent::Terminate,
        SignalEvent::Quit,
        SignalEvent::Interrupt,
    ];

    /// Conventional POSIX name of the signal.
    pub fn name(&self) -> &'static str {
        match self {
            SignalEvent::Interrupt => "SIGINT",
            SignalEvent::Terminate => "SIGTERM",
            SignalEvent::Quit => "SIGQUIT",
        }
    }
}

/// Human-readable description, matching what the platform reports.
impl fmt::Display for SignalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            SignalEvent::Interrupt => "interrupt",
            SignalEvent::Terminate => "terminated",
            SignalEvent::Quit => "quit",
        };
        f.write_str(description)
    }
}
