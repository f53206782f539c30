//! graceful-shutdown - close resources in order when the process is asked to stop
//!
//! A [`GracefulShutdown`] waits for a termination signal (`SIGINT`, `SIGTERM`
//! or `SIGQUIT`), then closes the resources it was given one after another,
//! reporting progress through a caller-supplied [`Logger`]. It either hands
//! control back through a one-shot [`Completion`] or exits the process.
//!
//! ```no_run
//! use graceful_shutdown::{Closeable, FnResource, TracingLogger};
//!
//! # async fn run() -> Result<(), graceful_shutdown::SignalError> {
//! let resources: Vec<Box<dyn Closeable + Send>> = vec![
//!     Box::new(FnResource::new(|| Ok(()))),
//!     Box::new(FnResource::new(|| Err("broker unreachable".into()))),
//! ];
//!
//! let mut completion = graceful_shutdown::handle(&TracingLogger, resources).await?;
//! let report = completion.wait().await;
//! println!("stopped by {}", report.signal);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logger;
pub mod resource;
pub mod shutdown;
pub mod signal;
pub mod util;

pub use config::Config;
pub use logger::{Field, Logger, TracingLogger};
pub use resource::{BoxError, CloseResult, Closeable, FnResource};
pub use shutdown::{
    handle, handle_and_terminate, Completion, GracefulShutdown, ProcessTerminator, ShutdownReport,
    Terminator, EXIT_SUCCESS,
};
pub use signal::{ChannelSignals, OsSignals, SignalError, SignalEvent, SignalSource, SignalTrigger};
