//! Closeable resources.

mod closeable;
mod managed;

pub use closeable::{BoxError, CloseResult, Closeable, FnResource};
pub use managed::{open_resources, FileResource, ManagedResource, PidFile, TcpListenerResource};
