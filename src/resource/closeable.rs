//! The closeable capability and its adapters.

use std::fs::File;
use std::io::Write;

/// Error reported by a failed close.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of a close operation.
pub type CloseResult = Result<(), BoxError>;

/// A component that can be released.
///
/// The shutdown orchestrator calls `close` exactly once per resource, in the
/// order the resources were supplied. A failure is reported and the next
/// resource is closed regardless.
pub trait Closeable {
    fn close(&mut self) -> CloseResult;
}

impl<T: Closeable + ?Sized> Closeable for Box<T> {
    fn close(&mut self) -> CloseResult {
        (**self).close()
    }
}

impl<T: Closeable + ?Sized> Closeable for &mut T {
    fn close(&mut self) -> CloseResult {
        (**self).close()
    }
}

/// Flushes buffered data and syncs it to disk.
impl Closeable for File {
    fn close(&mut self) -> CloseResult {
        self.flush()?;
        self.sync_all()?;
        Ok(())
    }
}

/// Wraps a closure as a resource.
pub struct FnResource<F> {
    close_fn: F,
}

impl<F> FnResource<F>
where
    F: FnMut() -> CloseResult,
{
    pub fn new(close_fn: F) -> Self {
        Self { close_fn }
    }
}

impl<F> Closeable for FnResource<F>
where
    F: FnMut() -> CloseResult,
{
    fn close(&mut self) -> CloseResult {
        (self.close_fn)()
    }
}
