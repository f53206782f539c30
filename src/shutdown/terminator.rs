//! Process termination seam.

/// Exit status reported after a completed shutdown.
pub const EXIT_SUCCESS: i32 = 0;

/// Ends the process once shutdown has finished.
pub trait Terminator {
    /// Terminate with `code`. The process implementation never returns.
    fn terminate(&self, code: i32);
}

/// Exits the real process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTerminator;

impl ProcessTerminator {
    pub fn exit(code: i32) -> ! {
        std::process::exit(code)
    }
}

impl Terminator for ProcessTerminator {
    fn terminate(&self, code: i32) {
        Self::exit(code)
    }
}
