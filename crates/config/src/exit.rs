//! Process exit codes for scripting and automation.
//!
//! Invariants:
//! - `0` is reserved for success, including `--help` and `--version`.
//! - Every fatal configuration failure exits non-zero.

/// Structured exit codes for symo-exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration loaded, or help/version printed.
    Success = 0,

    /// General error - configuration could not be bound, decoded or loaded.
    GeneralError = 1,

    /// Usage error - the argument vector did not match the flag definitions.
    ///
    /// Scripts should fix the invocation rather than retry.
    UsageError = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
