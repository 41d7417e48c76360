// src/exit.rs
//! Standardized process exit codes for `stratum`.
//!
//! Provides a stable contract for CI scripts.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum StratumExit {
    /// Analysis completed and the module respects its layering.
    Success = 0,
    /// Generic error (I/O, missing go.mod, invalid config).
    Error = 1,
    /// Input validation failed (unknown package, unsupported format).
    InvalidInput = 2,
    /// Layering violations were found.
    CheckFailed = 6,
}

impl StratumExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for StratumExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
