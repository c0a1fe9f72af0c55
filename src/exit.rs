// src/exit.rs
//! Standardized process exit codes for `shortstop`.
//!
//! Provides a stable contract for scripts wrapping queries.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ShortstopExit {
    /// Query answered, or build completed.
    Success = 0,
    /// Generic error (e.g. IO, missing data files, bad CSV header).
    Error = 1,
    /// Both names resolved but no teammate chain connects them.
    NoConnection = 2,
    /// A name did not resolve to exactly one player.
    BadName = 3,
}

impl ShortstopExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for ShortstopExit {
    fn report(self) -> std::process::ExitCode {
        // Unix exit statuses are a u8; the codes above all fit.
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ShortstopExit::Success.code(), 0);
        assert_eq!(ShortstopExit::Error.code(), 1);
        assert_eq!(ShortstopExit::NoConnection.code(), 2);
        assert_eq!(ShortstopExit::BadName.code(), 3);
    }
}
