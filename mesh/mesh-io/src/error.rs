//! Error types for STL decoding.

use thiserror::Error;

/// Result type for STL decoding operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while decoding an STL buffer.
///
/// Only structural failures are errors. Unmatched ASCII facet blocks and a
/// truncated trailing binary record are tolerated and never surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    /// Binary buffer is shorter than the 80-byte header plus 4-byte count.
    #[error("file too small: expected at least {expected} bytes, got {got}")]
    FileTooSmall {
        /// Minimum number of bytes required.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },
}

impl IoError {
    /// Create a `FileTooSmall` error for a buffer of `got` bytes.
    #[must_use]
    pub const fn file_too_small(expected: usize, got: usize) -> Self {
        Self::FileTooSmall { expected, got }
    }
}
