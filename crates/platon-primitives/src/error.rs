//! Common error type for primitive parsing

use thiserror::Error;

/// Primitive parsing error
#[derive(Debug, Error)]
pub enum PrimitiveError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// Invalid byte length
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Expected number of bytes
        expected: usize,
        /// Actual number of bytes
        got: usize,
    },
}
