//! Error types for bit vector operations.

use thiserror::Error;

/// Error variants for bit vector operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A constructor or configuration argument was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index or in-word bit position was outside the addressable range.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(i64),
}

/// A specialized Result type for bit vector operations.
pub type Result<T> = std::result::Result<T, Error>;
