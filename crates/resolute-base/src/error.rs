//! Unified error types for Resolute.

use thiserror::Error;

/// The main error type for Resolute operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed problem text.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A selection policy returned an index outside the pair queue.
    #[error("Selection index {index} out of range for {len} pending pairs")]
    SelectionOutOfRange { index: usize, len: usize },

    /// Unknown selection policy name.
    #[error("Unknown selection policy: {0}")]
    UnknownPolicy(String),

    /// Unknown problem format name.
    #[error("Unknown problem format: {0}")]
    UnknownFormat(String),

    /// Argument outside the supported domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Creates a parse error for the given 1-based line.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
