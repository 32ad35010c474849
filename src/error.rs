//! Error types for vex.

use thiserror::Error;

/// Result type for vex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for vex operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The annotation provider handed us a structurally invalid sentence
    /// (e.g. a dependency arc referencing a token index beyond the sentence).
    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an invalid annotation error.
    pub fn invalid_annotation(msg: impl Into<String>) -> Self {
        Error::InvalidAnnotation(msg.into())
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
