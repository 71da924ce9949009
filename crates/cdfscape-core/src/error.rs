//! Error types for cdfscape.

use thiserror::Error;

/// The main error type for cdfscape operations.
#[derive(Error, Debug)]
pub enum CdfscapeError {
    /// A grid, step or viewport parameter violates its precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PLY encoding error.
    #[error("PLY error: {0}")]
    Ply(String),
}

impl CdfscapeError {
    /// Shorthand for building an [`CdfscapeError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns true if this is a precondition violation.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// A specialized Result type for cdfscape operations.
pub type Result<T> = std::result::Result<T, CdfscapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = CdfscapeError::invalid("steps must be >= 1");
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument: steps must be >= 1");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CdfscapeError = io.into();
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
