//! Error types for path preparation operations

use thiserror::Error;

/// The error type for path preparation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// A required path does not exist
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// Path exists but a directory was expected
    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    /// Path exists but a regular file was expected
    #[error("Not a file: {path}")]
    NotAFile { path: String },

    /// File suffix does not match the expected value
    #[error("Expected suffix '{expected}' on path: {path}")]
    SuffixMismatch { expected: String, path: String },

    /// Mutually exclusive options were supplied together
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// The filesystem denies the required access mode
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// The mandatory suffix run alone exceeds the byte budget
    #[error("Not possible to truncate filename to fit the byte budget: {path}")]
    TruncationImpossible { path: String },

    /// I/O error during path operations
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for path preparation operations
pub type Result<T> = std::result::Result<T, PathError>;
