//! Error types for record I/O

use thiserror::Error;

/// Errors that can occur reading or writing molecule records
#[derive(Error, Debug)]
pub enum IoError {
    /// Underlying file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record is missing required fields or is not valid JSON.
    ///
    /// Record-level failures abort the whole operation; they are never
    /// recovered element by element.
    #[error("Invalid molecule format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for record I/O
pub type IoResult<T> = Result<T, IoError>;
