//! Error types for the face gesture counter library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A landmark index required by a gesture is absent from the frame
    #[error("Missing landmark {index} (frame has {available} points)")]
    MissingLandmark {
        /// Index that was requested
        index: usize,
        /// Number of points the frame actually carries
        available: usize,
    },

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Filter initialization or processing error
    #[error("Filter error: {0}")]
    FilterError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Landmark recording could not be parsed
    #[error("Recording error at line {line}: {message}")]
    RecordingError {
        /// 1-based line number in the recording
        line: usize,
        /// Parser message
        message: String,
    },

    /// JSON encoding of a recording failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
