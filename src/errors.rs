//! Error types for symptombuddy
//!
//! Provides a single error enum for the checker pipeline with
//! context propagation from the interview through report writing.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the symptom checker
#[derive(Error, Debug)]
pub enum CheckerError {
    /// Interview ended before every question was answered
    #[error("Interview aborted: {0}")]
    InterviewAborted(String),

    /// Knowledge-base integrity violations
    #[error("Knowledge base integrity error: {0}")]
    KbIntegrity(String),

    /// Report file could not be written
    #[error("Could not write report to {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic errors with context
    #[error("Checker error: {0}")]
    Generic(String),
}

/// Result type alias for checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;

/// Convert anyhow errors to CheckerError
impl From<anyhow::Error> for CheckerError {
    fn from(err: anyhow::Error) -> Self {
        CheckerError::Generic(err.to_string())
    }
}
