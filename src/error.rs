//! Error types for medrec
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MedRecError
pub type Result<T> = std::result::Result<T, MedRecError>;

/// Unified error type for medrec operations
#[derive(Debug, Error)]
pub enum MedRecError {
    // -------------------------------------------------------------------------
    // Storage Errors (fatal, no retry)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // -------------------------------------------------------------------------
    // Caller-visible, Recoverable Errors
    // -------------------------------------------------------------------------
    /// A required field failed validation (empty field, non-positive age)
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record with the given patient id exists
    #[error("patient not found: {0}")]
    PatientNotFound(String),
}
