//! Error types for student-records
//!
//! Fatal and I/O failures share one error type. Recoverable input
//! validation failures live in [`crate::input::InputError`].

use thiserror::Error;

/// Result type alias using RecordsError
pub type Result<T> = std::result::Result<T, RecordsError>;

/// Unified error type for store and console operations
#[derive(Debug, Error)]
pub enum RecordsError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
