//! Error handling module for the baskt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use baskc_lex::ScanError;
use thiserror::Error;

/// Main error type for the baskt CLI application.
#[derive(Error, Debug)]
pub enum BasktError {
    /// Error when the configuration cannot be loaded or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when a source file cannot be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a source file cannot be scanned.
    #[error("{path}: {source}")]
    Scan {
        /// File the error occurred in.
        path: String,
        /// The scanner error.
        #[source]
        source: ScanError,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using BasktError.
pub type Result<T> = std::result::Result<T, BasktError>;
