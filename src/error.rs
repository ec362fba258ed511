//! Error types for redis-memory-report
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

/// Unified error type for collection and reporting
#[derive(Debug, Error)]
pub enum ReportError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    /// The store could not be reached, or the transport failed mid-run
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server rejected the key listing command
    #[error("Key listing failed: {0}")]
    Listing(String),

    /// The server rejected a command issued for a single key
    #[error("Query error for key {key}: {message}")]
    Query { key: String, message: String },

    // -------------------------------------------------------------------------
    // Output Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
