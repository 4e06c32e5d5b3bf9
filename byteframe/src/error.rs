//! API error types

use byteframe_core::ScanError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid configuration
    #[error("invalid configuration: {reason}")]
    Config {
        /// Why the configuration was rejected
        reason: String,
    },

    /// Core scanner error
    #[error("scanner error: {0}")]
    Scanner(#[from] ScanError),

    /// I/O error from a record source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
