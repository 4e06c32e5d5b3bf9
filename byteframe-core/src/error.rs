//! Core error types

use thiserror::Error;

/// Errors raised when constructing a scanner
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The delimiter pattern was absent or zero-length
    #[error("delimiter must be at least one byte long")]
    EmptyDelimiter,
}

/// Result type for scanner operations
pub type Result<T> = std::result::Result<T, ScanError>;
