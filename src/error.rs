//! Error types for s3cost
//!
//! This module defines the error types used throughout the s3cost library.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! # Example
//!
//! ```
//! use s3cost::error::{Result, S3costError};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to S3costError
//!     let _file = std::fs::read_to_string("nonexistent.txt")?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for s3cost operations
///
/// This enum encompasses all possible errors that can occur during a report
/// run, from IO errors to parsing failures and invalid pricing tables.
#[derive(Error, Debug)]
pub enum S3costError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Parse error with file context
    #[error("Parse error in {file}: {error}")]
    Parse {
        /// The file that caused the error
        file: PathBuf,
        /// The error message
        error: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in s3cost
///
/// This type alias makes it easier to work with Results throughout
/// the codebase by providing a default error type.
pub type Result<T> = std::result::Result<T, S3costError>;
