//! Error types for taskcheck
//!
//! Exit codes:
//! - 0: Success (no blocking findings)
//! - 2: User error (bad args, malformed batch input)
//! - 3: Validation failed (blocking findings in a record or filename)
//! - 4: Operation failed (I/O error)
//!
//! The validation core itself is total and never returns an error; these
//! types exist for the CLI layer.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the taskcheck CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const VALIDATION_FAILED: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskcheck operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed batch input at line {line}: {message}")]
    MalformedBatchLine { line: usize, message: String },

    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_)
            | Error::MalformedBatchLine { .. }
            | Error::InputNotFound(_) => exit_codes::USER_ERROR,

            Error::Io(_) | Error::Json(_) | Error::OperationFailed(_) => {
                exit_codes::OPERATION_FAILED
            }
        }
    }
}

/// Result type alias for taskcheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            details: None,
        }
    }
}
