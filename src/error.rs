//! Error types for minver operations.
//!
//! This module defines [`MinverError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MinverError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MinverError::Other`) for unexpected errors
//! - A failed check is an outcome, not an error; see
//!   [`CheckOutcome`](crate::check::CheckOutcome)

use thiserror::Error;

/// Core error type for minver operations.
#[derive(Debug, Error)]
pub enum MinverError {
    /// The external inspection tool could not be spawned or exited non-zero.
    #[error("Error executing `{tool}` command: {message}")]
    ToolInvocation { tool: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for minver operations.
pub type Result<T> = std::result::Result<T, MinverError>;
