//! Error types for the whittle CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for whittle operations.
///
/// Each variant maps to a documented exit code. Configuration, I/O, backend,
/// and malformed-response failures are all fatal; the only recovered failure
/// mode is an individual category payload that is not valid JSON, which the
/// writer handles with a raw fallback instead of an error.
#[derive(Error, Debug)]
pub enum WhittleError {
    /// Missing credential, empty description, or invalid configuration.
    #[error("{0}")]
    Config(String),

    /// A document or specification file could not be read or written.
    #[error("{0}")]
    Io(String),

    /// The generation request failed (network, auth, quota).
    #[error("generation request failed: {0}")]
    Backend(String),

    /// The backend output was not a single JSON object keyed by category.
    /// Carries the raw output so nothing generated is lost from view.
    #[error("generation response is not valid JSON: {detail}\n{raw}")]
    MalformedResponse { detail: String, raw: String },
}

impl WhittleError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            WhittleError::Config(_) => exit_codes::CONFIG_ERROR,
            WhittleError::Io(_) => exit_codes::IO_FAILURE,
            WhittleError::Backend(_) => exit_codes::BACKEND_FAILURE,
            WhittleError::MalformedResponse { .. } => exit_codes::MALFORMED_RESPONSE,
        }
    }
}

/// Result type alias for whittle operations.
pub type Result<T> = std::result::Result<T, WhittleError>;
