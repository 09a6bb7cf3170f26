//! Error types for tinytpl.
//!
//! Uses thiserror for derive macros. End of input and unresolved placeholders
//! are not errors; only the conditions below ever reach the caller.

use crate::exit_codes;
use std::collections::TryReserveError;
use thiserror::Error;

/// Main error type for tinytpl operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The output buffer for an expanded line could not be allocated.
    #[error("failed to allocate {requested} bytes for an expanded line")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// `next_line()` was called outside a `start()`/`end()` session.
    #[error("engine is not in a session: call start() before next_line()")]
    NotStarted,

    /// The line source failed to read the template.
    #[error("failed to read template: {0}")]
    Read(#[source] std::io::Error),

    /// Expanded output could not be written.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// `check` found placeholders that do not resolve.
    #[error("Check failed: {0}")]
    CheckFailed(String),
}

impl TemplateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TemplateError::Allocation { .. } => exit_codes::RESOURCE_EXHAUSTED,
            TemplateError::NotStarted => exit_codes::USER_ERROR,
            TemplateError::Read(_) | TemplateError::Write(_) => exit_codes::IO_FAILURE,
            TemplateError::UserError(_) => exit_codes::USER_ERROR,
            TemplateError::CheckFailed(_) => exit_codes::CHECK_FAILURE,
        }
    }
}

/// Result type alias for tinytpl operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
