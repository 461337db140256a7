//! Processor faults raised inside a domain processor.

use super::error_code::{self, RestyleErrorCode};

/// Errors a domain processor may return from `process_command`.
///
/// The registry catches these at its boundary, logs them with the offending
/// processor id and converts them into a no-match.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    #[error("value for {property} must be {expected}, got {found}")]
    ShapeMismatch {
        property: String,
        expected: String,
        found: String,
    },

    #[error("invalid value '{value}' for {property}")]
    InvalidValue { property: String, value: String },

    #[error("processor fault: {0}")]
    Internal(String),
}

impl RestyleErrorCode for ProcessorError {
    fn error_code(&self) -> &'static str {
        error_code::PROCESSOR_FAULT
    }
}
