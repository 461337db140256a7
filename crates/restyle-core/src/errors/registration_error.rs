//! Registration errors (MalformedRegistration).
//!
//! These indicate an integration bug in a pattern pack or processor and are
//! raised synchronously when the processor is built or registered.

use super::error_code::{self, RestyleErrorCode};

/// Errors raised while compiling pattern packs or registering processors.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("processor registered without an id")]
    MissingId,

    #[error("processor '{processor_id}' registered without patterns")]
    MissingPatterns { processor_id: String },

    #[error("priority {priority} out of range 0..=100 for '{id}'")]
    PriorityOutOfRange { id: String, priority: u32 },

    #[error("duplicate pattern id '{pattern_id}' in processor '{processor_id}'")]
    DuplicatePattern {
        processor_id: String,
        pattern_id: String,
    },

    #[error("invalid pattern '{pattern_id}': {reason}")]
    InvalidPattern { pattern_id: String, reason: String },

    #[error("unknown property '{property}' in pattern '{pattern_id}'")]
    UnknownProperty {
        pattern_id: String,
        property: String,
    },

    #[error("unknown action '{action}' in pattern '{pattern_id}'")]
    UnknownAction { pattern_id: String, action: String },

    #[error("unknown domain processor '{processor_id}'")]
    UnknownDomain { processor_id: String },

    #[error("pattern '{pattern_id}' declares output '{declared}' but {property} takes '{expected}'")]
    ShapeMismatch {
        pattern_id: String,
        property: String,
        expected: String,
        declared: String,
    },

    #[error("failed to parse pack '{pack}': {message}")]
    PackParse { pack: String, message: String },
}

impl RestyleErrorCode for RegistrationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::PackParse { .. } => error_code::PACK_PARSE_ERROR,
            _ => error_code::REGISTRATION_ERROR,
        }
    }
}
