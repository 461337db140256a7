//! External intent classifier errors (ClassifierUnavailable).

use super::error_code::{self, RestyleErrorCode};

/// Failures of the external intent classifier.
///
/// Always caught at the classifier adapter boundary; resolution continues
/// without the classifier's contribution.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("classifier transport error: {0}")]
    Transport(String),

    #[error("classifier returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}

impl RestyleErrorCode for ClassifierError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => error_code::CLASSIFIER_TIMEOUT,
            _ => error_code::CLASSIFIER_UNAVAILABLE,
        }
    }
}
