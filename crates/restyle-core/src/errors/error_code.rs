//! RestyleErrorCode trait for host-facing error reporting.

/// Every error enum implements this to provide a stable error code string
/// the host editor can match on without parsing messages.
pub trait RestyleErrorCode {
    /// Returns the error code string (e.g., "REGISTRATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const REGISTRATION_ERROR: &str = "REGISTRATION_ERROR";
pub const PACK_PARSE_ERROR: &str = "PACK_PARSE_ERROR";
pub const PROCESSOR_FAULT: &str = "PROCESSOR_FAULT";
pub const CLASSIFIER_TIMEOUT: &str = "CLASSIFIER_TIMEOUT";
pub const CLASSIFIER_UNAVAILABLE: &str = "CLASSIFIER_UNAVAILABLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
