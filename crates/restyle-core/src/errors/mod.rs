//! Error handling for restyle.
//! One error enum per concern, `thiserror` only.

pub mod classifier_error;
pub mod config_error;
pub mod error_code;
pub mod processor_error;
pub mod registration_error;

pub use classifier_error::ClassifierError;
pub use config_error::ConfigError;
pub use error_code::RestyleErrorCode;
pub use processor_error::ProcessorError;
pub use registration_error::RegistrationError;
