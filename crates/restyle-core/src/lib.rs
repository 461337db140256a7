//! # restyle-core
//!
//! Foundation crate for the restyle command engine.
//! Defines the style data model, processor and classifier traits, errors,
//! config and tracing. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::RestyleConfig;
pub use errors::{ClassifierError, ConfigError, ProcessorError, RegistrationError, RestyleErrorCode};
pub use traits::{
    ClassificationRequest, DomainProcessor, IntentClassification, IntentClassifier,
    ProcessorMetadata,
};
pub use types::{
    CommandResult, ComponentType, ContextTypes, Direction, Domain, Length, Patch, PatchValue,
    PatternAction, PatternRule, Property, RelativeAdjustment, Resolution, ResolutionPath,
    StyleContext, StyleValue, ValueShape,
};
