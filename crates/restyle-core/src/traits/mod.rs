//! Shared traits used across restyle crates.

pub mod classifier;
pub mod processor;

pub use classifier::{ClassificationRequest, IntentClassification, IntentClassifier};
pub use processor::{DomainProcessor, ProcessorMetadata};
