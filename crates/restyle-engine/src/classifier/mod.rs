//! Optional external intent classification.
//!
//! The classifier is a hint, never a dependency: every failure degrades to
//! "no classification" and resolution carries on from patterns alone.

pub mod adapter;
pub mod http;

pub use adapter::ClassifierAdapter;
pub use http::HttpIntentClassifier;

use restyle_core::errors::ClassifierError;
use restyle_core::traits::{ClassificationRequest, IntentClassification, IntentClassifier};

/// Placeholder for registries built without a classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClassifier;

impl IntentClassifier for NoClassifier {
    fn name(&self) -> &str {
        "none"
    }

    async fn classify(
        &self,
        _request: &ClassificationRequest,
    ) -> Result<IntentClassification, ClassifierError> {
        Err(ClassifierError::Unavailable("no classifier configured".to_string()))
    }
}
