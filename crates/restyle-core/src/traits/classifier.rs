//! The external intent classifier contract.

use serde::{Deserialize, Serialize};

use crate::errors::ClassifierError;
use crate::types::{Domain, Property};

/// What is sent to the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub text: String,
}

impl ClassificationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The classifier's guess at what a command is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentClassification {
    #[serde(rename = "type")]
    pub intent_type: String,
    #[serde(default)]
    pub target_property: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    pub confidence: f64,
}

impl IntentClassification {
    /// The domain named by `type`, if it is one we know.
    pub fn domain(&self) -> Option<Domain> {
        Domain::from_intent_type(&self.intent_type)
    }

    pub fn target_property(&self) -> Option<Property> {
        self.target_property.as_deref().and_then(Property::parse_str)
    }

    /// Whether this classification supports a candidate in `domain` with at
    /// least `min_confidence`.
    pub fn agrees_with(&self, domain: Domain, min_confidence: f64) -> bool {
        if self.confidence.is_nan() || self.confidence < min_confidence {
            return false;
        }
        self.domain() == Some(domain)
            || self.target_property().map(Property::domain) == Some(domain)
    }
}

/// An external service that classifies a command's intent.
///
/// Optional and unreliable: callers bound every call with a timeout and
/// treat any error as "no classification".
#[allow(async_fn_in_trait)]
pub trait IntentClassifier: Send + Sync {
    fn name(&self) -> &str;

    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<IntentClassification, ClassifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(intent: &str, target: Option<&str>, confidence: f64) -> IntentClassification {
        IntentClassification {
            intent_type: intent.to_string(),
            target_property: target.map(str::to_string),
            value: None,
            confidence,
        }
    }

    #[test]
    fn test_agreement_by_type_or_property() {
        assert!(classification("style_shadow", None, 0.9).agrees_with(Domain::Shadow, 0.5));
        assert!(classification("other", Some("padding"), 0.9).agrees_with(Domain::Spacing, 0.5));
        assert!(!classification("color", None, 0.9).agrees_with(Domain::Border, 0.5));
    }

    #[test]
    fn test_low_confidence_never_agrees() {
        assert!(!classification("color", None, 0.4).agrees_with(Domain::Color, 0.5));
        assert!(!classification("color", None, f64::NAN).agrees_with(Domain::Color, 0.5));
    }

    #[test]
    fn test_wire_format() {
        let parsed: IntentClassification = serde_json::from_str(
            r#"{"type":"spacing","targetProperty":"padding","value":"16px","confidence":0.82}"#,
        )
        .unwrap();
        assert_eq!(parsed.domain(), Some(Domain::Spacing));
        assert_eq!(parsed.target_property(), Some(Property::Padding));
    }
}
