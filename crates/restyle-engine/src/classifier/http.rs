//! Intent classification over HTTP.

use restyle_core::errors::ClassifierError;
use restyle_core::traits::{ClassificationRequest, IntentClassification, IntentClassifier};

/// POSTs `{"text": ...}` as JSON and reads back an [`IntentClassification`].
pub struct HttpIntentClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpIntentClassifier {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClassifierError> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ClassifierError::Unavailable("no classifier endpoint configured".to_string()));
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClassifierError::Transport(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl IntentClassifier for HttpIntentClassifier {
    fn name(&self) -> &str {
        "http"
    }

    async fn classify(
        &self,
        request: &ClassificationRequest,
    ) -> Result<IntentClassification, ClassifierError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClassifierError::Unavailable(e.to_string())
                } else {
                    ClassifierError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Transport(format!(
                "classifier endpoint returned {status}"
            )));
        }

        response
            .json::<IntentClassification>()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_endpoint_is_unavailable() {
        assert!(matches!(
            HttpIntentClassifier::new("  "),
            Err(ClassifierError::Unavailable(_))
        ));
        let classifier = HttpIntentClassifier::new("http://127.0.0.1:9/classify").unwrap();
        assert_eq!(classifier.endpoint(), "http://127.0.0.1:9/classify");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_errors() {
        let classifier = HttpIntentClassifier::new("http://127.0.0.1:9/classify").unwrap();
        let err = classifier
            .classify(&ClassificationRequest::new("add padding"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::Unavailable(_) | ClassifierError::Transport(_)
        ));
    }
}
