//! Timeout, retry, validation and caching around an [`IntentClassifier`].

use std::time::Duration;

use moka::sync::Cache;
use restyle_core::config::ClassifierConfig;
use restyle_core::errors::{ClassifierError, RestyleErrorCode};
use restyle_core::traits::{ClassificationRequest, IntentClassification, IntentClassifier};

/// Wraps a classifier so callers only ever see a classification or nothing.
pub struct ClassifierAdapter<C> {
    classifier: C,
    timeout: Duration,
    /// Timeout of the single retry after a timeout, if retrying is enabled.
    retry_timeout: Option<Duration>,
    cache: Cache<String, IntentClassification>,
}

impl<C: IntentClassifier> ClassifierAdapter<C> {
    pub fn new(classifier: C, config: &ClassifierConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.effective_cache_capacity())
            .time_to_live(Duration::from_secs(config.effective_cache_ttl_secs()))
            .build();
        Self {
            classifier,
            timeout: Duration::from_millis(config.effective_timeout_ms()),
            retry_timeout: config
                .effective_retry_on_timeout()
                .then(|| Duration::from_millis(config.effective_retry_timeout_ms())),
            cache,
        }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classify `text`, logging and swallowing any failure.
    pub async fn classify(&self, text: &str) -> Option<IntentClassification> {
        match self.try_classify(text).await {
            Ok(classification) => Some(classification),
            Err(e) => {
                tracing::warn!(
                    classifier = self.classifier.name(),
                    error = %e.coded_string(),
                    "intent classification unavailable, continuing without it"
                );
                None
            }
        }
    }

    /// Classify `text`, surfacing the failure.
    pub async fn try_classify(&self, text: &str) -> Result<IntentClassification, ClassifierError> {
        let key = cache_key(text);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let request = ClassificationRequest::new(text);
        let mut result = self.call(&request, self.timeout).await;
        if let (Err(ClassifierError::Timeout { .. }), Some(retry)) = (&result, self.retry_timeout) {
            tracing::debug!(
                classifier = self.classifier.name(),
                retry_ms = retry.as_millis() as u64,
                "classifier timed out, retrying once"
            );
            result = self.call(&request, retry).await;
        }
        let classification = validate(result?)?;
        self.cache.insert(key, classification.clone());
        Ok(classification)
    }

    async fn call(
        &self,
        request: &ClassificationRequest,
        limit: Duration,
    ) -> Result<IntentClassification, ClassifierError> {
        match tokio::time::timeout(limit, self.classifier.classify(request)).await {
            Ok(result) => result,
            Err(_) => Err(ClassifierError::Timeout {
                timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            }),
        }
    }

    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

fn cache_key(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

fn validate(classification: IntentClassification) -> Result<IntentClassification, ClassifierError> {
    let confidence = classification.confidence;
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(ClassifierError::InvalidResponse(format!(
            "confidence {confidence} outside [0, 1]"
        )));
    }
    if classification.intent_type.trim().is_empty() {
        return Err(ClassifierError::InvalidResponse("empty intent type".to_string()));
    }
    Ok(classification)
}
