//! External intent classifier configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the optional intent classifier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Query the classifier at all. Default: false.
    pub enabled: Option<bool>,
    /// HTTP endpoint accepting `{"text": ...}` and returning a classification.
    pub endpoint: Option<String>,
    /// Per-call timeout in milliseconds. Default: 800.
    pub timeout_ms: Option<u64>,
    /// Retry once with a shorter timeout after a timeout. Default: false.
    pub retry_on_timeout: Option<bool>,
    /// Timeout of the retry in milliseconds. Default: 300.
    pub retry_timeout_ms: Option<u64>,
    /// Maximum cached classifications. Default: 512.
    pub cache_capacity: Option<u64>,
    /// Cache entry lifetime in seconds. Default: 300.
    pub cache_ttl_secs: Option<u64>,
}

impl ClassifierConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    pub fn effective_timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(800)
    }

    pub fn effective_retry_on_timeout(&self) -> bool {
        self.retry_on_timeout.unwrap_or(false)
    }

    pub fn effective_retry_timeout_ms(&self) -> u64 {
        self.retry_timeout_ms.unwrap_or(300)
    }

    pub fn effective_cache_capacity(&self) -> u64 {
        self.cache_capacity.unwrap_or(512)
    }

    pub fn effective_cache_ttl_secs(&self) -> u64 {
        self.cache_ttl_secs.unwrap_or(300)
    }
}
