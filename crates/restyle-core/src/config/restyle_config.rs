//! Top-level restyle configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ClassifierConfig, PatternConfig, ResolverConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RESTYLE_*`)
/// 2. Project config (`restyle.toml` in project root)
/// 3. User config (`~/.restyle/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RestyleConfig {
    pub resolver: ResolverConfig,
    pub classifier: ClassifierConfig,
    pub patterns: PatternConfig,
}

impl RestyleConfig {
    /// Load configuration for the project at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with(root, user_config_path().as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Layered load with an explicit user config path and environment lookup.
    pub fn load_with(
        root: &Path,
        user_config: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest priority): user config
        if let Some(path) = user_config {
            if path.exists() {
                match Self::merge_toml_file(&mut config, path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        ::tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 2: project config
        let project_path = root.join("restyle.toml");
        if project_path.exists() {
            Self::merge_toml_file(&mut config, &project_path)?;
        }

        // Layer 1: environment
        Self::apply_env_overrides(&mut config, env);

        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.resolver;
        let unit_fields = [
            ("resolver.outright_threshold", r.outright_threshold),
            ("resolver.close_match_window", r.close_match_window),
            ("resolver.priority_weight", r.priority_weight),
            ("resolver.context_bonus", r.context_bonus),
            ("resolver.intent_bonus", r.intent_bonus),
            ("resolver.intent_min_confidence", r.intent_min_confidence),
        ];
        for (field, value) in unit_fields {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: "must be between 0.0 and 1.0".to_string(),
                    });
                }
            }
        }

        let c = &self.classifier;
        if c.effective_timeout_ms() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "classifier.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if c.effective_retry_timeout_ms() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "classifier.retry_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if c.effective_retry_timeout_ms() > c.effective_timeout_ms() {
            return Err(ConfigError::ValidationFailed {
                field: "classifier.retry_timeout_ms".to_string(),
                message: "must not exceed classifier.timeout_ms".to_string(),
            });
        }
        if c.effective_enabled() && c.endpoint.as_deref().map_or(true, str::is_empty) {
            return Err(ConfigError::ValidationFailed {
                field: "classifier.endpoint".to_string(),
                message: "required when the classifier is enabled".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut RestyleConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file_config: RestyleConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.merge(&file_config);
        Ok(())
    }

    /// Merge `other` into `self`; `other` wins wherever it has a value.
    pub fn merge(&mut self, other: &RestyleConfig) {
        macro_rules! take {
            ($section:ident . $field:ident) => {
                if other.$section.$field.is_some() {
                    self.$section.$field = other.$section.$field.clone();
                }
            };
        }

        take!(resolver.outright_threshold);
        take!(resolver.close_match_window);
        take!(resolver.priority_weight);
        take!(resolver.context_bonus);
        take!(resolver.intent_bonus);
        take!(resolver.intent_min_confidence);
        take!(resolver.fast_path);
        take!(resolver.followup);
        take!(resolver.split_conjunctions);

        take!(classifier.enabled);
        take!(classifier.endpoint);
        take!(classifier.timeout_ms);
        take!(classifier.retry_on_timeout);
        take!(classifier.retry_timeout_ms);
        take!(classifier.cache_capacity);
        take!(classifier.cache_ttl_secs);

        take!(patterns.custom_dir);
        if !other.patterns.disabled_packs.is_empty() {
            self.patterns.disabled_packs = other.patterns.disabled_packs.clone();
        }
        if !other.patterns.enabled_only.is_empty() {
            self.patterns.enabled_only = other.patterns.enabled_only.clone();
        }
    }

    /// Pattern: `RESTYLE_RESOLVER_OUTRIGHT_THRESHOLD`, `RESTYLE_CLASSIFIER_ENDPOINT`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut RestyleConfig, env: impl Fn(&str) -> Option<String>) {
        fn parsed<T: std::str::FromStr>(
            env: &impl Fn(&str) -> Option<String>,
            key: &str,
        ) -> Option<T> {
            env(key).and_then(|v| v.trim().parse().ok())
        }

        if let Some(v) = parsed(&env, "RESTYLE_RESOLVER_OUTRIGHT_THRESHOLD") {
            config.resolver.outright_threshold = Some(v);
        }
        if let Some(v) = parsed(&env, "RESTYLE_RESOLVER_INTENT_MIN_CONFIDENCE") {
            config.resolver.intent_min_confidence = Some(v);
        }
        if let Some(v) = parsed(&env, "RESTYLE_RESOLVER_FAST_PATH") {
            config.resolver.fast_path = Some(v);
        }
        if let Some(v) = parsed(&env, "RESTYLE_RESOLVER_FOLLOWUP") {
            config.resolver.followup = Some(v);
        }
        if let Some(v) = parsed(&env, "RESTYLE_CLASSIFIER_ENABLED") {
            config.classifier.enabled = Some(v);
        }
        if let Some(v) = env("RESTYLE_CLASSIFIER_ENDPOINT") {
            config.classifier.endpoint = Some(v);
        }
        if let Some(v) = parsed(&env, "RESTYLE_CLASSIFIER_TIMEOUT_MS") {
            config.classifier.timeout_ms = Some(v);
        }
        if let Some(v) = env("RESTYLE_PATTERNS_CUSTOM_DIR") {
            config.patterns.custom_dir = Some(v);
        }
        if let Some(v) = env("RESTYLE_PATTERNS_DISABLED") {
            config.patterns.disabled_packs = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
    }
}

/// Returns the user config path: `~/.restyle/config.toml`.
fn user_config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".restyle").join("config.toml"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
