//! Resolver and scoring configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for candidate scoring and the resolution pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResolverConfig {
    /// Score above which the top candidate wins outright. Default: 0.7.
    pub outright_threshold: Option<f64>,
    /// Candidates within this distance of the top score compete on base priority. Default: 0.1.
    pub close_match_window: Option<f64>,
    /// Weight of the normalized pattern priority. Default: 0.4.
    pub priority_weight: Option<f64>,
    /// Bonus when the processor's context types admit the component. Default: 0.3.
    pub context_bonus: Option<f64>,
    /// Bonus when the intent classifier agrees with the candidate's domain. Default: 0.3.
    pub intent_bonus: Option<f64>,
    /// Minimum classifier confidence for agreement to count. Default: 0.5.
    pub intent_min_confidence: Option<f64>,
    /// Enable the keyword fast path. Default: true.
    pub fast_path: Option<bool>,
    /// Enable relative follow-ups ("darker", "add 4px"). Default: true.
    pub followup: Option<bool>,
    /// Split compound commands on and/then/commas. Default: true.
    pub split_conjunctions: Option<bool>,
}

impl ResolverConfig {
    pub fn effective_outright_threshold(&self) -> f64 {
        self.outright_threshold.unwrap_or(0.7)
    }

    pub fn effective_close_match_window(&self) -> f64 {
        self.close_match_window.unwrap_or(0.1)
    }

    pub fn effective_priority_weight(&self) -> f64 {
        self.priority_weight.unwrap_or(0.4)
    }

    pub fn effective_context_bonus(&self) -> f64 {
        self.context_bonus.unwrap_or(0.3)
    }

    pub fn effective_intent_bonus(&self) -> f64 {
        self.intent_bonus.unwrap_or(0.3)
    }

    pub fn effective_intent_min_confidence(&self) -> f64 {
        self.intent_min_confidence.unwrap_or(0.5)
    }

    pub fn effective_fast_path(&self) -> bool {
        self.fast_path.unwrap_or(true)
    }

    pub fn effective_followup(&self) -> bool {
        self.followup.unwrap_or(true)
    }

    pub fn effective_split_conjunctions(&self) -> bool {
        self.split_conjunctions.unwrap_or(true)
    }
}
