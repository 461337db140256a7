//! Candidate scoring and selection.

pub mod scorer;

pub use scorer::ConfidenceScorer;

use restyle_core::types::Property;
use serde::Serialize;

/// A pattern of some processor that matched the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCandidate {
    pub processor_id: String,
    pub pattern_id: String,
    pub property: Property,
    pub matched_value: String,
    /// Pattern priority 0..=100.
    pub priority: u8,
    /// Base priority of the owning processor.
    pub processor_priority: u8,
    /// Whether the processor's context types admit the selected component.
    pub in_context: bool,
}

/// A candidate with its confidence score and the parts it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub candidate: MatchCandidate,
    pub score: f64,
    pub priority_component: f64,
    pub context_component: f64,
    pub intent_component: f64,
}
