//! Confidence scoring: pattern priority, context fit and classifier agreement.
//!
//! Scores land in [0, 1]. Without a classifier the best possible score is
//! `priority_weight + context_bonus` (0.7 by default), which never wins
//! outright; such inputs are decided by processor base priority among the
//! close matches.

use restyle_core::config::ResolverConfig;
use restyle_core::traits::IntentClassification;

use super::{MatchCandidate, ScoredCandidate};

/// Scores closer than this count as equal.
const SCORE_EPSILON: f64 = 1e-9;

pub struct ConfidenceScorer {
    priority_weight: f64,
    context_bonus: f64,
    intent_bonus: f64,
    intent_min_confidence: f64,
    outright_threshold: f64,
    close_match_window: f64,
}

impl ConfidenceScorer {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            priority_weight: config.effective_priority_weight(),
            context_bonus: config.effective_context_bonus(),
            intent_bonus: config.effective_intent_bonus(),
            intent_min_confidence: config.effective_intent_min_confidence(),
            outright_threshold: config.effective_outright_threshold(),
            close_match_window: config.effective_close_match_window(),
        }
    }

    /// Score one candidate.
    pub fn score(
        &self,
        candidate: MatchCandidate,
        intent: Option<&IntentClassification>,
    ) -> ScoredCandidate {
        let priority_component = self.priority_weight * f64::from(candidate.priority.min(100)) / 100.0;
        let context_component = if candidate.in_context { self.context_bonus } else { 0.0 };
        let agrees = intent.is_some_and(|i| {
            i.agrees_with(candidate.property.domain(), self.intent_min_confidence)
        });
        let intent_component = if agrees { self.intent_bonus } else { 0.0 };
        let score = (priority_component + context_component + intent_component).clamp(0.0, 1.0);
        ScoredCandidate {
            candidate,
            score,
            priority_component,
            context_component,
            intent_component,
        }
    }

    /// Score all candidates and sort by descending score. The sort is
    /// stable, so discovery order breaks ties.
    pub fn rank(
        &self,
        candidates: Vec<MatchCandidate>,
        intent: Option<&IntentClassification>,
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> =
            candidates.into_iter().map(|c| self.score(c, intent)).collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Whether the top of a ranked list wins without further evidence.
    pub fn is_outright(&self, ranked: &[ScoredCandidate]) -> bool {
        ranked
            .first()
            .is_some_and(|top| top.score > self.outright_threshold + SCORE_EPSILON)
    }

    /// Index of the selected candidate in a ranked list.
    ///
    /// An outright winner is taken as is. Otherwise the candidates within the
    /// close-match window of the top compete on processor base priority and
    /// the earliest ranked wins remaining ties.
    pub fn select(&self, ranked: &[ScoredCandidate]) -> Option<usize> {
        let top = ranked.first()?;
        if self.is_outright(ranked) {
            return Some(0);
        }
        let floor = top.score - self.close_match_window - SCORE_EPSILON;
        let mut best = 0;
        for (i, scored) in ranked.iter().enumerate().skip(1) {
            if scored.score < floor {
                break;
            }
            if scored.candidate.processor_priority > ranked[best].candidate.processor_priority {
                best = i;
            }
        }
        Some(best)
    }

    /// Distinct processor ids in dispatch order: the selected candidate's
    /// processor first, then the rest in rank order.
    pub fn dispatch_order(&self, ranked: &[ScoredCandidate]) -> Vec<String> {
        let Some(selected) = self.select(ranked) else {
            return Vec::new();
        };
        let mut order: Vec<String> = Vec::new();
        let first = &ranked[selected].candidate.processor_id;
        order.push(first.clone());
        for scored in ranked {
            let id = &scored.candidate.processor_id;
            if !order.contains(id) {
                order.push(id.clone());
            }
        }
        order
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restyle_core::types::Property;

    fn candidate(processor: &str, property: Property, priority: u8, base: u8, in_context: bool) -> MatchCandidate {
        MatchCandidate {
            processor_id: processor.to_string(),
            pattern_id: format!("{processor}/p"),
            property,
            matched_value: String::new(),
            priority,
            processor_priority: base,
            in_context,
        }
    }

    fn intent(kind: &str, confidence: f64) -> IntentClassification {
        IntentClassification {
            intent_type: kind.to_string(),
            target_property: None,
            value: None,
            confidence,
        }
    }

    #[test]
    fn test_score_components() {
        let scorer = ConfidenceScorer::default();
        let s = scorer.score(candidate("spacing", Property::Padding, 80, 65, true), None);
        assert!((s.score - 0.62).abs() < 1e-9);
        assert_eq!(s.intent_component, 0.0);

        let s = scorer.score(
            candidate("spacing", Property::Padding, 80, 65, true),
            Some(&intent("spacing", 0.9)),
        );
        assert!((s.score - 0.92).abs() < 1e-9);
        assert!(scorer.is_outright(&[s]));
    }

    #[test]
    fn test_low_confidence_intent_ignored() {
        let scorer = ConfidenceScorer::default();
        let s = scorer.score(
            candidate("color", Property::Color, 100, 70, true),
            Some(&intent("color", 0.3)),
        );
        assert!((s.score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_without_classifier_nothing_is_outright() {
        let scorer = ConfidenceScorer::default();
        let ranked = scorer.rank(vec![candidate("color", Property::Color, 100, 70, true)], None);
        assert!(!scorer.is_outright(&ranked));
        assert_eq!(scorer.select(&ranked), Some(0));
    }

    #[test]
    fn test_close_scores_use_base_priority() {
        let scorer = ConfidenceScorer::default();
        let ranked = scorer.rank(
            vec![
                candidate("low", Property::Padding, 80, 40, true),
                candidate("high", Property::Margin, 70, 90, true),
                candidate("far", Property::Gap, 10, 100, true),
            ],
            None,
        );
        assert_eq!(ranked[0].candidate.processor_id, "low");
        let selected = scorer.select(&ranked).unwrap();
        assert_eq!(ranked[selected].candidate.processor_id, "high");
        assert_eq!(scorer.dispatch_order(&ranked), vec!["high", "low", "far"]);
    }

    #[test]
    fn test_equal_base_priority_keeps_rank_order() {
        let scorer = ConfidenceScorer::default();
        let ranked = scorer.rank(
            vec![
                candidate("first", Property::Padding, 80, 50, true),
                candidate("second", Property::Margin, 80, 50, true),
            ],
            None,
        );
        let selected = scorer.select(&ranked).unwrap();
        assert_eq!(ranked[selected].candidate.processor_id, "first");
    }

    #[test]
    fn test_out_of_context_loses_bonus() {
        let scorer = ConfidenceScorer::default();
        let ranked = scorer.rank(
            vec![
                candidate("chart", Property::ShowLegend, 90, 85, false),
                candidate("color", Property::Color, 70, 70, true),
            ],
            None,
        );
        assert_eq!(ranked[0].candidate.processor_id, "color");
        assert_eq!(scorer.dispatch_order(&ranked), vec!["color", "chart"]);
    }

    #[test]
    fn test_empty_ranking() {
        let scorer = ConfidenceScorer::default();
        assert_eq!(scorer.select(&[]), None);
        assert!(scorer.dispatch_order(&[]).is_empty());
    }
}
