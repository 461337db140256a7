//! Padding, margin and gap.

use restyle_core::types::Domain;

use super::{DomainRules, PatternProcessor};

#[derive(Debug, Clone, Copy, Default)]
pub struct SpacingRules;

pub type SpacingProcessor = PatternProcessor<SpacingRules>;

impl DomainRules for SpacingRules {
    fn domain(&self) -> Domain {
        Domain::Spacing
    }
}
