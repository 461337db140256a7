//! Width, height, their bounds and font size.

use restyle_core::types::Domain;

use super::{DomainRules, PatternProcessor};

#[derive(Debug, Clone, Copy, Default)]
pub struct SizeRules;

pub type SizeProcessor = PatternProcessor<SizeRules>;

impl DomainRules for SizeRules {
    fn domain(&self) -> Domain {
        Domain::Size
    }
}
