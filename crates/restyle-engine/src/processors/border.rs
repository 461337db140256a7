//! Border width, radius, style and colour.

use restyle_core::types::{Domain, Property};

use super::{DomainRules, PatternProcessor, PromptSpec};

#[derive(Debug, Clone, Copy, Default)]
pub struct BorderRules;

pub type BorderProcessor = PatternProcessor<BorderRules>;

impl DomainRules for BorderRules {
    fn domain(&self) -> Domain {
        Domain::Border
    }

    fn prompt(&self, property: Property) -> Option<PromptSpec> {
        (property == Property::BorderColor).then_some(PromptSpec {
            message: "Which border color would you like?",
            options: &["black", "gray", "lightgray", "navy", "crimson"],
            template: "set border color to {value}",
        })
    }
}
