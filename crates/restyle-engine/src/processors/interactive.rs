//! Cursor, transitions, hover scale and carousel, link and input behaviour.

use restyle_core::types::{Domain, PatchValue, Property, StyleContext};

use super::{DomainRules, PatternProcessor};
use crate::presets::{HOVER_SCALE_MAX, HOVER_SCALE_MIN};
use crate::values::{self, parse_percentish, round4};

#[derive(Debug, Clone, Copy, Default)]
pub struct InteractiveRules;

pub type InteractiveProcessor = PatternProcessor<InteractiveRules>;

impl DomainRules for InteractiveRules {
    fn domain(&self) -> Domain {
        Domain::Interactive
    }

    fn normalize(&self, property: Property, raw: &str, _ctx: &StyleContext) -> Option<PatchValue> {
        match property {
            Property::HoverScale => hover_scale(raw).map(PatchValue::Number),
            _ => values::normalize(property, raw),
        }
    }
}

/// A hover scale factor; "110%" means 1.1. Always within the allowed range.
fn hover_scale(raw: &str) -> Option<f64> {
    let (number, percent) = parse_percentish(raw)?;
    let factor = if percent { number / 100.0 } else { number };
    Some(round4(factor.clamp(HOVER_SCALE_MIN, HOVER_SCALE_MAX)))
}
