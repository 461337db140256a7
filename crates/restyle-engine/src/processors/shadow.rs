//! Box shadows: presets, explicit CSS and relative strength.

use restyle_core::types::{BoxShadow, Direction, Domain, PatchValue, Property, RelativeAdjustment, StyleContext};

use super::{DomainRules, PatternProcessor};
use crate::presets::{self, SHADOW_SUBTLE};
use crate::values::round4;

/// Opacity change of one darken/lighten step.
const OPACITY_STEP: f64 = 0.05;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShadowRules;

pub type ShadowProcessor = PatternProcessor<ShadowRules>;

impl DomainRules for ShadowRules {
    fn domain(&self) -> Domain {
        Domain::Shadow
    }

    fn preset(&self, property: Property, name: &str, whole: &str) -> Option<PatchValue> {
        if property != Property::BoxShadow {
            return None;
        }
        let lower = whole.to_ascii_lowercase();
        let inset = lower.contains("inner") || lower.contains("inset");
        presets::shadow_preset(name).map(|s| PatchValue::Shadow(s.with_inset(inset)))
    }

    fn relative(
        &self,
        property: Property,
        adjustment: RelativeAdjustment,
        ctx: &StyleContext,
    ) -> Option<PatchValue> {
        if property != Property::BoxShadow {
            return None;
        }
        let current = ctx
            .text(property)
            .and_then(BoxShadow::parse)
            .unwrap_or(SHADOW_SUBTLE);
        adjust_shadow(current, adjustment).map(PatchValue::Shadow)
    }

    fn clears(&self, property: Property, raw: &str) -> bool {
        property == Property::BoxShadow && raw.trim().eq_ignore_ascii_case("none")
    }
}

/// Stronger shadows drop further, blur more and darken; darker shadows only
/// gain opacity.
fn adjust_shadow(current: BoxShadow, adjustment: RelativeAdjustment) -> Option<BoxShadow> {
    let mut next = current;
    match adjustment.direction {
        Direction::Increase | Direction::Decrease => {
            let k = adjustment.delta(1.0);
            next.offset_y = (next.offset_y + k).max(0.0);
            next.blur += 2.0 * k;
            next.opacity += 0.02 * k;
        }
        // Darken has a negative sign, and a darker shadow is a more opaque one.
        Direction::Darken | Direction::Lighten => next.opacity -= adjustment.delta(OPACITY_STEP),
        Direction::Faster | Direction::Slower => return None,
    }
    let mut next = next.clamped();
    next.offset_y = round4(next.offset_y);
    next.blur = round4(next.blur);
    next.opacity = (next.opacity * 100.0).round() / 100.0;
    Some(next)
}
