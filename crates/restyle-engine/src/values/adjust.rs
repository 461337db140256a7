//! Relative adjustments of stored values ("bigger", "darker", "add 4px", "faster").

use restyle_core::types::{
    Direction, Length, LengthUnit, PatchValue, RelativeAdjustment, StyleContext, ValueShape,
};
use restyle_core::Property;

use super::{color, duration, round4};
use crate::presets::{self, RelativeStep, LIGHTNESS_STEP};

/// Apply `adjustment` to the value `property` currently has on the component.
///
/// Lengths, numbers and durations move by the property's step (or the given
/// amount) from the stored value or the baseline, then clamp. Length steps
/// are px and move in the stored value's unit; a step that cannot be
/// expressed in that unit (px onto `%`) yields `None`. Colours move
/// lightness. Anything else, or a direction that makes no sense for the
/// shape, yields `None`.
pub fn adjust(property: Property, adjustment: RelativeAdjustment, ctx: &StyleContext) -> Option<PatchValue> {
    match property.shape() {
        ValueShape::Length => adjust_length(property, adjustment, ctx).map(PatchValue::Length),
        ValueShape::Number => adjust_number(property, adjustment, ctx).map(PatchValue::Number),
        ValueShape::Duration => adjust_duration(property, adjustment, ctx).map(PatchValue::Duration),
        ValueShape::Color => adjust_color(property, adjustment, ctx).map(PatchValue::Color),
        _ => None,
    }
}

fn adjust_length(property: Property, adjustment: RelativeAdjustment, ctx: &StyleContext) -> Option<Length> {
    if !adjustment.direction.is_size_like() {
        return None;
    }
    let step = presets::relative_step(property)?;
    let current = ctx.length(property).unwrap_or(Length::px(step.baseline));
    let amount = adjustment
        .amount
        .unwrap_or(Length::px(step.step))
        .convert_to(current.unit)?;
    let next = current.offset(adjustment.direction.sign() * amount.value.abs());
    Some(clamp_length(&step, next))
}

/// Clamp against the px bounds of `step`, keeping the length's unit.
/// Units with no px ratio only stop at zero.
fn clamp_length(step: &RelativeStep, len: Length) -> Length {
    let value = len
        .convert_to(LengthUnit::Px)
        .and_then(|px| Length::px(step.clamp(px.value)).convert_to(len.unit))
        .map_or(len.value.max(0.0), |clamped| clamped.value);
    Length::new(round4(value), len.unit)
}

fn adjust_number(property: Property, adjustment: RelativeAdjustment, ctx: &StyleContext) -> Option<f64> {
    if !adjustment.direction.is_size_like() {
        return None;
    }
    let step = presets::relative_step(property)?;
    let current = ctx.number(property).unwrap_or(step.baseline);
    Some(round4(step.clamp(current + adjustment.delta(step.step))))
}

fn adjust_duration(property: Property, adjustment: RelativeAdjustment, ctx: &StyleContext) -> Option<f64> {
    if adjustment.direction.is_tone() {
        return None;
    }
    let step = presets::relative_step(property)?;
    let current = ctx
        .value(property)
        .and_then(duration::from_stored)
        .unwrap_or(step.baseline);
    Some(step.clamp(current + adjustment.delta(step.step)).round())
}

fn adjust_color(property: Property, adjustment: RelativeAdjustment, ctx: &StyleContext) -> Option<String> {
    let points = match adjustment.direction {
        Direction::Darken | Direction::Lighten => adjustment.delta(LIGHTNESS_STEP),
        _ => return None,
    };
    let current = ctx
        .text(property)
        .and_then(color::normalize)
        .or_else(|| presets::color_baseline(property).map(str::to_string))?;
    color::shift_lightness(&current, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use restyle_core::types::ComponentType;

    fn ctx() -> StyleContext {
        StyleContext::new(ComponentType::Container)
    }

    #[test]
    fn test_length_from_baseline_and_stored() {
        let grow = RelativeAdjustment::new(Direction::Increase);
        assert_eq!(
            adjust(Property::Padding, grow, &ctx()),
            Some(PatchValue::Length(Length::px(4.0)))
        );
        let stored = ctx().with_style("padding", "16px");
        assert_eq!(
            adjust(Property::Padding, RelativeAdjustment::by(Direction::Increase, 5.0), &stored),
            Some(PatchValue::Length(Length::px(21.0)))
        );
    }

    #[test]
    fn test_length_never_negative() {
        let stored = ctx().with_style("padding", "2px");
        assert_eq!(
            adjust(Property::Padding, RelativeAdjustment::new(Direction::Decrease), &stored),
            Some(PatchValue::Length(Length::px(0.0)))
        );
    }

    #[test]
    fn test_px_step_moves_in_stored_unit() {
        let grow = RelativeAdjustment::new(Direction::Increase);
        let rem = ctx().with_style("padding", "1rem");
        assert_eq!(
            adjust(Property::Padding, grow, &rem),
            Some(PatchValue::Length(Length::new(1.25, LengthUnit::Rem)))
        );
        let shrink = ctx().with_style("fontSize", "1em");
        assert_eq!(
            adjust(Property::FontSize, RelativeAdjustment::new(Direction::Decrease), &shrink),
            Some(PatchValue::Length(Length::new(0.875, LengthUnit::Em)))
        );
        let percent = ctx().with_style("width", "50%");
        assert_eq!(adjust(Property::Width, grow, &percent), None);
    }

    #[test]
    fn test_explicit_amount_keeps_its_unit() {
        let by_rem = RelativeAdjustment::by_length(Direction::Increase, Length::new(2.0, LengthUnit::Rem));
        let px = ctx().with_style("padding", "16px");
        assert_eq!(adjust(Property::Padding, by_rem, &px), Some(PatchValue::Length(Length::px(48.0))));
        let rem = ctx().with_style("padding", "1rem");
        assert_eq!(
            adjust(Property::Padding, by_rem, &rem),
            Some(PatchValue::Length(Length::new(3.0, LengthUnit::Rem)))
        );
        let by_percent = RelativeAdjustment::by_length(Direction::Increase, Length::percent(10.0));
        assert_eq!(adjust(Property::Padding, by_percent, &px), None);
        let width = ctx().with_style("width", "50%");
        assert_eq!(
            adjust(Property::Width, by_percent, &width),
            Some(PatchValue::Length(Length::percent(60.0)))
        );
    }

    #[test]
    fn test_rem_never_negative() {
        let stored = ctx().with_style("padding", "0.125rem");
        assert_eq!(
            adjust(Property::Padding, RelativeAdjustment::new(Direction::Decrease), &stored),
            Some(PatchValue::Length(Length::new(0.0, LengthUnit::Rem)))
        );
    }

    #[test]
    fn test_font_size_baseline() {
        let value = adjust(Property::FontSize, RelativeAdjustment::new(Direction::Increase), &ctx());
        assert_eq!(value, Some(PatchValue::Length(Length::px(18.0))));
    }

    #[test]
    fn test_opacity_steps_without_float_noise() {
        let stored = ctx().with_style("opacity", 0.7);
        assert_eq!(
            adjust(Property::Opacity, RelativeAdjustment::new(Direction::Decrease), &stored),
            Some(PatchValue::Number(0.6))
        );
    }

    #[test]
    fn test_hover_scale_clamped() {
        let stored = ctx().with_prop("hoverScale", 1.18);
        assert_eq!(
            adjust(Property::HoverScale, RelativeAdjustment::new(Direction::Increase), &stored),
            Some(PatchValue::Number(1.2))
        );
    }

    #[test]
    fn test_durations_speed_up() {
        assert_eq!(
            adjust(Property::TransitionDuration, RelativeAdjustment::new(Direction::Faster), &ctx()),
            Some(PatchValue::Duration(200.0))
        );
        let carousel = ctx().with_prop("autoplayInterval", 1000.0);
        assert_eq!(
            adjust(Property::AutoplayInterval, RelativeAdjustment::new(Direction::Faster), &carousel),
            Some(PatchValue::Duration(500.0))
        );
    }

    #[test]
    fn test_color_darkens_from_baseline() {
        let Some(PatchValue::Color(hex)) =
            adjust(Property::BackgroundColor, RelativeAdjustment::new(Direction::Darken), &ctx())
        else {
            panic!("expected a colour");
        };
        assert_ne!(hex, "#ffffff");
        assert_eq!(&hex[1..3], &hex[3..5]);
    }

    #[test]
    fn test_mismatched_direction_is_none() {
        assert_eq!(
            adjust(Property::Padding, RelativeAdjustment::new(Direction::Darken), &ctx()),
            None
        );
        assert_eq!(
            adjust(Property::Color, RelativeAdjustment::new(Direction::Increase), &ctx()),
            None
        );
        assert_eq!(
            adjust(Property::Title, RelativeAdjustment::new(Direction::Increase), &ctx()),
            None
        );
    }
}
