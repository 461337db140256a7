//! Property-based tests: relative edits never leave a property's bounds,
//! however many steps are chained.

use std::sync::Arc;

use proptest::prelude::*;

use restyle_core::traits::DomainProcessor;
use restyle_core::types::{
    ComponentType, Direction, Domain, Length, PatchValue, Property, RelativeAdjustment,
    StyleContext,
};
use restyle_engine::presets::{HOVER_SCALE_MAX, HOVER_SCALE_MIN};
use restyle_engine::{processor_for, PatternLibrary};

// =============================================================================
// Strategy helpers
// =============================================================================

fn processor(domain: Domain) -> Arc<dyn DomainProcessor> {
    let library = PatternLibrary::with_builtins();
    processor_for(library.pack(domain).unwrap())
}

fn size_steps() -> impl Strategy<Value = Vec<RelativeAdjustment>> {
    prop::collection::vec(
        (
            prop_oneof![Just(Direction::Increase), Just(Direction::Decrease)],
            prop::option::of(0.0f64..50.0),
        )
            .prop_map(|(direction, amount)| match amount {
                Some(amount) => RelativeAdjustment::by(direction, amount),
                None => RelativeAdjustment::new(direction),
            }),
        1..20,
    )
}

fn shadow_steps() -> impl Strategy<Value = Vec<RelativeAdjustment>> {
    prop::collection::vec(
        prop_oneof![
            Just(Direction::Increase),
            Just(Direction::Decrease),
            Just(Direction::Darken),
            Just(Direction::Lighten),
        ]
        .prop_map(RelativeAdjustment::new),
        1..20,
    )
}

/// Apply `steps` to `property` one after another, feeding each patch back
/// into the context the way a host would.
fn chain(
    processor: &dyn DomainProcessor,
    property: Property,
    mut ctx: StyleContext,
    steps: &[RelativeAdjustment],
) -> Vec<PatchValue> {
    let mut values = Vec::new();
    for step in steps {
        let result = processor
            .process_relative(property, *step, &ctx)
            .unwrap()
            .expect("relative step applies");
        let patch = result.patch().unwrap();
        values.push(patch.value_of(property).cloned().unwrap());
        ctx = ctx.apply(patch);
    }
    values
}

proptest! {
    #[test]
    fn prop_padding_never_negative(start in 0.0f64..500.0, steps in size_steps()) {
        let spacing = processor(Domain::Spacing);
        let ctx = StyleContext::new(ComponentType::Container).with_style("padding", format!("{start}px"));
        for value in chain(spacing.as_ref(), Property::Padding, ctx, &steps) {
            let PatchValue::Length(Length { value: px, .. }) = value else {
                return Err(TestCaseError::fail(format!("not a length: {value:?}")));
            };
            prop_assert!(px >= 0.0, "padding went to {px}");
        }
    }

    #[test]
    fn prop_opacity_stays_in_unit_range(start in -2.0f64..3.0, steps in size_steps()) {
        let color = processor(Domain::Color);
        let ctx = StyleContext::new(ComponentType::Container).with_style("opacity", start);
        for value in chain(color.as_ref(), Property::Opacity, ctx, &steps) {
            let PatchValue::Number(opacity) = value else {
                return Err(TestCaseError::fail(format!("not a number: {value:?}")));
            };
            prop_assert!((0.0..=1.0).contains(&opacity), "opacity went to {opacity}");
        }
    }

    #[test]
    fn prop_hover_scale_stays_bounded(start in 0.0f64..3.0, steps in size_steps()) {
        let interactive = processor(Domain::Interactive);
        let ctx = StyleContext::new(ComponentType::Button).with_prop("hoverScale", start);
        for value in chain(interactive.as_ref(), Property::HoverScale, ctx, &steps) {
            let PatchValue::Number(scale) = value else {
                return Err(TestCaseError::fail(format!("not a number: {value:?}")));
            };
            prop_assert!((HOVER_SCALE_MIN..=HOVER_SCALE_MAX).contains(&scale), "scale went to {scale}");
        }
    }

    #[test]
    fn prop_shadow_stays_well_formed(steps in shadow_steps()) {
        let shadow = processor(Domain::Shadow);
        let ctx = StyleContext::new(ComponentType::Container);
        for value in chain(shadow.as_ref(), Property::BoxShadow, ctx, &steps) {
            let PatchValue::Shadow(s) = value else {
                return Err(TestCaseError::fail(format!("not a shadow: {value:?}")));
            };
            prop_assert!((0.0..=1.0).contains(&s.opacity), "opacity went to {}", s.opacity);
            prop_assert!(s.blur >= 0.0 && s.offset_y >= 0.0, "{s:?}");
        }
    }

    #[test]
    fn prop_opacity_command_clamps(n in 0u32..1000) {
        let color = processor(Domain::Color);
        let ctx = StyleContext::new(ComponentType::Container);
        let result = color
            .process_command(&format!("set opacity to {n}"), &ctx)
            .unwrap()
            .expect("opacity command applies");
        let Some(PatchValue::Number(opacity)) = result.patch().and_then(|p| p.value_of(Property::Opacity)).cloned() else {
            return Err(TestCaseError::fail("no opacity in patch"));
        };
        prop_assert!((0.0..=1.0).contains(&opacity), "opacity {opacity} from {n}");
    }
}
