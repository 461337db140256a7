//! Display, flex direction, wrapping and alignment.

use restyle_core::types::{Domain, PatchValue, Property, StyleContext};

use super::{DomainRules, PatternProcessor};
use crate::values;

#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRules;

pub type LayoutProcessor = PatternProcessor<LayoutRules>;

impl DomainRules for LayoutRules {
    fn domain(&self) -> Domain {
        Domain::Layout
    }

    fn normalize(&self, property: Property, raw: &str, ctx: &StyleContext) -> Option<PatchValue> {
        if property == Property::FlexDirection && raw.trim().eq_ignore_ascii_case("reverse") {
            return Some(PatchValue::Keyword(reversed(ctx.text(property)).to_string()));
        }
        values::normalize(property, raw)
    }
}

/// The reverse of the stored direction; a component without one lays out in a row.
fn reversed(current: Option<&str>) -> &'static str {
    match current.map(str::trim) {
        Some("row-reverse") => "row",
        Some("column") => "column-reverse",
        Some("column-reverse") => "column",
        _ => "row-reverse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::test_support::patch;
    use restyle_core::types::ComponentType;

    fn keyword(text: &str, ctx: &StyleContext, property: Property) -> Option<PatchValue> {
        patch(Domain::Layout, text, ctx).value_of(property).cloned()
    }

    #[test]
    fn test_reverse_depends_on_current_direction() {
        let ctx = StyleContext::new(ComponentType::Container);
        assert_eq!(
            keyword("reverse the order", &ctx, Property::FlexDirection),
            Some(PatchValue::Keyword("row-reverse".into()))
        );
        let column = ctx.clone().with_style("flexDirection", "column");
        assert_eq!(
            keyword("reverse the order", &column, Property::FlexDirection),
            Some(PatchValue::Keyword("column-reverse".into()))
        );
        let reversed = ctx.with_style("flexDirection", "row-reverse");
        assert_eq!(
            keyword("reverse the order", &reversed, Property::FlexDirection),
            Some(PatchValue::Keyword("row".into()))
        );
    }

    #[test]
    fn test_center_sets_both_axes() {
        let ctx = StyleContext::new(ComponentType::Container);
        let p = patch(Domain::Layout, "center everything", &ctx);
        assert_eq!(p.value_of(Property::JustifyContent), Some(&PatchValue::Keyword("center".into())));
        assert_eq!(p.value_of(Property::AlignItems), Some(&PatchValue::Keyword("center".into())));
    }

    #[test]
    fn test_css_declaration() {
        let ctx = StyleContext::new(ComponentType::Container);
        assert_eq!(
            keyword("justify-content: space-between", &ctx, Property::JustifyContent),
            Some(PatchValue::Keyword("space-between".into()))
        );
    }
}
