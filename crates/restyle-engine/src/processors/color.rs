//! Text colour, background colour and opacity.

use restyle_core::types::{Domain, PatchValue, Property, StyleContext};

use super::{DomainRules, PatternProcessor, PromptSpec};
use crate::values::{self, parse_percentish, round4};

const COLOR_OPTIONS: &[&str] = &["white", "black", "navy", "teal", "crimson", "lightgray"];

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorRules;

pub type ColorProcessor = PatternProcessor<ColorRules>;

impl DomainRules for ColorRules {
    fn domain(&self) -> Domain {
        Domain::Color
    }

    fn normalize(&self, property: Property, raw: &str, _ctx: &StyleContext) -> Option<PatchValue> {
        match property {
            Property::Opacity => opacity(raw).map(PatchValue::Number),
            _ => values::normalize(property, raw),
        }
    }

    fn prompt(&self, property: Property) -> Option<PromptSpec> {
        match property {
            Property::BackgroundColor => Some(PromptSpec {
                message: "Which background color would you like?",
                options: COLOR_OPTIONS,
                template: "set background color to {value}",
            }),
            Property::Color => Some(PromptSpec {
                message: "Which text color would you like?",
                options: COLOR_OPTIONS,
                template: "set text color to {value}",
            }),
            _ => None,
        }
    }
}

/// Opacity as a fraction. "50%" and "80" are percentages.
fn opacity(raw: &str) -> Option<f64> {
    let (number, percent) = parse_percentish(raw)?;
    let fraction = if percent || number > 1.0 { number / 100.0 } else { number };
    Some(round4(fraction.clamp(0.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::test_support::{patch, run};
    use restyle_core::types::{ComponentType, FollowUp};

    fn ctx() -> StyleContext {
        StyleContext::new(ComponentType::Container)
    }

    #[test]
    fn test_opacity_forms() {
        assert_eq!(opacity("0.5"), Some(0.5));
        assert_eq!(opacity("50%"), Some(0.5));
        assert_eq!(opacity("80"), Some(0.8));
        assert_eq!(opacity("250"), Some(1.0));
        assert_eq!(opacity("half"), None);
    }

    #[test]
    fn test_background_named_color() {
        let p = patch(Domain::Color, "set the background color to light blue", &ctx());
        assert_eq!(
            p.value_of(Property::BackgroundColor),
            Some(&PatchValue::Color("#add8e6".into()))
        );
    }

    #[test]
    fn test_background_prompt() {
        let result = run(Domain::Color, "change the background color", &ctx()).unwrap();
        let prompt = result.as_prompt().expect("prompt");
        assert_eq!(prompt.follow_up, FollowUp::new("set background color to {value}"));
        assert!(prompt.options.iter().any(|o| o == "navy"));
    }

    #[test]
    fn test_unknown_color_falls_through() {
        assert!(run(Domain::Color, "set the background color to banana", &ctx()).is_none());
    }
}
