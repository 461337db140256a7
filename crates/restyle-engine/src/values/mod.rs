//! Value normalization and relative adjustment shared by the domain processors.

pub mod adjust;
pub mod color;
pub mod duration;
pub mod keyword;

use restyle_core::types::{BoxShadow, Length, LengthUnit, PatchValue, ValueShape};
use restyle_core::Property;

use crate::presets;

/// Interpret `raw` as a value of `property`'s shape.
///
/// Returns `None` when the text is not a usable value; the processor then
/// falls through to its next pattern.
pub fn normalize(property: Property, raw: &str) -> Option<PatchValue> {
    let raw = raw.trim();
    match property.shape() {
        ValueShape::Length => Length::parse(raw)
            .filter(|len| within_floor(property, *len))
            .map(PatchValue::Length),
        ValueShape::Color => color::normalize(raw).map(PatchValue::Color),
        ValueShape::Keyword => keyword::normalize(property, raw).map(PatchValue::Keyword),
        ValueShape::Number => parse_number(raw).map(PatchValue::Number),
        ValueShape::Flag => parse_flag(raw).map(PatchValue::Flag),
        ValueShape::Shadow => BoxShadow::parse(raw).map(|s| PatchValue::Shadow(s.clamped())),
        ValueShape::Duration => duration::parse_ms(raw).map(PatchValue::Duration),
        ValueShape::Text => parse_text(raw).map(PatchValue::Text),
    }
}

/// Whether `len` is at or above the property's minimum. Lengths without a
/// px ratio (`%`, `vh`) only need to be non-negative.
fn within_floor(property: Property, len: Length) -> bool {
    let Some(floor) = presets::length_floor(property) else {
        return true;
    };
    match len.convert_to(LengthUnit::Px) {
        Some(px) => px.value >= floor,
        None => len.value >= 0.0,
    }
}

pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A number that may carry a trailing `%`; the flag says whether it did.
pub fn parse_percentish(raw: &str) -> Option<(f64, bool)> {
    let raw = raw.trim();
    match raw.strip_suffix('%') {
        Some(number) => parse_number(number).map(|n| (n, true)),
        None => parse_number(raw).map(|n| (n, false)),
    }
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "enabled" | "1" => Some(true),
        "false" | "no" | "off" | "disabled" | "0" => Some(false),
        _ => None,
    }
}

/// Free text with surrounding quotes removed.
pub fn parse_text(raw: &str) -> Option<String> {
    let quotes: &[char] = &['"', '\'', '\u{201c}', '\u{201d}', '\u{2018}', '\u{2019}'];
    let text = raw.trim().trim_matches(quotes).trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Round to four decimals so repeated steps do not accumulate float noise.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_integer_length_is_px() {
        assert_eq!(
            normalize(Property::Padding, "20"),
            Some(PatchValue::Length(Length::new(20.0, LengthUnit::Px)))
        );
        assert_eq!(normalize(Property::Width, "50%"), Some(PatchValue::Length(Length::percent(50.0))));
        assert_eq!(normalize(Property::Padding, "lots"), None);
    }

    #[test]
    fn test_lengths_below_floor_are_rejected() {
        assert_eq!(normalize(Property::Padding, "-5px"), None);
        assert_eq!(normalize(Property::Width, "-10%"), None);
        assert_eq!(normalize(Property::FontSize, "-5px"), None);
        assert_eq!(normalize(Property::FontSize, "0.5px"), None);
        assert_eq!(
            normalize(Property::FontSize, "0.75rem"),
            Some(PatchValue::Length(Length::new(0.75, LengthUnit::Rem)))
        );
        assert_eq!(normalize(Property::Padding, "0"), Some(PatchValue::Length(Length::px(0.0))));
        assert_eq!(
            normalize(Property::MarginTop, "-8px"),
            Some(PatchValue::Length(Length::px(-8.0)))
        );
    }

    #[test]
    fn test_text_strips_quotes() {
        assert_eq!(
            normalize(Property::Title, "\"Q3 Results\""),
            Some(PatchValue::Text("Q3 Results".into()))
        );
        assert_eq!(normalize(Property::Title, "''"), None);
    }

    #[test]
    fn test_flags_and_percentages() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_percentish("50%"), Some((50.0, true)));
        assert_eq!(parse_percentish("0.5"), Some((0.5, false)));
    }

    #[test]
    fn test_shadow_values_are_clamped() {
        let Some(PatchValue::Shadow(shadow)) =
            normalize(Property::BoxShadow, "0px 2px 4px 0px rgba(0, 0, 0, 0.3)")
        else {
            panic!("expected a shadow");
        };
        assert_eq!(shadow.offset_y, 2.0);
        assert_eq!(shadow.opacity, 0.3);
    }
}
