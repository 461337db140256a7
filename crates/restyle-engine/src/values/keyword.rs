//! Keyword vocabularies of the keyword-shaped properties.

use restyle_core::Property;

/// Canonical keywords a property accepts.
fn canonical(property: Property) -> &'static [&'static str] {
    match property {
        Property::BorderStyle => &[
            "solid", "dashed", "dotted", "double", "groove", "ridge", "inset", "outset", "hidden",
            "none",
        ],
        Property::Display => &[
            "flex",
            "inline-flex",
            "grid",
            "inline-grid",
            "block",
            "inline-block",
            "inline",
            "none",
        ],
        Property::FlexDirection => &["row", "column", "row-reverse", "column-reverse"],
        Property::FlexWrap => &["wrap", "nowrap", "wrap-reverse"],
        Property::JustifyContent => &[
            "flex-start",
            "flex-end",
            "center",
            "space-between",
            "space-around",
            "space-evenly",
        ],
        Property::AlignItems => &["flex-start", "flex-end", "center", "stretch", "baseline"],
        Property::Cursor => &[
            "pointer",
            "default",
            "not-allowed",
            "grab",
            "grabbing",
            "text",
            "move",
            "help",
            "wait",
            "crosshair",
            "zoom-in",
        ],
        Property::ChartType => &["bar", "line", "pie", "area", "donut", "scatter", "radar"],
        Property::LegendPosition => &["top", "bottom", "left", "right"],
        Property::ColorScheme => &[
            "default",
            "pastel",
            "vibrant",
            "monochrome",
            "warm",
            "cool",
            "dark",
            "light",
        ],
        _ => &[],
    }
}

/// Spoken synonyms mapped onto canonical keywords.
fn alias(property: Property, word: &str) -> Option<&'static str> {
    let canonical = match (property, word) {
        (Property::Display, "flexbox") => "flex",
        (Property::FlexDirection, "horizontal" | "horizontally" | "in a row" | "side by side") => "row",
        (
            Property::FlexDirection,
            "vertical" | "vertically" | "in a column" | "on top of each other",
        ) => "column",
        (Property::FlexWrap, "no wrap" | "no-wrap") => "nowrap",
        (Property::JustifyContent, "start" | "left") => "flex-start",
        (Property::JustifyContent, "end" | "right") => "flex-end",
        (Property::AlignItems, "start" | "top") => "flex-start",
        (Property::AlignItems, "end" | "bottom") => "flex-end",
        (Property::Cursor, "hand") => "pointer",
        (Property::ChartType, "doughnut") => "donut",
        (Property::ChartType, "column") => "bar",
        _ => return None,
    };
    Some(canonical)
}

/// Canonical keyword for `raw`, or `None` when `property` does not accept it.
pub fn normalize(property: Property, raw: &str) -> Option<String> {
    let spoken = raw.split_whitespace().collect::<Vec<_>>().join(" ").to_ascii_lowercase();
    if let Some(keyword) = alias(property, &spoken) {
        return Some(keyword.to_string());
    }
    let dashed = spoken.replace(' ', "-");
    canonical(property)
        .iter()
        .find(|k| **k == dashed)
        .map(|k| (*k).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_and_spaced_keywords() {
        assert_eq!(normalize(Property::JustifyContent, "space between").as_deref(), Some("space-between"));
        assert_eq!(normalize(Property::BorderStyle, "Dashed").as_deref(), Some("dashed"));
        assert_eq!(normalize(Property::FlexWrap, "no  wrap").as_deref(), Some("nowrap"));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(normalize(Property::Display, "flexbox").as_deref(), Some("flex"));
        assert_eq!(normalize(Property::FlexDirection, "side by side").as_deref(), Some("row"));
        assert_eq!(normalize(Property::AlignItems, "bottom").as_deref(), Some("flex-end"));
        assert_eq!(normalize(Property::Cursor, "hand").as_deref(), Some("pointer"));
        assert_eq!(normalize(Property::ChartType, "doughnut").as_deref(), Some("donut"));
    }

    #[test]
    fn test_rejects_foreign_words() {
        assert_eq!(normalize(Property::ChartType, "bubble"), None);
        assert_eq!(normalize(Property::Padding, "solid"), None);
    }
}
