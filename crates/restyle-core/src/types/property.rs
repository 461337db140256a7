//! The closed table of style properties the engine may patch.
//!
//! Each property carries its owning domain, whether it lands in the host's
//! `style` or `props` map, and the shape of value it accepts. Processors and
//! packs refer to properties by these names only; an unknown name is a
//! registration error rather than a silently-written key.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Styling domain a processor owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Color,
    Size,
    Spacing,
    Border,
    Shadow,
    Layout,
    Interactive,
    Chart,
}

impl Domain {
    pub const ALL: [Domain; 8] = [
        Self::Color,
        Self::Size,
        Self::Spacing,
        Self::Border,
        Self::Shadow,
        Self::Layout,
        Self::Interactive,
        Self::Chart,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Size => "size",
            Self::Spacing => "spacing",
            Self::Border => "border",
            Self::Shadow => "shadow",
            Self::Layout => "layout",
            Self::Interactive => "interactive",
            Self::Chart => "chart",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|d| d.name() == lower)
    }

    /// Other names an intent classifier may use for this domain.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Color => &["colour", "colors", "background", "text_color", "fill"],
            Self::Size => &["sizing", "dimension", "dimensions", "font_size", "typography"],
            Self::Spacing => &["padding", "margin", "gap", "whitespace"],
            Self::Border => &["borders", "radius", "outline", "corner", "corners"],
            Self::Shadow => &["shadows", "elevation", "box_shadow", "depth"],
            Self::Layout => &["flex", "flexbox", "alignment", "align", "direction"],
            Self::Interactive => &[
                "interaction",
                "behavior",
                "behaviour",
                "navigation",
                "hover",
                "carousel",
            ],
            Self::Chart => &["charts", "graph", "visualization", "data_viz"],
        }
    }

    /// Map a classifier intent type (`"style_color"`, `"Box-Shadow"`, `"spacing"`)
    /// onto a domain.
    pub fn from_intent_type(intent: &str) -> Option<Self> {
        let mut key = intent.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        for prefix in ["style_", "style."] {
            if let Some(rest) = key.strip_prefix(prefix) {
                key = rest.to_string();
            }
        }
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == key || d.aliases().contains(&key.as_str()))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which host map a property is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchTarget {
    Style,
    Props,
}

/// The kind of value a property accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueShape {
    Length,
    Color,
    Keyword,
    Number,
    Flag,
    Shadow,
    Duration,
    Text,
}

impl ValueShape {
    pub const ALL: [ValueShape; 8] = [
        Self::Length,
        Self::Color,
        Self::Keyword,
        Self::Number,
        Self::Flag,
        Self::Shadow,
        Self::Duration,
        Self::Text,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Color => "color",
            Self::Keyword => "keyword",
            Self::Number => "number",
            Self::Flag => "flag",
            Self::Shadow => "shadow",
            Self::Duration => "duration",
            Self::Text => "text",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|v| v.name() == lower)
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! property_table {
    ($( $variant:ident => $name:literal, $domain:ident, $target:ident, $shape:ident; )+) => {
        /// A style property the engine knows how to patch.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Property {
            $( $variant, )+
        }

        impl Property {
            pub const ALL: &'static [Property] = &[ $( Property::$variant, )+ ];

            /// The camelCase key the host uses.
            pub fn name(self) -> &'static str {
                match self { $( Self::$variant => $name, )+ }
            }

            pub fn domain(self) -> Domain {
                match self { $( Self::$variant => Domain::$domain, )+ }
            }

            pub fn target(self) -> PatchTarget {
                match self { $( Self::$variant => PatchTarget::$target, )+ }
            }

            pub fn shape(self) -> ValueShape {
                match self { $( Self::$variant => ValueShape::$shape, )+ }
            }
        }
    };
}

property_table! {
    Color              => "color",              Color,       Style, Color;
    BackgroundColor    => "backgroundColor",    Color,       Style, Color;
    Opacity            => "opacity",            Color,       Style, Number;

    Width              => "width",              Size,        Style, Length;
    Height             => "height",             Size,        Style, Length;
    MinWidth           => "minWidth",           Size,        Style, Length;
    MaxWidth           => "maxWidth",           Size,        Style, Length;
    MinHeight          => "minHeight",          Size,        Style, Length;
    MaxHeight          => "maxHeight",          Size,        Style, Length;
    FontSize           => "fontSize",           Size,        Style, Length;

    Padding            => "padding",            Spacing,     Style, Length;
    PaddingTop         => "paddingTop",         Spacing,     Style, Length;
    PaddingRight       => "paddingRight",       Spacing,     Style, Length;
    PaddingBottom      => "paddingBottom",      Spacing,     Style, Length;
    PaddingLeft        => "paddingLeft",        Spacing,     Style, Length;
    Margin             => "margin",             Spacing,     Style, Length;
    MarginTop          => "marginTop",          Spacing,     Style, Length;
    MarginRight        => "marginRight",        Spacing,     Style, Length;
    MarginBottom       => "marginBottom",       Spacing,     Style, Length;
    MarginLeft         => "marginLeft",         Spacing,     Style, Length;
    Gap                => "gap",                Spacing,     Style, Length;

    BorderWidth        => "borderWidth",        Border,      Style, Length;
    BorderRadius       => "borderRadius",       Border,      Style, Length;
    BorderStyle        => "borderStyle",        Border,      Style, Keyword;
    BorderColor        => "borderColor",        Border,      Style, Color;

    BoxShadow          => "boxShadow",          Shadow,      Style, Shadow;

    Display            => "display",            Layout,      Style, Keyword;
    FlexDirection      => "flexDirection",      Layout,      Style, Keyword;
    FlexWrap           => "flexWrap",           Layout,      Style, Keyword;
    JustifyContent     => "justifyContent",     Layout,      Style, Keyword;
    AlignItems         => "alignItems",         Layout,      Style, Keyword;

    Cursor             => "cursor",             Interactive, Style, Keyword;
    TransitionDuration => "transitionDuration", Interactive, Style, Duration;
    HoverScale         => "hoverScale",         Interactive, Props, Number;
    ShowPagination     => "showPagination",     Interactive, Props, Flag;
    ShowArrows         => "showArrows",         Interactive, Props, Flag;
    Autoplay           => "autoplay",           Interactive, Props, Flag;
    AutoplayInterval   => "autoplayInterval",   Interactive, Props, Duration;
    Loop               => "loop",               Interactive, Props, Flag;
    OpenInNewTab       => "openInNewTab",       Interactive, Props, Flag;
    Disabled           => "disabled",           Interactive, Props, Flag;

    ChartType          => "chartType",          Chart,       Props, Keyword;
    LegendPosition     => "legendPosition",     Chart,       Props, Keyword;
    ColorScheme        => "colorScheme",        Chart,       Props, Keyword;
    ShowLegend         => "showLegend",         Chart,       Props, Flag;
    ShowGrid           => "showGrid",           Chart,       Props, Flag;
    ShowLabels         => "showLabels",         Chart,       Props, Flag;
    Stacked            => "stacked",            Chart,       Props, Flag;
    StrokeWidth        => "strokeWidth",        Chart,       Props, Number;
    AnimationDuration  => "animationDuration",  Chart,       Props, Duration;
    Title              => "title",              Chart,       Props, Text;
}

impl Property {
    /// Parse a camelCase (`backgroundColor`) or kebab-case (`background-color`) name.
    pub fn parse_str(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(&key))
    }

    /// Every property owned by `domain`, in table order.
    pub fn in_domain(domain: Domain) -> impl Iterator<Item = Property> {
        Self::ALL.iter().copied().filter(move |p| p.domain() == domain)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Property {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Property::parse_str(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown property '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_and_kebab() {
        assert_eq!(Property::parse_str("backgroundColor"), Some(Property::BackgroundColor));
        assert_eq!(Property::parse_str("background-color"), Some(Property::BackgroundColor));
        assert_eq!(Property::parse_str("BOX_SHADOW"), Some(Property::BoxShadow));
        assert_eq!(Property::parse_str("zIndex"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = Property::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Property::ALL.len());
    }

    #[test]
    fn test_every_domain_owns_properties() {
        for domain in Domain::ALL {
            assert!(Property::in_domain(domain).count() > 0, "{domain} owns nothing");
        }
    }

    #[test]
    fn test_targets() {
        assert_eq!(Property::Padding.target(), PatchTarget::Style);
        assert_eq!(Property::ShowPagination.target(), PatchTarget::Props);
        assert_eq!(Property::HoverScale.shape(), ValueShape::Number);
    }

    #[test]
    fn test_intent_type_aliases() {
        assert_eq!(Domain::from_intent_type("style_color"), Some(Domain::Color));
        assert_eq!(Domain::from_intent_type("Box-Shadow"), Some(Domain::Shadow));
        assert_eq!(Domain::from_intent_type("padding"), Some(Domain::Spacing));
        assert_eq!(Domain::from_intent_type("navigation"), Some(Domain::Interactive));
        assert_eq!(Domain::from_intent_type("weather"), None);
    }

    #[test]
    fn test_serde_uses_name() {
        let json = serde_json::to_string(&Property::FontSize).unwrap();
        assert_eq!(json, "\"fontSize\"");
        let back: Property = serde_json::from_str("\"font-size\"").unwrap();
        assert_eq!(back, Property::FontSize);
    }
}
