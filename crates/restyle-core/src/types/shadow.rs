//! Box shadow values.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::length::{format_number, Length, LengthUnit};

/// A single box shadow: offset, blur, spread and an RGB colour with opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxShadow {
    pub inset: bool,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub rgb: [u8; 3],
    pub opacity: f64,
}

impl BoxShadow {
    /// A black outer shadow dropped straight down by `offset_y`.
    pub const fn outer(offset_y: f64, blur: f64, spread: f64, opacity: f64) -> Self {
        Self {
            inset: false,
            offset_x: 0.0,
            offset_y,
            blur,
            spread,
            rgb: [0, 0, 0],
            opacity,
        }
    }

    pub const fn with_inset(mut self, inset: bool) -> Self {
        self.inset = inset;
        self
    }

    pub const fn with_rgb(mut self, rgb: [u8; 3]) -> Self {
        self.rgb = rgb;
        self
    }

    /// Keep lengths non-negative (offsets excepted) and opacity within [0, 1].
    pub fn clamped(self) -> Self {
        Self {
            blur: self.blur.max(0.0),
            spread: self.spread.max(0.0),
            opacity: self.opacity.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse a CSS shadow such as `"0px 4px 8px 0px rgba(0, 0, 0, 0.16)"`,
    /// `"inset 0 2px 4px #0000001f"` or `"2px 2px 6px red"`.
    ///
    /// Only the first shadow of a comma-separated list is read. A shadow
    /// without a colour is black; a token that is neither a px length nor a
    /// colour rejects the whole value.
    pub fn parse(raw: &str) -> Option<Self> {
        let lower = raw.trim().to_ascii_lowercase();
        let mut inset = false;
        let mut color = None;
        let mut lengths = Vec::with_capacity(4);

        for token in top_level_tokens(split_top_level(&lower)) {
            if token == "inset" {
                inset = true;
                continue;
            }
            if let Some(len) = Length::parse(token) {
                if len.unit != LengthUnit::Px {
                    return None;
                }
                lengths.push(len.value);
                continue;
            }
            if color.is_some() || !token.is_ascii() {
                return None;
            }
            color = Some(csscolorparser::parse(token).ok()?);
        }
        if !(2..=4).contains(&lengths.len()) {
            return None;
        }

        let [r, g, b, a] = color.map_or([0, 0, 0, u8::MAX], |c| c.to_rgba8());
        Some(Self {
            inset,
            offset_x: lengths[0],
            offset_y: lengths[1],
            blur: lengths.get(2).copied().unwrap_or(0.0),
            spread: lengths.get(3).copied().unwrap_or(0.0),
            rgb: [r, g, b],
            opacity: (f64::from(a) / 255.0 * 100.0).round() / 100.0,
        })
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        let [r, g, b] = self.rgb;
        write!(
            f,
            "{}px {}px {}px {}px rgba({r}, {g}, {b}, {})",
            format_number(self.offset_x),
            format_number(self.offset_y),
            format_number(self.blur),
            format_number(self.spread),
            format_number(self.opacity),
        )
    }
}

/// First comma-separated shadow, ignoring commas inside parentheses.
fn split_top_level(s: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return &s[..i],
            _ => {}
        }
    }
    s
}

/// Whitespace-separated tokens, keeping `rgba(0, 0, 0, 0.2)` whole.
fn top_level_tokens(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(from) = start.take() {
                    tokens.push(&s[from..i]);
                }
                continue;
            }
            _ => {}
        }
        start.get_or_insert(i);
    }
    if let Some(from) = start {
        tokens.push(&s[from..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_canonical() {
        let shadow = BoxShadow::outer(1.0, 3.0, 0.0, 0.12);
        assert_eq!(shadow.to_string(), "0px 1px 3px 0px rgba(0, 0, 0, 0.12)");
        assert_eq!(
            shadow.with_inset(true).to_string(),
            "inset 0px 1px 3px 0px rgba(0, 0, 0, 0.12)"
        );
    }

    #[test]
    fn test_parse_own_rendering() {
        let shadow = BoxShadow::outer(4.0, 8.0, 0.0, 0.16).with_inset(true);
        assert_eq!(BoxShadow::parse(&shadow.to_string()), Some(shadow));
    }

    #[test]
    fn test_parse_css_variants() {
        let hex = BoxShadow::parse("0 2px 4px #00000080").unwrap();
        assert_eq!(hex.offset_y, 2.0);
        assert_eq!(hex.blur, 4.0);
        assert!((hex.opacity - 0.5).abs() < 0.01);

        let named = BoxShadow::parse("2px 2px 6px black").unwrap();
        assert_eq!(named.offset_x, 2.0);
        assert_eq!(named.opacity, 1.0);

        let bare = BoxShadow::parse("0 3px 6px").unwrap();
        assert_eq!(bare.rgb, [0, 0, 0]);
        assert_eq!(bare.opacity, 1.0);

        let listed = BoxShadow::parse("0 1px 2px rgba(0,0,0,.2), 0 8px 16px rgba(0,0,0,.1)").unwrap();
        assert_eq!(listed.offset_y, 1.0);
        assert!((listed.opacity - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_colour_survives_round_trip() {
        let hex = BoxShadow::parse("0px 4px 8px #ff0000").unwrap();
        assert_eq!(hex.rgb, [255, 0, 0]);
        assert_eq!(hex.to_string(), "0px 4px 8px 0px rgba(255, 0, 0, 1)");

        let named = BoxShadow::parse("0px 4px 8px red").unwrap();
        assert_eq!(named, hex);

        let translucent = BoxShadow::parse("inset 0 2px 4px rgba(20, 40, 60, 0.25)").unwrap();
        assert_eq!(translucent.rgb, [20, 40, 60]);
        assert_eq!(translucent.opacity, 0.25);
        assert_eq!(BoxShadow::parse(&translucent.to_string()), Some(translucent));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(BoxShadow::parse("none"), None);
        assert_eq!(BoxShadow::parse("1em 2em"), None);
        assert_eq!(BoxShadow::parse("5px"), None);
        assert_eq!(BoxShadow::parse("0px 1px 2px red blue"), None);
        assert_eq!(BoxShadow::parse("0px 1px 2px bogus"), None);
    }

    #[test]
    fn test_non_ascii_colour_is_rejected() {
        assert_eq!(BoxShadow::parse("0px 1px 2px #fffff\u{e9}f"), None);
        assert_eq!(BoxShadow::parse("0px 1px 2px \u{e9}\u{e9}\u{e9}\u{e9}"), None);
    }

    #[test]
    fn test_clamped_limits_opacity() {
        let shadow = BoxShadow::outer(1.0, -2.0, 0.0, 1.4).clamped();
        assert_eq!(shadow.opacity, 1.0);
        assert_eq!(shadow.blur, 0.0);
    }
}
