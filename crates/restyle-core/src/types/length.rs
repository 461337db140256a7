//! CSS lengths and number formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root font size used to relate `rem`/`em` to px.
pub const ROOT_FONT_PX: f64 = 16.0;

/// Units a length value may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Px,
    Rem,
    Em,
    Percent,
    Vh,
    Vw,
    Pt,
}

impl LengthUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Percent => "%",
            Self::Vh => "vh",
            Self::Vw => "vw",
            Self::Pt => "pt",
        }
    }

    /// Pixels per unit for units with a fixed size. Font-relative units
    /// assume the 16px root size; viewport units and percentages have none.
    pub fn px_per_unit(self) -> Option<f64> {
        match self {
            Self::Px => Some(1.0),
            Self::Rem | Self::Em => Some(ROOT_FONT_PX),
            Self::Pt => Some(4.0 / 3.0),
            Self::Percent | Self::Vh | Self::Vw => None,
        }
    }

    /// Parse a unit suffix. An empty suffix is `px`.
    pub fn parse_suffix(s: &str) -> Option<Self> {
        match s.trim() {
            "" | "px" | "pixel" | "pixels" => Some(Self::Px),
            "rem" => Some(Self::Rem),
            "em" => Some(Self::Em),
            "%" | "percent" => Some(Self::Percent),
            "vh" => Some(Self::Vh),
            "vw" => Some(Self::Vw),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }
}

/// A numeric CSS length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }

    pub const fn percent(value: f64) -> Self {
        Self::new(value, LengthUnit::Percent)
    }

    /// Parse `"16px"`, `"1.5 rem"`, `"50%"` or a bare number (which becomes px).
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim().to_ascii_lowercase();
        if s.is_empty() {
            return None;
        }
        let split = s
            .char_indices()
            .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*c == '-' && *i == 0) || (*c == '+' && *i == 0)))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let value: f64 = number.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        let unit = LengthUnit::parse_suffix(unit)?;
        Some(Self { value, unit })
    }

    /// Add `delta` in this length's own unit.
    pub fn offset(self, delta: f64) -> Self {
        Self::new(self.value + delta, self.unit)
    }

    /// The same length expressed in `unit`, or `None` when the two units
    /// have no fixed ratio (`%` to px, `vh` to rem).
    pub fn convert_to(self, unit: LengthUnit) -> Option<Self> {
        if self.unit == unit {
            return Some(self);
        }
        let px = self.value * self.unit.px_per_unit()?;
        Some(Self::new(px / unit.px_per_unit()?, unit))
    }

    pub fn clamp_min(self, min: f64) -> Self {
        Self::new(self.value.max(min), self.unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit.suffix())
    }
}

/// Format a number the way CSS authors write it: no trailing zeros,
/// at most four decimals, integers without a decimal point.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        return format!("{rounded:.0}");
    }
    let s = format!("{rounded:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
