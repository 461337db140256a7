//! Colour normalization and lightness shifts.
//!
//! Every colour leaving the engine is lower-case hex: `#rrggbb`, or
//! `#rrggbbaa` when it carries transparency.

/// Everyday names that are not CSS keywords.
const EXTRA_NAMES: &[(&str, &str)] = &[
    ("offwhite", "#faf9f6"),
    ("cream", "#fffdd0"),
    ("charcoal", "#36454f"),
    ("mint", "#98ff98"),
    ("sand", "#c2b280"),
    ("slate", "#708090"),
    ("sky", "#87ceeb"),
    ("rose", "#ff007f"),
    ("mustard", "#ffdb58"),
    ("burgundy", "#800020"),
    ("lilac", "#c8a2c8"),
    ("peach", "#ffe5b4"),
];

/// Canonical hex for a colour name or any CSS colour syntax.
///
/// Multi-word names collapse first, so "dark blue" and "light-grey" resolve
/// to the CSS keywords `darkblue` and `lightgrey`.
pub fn normalize(raw: &str) -> Option<String> {
    let lower = raw.trim().to_ascii_lowercase();
    if lower.is_empty() {
        return None;
    }
    let compact: String = lower.chars().filter(|c| !matches!(c, ' ' | '-' | '_')).collect();
    if let Some((_, hex)) = EXTRA_NAMES.iter().find(|(name, _)| *name == compact) {
        return Some((*hex).to_string());
    }
    let looks_functional = lower.starts_with('#') || lower.contains('(');
    // Bare hex digits ("add", "decade") are words here, not colours.
    if !looks_functional && compact.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let candidate = if looks_functional { lower.as_str() } else { compact.as_str() };
    let color = csscolorparser::parse(candidate).ok()?;
    Some(to_hex(&color))
}

/// Move `hex`'s HSL lightness by `points` (percentage points), clamped to [0, 100].
pub fn shift_lightness(hex: &str, points: f64) -> Option<String> {
    let color = csscolorparser::parse(hex).ok()?;
    let [r, g, b, a] = color.to_rgba8();
    let (h, s, l) = rgb_to_hsl(r, g, b);
    let (r, g, b) = hsl_to_rgb(h, s, (l + points / 100.0).clamp(0.0, 1.0));
    Some(to_hex(&csscolorparser::Color::from_rgba8(r, g, b, a)))
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (r, g, b) = (f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d == 0.0 {
        return (0.0, 0.0, l);
    }
    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / d + 2.0)
    } else {
        60.0 * ((r - g) / d + 4.0)
    };
    (h, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

fn to_hex(color: &csscolorparser::Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}
