//! Duration parsing. All durations are carried as milliseconds.

/// Bare numbers below this are read as seconds ("change slides every 5").
const BARE_SECONDS_BELOW: f64 = 20.0;

/// Parse `"250ms"`, `"0.3s"`, `"3 seconds"` or a bare number into milliseconds.
pub fn parse_ms(raw: &str) -> Option<f64> {
    let s = raw.trim().to_ascii_lowercase();
    let split = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let ms = match unit.trim() {
        "ms" | "millisecond" | "milliseconds" => value,
        "s" | "sec" | "secs" | "second" | "seconds" => value * 1000.0,
        "" if value < BARE_SECONDS_BELOW => value * 1000.0,
        "" => value,
        _ => return None,
    };
    Some(ms.round())
}

/// Read a stored duration: a number of ms (props) or a `"300ms"` string (style).
pub fn from_stored(value: &restyle_core::StyleValue) -> Option<f64> {
    match value {
        restyle_core::StyleValue::Number(n) if n.is_finite() => Some(*n),
        restyle_core::StyleValue::Text(s) => parse_ms(s),
        _ => None,
    }
}
