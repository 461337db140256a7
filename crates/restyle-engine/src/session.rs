//! Per-editor session state for relative follow-ups.
//!
//! "make it darker" or "add 4px" carry no property of their own; they apply
//! to whatever the previous applied command changed. The caller owns one
//! [`EditingSession`] per editor and passes it into every resolve call.

use restyle_core::types::{Direction, Length, LengthUnit, Property, RelativeAdjustment};
use serde::Serialize;

/// What the last applied command touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FollowupState {
    pub last_property: Option<Property>,
    pub last_processor_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct EditingSession {
    state: FollowupState,
}

impl EditingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FollowupState {
        &self.state
    }

    /// Remember the property and processor of an applied command.
    pub fn record(&mut self, property: Property, processor_id: &str) {
        self.state.last_property = Some(property);
        self.state.last_processor_id = Some(processor_id.to_string());
    }

    /// Forget the follow-up target, e.g. when the selection changes.
    pub fn clear(&mut self) {
        self.state = FollowupState::default();
    }

    /// The stored target, when both halves are known.
    pub fn target(&self) -> Option<(Property, &str)> {
        Some((self.state.last_property?, self.state.last_processor_id.as_deref()?))
    }
}

/// Parse a relative-only command. Returns `None` for anything that names
/// its own property or value.
pub fn parse_relative(text: &str) -> Option<RelativeAdjustment> {
    let lower = text.trim().to_ascii_lowercase();
    let mut tokens: Vec<&str> = lower.split_whitespace().collect();
    if tokens.last() == Some(&"please") {
        tokens.pop();
    }
    if let Some(adjustment) = parse_amount_command(&tokens) {
        return Some(adjustment);
    }

    let mut rest = tokens.as_slice();
    loop {
        rest = match rest {
            ["make", "it" | "this", tail @ ..] => tail,
            ["a", "bit" | "little", tail @ ..] => tail,
            ["even" | "much" | "slightly", tail @ ..] => tail,
            _ => break,
        };
    }
    match rest {
        [word] => direction_word(word).map(RelativeAdjustment::new),
        _ => None,
    }
}

fn direction_word(word: &str) -> Option<Direction> {
    let direction = match word {
        "darker" => Direction::Darken,
        "lighter" => Direction::Lighten,
        "bigger" | "larger" | "more" | "stronger" | "thicker" => Direction::Increase,
        "smaller" | "less" | "weaker" | "thinner" => Direction::Decrease,
        "faster" => Direction::Faster,
        "slower" => Direction::Slower,
        _ => return None,
    };
    Some(direction)
}

/// `add 4px`, `increase by 4`, `minus 2 px` and friends.
fn parse_amount_command(tokens: &[&str]) -> Option<RelativeAdjustment> {
    let (direction, amount) = match tokens {
        ["add" | "plus", amount @ ..] | ["increase", "by", amount @ ..] => (Direction::Increase, amount),
        ["remove" | "subtract" | "minus", amount @ ..] | ["decrease", "by", amount @ ..] => {
            (Direction::Decrease, amount)
        }
        _ => return None,
    };
    let amount = match amount {
        [n] => Length::parse(n)?,
        [n, unit] => Length::parse(&format!("{n}{unit}"))?,
        _ => return None,
    };
    (amount.unit == LengthUnit::Px && amount.value >= 0.0)
        .then(|| RelativeAdjustment::by(direction, amount.value))
}
