//! Relative adjustments ("darker", "bigger", "add 4px") applied to a stored property.

use serde::{Deserialize, Serialize};

use super::length::Length;

/// Which way a relative adjustment moves a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
    Darken,
    Lighten,
    Faster,
    Slower,
}

impl Direction {
    /// +1 for directions that grow the stored number, -1 otherwise.
    ///
    /// `Faster` shrinks a duration and `Darken` lowers lightness.
    pub fn sign(self) -> f64 {
        match self {
            Self::Increase | Self::Lighten | Self::Slower => 1.0,
            Self::Decrease | Self::Darken | Self::Faster => -1.0,
        }
    }

    pub fn is_size_like(self) -> bool {
        matches!(self, Self::Increase | Self::Decrease)
    }

    pub fn is_tone(self) -> bool {
        matches!(self, Self::Darken | Self::Lighten)
    }

    pub fn is_speed(self) -> bool {
        matches!(self, Self::Faster | Self::Slower)
    }
}

/// A direction plus an optional explicit amount. Unitless amounts are px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeAdjustment {
    pub direction: Direction,
    pub amount: Option<Length>,
}

impl RelativeAdjustment {
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            amount: None,
        }
    }

    pub const fn by(direction: Direction, amount: f64) -> Self {
        Self::by_length(direction, Length::px(amount))
    }

    pub const fn by_length(direction: Direction, amount: Length) -> Self {
        Self {
            direction,
            amount: Some(amount),
        }
    }

    /// Signed delta: the explicit amount's number when given, otherwise `default_step`.
    pub fn delta(&self, default_step: f64) -> f64 {
        self.direction.sign() * self.amount.map_or(default_step, |len| len.value.abs())
    }
}
