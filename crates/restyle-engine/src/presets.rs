//! Named presets and relative-adjustment steps.
//!
//! These tables are part of the public contract: hosts and tests rely on
//! "medium padding" being 16px and "subtle shadow" being the same shadow
//! everywhere.

use restyle_core::types::{BoxShadow, Length};
use restyle_core::Property;

pub const SHADOW_SUBTLE: BoxShadow = BoxShadow::outer(1.0, 3.0, 0.0, 0.12);
pub const SHADOW_MEDIUM: BoxShadow = BoxShadow::outer(4.0, 8.0, 0.0, 0.16);
pub const SHADOW_STRONG: BoxShadow = BoxShadow::outer(10.0, 24.0, 0.0, 0.24);

/// The length a named preset means for `property`.
pub fn length_preset(property: Property, name: &str) -> Option<Length> {
    use Property::*;
    let name = name.trim().to_ascii_lowercase();
    let px = match (property, name.as_str()) {
        (
            Padding | PaddingTop | PaddingRight | PaddingBottom | PaddingLeft | Margin | MarginTop
            | MarginRight | MarginBottom | MarginLeft | Gap,
            size,
        ) => match size {
            "none" => 0.0,
            "small" => 8.0,
            "medium" => 16.0,
            "large" => 24.0,
            _ => return None,
        },
        (BorderRadius, size) => match size {
            "none" => 0.0,
            "small" => 4.0,
            "medium" => 8.0,
            "large" => 16.0,
            _ => return None,
        },
        (BorderWidth, weight) => match weight {
            "none" => 0.0,
            "thin" => 1.0,
            "medium" => 2.0,
            "thick" => 4.0,
            _ => return None,
        },
        (FontSize, size) => match size {
            "small" => 12.0,
            "medium" => 16.0,
            "large" => 24.0,
            _ => return None,
        },
        (Width, size) => {
            return match size {
                "small" | "quarter" => Some(Length::percent(25.0)),
                "medium" | "half" => Some(Length::percent(50.0)),
                "large" | "full" => Some(Length::percent(100.0)),
                _ => None,
            }
        }
        _ => return None,
    };
    Some(Length::px(px))
}

/// The shadow a named strength means. Synonyms fold onto the three presets.
pub fn shadow_preset(name: &str) -> Option<BoxShadow> {
    match name.trim().to_ascii_lowercase().as_str() {
        "subtle" | "soft" | "light" | "small" => Some(SHADOW_SUBTLE),
        "medium" => Some(SHADOW_MEDIUM),
        "strong" | "heavy" | "large" | "big" | "deep" | "dramatic" => Some(SHADOW_STRONG),
        _ => None,
    }
}

/// How far one relative step moves a numeric property, what it starts from
/// when the component has no value yet, and its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeStep {
    pub step: f64,
    pub baseline: f64,
    pub min: f64,
    pub max: f64,
}

impl RelativeStep {
    const fn at_least(step: f64, baseline: f64, min: f64) -> Self {
        Self {
            step,
            baseline,
            min,
            max: f64::INFINITY,
        }
    }

    const fn within(step: f64, baseline: f64, min: f64, max: f64) -> Self {
        Self {
            step,
            baseline,
            min,
            max,
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// Step table for length, number and duration properties.
pub fn relative_step(property: Property) -> Option<RelativeStep> {
    use Property::*;
    let step = match property {
        Padding | PaddingTop | PaddingRight | PaddingBottom | PaddingLeft | Margin | MarginTop
        | MarginRight | MarginBottom | MarginLeft | Gap => RelativeStep::at_least(4.0, 0.0, 0.0),
        BorderWidth => RelativeStep::at_least(1.0, 0.0, 0.0),
        BorderRadius => RelativeStep::at_least(4.0, 0.0, 0.0),
        FontSize => RelativeStep::at_least(2.0, 16.0, 1.0),
        Width | Height | MinWidth | MaxWidth | MinHeight | MaxHeight => {
            RelativeStep::at_least(10.0, 100.0, 0.0)
        }
        Opacity => RelativeStep::within(0.1, 1.0, 0.0, 1.0),
        HoverScale => RelativeStep::within(0.05, 1.0, HOVER_SCALE_MIN, HOVER_SCALE_MAX),
        TransitionDuration => RelativeStep::at_least(100.0, 300.0, 0.0),
        AutoplayInterval => RelativeStep::at_least(1000.0, 5000.0, 500.0),
        StrokeWidth => RelativeStep::at_least(1.0, 2.0, 0.0),
        AnimationDuration => RelativeStep::at_least(200.0, 1000.0, 0.0),
        _ => return None,
    };
    Some(step)
}

/// Smallest px value an absolute length may be set to. Margins may go negative.
pub fn length_floor(property: Property) -> Option<f64> {
    use Property::*;
    match property {
        Margin | MarginTop | MarginRight | MarginBottom | MarginLeft => None,
        FontSize => Some(1.0),
        _ => Some(0.0),
    }
}

pub const HOVER_SCALE_MIN: f64 = 0.8;
pub const HOVER_SCALE_MAX: f64 = 1.2;

/// Lightness points one darken/lighten step moves a colour.
pub const LIGHTNESS_STEP: f64 = 10.0;

/// The colour a darken/lighten starts from when none is stored.
pub fn color_baseline(property: Property) -> Option<&'static str> {
    match property {
        Property::BackgroundColor => Some("#ffffff"),
        Property::Color => Some("#333333"),
        Property::BorderColor => Some("#cccccc"),
        _ => None,
    }
}
