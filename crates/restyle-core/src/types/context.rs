//! The selected component as the engine sees it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::component::ComponentType;
use super::length::Length;
use super::patch::Patch;
use super::property::{PatchTarget, Property};
use super::value::StyleValue;

/// Snapshot of the selected component's styling, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleContext {
    #[serde(default)]
    pub component_type: ComponentType,
    #[serde(default)]
    pub style: BTreeMap<String, StyleValue>,
    #[serde(default)]
    pub props: BTreeMap<String, StyleValue>,
}

impl StyleContext {
    pub fn new(component_type: ComponentType) -> Self {
        Self {
            component_type,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    fn map_for(&self, target: PatchTarget) -> &BTreeMap<String, StyleValue> {
        match target {
            PatchTarget::Style => &self.style,
            PatchTarget::Props => &self.props,
        }
    }

    /// The stored value of `property`, looked up in the map it lives in.
    pub fn value(&self, property: Property) -> Option<&StyleValue> {
        self.map_for(property.target()).get(property.name())
    }

    /// Stored length; bare numbers read as px.
    pub fn length(&self, property: Property) -> Option<Length> {
        match self.value(property)? {
            StyleValue::Number(n) if n.is_finite() => Some(Length::px(*n)),
            StyleValue::Text(s) => Length::parse(s),
            _ => None,
        }
    }

    pub fn number(&self, property: Property) -> Option<f64> {
        self.value(property)?.as_number()
    }

    pub fn text(&self, property: Property) -> Option<&str> {
        self.value(property)?.as_text()
    }

    pub fn flag(&self, property: Property) -> Option<bool> {
        self.value(property)?.as_bool()
    }

    /// The context after the host merges `patch`: returned keys overwrite,
    /// cleared keys are removed, all other keys are untouched.
    pub fn apply(&self, patch: &Patch) -> StyleContext {
        let mut next = self.clone();
        for change in patch.changes() {
            let target = change.property.target();
            let map = match target {
                PatchTarget::Style => &mut next.style,
                PatchTarget::Props => &mut next.props,
            };
            match &change.value {
                Some(value) => {
                    map.insert(change.property.name().to_string(), value.to_style_value(target));
                }
                None => {
                    map.remove(change.property.name());
                }
            }
        }
        next
    }
}
