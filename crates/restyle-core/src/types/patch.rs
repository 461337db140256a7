//! Typed patches: the only thing the engine hands back to the editor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::length::{format_number, Length};
use super::property::{PatchTarget, Property, ValueShape};
use super::shadow::BoxShadow;
use super::value::StyleValue;
use crate::errors::ProcessorError;

/// A value matching one of the property shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "lowercase")]
pub enum PatchValue {
    Length(Length),
    /// Lower-case `#rrggbb` or `#rrggbbaa`.
    Color(String),
    Keyword(String),
    Number(f64),
    Flag(bool),
    Shadow(BoxShadow),
    /// Milliseconds.
    Duration(f64),
    Text(String),
}

impl PatchValue {
    pub fn shape(&self) -> ValueShape {
        match self {
            Self::Length(_) => ValueShape::Length,
            Self::Color(_) => ValueShape::Color,
            Self::Keyword(_) => ValueShape::Keyword,
            Self::Number(_) => ValueShape::Number,
            Self::Flag(_) => ValueShape::Flag,
            Self::Shadow(_) => ValueShape::Shadow,
            Self::Duration(_) => ValueShape::Duration,
            Self::Text(_) => ValueShape::Text,
        }
    }

    /// Host representation. Durations are `"300ms"` in style and a plain
    /// millisecond number in props.
    pub fn to_style_value(&self, target: PatchTarget) -> StyleValue {
        match self {
            Self::Length(len) => StyleValue::Text(len.to_string()),
            Self::Color(hex) => StyleValue::Text(hex.clone()),
            Self::Keyword(k) => StyleValue::Text(k.clone()),
            Self::Number(n) => StyleValue::Number(*n),
            Self::Flag(b) => StyleValue::Bool(*b),
            Self::Shadow(s) => StyleValue::Text(s.to_string()),
            Self::Duration(ms) => match target {
                PatchTarget::Style => StyleValue::Text(format!("{}ms", format_number(*ms))),
                PatchTarget::Props => StyleValue::Number(*ms),
            },
            Self::Text(t) => StyleValue::Text(t.clone()),
        }
    }

    fn describe(&self) -> String {
        match self.to_style_value(PatchTarget::Style) {
            StyleValue::Text(s) => s,
            other => other.to_css_string(),
        }
    }
}

/// One property change. `None` clears the property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub property: Property,
    pub value: Option<PatchValue>,
}

/// An ordered set of property changes, at most one per property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    changes: SmallVec<[Change; 2]>,
}

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property` to `value`, replacing an earlier change to it.
    ///
    /// Fails when the value's shape is not the property's declared shape.
    pub fn set(&mut self, property: Property, value: PatchValue) -> Result<(), ProcessorError> {
        if value.shape() != property.shape() {
            return Err(ProcessorError::ShapeMismatch {
                property: property.name().to_string(),
                expected: property.shape().name().to_string(),
                found: value.shape().name().to_string(),
            });
        }
        self.upsert(property, Some(value));
        Ok(())
    }

    /// Builder form of [`Patch::set`].
    pub fn with(mut self, property: Property, value: PatchValue) -> Result<Self, ProcessorError> {
        self.set(property, value)?;
        Ok(self)
    }

    pub fn clear(&mut self, property: Property) {
        self.upsert(property, None);
    }

    fn upsert(&mut self, property: Property, value: Option<PatchValue>) {
        match self.changes.iter_mut().find(|c| c.property == property) {
            Some(existing) => existing.value = value,
            None => self.changes.push(Change { property, value }),
        }
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// The property the command was about: the first change.
    pub fn primary_property(&self) -> Option<Property> {
        self.changes.first().map(|c| c.property)
    }

    pub fn get(&self, property: Property) -> Option<&Change> {
        self.changes.iter().find(|c| c.property == property)
    }

    /// The value set for `property`; `None` when absent or cleared.
    pub fn value_of(&self, property: Property) -> Option<&PatchValue> {
        self.get(property).and_then(|c| c.value.as_ref())
    }

    pub fn contains(&self, property: Property) -> bool {
        self.get(property).is_some()
    }

    /// Fold `other` into this patch. Changes in `other` win.
    pub fn merge(&mut self, other: &Patch) {
        for change in &other.changes {
            self.upsert(change.property, change.value.clone());
        }
    }

    /// Split into the `{style, props}` maps the editor merges.
    pub fn to_host(&self) -> HostPatch {
        let mut host = HostPatch::default();
        for change in &self.changes {
            let target = change.property.target();
            let value = change.value.as_ref().map(|v| v.to_style_value(target));
            let map = match target {
                PatchTarget::Style => &mut host.style,
                PatchTarget::Props => &mut host.props,
            };
            map.insert(change.property.name().to_string(), value);
        }
        host
    }

    /// Short description for result messages: `padding: 16px, margin: cleared`.
    pub fn describe(&self) -> String {
        self.changes
            .iter()
            .map(|c| match &c.value {
                Some(v) => format!("{}: {}", c.property, v.describe()),
                None => format!("{}: cleared", c.property),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A patch in the host editor's shape. `null` values clear the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostPatch {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, Option<StyleValue>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub props: BTreeMap<String, Option<StyleValue>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_wrong_shape() {
        let mut patch = Patch::new();
        let err = patch
            .set(Property::Padding, PatchValue::Color("#ff0000".into()))
            .unwrap_err();
        assert!(matches!(err, ProcessorError::ShapeMismatch { .. }));
        assert!(patch.is_empty());
    }

    #[test]
    fn test_set_replaces_same_property() {
        let mut patch = Patch::new();
        patch.set(Property::Padding, PatchValue::Length(Length::px(8.0))).unwrap();
        patch.set(Property::Padding, PatchValue::Length(Length::px(16.0))).unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(
            patch.value_of(Property::Padding),
            Some(&PatchValue::Length(Length::px(16.0)))
        );
    }

    #[test]
    fn test_to_host_routes_targets() {
        let mut patch = Patch::new()
            .with(Property::TransitionDuration, PatchValue::Duration(200.0))
            .unwrap()
            .with(Property::AutoplayInterval, PatchValue::Duration(3000.0))
            .unwrap();
        patch.clear(Property::BoxShadow);

        let host = patch.to_host();
        assert_eq!(
            host.style.get("transitionDuration"),
            Some(&Some(StyleValue::Text("200ms".into())))
        );
        assert_eq!(host.style.get("boxShadow"), Some(&None));
        assert_eq!(host.props.get("autoplayInterval"), Some(&Some(StyleValue::Number(3000.0))));

        let json = serde_json::to_value(&host).unwrap();
        assert!(json["style"]["boxShadow"].is_null());
    }

    #[test]
    fn test_merge_later_wins() {
        let mut first = Patch::new()
            .with(Property::Padding, PatchValue::Length(Length::px(8.0)))
            .unwrap();
        let second = Patch::new()
            .with(Property::Padding, PatchValue::Length(Length::px(24.0)))
            .unwrap()
            .with(Property::Color, PatchValue::Color("#ff0000".into()))
            .unwrap();
        first.merge(&second);
        assert_eq!(first.primary_property(), Some(Property::Padding));
        assert_eq!(first.describe(), "padding: 24px, color: #ff0000");
    }
}
