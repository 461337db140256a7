//! Compiled pattern rules.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::component::{ComponentType, ContextTypes};
use super::property::{Domain, Property, ValueShape};
use super::relative::Direction;
use crate::errors::RegistrationError;

/// What a processor does with a matched pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternAction {
    /// Use the captured value.
    Set,
    /// Resolve a captured preset name (small/medium/large, subtle/strong).
    Preset,
    /// Write the pattern's fixed value (or the captured keyword).
    Keyword,
    Increase,
    Decrease,
    Darken,
    Lighten,
    Faster,
    Slower,
    Clear,
    Enable,
    Disable,
    /// Ask the user for a value.
    Prompt,
}

impl PatternAction {
    pub const ALL: [PatternAction; 13] = [
        Self::Set,
        Self::Preset,
        Self::Keyword,
        Self::Increase,
        Self::Decrease,
        Self::Darken,
        Self::Lighten,
        Self::Faster,
        Self::Slower,
        Self::Clear,
        Self::Enable,
        Self::Disable,
        Self::Prompt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Preset => "preset",
            Self::Keyword => "keyword",
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::Faster => "faster",
            Self::Slower => "slower",
            Self::Clear => "clear",
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Prompt => "prompt",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|a| a.name() == lower)
    }

    /// Relative actions map onto an adjustment direction.
    pub fn as_direction(self) -> Option<Direction> {
        match self {
            Self::Increase => Some(Direction::Increase),
            Self::Decrease => Some(Direction::Decrease),
            Self::Darken => Some(Direction::Darken),
            Self::Lighten => Some(Direction::Lighten),
            Self::Faster => Some(Direction::Faster),
            Self::Slower => Some(Direction::Slower),
            _ => None,
        }
    }
}

impl fmt::Display for PatternAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compiled, immutable pattern owned by one processor.
#[derive(Debug, Clone)]
pub struct PatternRule {
    id: String,
    property: Property,
    action: PatternAction,
    priority: u8,
    matcher: Regex,
    context_types: Option<ContextTypes>,
    examples: Vec<String>,
    output: ValueShape,
    value: Option<String>,
    extras: Vec<Property>,
    also: Vec<(Property, String)>,
}

/// The parts of an input a pattern captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub whole: String,
    /// First participating capture group.
    pub value: Option<String>,
    /// Capture groups 1..n, `None` where a group did not participate.
    pub groups: Vec<Option<String>>,
}

impl RuleMatch {
    /// The captured value, falling back to the whole match.
    pub fn matched_value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.whole)
    }

    /// Capture group `index` (1-based) if it participated.
    pub fn group(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i))
            .and_then(|g| g.as_deref())
    }
}

impl PatternRule {
    /// Compile `source` case-insensitively. The source is used as given; the
    /// pack loader is responsible for anchoring it.
    pub fn compile(
        id: impl Into<String>,
        property: Property,
        action: PatternAction,
        source: &str,
        priority: u8,
    ) -> Result<Self, RegistrationError> {
        let id = id.into();
        let matcher = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|e| RegistrationError::InvalidPattern {
                pattern_id: id.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            id,
            property,
            action,
            priority,
            matcher,
            context_types: None,
            examples: Vec::new(),
            output: property.shape(),
            value: None,
            extras: Vec::new(),
            also: Vec::new(),
        })
    }

    pub fn with_context_types(mut self, context_types: ContextTypes) -> Self {
        self.context_types = Some(context_types);
        self
    }

    pub fn with_examples(mut self, examples: Vec<String>) -> Self {
        self.examples = examples;
        self
    }

    pub fn with_output(mut self, output: ValueShape) -> Self {
        self.output = output;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_extras(mut self, extras: Vec<Property>) -> Self {
        self.extras = extras;
        self
    }

    pub fn with_also(mut self, also: Vec<(Property, String)>) -> Self {
        self.also = also;
        self
    }

    /// Structural checks shared by the pack loader and registration.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.id.trim().is_empty() {
            return Err(RegistrationError::InvalidPattern {
                pattern_id: self.id.clone(),
                reason: "empty pattern id".to_string(),
            });
        }
        if self.priority > 100 {
            return Err(RegistrationError::PriorityOutOfRange {
                id: self.id.clone(),
                priority: u32::from(self.priority),
            });
        }
        if self.output != self.property.shape() {
            return Err(RegistrationError::ShapeMismatch {
                pattern_id: self.id.clone(),
                property: self.property.name().to_string(),
                expected: self.property.shape().name().to_string(),
                declared: self.output.name().to_string(),
            });
        }
        let domain = self.domain();
        let foreign = self
            .extras
            .iter()
            .chain(self.also.iter().map(|(p, _)| p))
            .find(|p| p.domain() != domain);
        if let Some(property) = foreign {
            return Err(RegistrationError::InvalidPattern {
                pattern_id: self.id.clone(),
                reason: format!("{property} does not belong to the {domain} domain"),
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn domain(&self) -> Domain {
        self.property.domain()
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn action(&self) -> PatternAction {
        self.action
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn context_types(&self) -> Option<&ContextTypes> {
        self.context_types.as_ref()
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn output(&self) -> ValueShape {
        self.output
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn extras(&self) -> &[Property] {
        &self.extras
    }

    pub fn also(&self) -> &[(Property, String)] {
        &self.also
    }

    /// Whether the pattern's own context restriction admits `component`.
    pub fn applies_to(&self, component: ComponentType) -> bool {
        self.context_types
            .as_ref()
            .map_or(true, |ct| ct.includes(component))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    pub fn captures(&self, text: &str) -> Option<RuleMatch> {
        let caps = self.matcher.captures(text)?;
        let groups: Vec<Option<String>> = caps
            .iter()
            .skip(1)
            .map(|g| g.map(|m| m.as_str().trim().to_string()))
            .collect();
        let value = groups.iter().flatten().next().cloned();
        Some(RuleMatch {
            whole: caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default(),
            value,
            groups,
        })
    }
}
