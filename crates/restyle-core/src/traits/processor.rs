//! The domain processor contract.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::errors::{ProcessorError, RegistrationError};
use crate::types::{
    CommandResult, ContextTypes, Domain, PatternRule, Property, RelativeAdjustment, StyleContext,
};

/// Identity, base priority, applicable components and owned patterns of a processor.
#[derive(Debug, Clone)]
pub struct ProcessorMetadata {
    pub id: String,
    pub name: String,
    pub domain: Domain,
    /// Base priority 0..=100, used to break close scores.
    pub priority: u8,
    pub context_types: ContextTypes,
    /// Owned patterns, sorted by descending priority (declaration order breaks ties).
    pub patterns: Arc<[PatternRule]>,
}

impl ProcessorMetadata {
    /// Reject metadata the registry cannot route to.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.id.trim().is_empty() {
            return Err(RegistrationError::MissingId);
        }
        if self.priority > 100 {
            return Err(RegistrationError::PriorityOutOfRange {
                id: self.id.clone(),
                priority: u32::from(self.priority),
            });
        }
        if self.patterns.is_empty() {
            return Err(RegistrationError::MissingPatterns {
                processor_id: self.id.clone(),
            });
        }
        let mut seen = FxHashSet::default();
        for pattern in self.patterns.iter() {
            if !seen.insert(pattern.id()) {
                return Err(RegistrationError::DuplicatePattern {
                    processor_id: self.id.clone(),
                    pattern_id: pattern.id().to_string(),
                });
            }
            pattern.validate()?;
        }
        Ok(())
    }
}

/// A processor owning one styling domain.
///
/// Implementations must be pure with respect to their inputs: the same text
/// and context always produce the same result.
pub trait DomainProcessor: Send + Sync {
    fn metadata(&self) -> &ProcessorMetadata;

    fn id(&self) -> &str {
        &self.metadata().id
    }

    fn patterns(&self) -> &[PatternRule] {
        &self.metadata().patterns
    }

    /// Interpret `text` against the component. `Ok(None)` when no owned
    /// pattern yields a usable value.
    fn process_command(
        &self,
        text: &str,
        ctx: &StyleContext,
    ) -> Result<Option<CommandResult>, ProcessorError>;

    /// Apply a relative adjustment to `property`'s stored value.
    fn process_relative(
        &self,
        _property: Property,
        _adjustment: RelativeAdjustment,
        _ctx: &StyleContext,
    ) -> Result<Option<CommandResult>, ProcessorError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PatternAction;

    fn rule(id: &str) -> PatternRule {
        PatternRule::compile(id, Property::Padding, PatternAction::Set, "^x$", 50).unwrap()
    }

    fn metadata(id: &str, patterns: Vec<PatternRule>) -> ProcessorMetadata {
        ProcessorMetadata {
            id: id.to_string(),
            name: "Spacing".to_string(),
            domain: Domain::Spacing,
            priority: 65,
            context_types: ContextTypes::All,
            patterns: patterns.into(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(metadata("spacing", vec![rule("a"), rule("b")]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed() {
        assert!(matches!(
            metadata("", vec![rule("a")]).validate(),
            Err(RegistrationError::MissingId)
        ));
        assert!(matches!(
            metadata("spacing", vec![]).validate(),
            Err(RegistrationError::MissingPatterns { .. })
        ));
        assert!(matches!(
            metadata("spacing", vec![rule("a"), rule("a")]).validate(),
            Err(RegistrationError::DuplicatePattern { ref pattern_id, .. }) if pattern_id == "a"
        ));
        let mut high = metadata("spacing", vec![rule("a")]);
        high.priority = 101;
        assert!(matches!(
            high.validate(),
            Err(RegistrationError::PriorityOutOfRange { priority: 101, .. })
        ));
    }
}
