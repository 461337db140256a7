//! Domain processors: one per styling domain, driven by that domain's pack.
//!
//! Every processor shares the same pattern walk ([`PatternProcessor`]); what
//! differs per domain is how raw captures become typed values, which lives
//! behind [`DomainRules`].

pub mod border;
pub mod chart;
pub mod color;
pub mod interactive;
pub mod layout;
pub mod shadow;
pub mod size;
pub mod spacing;

use std::sync::Arc;

use restyle_core::errors::ProcessorError;
use restyle_core::traits::{DomainProcessor, ProcessorMetadata};
use restyle_core::types::{
    CommandResult, Domain, FollowUp, Length, Patch, PatchValue, PatternAction, PatternRule,
    Property, RelativeAdjustment, RuleMatch, StyleContext,
};

use crate::patterns::{CompiledPack, PatternLibrary};
use crate::values::{self, adjust};
use crate::presets;

pub use border::{BorderProcessor, BorderRules};
pub use chart::{ChartProcessor, ChartRules};
pub use color::{ColorProcessor, ColorRules};
pub use interactive::{InteractiveProcessor, InteractiveRules};
pub use layout::{LayoutProcessor, LayoutRules};
pub use shadow::{ShadowProcessor, ShadowRules};
pub use size::{SizeProcessor, SizeRules};
pub use spacing::{SpacingProcessor, SpacingRules};

/// A clarification a processor asks for when a command names a property but no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSpec {
    pub message: &'static str,
    pub options: &'static [&'static str],
    /// Command template with a `{value}` placeholder.
    pub template: &'static str,
}

/// Per-domain value handling. The defaults cover most domains.
pub trait DomainRules: Send + Sync + 'static {
    fn domain(&self) -> Domain;

    /// Turn a captured value into a typed value for `property`.
    fn normalize(&self, property: Property, raw: &str, _ctx: &StyleContext) -> Option<PatchValue> {
        values::normalize(property, raw)
    }

    /// Resolve a preset name. `whole` is the full matched text.
    fn preset(&self, property: Property, name: &str, _whole: &str) -> Option<PatchValue> {
        presets::length_preset(property, name).map(PatchValue::Length)
    }

    fn relative(
        &self,
        property: Property,
        adjustment: RelativeAdjustment,
        ctx: &StyleContext,
    ) -> Option<PatchValue> {
        adjust::adjust(property, adjustment, ctx)
    }

    fn prompt(&self, _property: Property) -> Option<PromptSpec> {
        None
    }

    /// Whether `raw` means "remove the property" rather than a value.
    fn clears(&self, _property: Property, _raw: &str) -> bool {
        false
    }
}

/// A processor that walks its pack's patterns in priority order and applies
/// the first one that yields a usable value.
pub struct PatternProcessor<R> {
    metadata: ProcessorMetadata,
    rules: R,
}

impl<R: DomainRules> PatternProcessor<R> {
    pub fn new(rules: R, pack: &CompiledPack) -> Self {
        Self {
            metadata: pack.to_metadata(),
            rules,
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Build a result for one matched pattern. `Ok(None)` means the match
    /// did not carry a usable value and the next pattern should be tried.
    fn interpret(
        &self,
        rule: &PatternRule,
        matched: &RuleMatch,
        ctx: &StyleContext,
    ) -> Result<Option<CommandResult>, ProcessorError> {
        let property = rule.property();
        let raw = matched
            .value
            .as_deref()
            .or(rule.value())
            .unwrap_or(matched.whole.as_str());
        let mut patch = Patch::new();

        match rule.action() {
            PatternAction::Prompt => {
                let Some(spec) = self.rules.prompt(property) else {
                    return Ok(None);
                };
                return Ok(Some(CommandResult::prompt(
                    spec.message,
                    spec.options.iter().copied(),
                    FollowUp::new(spec.template),
                )));
            }
            PatternAction::Clear => patch.clear(property),
            PatternAction::Enable => patch.set(property, PatchValue::Flag(true))?,
            PatternAction::Disable => patch.set(property, PatchValue::Flag(false))?,
            PatternAction::Set | PatternAction::Keyword => {
                if self.rules.clears(property, raw) {
                    patch.clear(property);
                } else {
                    let Some(value) = self.rules.normalize(property, raw, ctx) else {
                        return Ok(None);
                    };
                    patch.set(property, value)?;
                }
            }
            PatternAction::Preset => {
                if self.rules.clears(property, raw) {
                    patch.clear(property);
                } else {
                    let Some(value) = self.rules.preset(property, raw, &matched.whole) else {
                        return Ok(None);
                    };
                    patch.set(property, value)?;
                }
            }
            action => {
                let Some(direction) = action.as_direction() else {
                    return Ok(None);
                };
                let adjustment = match matched.value.as_deref() {
                    Some(amount) => match parse_amount(amount) {
                        Some(amount) => RelativeAdjustment::by_length(direction, amount),
                        None => return Ok(None),
                    },
                    None => RelativeAdjustment::new(direction),
                };
                let Some(value) = self.rules.relative(property, adjustment, ctx) else {
                    return Ok(None);
                };
                patch.set(property, value)?;
            }
        }

        // Extra properties read capture groups 2..; group 1 is the primary value.
        for (i, extra) in rule.extras().iter().enumerate() {
            if let Some(raw) = matched.group(i + 2) {
                let Some(value) = self.rules.normalize(*extra, raw, ctx) else {
                    return Ok(None);
                };
                patch.set(*extra, value)?;
            }
        }
        for (extra, raw) in rule.also() {
            let value = self.rules.normalize(*extra, raw, ctx).ok_or_else(|| {
                ProcessorError::InvalidValue {
                    property: extra.name().to_string(),
                    value: raw.clone(),
                }
            })?;
            patch.set(*extra, value)?;
        }

        let message = format!("Updated {}", patch.describe());
        Ok(Some(CommandResult::applied(patch, message)))
    }
}

impl<R: DomainRules> DomainProcessor for PatternProcessor<R> {
    fn metadata(&self) -> &ProcessorMetadata {
        &self.metadata
    }

    fn process_command(
        &self,
        text: &str,
        ctx: &StyleContext,
    ) -> Result<Option<CommandResult>, ProcessorError> {
        for rule in self.metadata.patterns.iter() {
            if !rule.applies_to(ctx.component_type) {
                continue;
            }
            let Some(matched) = rule.captures(text) else {
                continue;
            };
            if let Some(result) = self.interpret(rule, &matched, ctx)? {
                return Ok(Some(result));
            }
            tracing::debug!(
                processor_id = %self.metadata.id,
                pattern_id = rule.id(),
                value = matched.matched_value(),
                "pattern matched without a usable value"
            );
        }
        Ok(None)
    }

    fn process_relative(
        &self,
        property: Property,
        adjustment: RelativeAdjustment,
        ctx: &StyleContext,
    ) -> Result<Option<CommandResult>, ProcessorError> {
        if property.domain() != self.metadata.domain {
            return Ok(None);
        }
        let Some(value) = self.rules.relative(property, adjustment, ctx) else {
            return Ok(None);
        };
        let patch = Patch::new().with(property, value)?;
        let message = format!("Updated {}", patch.describe());
        Ok(Some(CommandResult::applied(patch, message)))
    }
}

/// An explicit amount in a relative command ("by 8px", "by 1rem", "add 5").
/// Bare numbers are px.
fn parse_amount(raw: &str) -> Option<Length> {
    Length::parse(raw).or_else(|| values::parse_number(raw).map(Length::px))
}

/// The processor for a compiled pack, chosen by the pack's domain.
pub fn processor_for(pack: &CompiledPack) -> Arc<dyn DomainProcessor> {
    match pack.domain {
        Domain::Color => Arc::new(ColorProcessor::new(ColorRules, pack)),
        Domain::Size => Arc::new(SizeProcessor::new(SizeRules, pack)),
        Domain::Spacing => Arc::new(SpacingProcessor::new(SpacingRules, pack)),
        Domain::Border => Arc::new(BorderProcessor::new(BorderRules, pack)),
        Domain::Shadow => Arc::new(ShadowProcessor::new(ShadowRules, pack)),
        Domain::Layout => Arc::new(LayoutProcessor::new(LayoutRules, pack)),
        Domain::Interactive => Arc::new(InteractiveProcessor::new(InteractiveRules, pack)),
        Domain::Chart => Arc::new(ChartProcessor::new(ChartRules, pack)),
    }
}

/// One processor per loaded pack.
pub fn builtin_processors(library: &PatternLibrary) -> Vec<Arc<dyn DomainProcessor>> {
    library.packs().iter().map(processor_for).collect()
}
