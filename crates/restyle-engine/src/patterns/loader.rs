//! TOML pattern pack loader: parses, validates and compiles pack definitions.
//!
//! Regexes are compiled once at load time. An invalid pattern is skipped with
//! a warning and counted; it never takes the rest of its pack down.

use std::path::Path;
use std::sync::Arc;

use restyle_core::errors::RegistrationError;
use restyle_core::types::{ContextTypes, Domain, PatternAction, PatternRule, Property, ValueShape};
use restyle_core::ProcessorMetadata;
use rustc_hash::FxHashSet;

use super::types::{PackSpec, PatternDef};

/// Polite lead-ins accepted in front of every pattern body.
const POLITE_PREFIX: &str = r"^(?:(?:can|could|would|will)\s+you\s+|please\s+|kindly\s+)*";
/// Trailing politeness accepted after every pattern body.
const POLITE_SUFFIX: &str = r"(?:\s+please)?$";

const NUM: &str = r"(?:-?\d+(?:\.\d+)?|-?\.\d+)";

/// A compiled pack ready to back a domain processor.
#[derive(Debug, Clone)]
pub struct CompiledPack {
    pub id: String,
    pub name: String,
    pub domain: Domain,
    pub priority: u8,
    pub context_types: ContextTypes,
    pub version: Option<String>,
    /// Sorted by descending priority; declaration order breaks ties.
    pub patterns: Vec<PatternRule>,
    /// Patterns dropped because they failed validation.
    pub patterns_skipped: usize,
}

impl CompiledPack {
    /// Append patterns from a custom pack for the same domain.
    ///
    /// Patterns whose id already exists are skipped. Returns how many were added.
    pub fn extend(&mut self, other: CompiledPack) -> usize {
        let mut added = 0;
        for pattern in other.patterns {
            if self.patterns.iter().any(|p| p.id() == pattern.id()) {
                tracing::warn!(
                    pack = %self.id,
                    pattern_id = pattern.id(),
                    "skipping custom pattern with a duplicate id"
                );
                self.patterns_skipped += 1;
                continue;
            }
            self.patterns.push(pattern);
            added += 1;
        }
        self.patterns_skipped += other.patterns_skipped;
        sort_by_priority(&mut self.patterns);
        added
    }

    pub fn to_metadata(&self) -> ProcessorMetadata {
        ProcessorMetadata {
            id: self.id.clone(),
            name: self.name.clone(),
            domain: self.domain,
            priority: self.priority,
            context_types: self.context_types.clone(),
            patterns: Arc::from(self.patterns.clone()),
        }
    }
}

/// Load and compile a pack from a TOML string.
pub fn load_from_str(toml_str: &str) -> Result<CompiledPack, RegistrationError> {
    let spec: PackSpec = toml::from_str(toml_str).map_err(|e| RegistrationError::PackParse {
        pack: "<inline>".to_string(),
        message: e.message().to_string(),
    })?;
    compile_spec(spec)
}

/// Load and compile a pack from a file path.
pub fn load_from_file(path: &Path) -> Result<CompiledPack, RegistrationError> {
    let pack = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| RegistrationError::PackParse {
        pack: pack.clone(),
        message: e.to_string(),
    })?;
    let spec: PackSpec = toml::from_str(&content).map_err(|e| RegistrationError::PackParse {
        pack,
        message: e.message().to_string(),
    })?;
    compile_spec(spec)
}

fn compile_spec(spec: PackSpec) -> Result<CompiledPack, RegistrationError> {
    let meta = spec.processor;
    let domain = Domain::parse_str(&meta.id).ok_or_else(|| RegistrationError::UnknownDomain {
        processor_id: meta.id.clone(),
    })?;
    let priority = checked_priority(&meta.id, meta.priority)?;
    let context_types =
        ContextTypes::from_names(&meta.context_types).map_err(|message| RegistrationError::PackParse {
            pack: meta.id.clone(),
            message,
        })?;

    let mut patterns = Vec::with_capacity(spec.patterns.len());
    let mut seen = FxHashSet::default();
    let mut skipped = 0;
    for def in spec.patterns {
        if !seen.insert(def.id.clone()) {
            tracing::warn!(pack = %meta.id, pattern_id = %def.id, "skipping duplicate pattern id");
            skipped += 1;
            continue;
        }
        match compile_pattern(def, domain) {
            Ok(rule) => patterns.push(rule),
            Err(e) => {
                tracing::warn!(pack = %meta.id, error = %e, "skipping pattern");
                skipped += 1;
            }
        }
    }
    sort_by_priority(&mut patterns);

    Ok(CompiledPack {
        name: meta.name.unwrap_or_else(|| meta.id.clone()),
        id: meta.id,
        domain,
        priority,
        context_types,
        version: meta.version,
        patterns,
        patterns_skipped: skipped,
    })
}

fn compile_pattern(def: PatternDef, domain: Domain) -> Result<PatternRule, RegistrationError> {
    let property = parse_property(&def.id, &def.property)?;
    if property.domain() != domain {
        return Err(RegistrationError::InvalidPattern {
            pattern_id: def.id,
            reason: format!("{property} does not belong to the {domain} domain"),
        });
    }
    let action = PatternAction::parse_str(&def.action).ok_or_else(|| RegistrationError::UnknownAction {
        pattern_id: def.id.clone(),
        action: def.action.clone(),
    })?;
    let output = ValueShape::parse_str(&def.output).ok_or_else(|| RegistrationError::ShapeMismatch {
        pattern_id: def.id.clone(),
        property: property.name().to_string(),
        expected: property.shape().name().to_string(),
        declared: def.output.clone(),
    })?;
    let priority = checked_priority(&def.id, def.priority)?;
    if def.match_source.trim().is_empty() {
        return Err(RegistrationError::InvalidPattern {
            pattern_id: def.id,
            reason: "empty match".to_string(),
        });
    }

    let source = anchor(&expand_macros(&def.match_source, &def.id)?);
    let mut rule = PatternRule::compile(def.id.clone(), property, action, &source, priority)?
        .with_output(output)
        .with_examples(def.examples);

    if let Some(names) = def.context_types {
        let context_types =
            ContextTypes::from_names(&names).map_err(|reason| RegistrationError::InvalidPattern {
                pattern_id: def.id.clone(),
                reason,
            })?;
        rule = rule.with_context_types(context_types);
    }
    if let Some(value) = def.value {
        rule = rule.with_value(value);
    }
    if !def.extras.is_empty() {
        let extras = def
            .extras
            .iter()
            .map(|name| parse_property(&def.id, name))
            .collect::<Result<Vec<_>, _>>()?;
        rule = rule.with_extras(extras);
    }
    if !def.also.is_empty() {
        let also = def
            .also
            .into_iter()
            .map(|(name, value)| parse_property(&def.id, &name).map(|p| (p, value)))
            .collect::<Result<Vec<_>, _>>()?;
        rule = rule.with_also(also);
    }

    rule.validate()?;
    Ok(rule)
}

fn parse_property(pattern_id: &str, name: &str) -> Result<Property, RegistrationError> {
    Property::parse_str(name).ok_or_else(|| RegistrationError::UnknownProperty {
        pattern_id: pattern_id.to_string(),
        property: name.to_string(),
    })
}

fn checked_priority(id: &str, priority: u32) -> Result<u8, RegistrationError> {
    u8::try_from(priority)
        .ok()
        .filter(|p| *p <= 100)
        .ok_or_else(|| RegistrationError::PriorityOutOfRange {
            id: id.to_string(),
            priority,
        })
}

fn sort_by_priority(patterns: &mut [PatternRule]) {
    patterns.sort_by(|a, b| b.priority().cmp(&a.priority()));
}

fn macro_expansion(name: &str) -> Option<String> {
    let expansion = match name {
        "NUM" => NUM.to_string(),
        "LEN" => format!(r"{NUM}\s*(?:px|pixels?|rem|em|%|percent|vh|vw|pt)?"),
        "COLOR" => r"#[0-9a-f]{3,8}|rgba?\([^)]*\)|hsla?\([^)]*\)|[a-z]+(?:[ -][a-z]+)?".to_string(),
        "DUR" => r"(?:\d+(?:\.\d+)?|\.\d+)\s*(?:ms|milliseconds?|s|secs?|seconds?)?".to_string(),
        "SET" => r"(?:set|change|make|update|adjust|use)".to_string(),
        "TO" => r"(?:\s+to\s+|\s*[:=]\s*|\s+)".to_string(),
        "THE" => r"(?:(?:the|its|this)\s+)?".to_string(),
        "PRESET" => "small|medium|large".to_string(),
        _ => return None,
    };
    Some(expansion)
}

/// Expand `@NAME` macros in a pattern body.
///
/// `@THE` also swallows one following space, so `@THE padding` accepts both
/// "the padding" and "padding".
pub fn expand_macros(source: &str, pattern_id: &str) -> Result<String, RegistrationError> {
    let mut out = String::with_capacity(source.len() * 2);
    let mut rest = source;
    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];
        let name_len = after.bytes().take_while(u8::is_ascii_uppercase).count();
        let name = &after[..name_len];
        let expansion = macro_expansion(name).ok_or_else(|| RegistrationError::InvalidPattern {
            pattern_id: pattern_id.to_string(),
            reason: format!("unknown macro '@{name}'"),
        })?;
        out.push_str("(?:");
        out.push_str(&expansion);
        out.push(')');
        rest = &after[name_len..];
        if name == "THE" {
            rest = rest.strip_prefix(' ').unwrap_or(rest);
        }
    }
    out.push_str(rest);
    Ok(out)
}

/// Anchor a body and wrap it with the politeness prefix and suffix.
pub fn anchor(body: &str) -> String {
    format!("{POLITE_PREFIX}(?:{body}){POLITE_SUFFIX}")
}
