//! Serde types for the TOML pattern pack schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level pattern pack (one per TOML file, one per styling domain).
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PackSpec {
    /// Processor metadata.
    pub processor: ProcessorMeta,
    /// Pattern definitions.
    #[serde(default)]
    pub patterns: Vec<PatternDef>,
}

/// The `[processor]` table.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ProcessorMeta {
    /// Domain id (`color`, `spacing`, ...). Custom packs extend the built-in
    /// processor with the same id.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// Base priority 0..=100 used to break close scores.
    #[serde(default = "default_priority")]
    pub priority: u32,
    /// Component types the processor applies to; `["all"]` for every type.
    #[serde(default = "default_context_types")]
    pub context_types: Vec<String>,
    /// Pack version string (e.g., "1.0.0").
    pub version: Option<String>,
}

fn default_priority() -> u32 {
    50
}

fn default_context_types() -> Vec<String> {
    vec!["all".to_string()]
}

/// A single `[[patterns]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PatternDef {
    /// Unique pattern id (e.g., "spacing/padding-set").
    pub id: String,
    /// camelCase property the pattern writes.
    pub property: String,
    /// One of set, preset, keyword, increase, decrease, darken, lighten,
    /// faster, slower, clear, enable, disable, prompt.
    pub action: String,
    /// Declared value shape; must equal the property's shape.
    pub output: String,
    #[serde(default = "default_pattern_priority")]
    pub priority: u32,
    /// Regex body. Macros (`@LEN`, `@NUM`, `@COLOR`, `@DUR`, `@SET`, `@TO`,
    /// `@THE`, `@PRESET`) are expanded and the body is anchored by the loader.
    #[serde(rename = "match")]
    pub match_source: String,
    /// Phrases the pattern must resolve.
    #[serde(default)]
    pub examples: Vec<String>,
    /// Restricts the pattern to these component types.
    pub context_types: Option<Vec<String>>,
    /// Fixed value used when no capture group participated.
    pub value: Option<String>,
    /// Properties fed by capture groups 2..n.
    #[serde(default)]
    pub extras: Vec<String>,
    /// Fixed companion values written alongside the primary property.
    #[serde(default)]
    pub also: BTreeMap<String, String>,
}

fn default_pattern_priority() -> u32 {
    50
}

/// Generate a JSON Schema for [`PackSpec`].
///
/// Custom pack authors can validate their TOML files against it.
pub fn generate_json_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(PackSpec)
}
