//! Pattern pack configuration.

use serde::{Deserialize, Serialize};

/// Which pattern packs are loaded and where custom packs live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PatternConfig {
    /// Directory of custom `*.toml` packs, relative to the project root.
    /// Default: `.restyle/patterns`.
    pub custom_dir: Option<String>,
    /// Built-in packs to skip, by processor id.
    #[serde(default)]
    pub disabled_packs: Vec<String>,
    /// When non-empty, load only these built-in packs.
    #[serde(default)]
    pub enabled_only: Vec<String>,
}

impl PatternConfig {
    pub fn effective_custom_dir(&self) -> &str {
        self.custom_dir.as_deref().unwrap_or(".restyle/patterns")
    }

    /// Whether the built-in pack `id` passes the filters.
    pub fn is_pack_enabled(&self, id: &str) -> bool {
        if !self.enabled_only.is_empty() && !self.enabled_only.iter().any(|p| p == id) {
            return false;
        }
        !self.disabled_packs.iter().any(|p| p == id)
    }
}
