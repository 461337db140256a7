//! Pattern library: built-in packs plus user packs from a directory.
//!
//! Built-in packs are embedded at compile time via `include_str!`.
//! User packs are loaded from `.restyle/patterns/` at runtime and extend the
//! built-in pack of the same domain.

use std::path::Path;
use std::time::Instant;

use restyle_core::config::{PatternConfig, RestyleConfig};
use restyle_core::types::Domain;

use super::diagnostics::PatternDiagnostics;
use super::loader::{self, CompiledPack};

/// All compiled pattern packs, one per domain.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    packs: Vec<CompiledPack>,
    diag: PatternDiagnostics,
}

impl PatternLibrary {
    /// Library with only the built-in packs.
    pub fn with_builtins() -> Self {
        Self::with_builtins_filtered(None)
    }

    /// Built-in packs, applying an optional config filter.
    pub fn with_builtins_filtered(config: Option<&PatternConfig>) -> Self {
        let started = Instant::now();
        let mut packs = Vec::new();
        let mut diag = PatternDiagnostics::default();

        for (name, toml_str) in builtin_packs() {
            if config.is_some_and(|cfg| !cfg.is_pack_enabled(name)) {
                tracing::debug!(pack = name, "built-in pack disabled by config");
                diag.builtin_packs_skipped += 1;
                continue;
            }
            match loader::load_from_str(toml_str) {
                Ok(pack) => {
                    diag.total_patterns_compiled += pack.patterns.len();
                    diag.patterns_skipped += pack.patterns_skipped;
                    diag.builtin_packs_loaded += 1;
                    if let Some(ref ver) = pack.version {
                        diag.pack_versions.insert(pack.id.clone(), ver.clone());
                    }
                    packs.push(pack);
                }
                Err(e) => {
                    tracing::warn!(pack = name, error = %e, "failed to load built-in pack");
                    diag.builtin_packs_skipped += 1;
                }
            }
        }

        diag.load_duration = started.elapsed();
        Self { packs, diag }
    }

    /// Built-in plus custom packs, applying an optional config filter.
    ///
    /// A custom pack's `[processor] id` must name a loaded built-in domain;
    /// its patterns are appended to that domain's pack.
    pub fn with_builtins_and_custom_filtered(custom_dir: &Path, config: Option<&PatternConfig>) -> Self {
        let mut library = Self::with_builtins_filtered(config);
        let started = Instant::now();

        if custom_dir.is_dir() {
            if let Ok(entries) = std::fs::read_dir(custom_dir) {
                let mut paths: Vec<_> = entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
                    .collect();
                paths.sort();
                for path in paths {
                    library.load_custom(&path);
                }
            }
        }

        library.diag.load_duration += started.elapsed();
        tracing::info!(summary = %library.diag.summary(), "pattern library loaded");
        library
    }

    /// Library for a project: packs filtered by config plus the project's
    /// custom pack directory.
    pub fn from_config(root: &Path, config: &RestyleConfig) -> Self {
        let custom_dir = root.join(config.patterns.effective_custom_dir());
        Self::with_builtins_and_custom_filtered(&custom_dir, Some(&config.patterns))
    }

    fn load_custom(&mut self, path: &Path) {
        let pack = match loader::load_from_file(path) {
            Ok(pack) => pack,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load custom pack");
                self.diag.custom_packs_skipped += 1;
                return;
            }
        };
        let Some(target) = self.packs.iter_mut().find(|p| p.domain == pack.domain) else {
            tracing::warn!(
                path = %path.display(),
                pack = %pack.id,
                "custom pack extends a domain that is not loaded"
            );
            self.diag.custom_packs_skipped += 1;
            return;
        };
        let skipped_before = target.patterns_skipped;
        let added = target.extend(pack);
        self.diag.total_patterns_compiled += added;
        self.diag.patterns_skipped += target.patterns_skipped - skipped_before;
        self.diag.custom_packs_loaded += 1;
    }

    pub fn packs(&self) -> &[CompiledPack] {
        &self.packs
    }

    /// The pack backing `domain`, if loaded.
    pub fn pack(&self, domain: Domain) -> Option<&CompiledPack> {
        self.packs.iter().find(|p| p.domain == domain)
    }

    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }

    /// Total pattern count across all packs.
    pub fn pattern_count(&self) -> usize {
        self.packs.iter().map(|p| p.patterns.len()).sum()
    }

    pub fn diagnostics(&self) -> &PatternDiagnostics {
        &self.diag
    }
}

/// Built-in pattern packs embedded at compile time.
fn builtin_packs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("color", include_str!("packs/color.toml")),
        ("size", include_str!("packs/size.toml")),
        ("spacing", include_str!("packs/spacing.toml")),
        ("border", include_str!("packs/border.toml")),
        ("shadow", include_str!("packs/shadow.toml")),
        ("layout", include_str!("packs/layout.toml")),
        ("interactive", include_str!("packs/interactive.toml")),
        ("chart", include_str!("packs/chart.toml")),
    ]
}
