//! Pattern library diagnostics: what was loaded, what was skipped and how long it took.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

/// Load-time metrics of the pattern library.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatternDiagnostics {
    pub builtin_packs_loaded: usize,
    pub builtin_packs_skipped: usize,
    pub custom_packs_loaded: usize,
    pub custom_packs_skipped: usize,
    pub total_patterns_compiled: usize,
    pub patterns_skipped: usize,
    pub pack_versions: HashMap<String, String>,
    pub load_duration: Duration,
}

impl PatternDiagnostics {
    pub fn packs_loaded(&self) -> usize {
        self.builtin_packs_loaded + self.custom_packs_loaded
    }

    pub fn summary(&self) -> String {
        format!(
            "pattern library: {} packs ({} builtin, {} custom), {} skipped, \
             {} patterns compiled, {} patterns skipped, loaded in {}ms",
            self.packs_loaded(),
            self.builtin_packs_loaded,
            self.custom_packs_loaded,
            self.builtin_packs_skipped + self.custom_packs_skipped,
            self.total_patterns_compiled,
            self.patterns_skipped,
            self.load_duration.as_millis(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_both_kinds_of_pack() {
        let mut diag = PatternDiagnostics {
            builtin_packs_loaded: 8,
            custom_packs_loaded: 1,
            custom_packs_skipped: 2,
            total_patterns_compiled: 197,
            ..Default::default()
        };
        diag.pack_versions.insert("color".into(), "1.0.0".into());
        assert_eq!(diag.packs_loaded(), 9);
        let summary = diag.summary();
        assert!(summary.contains("9 packs (8 builtin, 1 custom), 2 skipped"), "{summary}");
        assert!(summary.contains("197 patterns compiled"), "{summary}");
    }
}
