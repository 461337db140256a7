//! Resolution counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Lock-free counters shared by concurrent resolve calls.
#[derive(Debug, Default)]
pub struct RegistryMetrics {
    resolutions: AtomicU64,
    no_matches: AtomicU64,
    fast_path_hits: AtomicU64,
    followup_hits: AtomicU64,
    direct_pattern_hits: AtomicU64,
    scored_hits: AtomicU64,
    classifier_calls: AtomicU64,
    classifier_failures: AtomicU64,
    processor_faults: AtomicU64,
}

/// Point-in-time copy of [`RegistryMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub resolutions: u64,
    pub no_matches: u64,
    pub fast_path_hits: u64,
    pub followup_hits: u64,
    pub direct_pattern_hits: u64,
    pub scored_hits: u64,
    pub classifier_calls: u64,
    pub classifier_failures: u64,
    pub processor_faults: u64,
}

fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

impl RegistryMetrics {
    pub fn record_resolution(&self) {
        bump(&self.resolutions);
    }

    pub fn record_no_match(&self) {
        bump(&self.no_matches);
    }

    pub fn record_fast_path(&self) {
        bump(&self.fast_path_hits);
    }

    pub fn record_followup(&self) {
        bump(&self.followup_hits);
    }

    pub fn record_direct_pattern(&self) {
        bump(&self.direct_pattern_hits);
    }

    pub fn record_scored(&self) {
        bump(&self.scored_hits);
    }

    pub fn record_classifier_call(&self, succeeded: bool) {
        bump(&self.classifier_calls);
        if !succeeded {
            bump(&self.classifier_failures);
        }
    }

    pub fn record_processor_fault(&self) {
        bump(&self.processor_faults);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let read = |c: &AtomicU64| c.load(Ordering::Relaxed);
        MetricsSnapshot {
            resolutions: read(&self.resolutions),
            no_matches: read(&self.no_matches),
            fast_path_hits: read(&self.fast_path_hits),
            followup_hits: read(&self.followup_hits),
            direct_pattern_hits: read(&self.direct_pattern_hits),
            scored_hits: read(&self.scored_hits),
            classifier_calls: read(&self.classifier_calls),
            classifier_failures: read(&self.classifier_failures),
            processor_faults: read(&self.processor_faults),
        }
    }
}
