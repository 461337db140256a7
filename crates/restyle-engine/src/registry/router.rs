//! CommandRegistry: processor registration and the resolution pipeline.
//!
//! Resolution runs in a fixed order and stops at the first stage that
//! produces a result: relative follow-up, keyword fast path, direct
//! (priority 100) patterns, then scored selection with fallback through the
//! remaining processors.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rustc_hash::FxHashSet;

use restyle_core::config::{ClassifierConfig, ResolverConfig, RestyleConfig};
use restyle_core::errors::{ProcessorError, RegistrationError, RestyleErrorCode};
use restyle_core::traits::{DomainProcessor, IntentClassifier};
use restyle_core::types::{
    CommandResult, Patch, Property, RelativeAdjustment, Resolution, ResolutionPath, StyleContext,
};

use super::fast_path;
use super::metrics::{MetricsSnapshot, RegistryMetrics};
use crate::classifier::{ClassifierAdapter, HttpIntentClassifier, NoClassifier};
use crate::patterns::PatternLibrary;
use crate::processors::builtin_processors;
use crate::scoring::{ConfidenceScorer, MatchCandidate};
use crate::session::{self, EditingSession};

type ProcessorOutcome = std::thread::Result<Result<Option<CommandResult>, ProcessorError>>;

/// Owns the processors and routes commands to them.
pub struct CommandRegistry<C = NoClassifier> {
    processors: Vec<Arc<dyn DomainProcessor>>,
    classifier: Option<ClassifierAdapter<C>>,
    scorer: ConfidenceScorer,
    config: ResolverConfig,
    metrics: RegistryMetrics,
}

impl CommandRegistry {
    /// An empty registry without a classifier.
    pub fn new(config: ResolverConfig) -> Self {
        Self::empty(config)
    }

    /// A registry with one processor per pack of `library`.
    pub fn with_builtins(library: &PatternLibrary, config: ResolverConfig) -> Self {
        let mut registry = Self::new(config);
        registry.register_library(library);
        registry
    }
}

impl CommandRegistry<HttpIntentClassifier> {
    /// Registry for a project: packs and custom packs from `root`, resolver
    /// settings from `config`, and the HTTP classifier when enabled.
    pub fn from_config(root: &Path, config: &RestyleConfig) -> Self {
        let library = PatternLibrary::from_config(root, config);
        let mut registry = Self::empty(config.resolver.clone());
        registry.register_library(&library);

        if config.classifier.effective_enabled() {
            match config.classifier.endpoint.as_deref() {
                Some(endpoint) => match HttpIntentClassifier::new(endpoint) {
                    Ok(classifier) => {
                        registry.classifier = Some(ClassifierAdapter::new(classifier, &config.classifier));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e.coded_string(), "intent classifier disabled");
                    }
                },
                None => tracing::warn!("intent classifier enabled without an endpoint"),
            }
        }
        registry
    }
}

impl<C: IntentClassifier> CommandRegistry<C> {
    fn empty(config: ResolverConfig) -> Self {
        Self {
            processors: Vec::new(),
            classifier: None,
            scorer: ConfidenceScorer::new(&config),
            config,
            metrics: RegistryMetrics::default(),
        }
    }

    /// Swap in an intent classifier, keeping processors and metrics.
    pub fn with_classifier<D: IntentClassifier>(
        self,
        classifier: D,
        config: &ClassifierConfig,
    ) -> CommandRegistry<D> {
        CommandRegistry {
            processors: self.processors,
            classifier: Some(ClassifierAdapter::new(classifier, config)),
            scorer: self.scorer,
            config: self.config,
            metrics: self.metrics,
        }
    }

    /// Validate and register a processor. An existing processor with the
    /// same id is replaced in place, keeping its registration order.
    pub fn register_processor(
        &mut self,
        processor: Arc<dyn DomainProcessor>,
    ) -> Result<(), RegistrationError> {
        if let Err(e) = processor.metadata().validate() {
            tracing::warn!(
                processor_id = processor.id(),
                error = %e.coded_string(),
                "rejected processor registration"
            );
            return Err(e);
        }
        let patterns = processor.patterns().len();
        match self.processors.iter_mut().find(|p| p.id() == processor.id()) {
            Some(slot) => {
                tracing::debug!(processor_id = processor.id(), patterns, "replacing processor");
                *slot = processor;
            }
            None => {
                tracing::debug!(processor_id = processor.id(), patterns, "registered processor");
                self.processors.push(processor);
            }
        }
        Ok(())
    }

    /// Register a processor for every pack in `library`. Invalid packs are
    /// logged and skipped.
    pub fn register_library(&mut self, library: &PatternLibrary) {
        for processor in builtin_processors(library) {
            // Rejections are already logged by register_processor.
            let _ = self.register_processor(processor);
        }
    }

    pub fn processor(&self, id: &str) -> Option<&Arc<dyn DomainProcessor>> {
        self.processors.iter().find(|p| p.id() == id)
    }

    pub fn processors(&self) -> &[Arc<dyn DomainProcessor>] {
        &self.processors
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn classifier(&self) -> Option<&ClassifierAdapter<C>> {
        self.classifier.as_ref()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Every pattern of every processor that matches `text` for the
    /// selected component, in registration and pattern order.
    pub fn discover(&self, text: &str, ctx: &StyleContext) -> Vec<MatchCandidate> {
        let component = ctx.component_type;
        let mut candidates = Vec::new();
        for processor in &self.processors {
            let metadata = processor.metadata();
            let in_context = metadata.context_types.includes(component);
            for pattern in processor.patterns() {
                if !pattern.applies_to(component) {
                    continue;
                }
                if let Some(matched) = pattern.captures(text) {
                    candidates.push(MatchCandidate {
                        processor_id: metadata.id.clone(),
                        pattern_id: pattern.id().to_string(),
                        property: pattern.property(),
                        matched_value: matched.matched_value().to_string(),
                        priority: pattern.priority(),
                        processor_priority: metadata.priority,
                        in_context,
                    });
                }
            }
        }
        candidates
    }

    /// Resolve one command against the selected component.
    ///
    /// `None` means no processor could handle the text. An applied result
    /// becomes the session's follow-up target; a prompt leaves it alone.
    pub async fn resolve(
        &self,
        text: &str,
        ctx: &StyleContext,
        session: &mut EditingSession,
    ) -> Option<Resolution> {
        let input = normalize_input(text);
        if input.is_empty() {
            return None;
        }
        let started = Instant::now();
        let resolution = self.resolve_normalized(&input, ctx, session).await;
        self.finish(&input, resolution, session, started)
    }

    /// Count a finished resolution and move the follow-up target.
    fn finish(
        &self,
        input: &str,
        resolution: Option<Resolution>,
        session: &mut EditingSession,
        started: Instant,
    ) -> Option<Resolution> {
        self.metrics.record_resolution();
        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &resolution {
            Some(resolution) => {
                if let Some(property) = resolution.patch().and_then(Patch::primary_property) {
                    session.record(property, &resolution.processor_id);
                }
                tracing::debug!(
                    processor_id = %resolution.processor_id,
                    path = ?resolution.path,
                    elapsed_ms,
                    "command resolved"
                );
            }
            None => {
                self.metrics.record_no_match();
                tracing::debug!(input = %input, elapsed_ms, "no processor handled command");
            }
        }
        resolution
    }

    async fn resolve_normalized(
        &self,
        input: &str,
        ctx: &StyleContext,
        session: &EditingSession,
    ) -> Option<Resolution> {
        if self.config.effective_followup() {
            if let Some(resolution) = self.try_followup(input, ctx, session) {
                self.metrics.record_followup();
                return Some(resolution);
            }
        }

        if self.config.effective_fast_path() {
            if let Some(resolution) = self.try_fast_path(input, ctx) {
                self.metrics.record_fast_path();
                return Some(resolution);
            }
        }

        let candidates = self.discover(input, ctx);
        if candidates.is_empty() {
            return None;
        }

        let mut tried: FxHashSet<String> = FxHashSet::default();
        if let Some(resolution) = self.try_direct(input, ctx, &candidates, &mut tried) {
            self.metrics.record_direct_pattern();
            return Some(resolution);
        }

        let mut ranked = self.scorer.rank(candidates.clone(), None);
        if !self.scorer.is_outright(&ranked) {
            if let Some(adapter) = &self.classifier {
                let intent = adapter.classify(input).await;
                self.metrics.record_classifier_call(intent.is_some());
                if let Some(intent) = intent {
                    ranked = self.scorer.rank(candidates, Some(&intent));
                }
            }
        }

        for processor_id in self.scorer.dispatch_order(&ranked) {
            if tried.contains(&processor_id) {
                continue;
            }
            let Some(processor) = self.processor(&processor_id) else {
                continue;
            };
            if let Some(result) = self.dispatch(processor, input, ctx) {
                let score = ranked
                    .iter()
                    .find(|s| s.candidate.processor_id == processor_id)
                    .map_or(0.0, |s| s.score);
                tracing::debug!(processor_id = %processor_id, score, "scored dispatch");
                self.metrics.record_scored();
                return Some(Resolution {
                    processor_id,
                    path: ResolutionPath::Scored,
                    result,
                });
            }
            tried.insert(processor_id);
        }
        None
    }

    fn try_followup(
        &self,
        input: &str,
        ctx: &StyleContext,
        session: &EditingSession,
    ) -> Option<Resolution> {
        let adjustment = session::parse_relative(input)?;
        let (property, processor_id) = session.target()?;
        let processor = self.processor(processor_id)?;
        let result = self.dispatch_relative(processor, property, adjustment, ctx, input)?;
        Some(Resolution {
            processor_id: processor_id.to_string(),
            path: ResolutionPath::Followup,
            result,
        })
    }

    fn try_fast_path(&self, input: &str, ctx: &StyleContext) -> Option<Resolution> {
        let route = fast_path::lookup(input)?;
        let processor = self
            .processors
            .iter()
            .find(|p| p.metadata().domain == route.domain)?;
        let result = self.dispatch(processor, &route.command, ctx)?;
        Some(Resolution {
            processor_id: processor.id().to_string(),
            path: ResolutionPath::FastPath,
            result,
        })
    }

    /// Dispatch processors owning a priority-100 match, highest base priority first.
    fn try_direct(
        &self,
        input: &str,
        ctx: &StyleContext,
        candidates: &[MatchCandidate],
        tried: &mut FxHashSet<String>,
    ) -> Option<Resolution> {
        let mut direct: Vec<&MatchCandidate> =
            candidates.iter().filter(|c| c.priority >= 100).collect();
        direct.sort_by(|a, b| b.processor_priority.cmp(&a.processor_priority));
        for candidate in direct {
            if !tried.insert(candidate.processor_id.clone()) {
                continue;
            }
            let Some(processor) = self.processor(&candidate.processor_id) else {
                continue;
            };
            if let Some(result) = self.dispatch(processor, input, ctx) {
                return Some(Resolution {
                    processor_id: candidate.processor_id.clone(),
                    path: ResolutionPath::DirectPattern,
                    result,
                });
            }
        }
        None
    }

    /// Run a processor, converting faults and panics into `None`.
    fn dispatch(
        &self,
        processor: &Arc<dyn DomainProcessor>,
        text: &str,
        ctx: &StyleContext,
    ) -> Option<CommandResult> {
        let outcome = catch_unwind(AssertUnwindSafe(|| processor.process_command(text, ctx)));
        self.settle(processor.id(), text, outcome)
    }

    fn dispatch_relative(
        &self,
        processor: &Arc<dyn DomainProcessor>,
        property: Property,
        adjustment: RelativeAdjustment,
        ctx: &StyleContext,
        text: &str,
    ) -> Option<CommandResult> {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            processor.process_relative(property, adjustment, ctx)
        }));
        self.settle(processor.id(), text, outcome)
    }

    fn settle(&self, processor_id: &str, text: &str, outcome: ProcessorOutcome) -> Option<CommandResult> {
        match outcome {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                self.metrics.record_processor_fault();
                tracing::warn!(
                    processor_id,
                    input = text,
                    error = %e.coded_string(),
                    "processor fault, treating as no match"
                );
                None
            }
            Err(_) => {
                self.metrics.record_processor_fault();
                tracing::error!(processor_id, input = text, "processor panicked during resolution");
                None
            }
        }
    }

    /// Resolve a command that may chain several edits ("set padding to 8px
    /// and make the text red").
    ///
    /// The whole text is tried first. Otherwise each part is resolved
    /// against the context with earlier parts applied and the patches are
    /// merged, later changes winning. A prompt from any part is returned as
    /// is; parts nobody handles are skipped.
    pub async fn resolve_compound(
        &self,
        text: &str,
        ctx: &StyleContext,
        session: &mut EditingSession,
    ) -> Option<Resolution> {
        let parts = split_compound(text);
        if !self.config.effective_split_conjunctions() || parts.len() < 2 {
            return self.resolve(text, ctx, session).await;
        }
        // A miss on the whole text is not counted; the parts are.
        let input = normalize_input(text);
        let started = Instant::now();
        if let Some(whole) = self.resolve_normalized(&input, ctx, session).await {
            return self.finish(&input, Some(whole), session, started);
        }

        let mut current = ctx.clone();
        let mut merged = Patch::new();
        let mut messages = Vec::new();
        let mut first: Option<(String, ResolutionPath)> = None;
        for part in &parts {
            let Some(resolution) = self.resolve(part, &current, session).await else {
                tracing::debug!(part = %part, "compound part not handled");
                continue;
            };
            match resolution.result {
                CommandResult::Prompt(_) => return Some(resolution),
                CommandResult::Applied(applied) => {
                    current = current.apply(&applied.patch);
                    merged.merge(&applied.patch);
                    messages.push(applied.message);
                    first.get_or_insert((resolution.processor_id, resolution.path));
                }
            }
        }

        let (processor_id, path) = first?;
        Some(Resolution {
            processor_id,
            path,
            result: CommandResult::applied(merged, messages.join("; ")),
        })
    }
}

/// Trim, collapse whitespace and drop trailing punctuation and a trailing
/// "please".
pub fn normalize_input(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let is_end_punct = |c: char| matches!(c, '.' | '!' | '?');
    let mut input = collapsed.trim_end_matches(is_end_punct).trim_end();
    const PLEASE: &str = " please";
    if let Some(tail) = input.len().checked_sub(PLEASE.len()).and_then(|at| input.get(at..)) {
        if tail.eq_ignore_ascii_case(PLEASE) {
            input = input[..input.len() - PLEASE.len()]
                .trim_end_matches(',')
                .trim_end_matches(is_end_punct)
                .trim_end();
        }
    }
    input.to_string()
}

/// Split on `and`, `then`, commas and semicolons. Commas inside
/// parentheses (`rgba(0, 0, 0, 0.5)`) do not split.
pub fn split_compound(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' | ';' if depth == 0 => {
                chunks.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    chunks.push(&text[start..]);

    let mut parts = Vec::new();
    for chunk in chunks {
        let mut words: Vec<&str> = Vec::new();
        for word in chunk.split_whitespace() {
            if word.eq_ignore_ascii_case("and") || word.eq_ignore_ascii_case("then") {
                push_part(&mut parts, &mut words);
            } else {
                words.push(word);
            }
        }
        push_part(&mut parts, &mut words);
    }
    parts
}

fn push_part(parts: &mut Vec<String>, words: &mut Vec<&str>) {
    if !words.is_empty() {
        parts.push(words.join(" "));
        words.clear();
    }
}
