//! # restyle-engine
//!
//! Turns free-text styling commands ("make the background darker", "add a
//! subtle shadow", "padding: 12px") into patches for the selected component.
//!
//! Pattern packs feed one processor per styling domain. The
//! [`CommandRegistry`] discovers matching patterns, scores them, optionally
//! asks an intent classifier, and dispatches with fallback.

pub mod classifier;
pub mod patterns;
pub mod presets;
pub mod processors;
pub mod registry;
pub mod scoring;
pub mod session;
pub mod values;

pub use classifier::{ClassifierAdapter, HttpIntentClassifier, NoClassifier};
pub use patterns::{CompiledPack, PatternLibrary};
pub use processors::{builtin_processors, processor_for, DomainRules, PatternProcessor};
pub use registry::{CommandRegistry, MetricsSnapshot};
pub use scoring::{ConfidenceScorer, MatchCandidate, ScoredCandidate};
pub use session::{EditingSession, FollowupState};
