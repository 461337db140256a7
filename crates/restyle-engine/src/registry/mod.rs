//! Command registry: processor registration, fast path and routing.

pub mod fast_path;
pub mod metrics;
pub mod router;

pub use fast_path::FastRoute;
pub use metrics::{MetricsSnapshot, RegistryMetrics};
pub use router::{normalize_input, split_compound, CommandRegistry};
