//! Configuration system for restyle.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod classifier_config;
pub mod pattern_config;
pub mod resolver_config;
pub mod restyle_config;

pub use classifier_config::ClassifierConfig;
pub use pattern_config::PatternConfig;
pub use resolver_config::ResolverConfig;
pub use restyle_config::RestyleConfig;
