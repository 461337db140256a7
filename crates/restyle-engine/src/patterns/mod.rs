//! Pattern library: TOML-driven, user-extensible command patterns.
//!
//! - `types.rs`: PackSpec / PatternDef serde types
//! - `loader.rs`: TOML parsing, macro expansion, validation → CompiledPack
//! - `library.rs`: built-in packs + `.restyle/patterns/` custom packs
//! - `diagnostics.rs`: load counters and pack versions

pub mod diagnostics;
pub mod library;
pub mod loader;
pub mod types;

pub use diagnostics::PatternDiagnostics;
pub use library::PatternLibrary;
pub use loader::CompiledPack;
