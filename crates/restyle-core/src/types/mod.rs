//! Style data model shared by the pattern library, processors and registry.

pub mod component;
pub mod context;
pub mod length;
pub mod patch;
pub mod pattern;
pub mod property;
pub mod relative;
pub mod result;
pub mod shadow;
pub mod value;

pub use component::{ComponentType, ContextTypes};
pub use context::StyleContext;
pub use length::{format_number, Length, LengthUnit};
pub use patch::{Change, HostPatch, Patch, PatchValue};
pub use pattern::{PatternAction, PatternRule, RuleMatch};
pub use property::{Domain, PatchTarget, Property, ValueShape};
pub use relative::{Direction, RelativeAdjustment};
pub use result::{
    AppliedCommand, CommandResult, FollowUp, Prompt, Resolution, ResolutionPath,
};
pub use shadow::BoxShadow;
pub use value::StyleValue;
