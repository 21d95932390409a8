//! Field-scope rules.
//!
//! Each rule is pure and inspects a single `(version, type, field)` tuple.

pub mod casing;
pub mod cross_version;

pub use casing::CasingRule;
pub use cross_version::CrossVersionReferenceRule;
