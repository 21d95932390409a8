//! Document-scope rules.
//!
//! Each rule runs unconditionally against the whole candidate document.

pub mod completeness;
pub mod error_types;
pub mod references;

pub use completeness::CompletenessRule;
pub use error_types::ErrorTypeRule;
pub use references::{BuiltinTypes, ReferenceIntegrityRule};
