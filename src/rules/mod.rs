//! Structural and style validation for protocol documents.
//!
//! The rule system consists of:
//!
//! - **Document rules** - whole-document checks ([`DocumentRule`] trait)
//! - **Field rules** - single-field checks ([`FieldRule`] trait), also
//!   re-run by the compatibility diff against newly added fields
//! - **Rule set** - the ordered collection of active rules ([`RuleSet`])
//! - **Diagnostics** - classified findings ([`Diagnostic`])
//!
//! Every rule is total: it never fails, it only returns diagnostics. A
//! document that decodes successfully therefore always yields a complete
//! report.

pub mod diagnostic;
pub mod document;
pub mod field;
pub mod overrides;
pub mod registry;
pub mod rule;

pub use diagnostic::Diagnostic;
pub use document::{BuiltinTypes, CompletenessRule, ErrorTypeRule, ReferenceIntegrityRule};
pub use field::{CasingRule, CrossVersionReferenceRule};
pub use overrides::CasingOverrides;
pub use registry::RuleSet;
pub use rule::{DocumentRule, FieldRule, RuleId, Severity};
