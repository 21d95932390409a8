//! protogate - compatibility quality gate for versioned protocol definitions.
//!
//! protogate validates a machine-readable protocol document (versions, data
//! types, actions) before publication: it applies structural and style rules
//! to the candidate and diffs it against the last published baseline,
//! classifying every difference as informational, a warning, or a hard
//! failure.
//!
//! # Modules
//!
//! - [`baseline`] - Fetching the published baseline document
//! - [`cli`] - Command-line argument parsing
//! - [`diff`] - Compatibility diff against the baseline
//! - [`error`] - Fatal error types and result alias
//! - [`metrics`] - Prometheus metrics persistence
//! - [`protocol`] - The protocol document model
//! - [`report`] - Result aggregation and console rendering
//! - [`rules`] - Document and field validation rules
//!
//! # Example
//!
//! ```
//! use protogate::protocol::Protocol;
//! use protogate::report::Report;
//! use protogate::rules::RuleSet;
//!
//! let candidate = Protocol::from_slice(br#"{"doc_version": ""}"#).unwrap();
//! let rules = RuleSet::with_builtins();
//! let mut report = Report::new();
//! report.extend(rules.check_document(&candidate));
//! assert!(report.has_failures());
//! ```

pub mod baseline;
pub mod cli;
pub mod diff;
pub mod error;
pub mod metrics;
pub mod protocol;
pub mod report;
pub mod rules;

pub use error::{ProtogateError, Result};
