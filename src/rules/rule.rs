//! Rule definitions.
//!
//! This module provides the core traits and types for defining validation
//! rules:
//!
//! - [`DocumentRule`] - A check applied to a whole protocol document
//! - [`FieldRule`] - A check applied to a single field definition
//! - [`RuleId`] - Unique identifier for a rule
//! - [`Severity`] - Classification level for diagnostics (Warning, Failure)

use super::diagnostic::Diagnostic;
use crate::protocol::{DataType, Protocol};

/// Unique identifier for a validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification level for rule diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Tolerated violation (legacy or experimental). Reported but never
    /// affects the exit status.
    Warning,
    /// A real contract break. Any failure makes the run exit non-zero.
    Failure,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Failure => write!(f, "failure"),
        }
    }
}

/// A rule that validates a whole protocol document.
///
/// Document rules are total: they never fail themselves, they only return
/// diagnostics. Each rule is independent and runs unconditionally.
pub trait DocumentRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Check the document and return any diagnostics.
    fn check(&self, protocol: &Protocol) -> Vec<Diagnostic>;
}

/// A rule that validates a single field definition.
///
/// Field rules are pure: they inspect only the `(version, type, field)`
/// tuple they are given. The compatibility diff re-runs them against fields
/// newly added relative to the baseline.
pub trait FieldRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Check one field and return any diagnostics.
    fn check(
        &self,
        version: &str,
        type_name: &str,
        field_name: &str,
        field: &DataType,
    ) -> Vec<Diagnostic>;
}
