//! Classified diagnostic messages.
//!
//! A [`Diagnostic`] is the unit of output of every rule and of the
//! compatibility diff: which rule spoke, how severe the finding is, and a
//! human-readable description.

use super::rule::{RuleId, Severity};

/// A classified message produced by a rule or by the compatibility diff.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
        }
    }

    /// Shorthand for a failure diagnostic.
    pub fn failure(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Failure, message)
    }

    /// Shorthand for a warning diagnostic.
    pub fn warning(rule_id: RuleId, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Warning, message)
    }
}
