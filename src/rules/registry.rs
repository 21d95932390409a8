//! Rule set: the ordered collection of all active rules.
//!
//! Rules run sequentially in registration order so the report is
//! reproducible. The field-rule list is shared with the compatibility diff,
//! which re-runs it against fields newly added relative to the baseline.

use super::document::{CompletenessRule, ErrorTypeRule, ReferenceIntegrityRule};
use super::field::{CasingRule, CrossVersionReferenceRule};
use super::overrides::CasingOverrides;
use super::rule::{DocumentRule, FieldRule};
use super::Diagnostic;
use crate::protocol::{DataType, Protocol};

/// Ordered registry of document and field rules.
pub struct RuleSet {
    document_rules: Vec<Box<dyn DocumentRule>>,
    field_rules: Vec<Box<dyn FieldRule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self {
            document_rules: Vec::new(),
            field_rules: Vec::new(),
        }
    }

    /// Create a rule set with all built-in rules and the published
    /// grandfather table.
    pub fn with_builtins() -> Self {
        let mut rules = Self::new();
        rules.register_document(Box::new(ReferenceIntegrityRule::default()));
        rules.register_document(Box::new(CompletenessRule));
        rules.register_document(Box::new(ErrorTypeRule));
        rules.register_field(Box::new(CasingRule::new(CasingOverrides::grandfathered())));
        rules.register_field(Box::new(CrossVersionReferenceRule));
        rules
    }

    /// Register a document rule. Runs after previously registered rules.
    pub fn register_document(&mut self, rule: Box<dyn DocumentRule>) {
        self.document_rules.push(rule);
    }

    /// Register a field rule. Runs after previously registered rules.
    pub fn register_field(&mut self, rule: Box<dyn FieldRule>) {
        self.field_rules.push(rule);
    }

    /// Run every document rule against the candidate.
    pub fn check_document(&self, protocol: &Protocol) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for rule in &self.document_rules {
            diagnostics.extend(rule.check(protocol));
        }
        diagnostics
    }

    /// Run every field rule against one field.
    pub fn check_field(
        &self,
        version: &str,
        type_name: &str,
        field_name: &str,
        field: &DataType,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for rule in &self.field_rules {
            diagnostics.extend(rule.check(version, type_name, field_name, field));
        }
        diagnostics
    }

    /// Number of registered rules (document + field).
    pub fn len(&self) -> usize {
        self.document_rules.len() + self.field_rules.len()
    }

    /// Whether no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.document_rules.is_empty() && self.field_rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::with_builtins()
    }
}
