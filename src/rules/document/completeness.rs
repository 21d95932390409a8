//! Document completeness check.
//!
//! A publishable document needs a `doc_version`, at least one version with at
//! least one action, and at least one version with at least one type.

use crate::protocol::Protocol;
use crate::rules::{Diagnostic, DocumentRule, RuleId};

/// Validates that the critical top-level sections are present and non-empty.
pub struct CompletenessRule;

impl DocumentRule for CompletenessRule {
    fn id(&self) -> RuleId {
        RuleId::new("completeness")
    }

    fn check(&self, protocol: &Protocol) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if protocol.doc_version.is_empty() {
            diagnostics.push(Diagnostic::failure(
                self.id(),
                "root doc_version field is empty",
            ));
        }

        if protocol.actions.is_empty() {
            diagnostics.push(Diagnostic::failure(self.id(), "actions list is empty"));
        } else {
            for (version, actions) in &protocol.actions {
                if actions.is_empty() {
                    diagnostics.push(Diagnostic::failure(
                        self.id(),
                        format!(".actions.{version} is empty"),
                    ));
                }
            }
        }

        if protocol.types.is_empty() {
            diagnostics.push(Diagnostic::failure(self.id(), "types list is empty"));
        } else {
            for (version, types) in &protocol.types {
                if types.is_empty() {
                    diagnostics.push(Diagnostic::failure(
                        self.id(),
                        format!(".types.{version} is empty"),
                    ));
                }
            }
        }

        diagnostics
    }
}
