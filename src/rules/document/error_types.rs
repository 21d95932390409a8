//! Error-list integrity.
//!
//! Every error declared on an action must name a type that exists in the
//! action's version, and that type must be flagged as an error type.

use crate::protocol::Protocol;
use crate::rules::{Diagnostic, DocumentRule, RuleId};

/// Validates that action error lists only reference declared error types.
pub struct ErrorTypeRule;

impl DocumentRule for ErrorTypeRule {
    fn id(&self) -> RuleId {
        RuleId::new("error-type-integrity")
    }

    fn check(&self, protocol: &Protocol) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (version, actions) in &protocol.actions {
            for (action_name, action) in actions {
                for error in &action.errors {
                    match protocol.get_type(version, &error.name) {
                        None => diagnostics.push(Diagnostic::failure(
                            RuleId::new("error-type-exists"),
                            format!(
                                "action {version}.{action_name} has error {} but no such type exists (is it referencing another version?)",
                                error.name
                            ),
                        )),
                        Some(ty) if !ty.is_error => diagnostics.push(Diagnostic::failure(
                            RuleId::new("error-type-not-flagged"),
                            format!(
                                "action {version}.{action_name} has error {} but that type is not marked as an error",
                                error.name
                            ),
                        )),
                        Some(_) => {}
                    }
                }
            }
        }

        diagnostics
    }
}
