//! Request/response reference integrity.
//!
//! Every action's request type, and its response type when one is declared,
//! must resolve to a type in the same version. Builtin pseudo-types (a bare
//! string payload) never need a corresponding declared type.

use std::collections::BTreeSet;

use crate::protocol::Protocol;
use crate::rules::{Diagnostic, DocumentRule, RuleId};

/// Type names that never require a declared type entry.
#[derive(Debug, Clone)]
pub struct BuiltinTypes(BTreeSet<String>);

impl BuiltinTypes {
    /// Build an allow-list from explicit names.
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Whether the name is a builtin.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

impl Default for BuiltinTypes {
    fn default() -> Self {
        Self::new(["String"])
    }
}

/// Validates that request and response type references resolve.
pub struct ReferenceIntegrityRule {
    builtins: BuiltinTypes,
}

impl ReferenceIntegrityRule {
    /// Create the rule with an explicit builtin allow-list.
    pub fn new(builtins: BuiltinTypes) -> Self {
        Self { builtins }
    }

    fn resolves(&self, protocol: &Protocol, version: &str, name: &str) -> bool {
        self.builtins.contains(name) || protocol.get_type(version, name).is_some()
    }
}

impl Default for ReferenceIntegrityRule {
    fn default() -> Self {
        Self::new(BuiltinTypes::default())
    }
}

impl DocumentRule for ReferenceIntegrityRule {
    fn id(&self) -> RuleId {
        RuleId::new("reference-integrity")
    }

    fn check(&self, protocol: &Protocol) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (version, actions) in &protocol.actions {
            for (action_name, action) in actions {
                if !self.resolves(protocol, version, &action.request) {
                    diagnostics.push(Diagnostic::failure(
                        RuleId::new("request-type-exists"),
                        format!(
                            "action {version}.{action_name} has request type {} but no such type exists (is it referencing another version?)",
                            action.request
                        ),
                    ));
                }
                if !action.response.is_empty() && !self.resolves(protocol, version, &action.response)
                {
                    diagnostics.push(Diagnostic::failure(
                        RuleId::new("response-type-exists"),
                        format!(
                            "action {version}.{action_name} has response type {} but no such type exists (is it referencing another version?)",
                            action.response
                        ),
                    ));
                }
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Action, TypeDef};
    use std::collections::BTreeMap;

    fn protocol_with(action: Action, types: &[&str]) -> Protocol {
        let mut protocol = Protocol {
            doc_version: "1".into(),
            ..Default::default()
        };
        protocol
            .actions
            .insert("v1".into(), BTreeMap::from([("send".into(), action)]));
        protocol.types.insert(
            "v1".into(),
            types
                .iter()
                .map(|name| (name.to_string(), TypeDef::default()))
                .collect(),
        );
        protocol
    }

    #[test]
    fn resolving_request_and_response_pass() {
        let action = Action {
            request: "SendRequest".into(),
            response: "SendResponse".into(),
            ..Default::default()
        };
        let protocol = protocol_with(action, &["SendRequest", "SendResponse"]);

        assert!(ReferenceIntegrityRule::default().check(&protocol).is_empty());
    }

    #[test]
    fn missing_request_type_fails() {
        let action = Action {
            request: "SendRequest".into(),
            ..Default::default()
        };
        let protocol = protocol_with(action, &[]);

        let diagnostics = ReferenceIntegrityRule::default().check(&protocol);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, RuleId::new("request-type-exists"));
        assert!(diagnostics[0].message.contains("v1.send"));
        assert!(diagnostics[0].message.contains("SendRequest"));
    }

    #[test]
    fn missing_response_type_fails_and_names_action_and_version() {
        let action = Action {
            request: "SendRequest".into(),
            response: "SendResponse".into(),
            ..Default::default()
        };
        let protocol = protocol_with(action, &["SendRequest"]);

        let diagnostics = ReferenceIntegrityRule::default().check(&protocol);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, RuleId::new("response-type-exists"));
        assert!(diagnostics[0].message.contains("v1.send"));
        assert!(diagnostics[0].message.contains("SendResponse"));
    }

    #[test]
    fn empty_response_needs_no_type() {
        let action = Action {
            request: "SendRequest".into(),
            ..Default::default()
        };
        let protocol = protocol_with(action, &["SendRequest"]);

        assert!(ReferenceIntegrityRule::default().check(&protocol).is_empty());
    }

    #[test]
    fn builtin_string_response_never_needs_to_resolve() {
        let action = Action {
            request: "SendRequest".into(),
            response: "String".into(),
            ..Default::default()
        };
        let protocol = protocol_with(action, &["SendRequest"]);

        assert!(ReferenceIntegrityRule::default().check(&protocol).is_empty());
    }

    #[test]
    fn builtin_set_is_injectable() {
        let action = Action {
            request: "Blob".into(),
            ..Default::default()
        };
        let protocol = protocol_with(action, &[]);

        let strict = ReferenceIntegrityRule::default();
        let lenient = ReferenceIntegrityRule::new(BuiltinTypes::new(["String", "Blob"]));

        assert_eq!(strict.check(&protocol).len(), 1);
        assert!(lenient.check(&protocol).is_empty());
    }

    #[test]
    fn type_in_another_version_does_not_resolve() {
        let action = Action {
            request: "SendRequest".into(),
            ..Default::default()
        };
        let mut protocol = protocol_with(action, &[]);
        protocol.types.insert(
            "v0".into(),
            BTreeMap::from([("SendRequest".into(), TypeDef::default())]),
        );

        assert_eq!(ReferenceIntegrityRule::default().check(&protocol).len(), 1);
    }
}
