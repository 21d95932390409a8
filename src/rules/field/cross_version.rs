//! Cross-version reference check.
//!
//! Protocol versions are self-contained snapshots: a field may not declare a
//! dependency on a type defined in a different version. An empty `version`
//! attribute means "same version as the owner" and is always fine.

use crate::protocol::DataType;
use crate::rules::{Diagnostic, FieldRule, RuleId};

/// Rejects fields whose type reference points at another protocol version.
pub struct CrossVersionReferenceRule;

impl FieldRule for CrossVersionReferenceRule {
    fn id(&self) -> RuleId {
        RuleId::new("cross-version-reference")
    }

    fn check(
        &self,
        version: &str,
        type_name: &str,
        field_name: &str,
        field: &DataType,
    ) -> Vec<Diagnostic> {
        if field.version.is_empty() || field.version == version {
            return vec![];
        }

        vec![Diagnostic::failure(
            self.id(),
            format!(
                "{version}.{type_name} field {field_name} references type {} from version {}",
                field.ty, field.version
            ),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;

    #[test]
    fn empty_version_passes() {
        let field = DataType {
            ty: "Address".into(),
            ..Default::default()
        };
        let diagnostics =
            CrossVersionReferenceRule.check("v1", "Account", "address", &field);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn matching_version_passes() {
        let field = DataType {
            ty: "Address".into(),
            version: "v1".into(),
            ..Default::default()
        };
        let diagnostics =
            CrossVersionReferenceRule.check("v1", "Account", "address", &field);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn differing_version_fails() {
        let field = DataType {
            ty: "Address".into(),
            version: "v0".into(),
            ..Default::default()
        };
        let diagnostics =
            CrossVersionReferenceRule.check("v1", "Account", "address", &field);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Failure);
        assert!(diagnostics[0].message.contains("v0"));
        assert!(diagnostics[0].message.contains("address"));
    }
}
