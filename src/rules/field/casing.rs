//! Naming-convention checks for types and fields.
//!
//! Type names are PascalCase: a name that does not start with an uppercase
//! letter is always a failure. Field names are snake_case: any uppercase
//! letter is a violation, downgraded to a warning for the experimental
//! version or for grandfathered historical fields.

use crate::protocol::{DataType, EXPERIMENTAL_VERSION};
use crate::rules::overrides::CasingOverrides;
use crate::rules::{Diagnostic, FieldRule, RuleId, Severity};

/// Validates type and field naming conventions.
pub struct CasingRule {
    overrides: CasingOverrides,
}

impl CasingRule {
    /// Create a casing rule with an explicit exception table.
    pub fn new(overrides: CasingOverrides) -> Self {
        Self { overrides }
    }

    fn field_severity(&self, version: &str, type_name: &str, field_name: &str) -> Severity {
        if version == EXPERIMENTAL_VERSION {
            return Severity::Warning;
        }
        if self.overrides.contains(version, type_name, field_name) {
            return Severity::Warning;
        }
        Severity::Failure
    }
}

impl FieldRule for CasingRule {
    fn id(&self) -> RuleId {
        RuleId::new("field-name-casing")
    }

    fn check(
        &self,
        version: &str,
        type_name: &str,
        field_name: &str,
        _field: &DataType,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if !type_name.chars().next().is_some_and(char::is_uppercase) {
            diagnostics.push(Diagnostic::failure(
                RuleId::new("type-name-casing"),
                format!("{version}.{type_name} does not start with a capital letter"),
            ));
        }

        // Report the first uppercase character only; one message per field.
        if field_name.chars().any(char::is_uppercase) {
            diagnostics.push(Diagnostic::new(
                self.id(),
                self.field_severity(version, type_name, field_name),
                format!(
                    "{version}.{type_name} has a field name with an upper case letter in it: {field_name}"
                ),
            ));
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> CasingRule {
        CasingRule::new(CasingOverrides::empty())
    }

    #[test]
    fn clean_names_produce_nothing() {
        let diagnostics = rule().check("v1", "Account", "address", &DataType::default());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn lowercase_type_name_is_a_failure() {
        let diagnostics = rule().check("v1", "account", "address", &DataType::default());

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, RuleId::new("type-name-casing"));
        assert_eq!(diagnostics[0].severity, Severity::Failure);
    }

    #[test]
    fn lowercase_type_name_fails_even_in_v0() {
        let diagnostics = rule().check("v0", "account", "address", &DataType::default());

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Failure);
    }

    #[test]
    fn uppercase_field_name_fails_outside_v0() {
        let diagnostics = rule().check("v1", "Account", "deviceId", &DataType::default());

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, RuleId::new("field-name-casing"));
        assert_eq!(diagnostics[0].severity, Severity::Failure);
        assert!(diagnostics[0].message.contains("deviceId"));
    }

    #[test]
    fn uppercase_field_name_warns_in_v0() {
        let diagnostics = rule().check("v0", "Account", "deviceId", &DataType::default());

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn grandfathered_field_warns_instead_of_failing() {
        let mut overrides = CasingOverrides::empty();
        overrides.insert("v1", "Account", "deviceId");
        let rule = CasingRule::new(overrides);

        let diagnostics = rule.check("v1", "Account", "deviceId", &DataType::default());

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn removing_an_override_turns_the_warning_into_a_failure() {
        // Regression guard for the grandfather table: the same triple without
        // its entry must fail.
        let with_entry = {
            let mut overrides = CasingOverrides::empty();
            overrides.insert("v1", "GroupList", "legacyGroups");
            CasingRule::new(overrides)
        };
        let without_entry = rule();
        let field = DataType::default();

        assert_eq!(
            with_entry.check("v1", "GroupList", "legacyGroups", &field)[0].severity,
            Severity::Warning
        );
        assert_eq!(
            without_entry.check("v1", "GroupList", "legacyGroups", &field)[0].severity,
            Severity::Failure
        );
    }

    #[test]
    fn multiple_uppercase_letters_report_once() {
        let diagnostics = rule().check("v1", "Account", "deviceIdAndMore", &DataType::default());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn bad_type_and_bad_field_both_reported() {
        let diagnostics = rule().check("v1", "account", "deviceId", &DataType::default());
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn empty_type_name_is_a_failure_not_a_panic() {
        let diagnostics = rule().check("v1", "", "address", &DataType::default());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule_id, RuleId::new("type-name-casing"));
    }
}
