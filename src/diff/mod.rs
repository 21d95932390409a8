//! Compatibility diff against the published baseline.
//!
//! Compares the candidate document with the last published one and classifies
//! every structural delta. Severity depends on direction and on version
//! stability: additions are informational, mutations of published fields are
//! failures, and removals fail everywhere except the experimental version,
//! where they only warn.
//!
//! Newly added fields are passed back through the field rules, so a new field
//! cannot dodge the casing or cross-version checks just because the rest of
//! its type already shipped.
//!
//! Action and error-case removals are deliberately surfaced as notes only,
//! never classified. That asymmetry matches current gate behavior and is
//! pinned by tests.

use crate::protocol::{Protocol, TypeDef, EXPERIMENTAL_VERSION};
use crate::report::{Note, NoteKind};
use crate::rules::{Diagnostic, RuleId, RuleSet, Severity};

/// The diff's output: classified diagnostics plus informational notes.
#[derive(Debug, Default)]
pub struct DiffReport {
    pub diagnostics: Vec<Diagnostic>,
    pub notes: Vec<Note>,
}

impl DiffReport {
    fn note(&mut self, kind: NoteKind, text: impl Into<String>) {
        self.notes.push(Note::new(kind, text));
    }
}

/// Compares a candidate protocol against a baseline.
///
/// Borrows the [`RuleSet`] so the field rules applied to added fields are the
/// same objects the validation pass uses.
pub struct DiffEngine<'a> {
    rules: &'a RuleSet,
}

impl<'a> DiffEngine<'a> {
    /// Create a diff engine sharing the given rule set.
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Classify every delta between candidate and baseline.
    pub fn diff(&self, candidate: &Protocol, baseline: &Protocol) -> DiffReport {
        let mut report = DiffReport::default();

        self.action_additions(candidate, baseline, &mut report);
        self.type_additions_and_mutations(candidate, baseline, &mut report);
        self.action_removals(candidate, baseline, &mut report);
        self.type_removals(candidate, baseline, &mut report);

        report
    }

    fn action_additions(&self, candidate: &Protocol, baseline: &Protocol, out: &mut DiffReport) {
        for (version, actions) in &candidate.actions {
            if !baseline.actions.contains_key(version) {
                out.note(NoteKind::Addition, format!("new action version: {version}"));
            }
            for name in actions.keys() {
                let known = baseline
                    .actions
                    .get(version)
                    .is_some_and(|a| a.contains_key(name));
                if !known {
                    out.note(NoteKind::Addition, format!("new action: {version}.{name}"));
                }
            }
        }
    }

    fn type_additions_and_mutations(
        &self,
        candidate: &Protocol,
        baseline: &Protocol,
        out: &mut DiffReport,
    ) {
        let empty = TypeDef::default();

        for (version, types) in &candidate.types {
            if !baseline.types.contains_key(version) {
                out.note(NoteKind::Addition, format!("new version: {version}"));
            }
            for (type_name, ty) in types {
                let base_type = match baseline.get_type(version, type_name) {
                    Some(base) => {
                        if base.deprecated != ty.deprecated {
                            out.notes.push(Note::changed(
                                format!("{version}.{type_name} has changed deprecated status"),
                                base.deprecated.to_string(),
                                ty.deprecated.to_string(),
                            ));
                        }
                        if base.doc != ty.doc {
                            out.notes.push(Note::changed(
                                format!("{version}.{type_name} has changed its doc string"),
                                base.doc.clone(),
                                ty.doc.clone(),
                            ));
                        }
                        base
                    }
                    None => {
                        out.note(NoteKind::Addition, format!("new type: {version}.{type_name}"));
                        // A brand-new type's fields are all new fields.
                        &empty
                    }
                };

                for (field_name, field) in &ty.fields {
                    match base_type.fields.get(field_name) {
                        None => {
                            out.note(
                                NoteKind::Addition,
                                format!("new field in {version}.{type_name}: {field_name}"),
                            );
                            out.diagnostics.extend(self.rules.check_field(
                                version, type_name, field_name, field,
                            ));
                        }
                        Some(base_field) => {
                            // Breaking-mutation checks run before the cosmetic
                            // ones; neither suppresses the other.
                            if field.ty != base_field.ty {
                                if base_field.effective_version(version) == EXPERIMENTAL_VERSION {
                                    out.notes.push(Note::changed(
                                        format!(
                                            "{version}.{type_name} field {field_name} changed types (pre-stable)"
                                        ),
                                        base_field.ty.clone(),
                                        field.ty.clone(),
                                    ));
                                } else {
                                    out.diagnostics.push(Diagnostic::failure(
                                        RuleId::new("field-type-changed"),
                                        format!(
                                            "{version}.{type_name} field {field_name} changed types (was {}, now {})",
                                            base_field.ty, field.ty
                                        ),
                                    ));
                                }
                            }
                            if field.is_list != base_field.is_list {
                                out.diagnostics.push(Diagnostic::failure(
                                    RuleId::new("field-list-changed"),
                                    format!(
                                        "{version}.{type_name} field {field_name} changed list state (was {}, now {})",
                                        base_field.is_list, field.is_list
                                    ),
                                ));
                            }
                            if field.doc != base_field.doc {
                                out.notes.push(Note::changed(
                                    format!(
                                        "{version}.{type_name} field {field_name} changed its doc string"
                                    ),
                                    base_field.doc.clone(),
                                    field.doc.clone(),
                                ));
                            }
                            if field.example != base_field.example {
                                out.notes.push(Note::changed(
                                    format!(
                                        "{version}.{type_name} field {field_name} changed its example"
                                    ),
                                    base_field.example.clone(),
                                    field.example.clone(),
                                ));
                            }
                        }
                    }
                }
            }
        }
    }

    fn action_removals(&self, candidate: &Protocol, baseline: &Protocol, out: &mut DiffReport) {
        for (version, actions) in &baseline.actions {
            if !candidate.actions.contains_key(version) {
                out.note(
                    NoteKind::Removal,
                    format!("removed action version: {version}"),
                );
            }
            for (name, action) in actions {
                match candidate.actions.get(version).and_then(|a| a.get(name)) {
                    None => {
                        out.note(NoteKind::Removal, format!("removed action: {version}.{name}"));
                    }
                    Some(current) => {
                        for error in &action.errors {
                            if !current.has_error(&error.name) {
                                out.note(
                                    NoteKind::Removal,
                                    format!(
                                        "removed error case on {version}.{name}: {}",
                                        error.name
                                    ),
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    fn type_removals(&self, candidate: &Protocol, baseline: &Protocol, out: &mut DiffReport) {
        for (version, types) in &baseline.types {
            let severity = removal_severity(version);

            if !candidate.types.contains_key(version) {
                out.diagnostics.push(Diagnostic::new(
                    RuleId::new("version-removed"),
                    severity,
                    format!("version {version} removed"),
                ));
            }

            for (type_name, ty) in types {
                let current = match candidate.get_type(version, type_name) {
                    Some(current) => current,
                    None => {
                        out.diagnostics.push(Diagnostic::new(
                            RuleId::new("type-removed"),
                            severity,
                            format!("removed type: {version}.{type_name}"),
                        ));
                        // Field removals are only reported while the owning
                        // type still exists.
                        continue;
                    }
                };

                for field_name in ty.fields.keys() {
                    if !current.fields.contains_key(field_name) {
                        out.diagnostics.push(Diagnostic::new(
                            RuleId::new("field-removed"),
                            severity,
                            format!("field in {version}.{type_name} removed: {field_name}"),
                        ));
                    }
                }
            }
        }
    }
}

/// Removals from the experimental version are expected; everywhere else they
/// break published clients.
fn removal_severity(version: &str) -> Severity {
    if version == EXPERIMENTAL_VERSION {
        Severity::Warning
    } else {
        Severity::Failure
    }
}
