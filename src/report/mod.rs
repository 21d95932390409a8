//! Result aggregation.
//!
//! The [`Report`] merges the outputs of the document rules and the
//! compatibility diff into ordered failure and warning sequences, plus the
//! informational notes the diff surfaces for human review. It decides the
//! exit status and nothing else; rendering and metrics are collaborators fed
//! by it.

pub mod render;

pub use render::Renderer;

use crate::rules::{Diagnostic, Severity};

/// An informational observation from the compatibility diff. Notes are shown
/// on the console but never enter the failure or warning tallies.
#[derive(Debug, Clone)]
pub struct Note {
    pub kind: NoteKind,
    pub text: String,
    /// Old/new values for cosmetic text changes, rendered as a unified diff.
    pub diff: Option<(String, String)>,
}

/// What kind of structural delta a note describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// Present in the candidate, absent in the baseline.
    Addition,
    /// Present in both with cosmetic differences.
    Change,
    /// Present in the baseline, absent in the candidate, but deliberately
    /// not classified (action and error-case removals).
    Removal,
}

impl Note {
    /// Create a note without an old/new payload.
    pub fn new(kind: NoteKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            diff: None,
        }
    }

    /// Create a change note carrying the old and new text.
    pub fn changed(
        text: impl Into<String>,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        Self {
            kind: NoteKind::Change,
            text: text.into(),
            diff: Some((old.into(), new.into())),
        }
    }
}

/// The merged, classified outcome of a validation run.
#[derive(Debug, Default)]
pub struct Report {
    failures: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    notes: Vec<Note>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one diagnostic by severity, preserving arrival order.
    pub fn record(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Failure => self.failures.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    /// Route a batch of diagnostics.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.record(diagnostic);
        }
    }

    /// Append an informational note.
    pub fn note(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Append a batch of notes.
    pub fn extend_notes(&mut self, notes: impl IntoIterator<Item = Note>) {
        self.notes.extend(notes);
    }

    /// Failures, in the order they were produced.
    pub fn failures(&self) -> &[Diagnostic] {
        &self.failures
    }

    /// Warnings, in the order they were produced.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Informational notes, in the order they were produced.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The run fails if and only if at least one failure was classified.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Process exit code: warnings never affect it.
    pub fn exit_code(&self) -> u8 {
        if self.has_failures() {
            1
        } else {
            0
        }
    }
}
