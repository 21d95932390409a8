//! Console rendering of the classified report.
//!
//! Notes are printed first (additions green, changes blue, removals red),
//! then one line per failure in bold red, then one line per warning in
//! yellow, then a summary count. Color is handled by the `console` crate and
//! disabled globally via `console::set_colors_enabled(false)`.

use std::io::Write;

use console::style;

use super::{Note, NoteKind, Report};

/// Writes a [`Report`] to a terminal-oriented writer.
pub struct Renderer;

impl Renderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render the full report.
    pub fn render<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        for note in report.notes() {
            self.render_note(note, writer)?;
        }

        for failure in report.failures() {
            writeln!(
                writer,
                "{}",
                style(format!("[{}] {}", failure.rule_id, failure.message))
                    .red()
                    .bold()
            )?;
        }

        for warning in report.warnings() {
            writeln!(
                writer,
                "{}",
                style(format!("[{}] {}", warning.rule_id, warning.message)).yellow()
            )?;
        }

        if report.has_failures() || !report.warnings().is_empty() {
            writeln!(
                writer,
                "{} failure(s), {} warning(s)",
                report.failures().len(),
                report.warnings().len()
            )?;
        }

        Ok(())
    }

    fn render_note<W: Write>(&self, note: &Note, writer: &mut W) -> std::io::Result<()> {
        match note.kind {
            NoteKind::Addition => writeln!(writer, "{}", style(&note.text).green().bold())?,
            NoteKind::Change => writeln!(writer, "{}", style(&note.text).blue())?,
            NoteKind::Removal => writeln!(writer, "{}", style(&note.text).red().bold())?,
        }
        if let Some((old, new)) = &note.diff {
            writeln!(writer, "{}", style(format!("- {old}")).red())?;
            writeln!(writer, "{}", style(format!("+ {new}")).green())?;
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Diagnostic, RuleId};

    fn render_to_string(report: &Report) -> String {
        console::set_colors_enabled(false);
        let mut output = Vec::new();
        Renderer::new().render(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn failures_carry_rule_id_and_message() {
        let mut report = Report::new();
        report.record(Diagnostic::failure(
            RuleId::new("type-removed"),
            "removed type: v1.Account",
        ));

        let output = render_to_string(&report);

        assert!(output.contains("[type-removed] removed type: v1.Account"));
        assert!(output.contains("1 failure(s), 0 warning(s)"));
    }

    #[test]
    fn failures_print_before_warnings() {
        let mut report = Report::new();
        report.record(Diagnostic::warning(RuleId::new("r"), "the warning"));
        report.record(Diagnostic::failure(RuleId::new("r"), "the failure"));

        let output = render_to_string(&report);
        let failure_at = output.find("the failure").unwrap();
        let warning_at = output.find("the warning").unwrap();

        assert!(failure_at < warning_at);
    }

    #[test]
    fn change_note_renders_old_and_new() {
        let mut report = Report::new();
        report.note(Note::changed("v1.Foo field bar changed its doc string", "old doc", "new doc"));

        let output = render_to_string(&report);

        assert!(output.contains("- old doc"));
        assert!(output.contains("+ new doc"));
    }

    #[test]
    fn clean_report_prints_nothing() {
        let output = render_to_string(&Report::new());
        assert!(output.is_empty());
    }

    #[test]
    fn notes_alone_print_no_summary() {
        let mut report = Report::new();
        report.note(Note::new(NoteKind::Addition, "new type: v1.Foo"));

        let output = render_to_string(&report);

        assert!(output.contains("new type: v1.Foo"));
        assert!(!output.contains("failure(s)"));
    }
}
