//! Structured diagnostic messages.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured diagnostic message.
///
/// Diagnostics are the mechanism for reporting warnings and notes that do
/// not abort the current operation. Each diagnostic has a severity, a main
/// message, and optional explanatory footnotes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The main diagnostic message.
    pub message: String,
    /// Explanatory footnotes (e.g., "note: ...").
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Creates a new warning diagnostic with the given message.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Creates a new note diagnostic with the given message.
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Adds a footnote to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Diagnostic::error("e").severity, Severity::Error);
        assert_eq!(Diagnostic::warning("w").severity, Severity::Warning);
        assert_eq!(Diagnostic::note("n").severity, Severity::Note);
    }

    #[test]
    fn with_note_appends() {
        let diag = Diagnostic::warning("tag found multiple times")
            .with_note("using the first match");
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn display_includes_severity_and_notes() {
        let diag = Diagnostic::warning("energy is zero").with_note("degenerate input");
        let rendered = format!("{diag}");
        assert!(rendered.starts_with("warning: energy is zero"));
        assert!(rendered.contains("note: degenerate input"));
    }

    #[test]
    fn serde_roundtrip() {
        let diag = Diagnostic::warning("port offset missing").with_note("defaulting to (0, 0)");
        let json = serde_json::to_string(&diag).unwrap();
        let restored: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.severity, Severity::Warning);
        assert_eq!(restored.message, diag.message);
        assert_eq!(restored.notes, diag.notes);
    }
}
