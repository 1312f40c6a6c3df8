//! Thread-safe diagnostic accumulator.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Collects the diagnostics emitted during one pipeline run.
///
/// The sink is append-only: the builder and the engine [`emit`](Self::emit)
/// into it (possibly from several threads), and the caller reads the
/// accumulated list once the operation returns. Error presence is mirrored
/// in an atomic counter so [`has_errors`](Self::has_errors) never has to
/// take the lock.
pub struct DiagnosticSink {
    entries: Mutex<Vec<Diagnostic>>,
    errors: AtomicUsize,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            errors: AtomicUsize::new(0),
        }
    }

    /// Appends a diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            self.errors.fetch_add(1, Ordering::Relaxed);
        }
        self.entries.lock().unwrap().push(diagnostic);
    }

    /// Whether any error-severity diagnostic has been emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of error-severity diagnostics emitted so far.
    pub fn error_count(&self) -> usize {
        self.errors.load(Ordering::Relaxed)
    }

    /// A snapshot of everything emitted so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries.lock().unwrap().clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
