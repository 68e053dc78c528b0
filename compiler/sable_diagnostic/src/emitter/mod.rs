//! Rendering diagnostics for humans.

mod terminal;

pub use terminal::{stderr, ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Trailing "aborting due to N previous errors" line.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);

    fn flush(&mut self);
}
