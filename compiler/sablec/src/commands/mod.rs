//! Command handlers for the `sablec` CLI.
//!
//! Each submodule implements one subcommand. Handlers return `Ok(true)` when
//! the input produced error diagnostics and `Ok(false)` when it was clean;
//! `main` turns either an error or `Ok(true)` into exit code 1.

use std::io::IsTerminal;

use sable_diagnostic::emitter::{ColorMode, DiagnosticEmitter};
use sable_diagnostic::{Diagnostic, Severity};

use crate::DriverError;

mod check;
mod debug;
mod explain;

pub use check::{check_files, check_source, emit_reports, CheckRequest, FileReport, Totals};
pub use debug::{
    lex_file, parse_file, render_parse, render_tokens, OutputMode, ParseMode, ParseRequest,
};
pub use explain::{explain_error, explanation};

/// Read a file from disk, classifying the common failures.
pub fn read_file(path: &str) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|e| DriverError::from_io(path, e))
}

/// Parse a `--max-errors` value. Zero is rejected.
pub(crate) fn parse_limit(value: &str) -> Result<usize, DriverError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(DriverError::usage(format!(
            "invalid value '{value}' for --max-errors: expected a positive number"
        ))),
    }
}

/// Render `diagnostics` for one file to stderr, followed by the summary line.
pub(crate) fn report_to_stderr(path: &str, source: &str, diagnostics: &[Diagnostic]) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = sable_diagnostic::emitter::stderr(ColorMode::Auto, is_tty, path, source);
    emitter.emit_all(diagnostics);
    let (errors, warnings) = count(diagnostics);
    emitter.emit_summary(errors, warnings);
    emitter.flush();
}

/// Error and warning counts. Notes count as neither.
pub(crate) fn count(diagnostics: &[Diagnostic]) -> (usize, usize) {
    diagnostics
        .iter()
        .fold((0, 0), |(errors, warnings), d| match d.severity {
            Severity::Error => (errors + 1, warnings),
            Severity::Warning => (errors, warnings + 1),
            Severity::Note => (errors, warnings),
        })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
