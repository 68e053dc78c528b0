//! The `check` command: parse many files in parallel and report diagnostics.

use std::io::{IsTerminal, Write};

use rayon::prelude::*;
use sable_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use sable_diagnostic::{Diagnostic, Severity};
use sable_ir::StringInterner;
use sable_parse::{parse_source, ParseOptions};
use tracing::{debug, info};

use super::{parse_limit, read_file};
use crate::DriverError;

/// Diagnostics for one checked file, kept with the source they point into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    pub path: String,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Errors and warnings reported across all files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub errors: usize,
    pub warnings: usize,
}

/// Arguments of `sablec check`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckRequest {
    pub files: Vec<String>,
    pub max_errors: usize,
}

impl CheckRequest {
    /// Read the arguments that follow `check`: files plus an optional
    /// `--max-errors N`, which caps errors across all files.
    pub fn from_args(args: &[String]) -> Result<Self, DriverError> {
        let mut files = Vec::new();
        let mut max_errors = ParseOptions::DEFAULT_MAX_DIAGNOSTICS;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "--max-errors" {
                let value = iter
                    .next()
                    .ok_or_else(|| DriverError::usage("--max-errors needs a value"))?;
                max_errors = parse_limit(value)?;
            } else if let Some(value) = arg.strip_prefix("--max-errors=") {
                max_errors = parse_limit(value)?;
            } else if arg.starts_with('-') {
                return Err(DriverError::usage(format!("unknown option '{arg}'")));
            } else {
                files.push(arg.clone());
            }
        }
        if files.is_empty() {
            return Err(DriverError::usage("no input files"));
        }
        Ok(CheckRequest { files, max_errors })
    }
}

/// Scan and parse one source as a statement sequence.
pub fn check_source(path: String, source: String, options: ParseOptions) -> FileReport {
    let interner = StringInterner::new();
    let parsed = parse_source(&source, &interner, options);
    let diagnostics = parsed.diagnostics();
    debug!(%path, diagnostics = diagnostics.len(), "checked");
    FileReport {
        path,
        source,
        diagnostics,
    }
}

/// Render reports in order, stopping once `limit` errors have been shown.
///
/// Only errors count toward the limit. Returns the totals actually
/// rendered and whether the limit cut the output short.
pub fn emit_reports<W: Write>(
    reports: &[FileReport],
    writer: &mut W,
    mode: ColorMode,
    is_tty: bool,
    limit: usize,
) -> (Totals, bool) {
    let mut totals = Totals::default();
    for report in reports {
        let mut emitter =
            TerminalEmitter::new(&mut *writer, mode, is_tty, &report.path, &report.source);
        for diagnostic in &report.diagnostics {
            if diagnostic.is_error() {
                if totals.errors == limit {
                    emitter.flush();
                    return (totals, true);
                }
                totals.errors += 1;
            } else if diagnostic.severity == Severity::Warning {
                totals.warnings += 1;
            }
            emitter.emit(diagnostic);
        }
        emitter.flush();
    }
    (totals, false)
}

/// Check every file in `paths`, in parallel, then report in argument order.
///
/// Unreadable files are reported and counted as errors; the other files are
/// still checked.
pub fn check_files(paths: &[String], max_errors: usize) -> Result<bool, DriverError> {
    let options = ParseOptions::default().with_max_diagnostics(max_errors);
    let results: Vec<Result<FileReport, DriverError>> = paths
        .par_iter()
        .map(|path| read_file(path).map(|source| check_source(path.clone(), source, options)))
        .collect();

    let mut reports = Vec::with_capacity(results.len());
    let mut unreadable = 0;
    for result in results {
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("error: {e}");
                unreadable += 1;
            }
        }
    }

    let is_tty = std::io::stderr().is_terminal();
    let (totals, truncated) = {
        let mut stderr = std::io::stderr().lock();
        let (totals, truncated) =
            emit_reports(&reports, &mut stderr, ColorMode::Auto, is_tty, max_errors);
        let mut summary = TerminalEmitter::new(&mut stderr, ColorMode::Auto, is_tty, "", "");
        summary.emit_summary(totals.errors, totals.warnings);
        summary.flush();
        (totals, truncated)
    };

    info!(
        files = paths.len(),
        errors = totals.errors,
        warnings = totals.warnings,
        "check finished"
    );

    if truncated {
        return Err(DriverError::DiagnosticLimit { limit: max_errors });
    }
    Ok(unreadable > 0 || totals.errors > 0)
}
