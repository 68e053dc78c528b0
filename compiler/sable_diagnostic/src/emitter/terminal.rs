//! Terminal emitter with source snippets and optional ANSI color.

use std::io::{self, Write};

use super::DiagnosticEmitter;
use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const GUTTER: &str = "\x1b[1;34m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes `error[E1003]: message` headers followed by a `file:line:col`
/// pointer and a caret-underlined source line per label.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    file_name: &'s str,
    source: &'s str,
    lines: LineOffsetTable,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    pub fn new(writer: W, mode: ColorMode, is_tty: bool, file_name: &'s str, source: &'s str) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            file_name,
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    fn paint(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        }
    }

    fn write_snippet(&mut self, span: sable_ir::Span, message: &str, primary: bool) {
        let (line, col) = self.lines.offset_to_line_col(span.start);
        let text = self.lines.line_text(self.source, line);
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());

        let arrow = if primary { "-->" } else { ":::" };
        self.paint(&format!("{pad}{arrow} "), colors::GUTTER);
        let _ = writeln!(self.writer, "{}:{line}:{col}", self.file_name);
        self.paint(&format!("{pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.paint(&format!("{gutter} | "), colors::GUTTER);
        let _ = writeln!(self.writer, "{text}");

        // Multi-line spans underline to the end of the first line.
        let line_len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        let visible_end = (col - 1).saturating_add(span.len()).min(line_len);
        let width = visible_end.saturating_sub(col - 1).max(1) as usize;
        let marker = if primary { "^" } else { "-" }.repeat(width);
        self.paint(&format!("{pad} | "), colors::GUTTER);
        let _ = write!(self.writer, "{}", " ".repeat((col - 1) as usize));
        let color = if primary { colors::ERROR } else { colors::GUTTER };
        self.paint(&format!("{marker} {message}"), color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let severity = diagnostic.severity.to_string();
        self.paint(&severity, Self::severity_color(diagnostic.severity));
        self.paint(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_snippet(label.span, &label.message, label.is_primary);
        }
        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.paint("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.paint("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }
        let _ = writeln!(self.writer);
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.paint("error", colors::ERROR);
            let errors = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {errors}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {errors}");
            }
        } else if warning_count > 0 {
            self.paint("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Emitter for stderr.
pub fn stderr<'s>(
    mode: ColorMode,
    is_tty: bool,
    file_name: &'s str,
    source: &'s str,
) -> TerminalEmitter<'s, io::Stderr> {
    TerminalEmitter::new(io::stderr(), mode, is_tty, file_name, source)
}
