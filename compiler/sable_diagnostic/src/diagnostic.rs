//! [`Diagnostic`], [`Label`] and [`Severity`].

use sable_ir::Span;
use std::fmt;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A span with an explanatory message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// The location the diagnostic is about, as opposed to related context.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A reported problem, built with the `with_*` methods.
///
/// ```
/// use sable_diagnostic::{Diagnostic, ErrorCode};
/// use sable_ir::Span;
///
/// let diag = Diagnostic::error(ErrorCode::E1003)
///     .with_message("unclosed delimiter `(`")
///     .with_label(Span::new(4, 5), "this `(` is never closed")
///     .with_note("recovered by closing the group here");
/// assert!(diag.is_error());
/// assert!(diag.labels[0].is_primary);
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add the primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_collects_parts_in_order() {
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("unexpected `)`")
            .with_secondary_label(Span::new(0, 1), "group opened here")
            .with_label(Span::new(5, 6), "unexpected token")
            .with_note("skipped to `;`")
            .with_suggestion("remove the extra `)`");

        assert_eq!(diag.labels.len(), 2);
        assert!(!diag.labels[0].is_primary);
        assert_eq!(diag.labels[1].span, Span::new(5, 6));
        assert_eq!(diag.notes, vec!["skipped to `;`".to_string()]);
        assert_eq!(diag.to_string(), "error[E1001]: unexpected `)`");
    }

    #[test]
    fn warnings_are_not_errors() {
        let diag = Diagnostic::warning(ErrorCode::E1011).with_message("empty statement");
        assert!(!diag.is_error());
        assert!(diag.labels.is_empty());
    }
}
