//! The parser's error type.

use std::fmt;

use sable_diagnostic::{Diagnostic, ErrorCode, Severity};
use sable_ir::{Span, Token, TokenKind};

use super::{ParseErrorKind, RecoveryAction};
use crate::recovery::{TokenSet, EXPR_START, PATTERN_START, TYPE_START};

/// A parse error with location, taxonomy class and the recovery taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub kind: ParseErrorKind,
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Location of the error.
    pub span: Span,
    /// "while parsing ..." context, set by the innermost construct that adds one.
    pub context: Option<String>,
    /// A second location worth showing, such as an unclosed opener.
    pub related: Option<(Span, String)>,
    pub recovery: RecoveryAction,
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            kind: ParseErrorKind::for_code(code),
            severity: Severity::Error,
            message: message.into(),
            span,
            context: None,
            related: None,
            recovery: RecoveryAction::None,
        }
    }

    #[cold]
    pub fn warning(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            severity: Severity::Warning,
            ..ParseError::new(code, message, span)
        }
    }

    /// Error for a soft failure: none of `expected` was found at `found`.
    ///
    /// Sets that cover a whole syntactic category are reported by name
    /// ("expected expression") rather than by listing their tokens.
    #[cold]
    pub fn expected(expected: &TokenSet, found: &Token) -> Self {
        let (code, what) = if expected.contains_all(&EXPR_START) {
            (ErrorCode::E1002, "expression".to_string())
        } else if expected.contains_all(&TYPE_START) {
            (ErrorCode::E1005, "type descriptor".to_string())
        } else if expected.contains_all(&PATTERN_START) {
            (ErrorCode::E1008, "pattern".to_string())
        } else if *expected == TokenSet::single(TokenKind::Ident) {
            (ErrorCode::E1004, "identifier".to_string())
        } else {
            (ErrorCode::E1001, expected.format_expected())
        };
        ParseError::new(code, format!("expected {what}, found {}", found.kind), found.span)
    }

    /// A delimited construct ran into `found` before its closer.
    #[cold]
    pub fn unclosed(open: TokenKind, open_span: Span, close: TokenKind, found: &Token) -> Self {
        ParseError::new(
            ErrorCode::E1003,
            format!("unclosed {open}: expected {close}, found {}", found.kind),
            found.span,
        )
        .with_related(open_span, format!("{open} opened here"))
        .with_recovery(RecoveryAction::InsertedCloser(close))
    }

    /// Add context if none is present yet.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        if self.context.is_none() {
            self.context = Some(context.into());
        }
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    #[must_use]
    pub fn with_recovery(mut self, recovery: RecoveryAction) -> Self {
        self.recovery = recovery;
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let base = match self.severity {
            Severity::Error => Diagnostic::error(self.code),
            Severity::Warning | Severity::Note => Diagnostic::warning(self.code),
        };
        let label = match self.kind {
            ParseErrorKind::ExpectedToken => "unexpected here",
            ParseErrorKind::Ambiguous => "could not decide how to read this",
            ParseErrorKind::MalformedPattern => "malformed pattern",
        };
        let mut diag = base
            .with_message(self.message.clone())
            .with_label(self.span, label);
        if let Some((span, message)) = &self.related {
            diag = diag.with_secondary_label(*span, message.clone());
        }
        if let Some(context) = &self.context {
            diag = diag.with_note(context.clone());
        }
        if let Some(action) = self.recovery.describe() {
            diag = diag.with_suggestion(action);
        }
        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ParseError {}
