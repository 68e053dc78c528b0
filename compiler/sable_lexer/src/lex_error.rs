//! Scanner errors.

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unrecognized character `{0}`")]
    InvalidChar(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntOverflow(String),
    #[error("malformed numeric literal `{0}`")]
    BadNumber(String),
    #[error("unknown escape sequence `\\{0}`")]
    InvalidEscape(char),
}

/// A scanner error at a source span.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::InvalidChar(_) => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::IntOverflow(_) | LexErrorKind::BadNumber(_) => ErrorCode::E0003,
            LexErrorKind::InvalidEscape(_) => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnterminatedString => "string starts here and runs to end of line",
            LexErrorKind::InvalidEscape(_) => "escape not recognized",
            _ => "here",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::UnterminatedString => diag.with_suggestion("add a closing `\"`"),
            LexErrorKind::InvalidEscape(_) => {
                diag.with_note("valid escapes are \\n \\r \\t \\\\ \\\" \\' and \\u{XXXX}")
            }
            _ => diag,
        }
    }
}
