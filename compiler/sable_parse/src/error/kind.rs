//! Error taxonomy and recovery bookkeeping.

use sable_diagnostic::ErrorCode;
use sable_ir::TokenKind;

/// The three classes of parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A token or construct was required and something else was found.
    ExpectedToken,
    /// Every alternative at a disambiguation site failed.
    Ambiguous,
    /// A pattern is structurally wrong (e.g. a rest element that is not last).
    MalformedPattern,
}

impl ParseErrorKind {
    pub fn for_code(code: ErrorCode) -> Self {
        match code {
            ErrorCode::E1006 => ParseErrorKind::Ambiguous,
            ErrorCode::E1007 => ParseErrorKind::MalformedPattern,
            _ => ParseErrorKind::ExpectedToken,
        }
    }
}

/// What the parser did to continue after reporting an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecoveryAction {
    /// Not recovered yet; the error is still propagating.
    #[default]
    None,
    /// Skipped this many tokens to reach a boundary.
    Skipped(u32),
    /// Skipped this many tokens and put an error placeholder in the tree.
    Placeholder { skipped: u32 },
    /// Closed a delimited construct as if this closer were present.
    InsertedCloser(TokenKind),
    /// Continued as if this token were present.
    InsertedToken(TokenKind),
    /// Kept parsing, folding the operator as if it were left-associative.
    Continued,
}

impl RecoveryAction {
    /// Short description for diagnostic notes, or `None` when nothing was done.
    pub fn describe(self) -> Option<String> {
        match self {
            RecoveryAction::None | RecoveryAction::Continued => None,
            RecoveryAction::Skipped(0) | RecoveryAction::Placeholder { skipped: 0 } => None,
            RecoveryAction::Skipped(n) | RecoveryAction::Placeholder { skipped: n } => Some(
                format!("skipped {n} token{}", if n == 1 { "" } else { "s" }),
            ),
            RecoveryAction::InsertedCloser(kind) | RecoveryAction::InsertedToken(kind) => {
                Some(format!("insert {kind}"))
            }
        }
    }
}
