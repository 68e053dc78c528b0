//! Grammar productions.
//!
//! - `expr`: precedence climbing, primary dispatcher, postfix operators
//! - `ty`: type-descriptor climbing and structured type bodies
//! - `pattern`: binding, match and destructuring patterns
//! - `stmt`: the statement host
//!
//! Shared here: closing delimiters and comma-separated lists, both of which
//! recover locally instead of failing the enclosing construct.

mod expr;
mod pattern;
mod stmt;
mod ty;

pub use expr::{Arity, Assoc, OperInfo, Prec};
pub(crate) use expr::is_type_only_keyword;
pub use ty::TypePrec;
pub(crate) use ty::ParamNames;

use sable_diagnostic::ErrorCode;
use sable_ir::{Span, TokenKind};

use crate::error::{ErrorContext, ParseError, RecoveryAction};
use crate::recovery::{synchronize, CLOSERS, DECLARATION_KEYWORDS, LIST_BOUNDARY, STMT_BOUNDARY};
use crate::{ParseOutcome, Parser};

impl Parser<'_> {
    /// True at a token that ends any enclosing list: `;`, a declaration
    /// keyword, EOF, or a closer other than `close`.
    fn at_list_terminator(&self, close: TokenKind) -> bool {
        let kind = self.current_kind();
        kind == TokenKind::Eof
            || kind == TokenKind::Semi
            || DECLARATION_KEYWORDS.contains(kind)
            || (CLOSERS.contains(kind) && kind != close)
    }

    /// Consume `close`, or report the construct opened at `open_span` as
    /// unclosed and close it implicitly.
    ///
    /// Stray tokens before the closer are skipped and reported once. A `{`
    /// is never skipped: after a finished operand it opens the body of the
    /// statement whose head lost its closer.
    pub(crate) fn expect_closer(&mut self, open: TokenKind, open_span: Span, close: TokenKind) {
        if self.eat(close) {
            return;
        }
        if self.at_list_terminator(close) || self.check(TokenKind::LBrace) {
            let error = ParseError::unclosed(open, open_span, close, self.cursor.current());
            self.report(error);
            return;
        }
        let error = ParseError::new(
            ErrorCode::E1001,
            format!("expected {close}, found {}", self.current_kind()),
            self.current_span(),
        );
        let skipped = synchronize(&mut self.cursor, STMT_BOUNDARY);
        if self.eat(close) {
            self.report(error.with_recovery(RecoveryAction::Skipped(skipped)));
        } else {
            let error = ParseError::unclosed(open, open_span, close, self.cursor.current());
            self.report(error);
        }
    }

    /// Consume a statement-ending `;`, or report it missing and carry on as
    /// if it were there.
    pub(crate) fn expect_semi(&mut self) {
        if self.eat(TokenKind::Semi) {
            return;
        }
        let error = ParseError::new(
            ErrorCode::E1001,
            format!("expected `;`, found {}", self.current_kind()),
            self.previous_span().end_point(),
        )
        .with_recovery(RecoveryAction::InsertedToken(TokenKind::Semi));
        self.report(error);
    }

    /// Parse `item (, item)* [,] close` after an already-consumed opener.
    ///
    /// Failed items are recorded and replaced by `placeholder`; a bad
    /// separator resynchronizes to the next `,` or the closer. A missing
    /// closer is reported once and the list is closed implicitly.
    pub(crate) fn delimited<T>(
        &mut self,
        open: TokenKind,
        open_span: Span,
        close: TokenKind,
        context: ErrorContext,
        mut item: impl FnMut(&mut Self) -> ParseOutcome<T>,
        placeholder: fn(&mut Self, Span) -> T,
    ) -> Vec<T> {
        let mut items = Vec::new();
        loop {
            if self.eat(close) {
                break;
            }
            if self.at_list_terminator(close) {
                let error = ParseError::unclosed(open, open_span, close, self.cursor.current());
                self.report(error.with_context(format!("while parsing {}", context.description())));
                break;
            }
            let outcome = item(self).with_error_context(context);
            items.push(self.or_recover(outcome, LIST_BOUNDARY, placeholder));

            if self.eat(TokenKind::Comma) || self.check(close) || self.at_list_terminator(close) {
                continue;
            }
            let error = ParseError::new(
                ErrorCode::E1001,
                format!("expected `,` or {close}, found {}", self.current_kind()),
                self.current_span(),
            );
            let skipped = synchronize(&mut self.cursor, LIST_BOUNDARY);
            self.report(error.with_recovery(RecoveryAction::Skipped(skipped)));
            self.eat(TokenKind::Comma);
        }
        items
    }
}
