//! Postfix expression parsing.
//!
//! Calls, method calls, remote calls, field and optional-field access,
//! annotation access and indexing, applied left to right after a primary.

use sable_ir::{ExprId, ExprKind, TokenKind};

use crate::context::ParseContext;
use crate::error::ErrorContext;
use crate::recovery::EXPR_START;
use crate::{committed, ParseOutcome, Parser};

impl Parser<'_> {
    /// Apply postfix operators to `expr` until none applies.
    ///
    /// Inside a destructuring pattern only `.field` and `[index]` apply:
    /// the leaf must stay an assignable place.
    pub(crate) fn parse_postfix(&mut self, mut expr: ExprId) -> ParseOutcome<ExprId> {
        let start = self.arena.get_expr(expr).span;
        let place_only = self.context.in_pattern();
        loop {
            let kind = match self.current_kind() {
                TokenKind::LParen if !place_only => {
                    let open = self.advance().span;
                    let args = self.parse_call_args(open);
                    ExprKind::Call { func: expr, args }
                }
                TokenKind::Dot => {
                    self.advance();
                    let name = committed!(self.cursor.expect_ident());
                    if !place_only && self.check(TokenKind::LParen) {
                        let open = self.advance().span;
                        let args = self.parse_call_args(open);
                        ExprKind::MethodCall {
                            receiver: expr,
                            method: name,
                            args,
                        }
                    } else {
                        ExprKind::Field {
                            receiver: expr,
                            field: name,
                        }
                    }
                }
                TokenKind::QuestionDot if !place_only => {
                    self.advance();
                    let field = committed!(self.cursor.expect_ident());
                    ExprKind::OptionalField {
                        receiver: expr,
                        field,
                    }
                }
                TokenKind::DotAt if !place_only => {
                    self.advance();
                    let first = committed!(self.cursor.expect_ident());
                    let (module, annot) = if self.check(TokenKind::Colon)
                        && self.cursor.is_adjacent_at(0)
                        && self.cursor.peek_next_kind() == TokenKind::Ident
                        && self.cursor.is_adjacent_at(1)
                    {
                        self.advance();
                        (Some(first), committed!(self.cursor.expect_ident()))
                    } else {
                        (None, first)
                    };
                    ExprKind::AnnotAccess {
                        receiver: expr,
                        module,
                        annot,
                    }
                }
                TokenKind::LBracket => {
                    let open = self.advance().span;
                    if self.check(TokenKind::RBracket) {
                        let error = self
                            .expected_error(&EXPR_START, self.position())
                            .with_context(format!(
                                "while parsing {}",
                                ErrorContext::IndexExpression.description()
                            ));
                        let span = error.span;
                        return ParseOutcome::consumed_err(error, span);
                    }
                    let keys = self.without_context(ParseContext::IN_PATTERN, |p| {
                        p.delimited(
                            TokenKind::LBracket,
                            open,
                            TokenKind::RBracket,
                            ErrorContext::IndexExpression,
                            Parser::parse_expr,
                            Parser::error_expr,
                        )
                    });
                    let keys = self.arena.alloc_expr_list(keys);
                    ExprKind::Index {
                        receiver: expr,
                        keys,
                    }
                }
                TokenKind::Arrow if !place_only => {
                    self.advance();
                    let method = committed!(self.cursor.expect_ident());
                    let open = committed!(self.cursor.expect(TokenKind::LParen)).span;
                    let args = self.parse_call_args(open);
                    ExprKind::RemoteCall {
                        client: expr,
                        method,
                        args,
                    }
                }
                _ => break,
            };
            expr = self.alloc_expr_from(kind, start);
        }
        ParseOutcome::consumed_ok(expr)
    }
}
