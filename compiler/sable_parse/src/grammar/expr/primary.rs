//! Primary-form dispatcher and prefix operators.
//!
//! The dispatcher picks the atomic construct from the current token; it
//! never backtracks except at `(` and at `[` before a type keyword, which
//! go through the disambiguation engine.

mod constructors;
mod functions;
mod query;

use sable_ir::{CheckKind, ExprId, ExprKind, Token, TokenKind, TokenValue, UnaryOp};
use tracing::trace;

use super::Prec;
use crate::context::ParseContext;
use crate::error::ErrorContext;
use crate::recovery::EXPR_START;
use crate::{chain, committed, require, ParseOutcome, Parser};

/// Literal node for a literal token, if it is one.
pub(crate) fn literal_kind(token: &Token) -> Option<ExprKind> {
    let kind = match (token.kind, token.value) {
        (TokenKind::Int, TokenValue::Int(value)) => ExprKind::Int(value),
        (TokenKind::Float, TokenValue::Float(bits)) => ExprKind::Float(bits),
        (TokenKind::Decimal, TokenValue::Name(text)) => ExprKind::Decimal(text),
        (TokenKind::String, TokenValue::Name(text)) => ExprKind::String(text),
        (TokenKind::KwTrue, _) => ExprKind::Bool(true),
        (TokenKind::KwFalse, _) => ExprKind::Bool(false),
        (TokenKind::KwNull, _) => ExprKind::Null,
        _ => return None,
    };
    Some(kind)
}

/// Type keywords that cannot begin any expression other than a type
/// descriptor (`error`, `function`, `table` and `stream` all can).
pub(crate) fn is_type_only_keyword(kind: TokenKind) -> bool {
    kind.is_type_keyword()
        && !matches!(
            kind,
            TokenKind::KwError
                | TokenKind::KwFunction
                | TokenKind::KwTable
                | TokenKind::KwStream
                | TokenKind::KwVar
        )
}

impl Parser<'_> {
    /// Prefix operators, then a primary with its postfix operators.
    pub(crate) fn parse_unary(&mut self) -> ParseOutcome<ExprId> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Plus => UnaryOp::Plus,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Tilde => UnaryOp::BitNot,
            TokenKind::KwTypeof => UnaryOp::Typeof,
            TokenKind::KwCheck | TokenKind::KwCheckpanic => {
                let kind = if self.check(TokenKind::KwCheck) {
                    CheckKind::Check
                } else {
                    CheckKind::Checkpanic
                };
                self.advance();
                let operand = require!(self, self.parse_unary_operand(), ErrorContext::Expression);
                let id = self.alloc_expr_from(ExprKind::Check { kind, operand }, start);
                return ParseOutcome::consumed_ok(id);
            }
            TokenKind::KwTrap => {
                self.advance();
                let operand = require!(self, self.parse_unary_operand(), ErrorContext::Expression);
                return ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::Trap(operand), start));
            }
            TokenKind::Lt => return self.parse_type_cast(),
            _ => {
                let primary = chain!(self, self.parse_primary());
                return self.parse_postfix(primary);
            }
        };
        self.advance();
        let operand = require!(self, self.parse_unary_operand(), ErrorContext::Expression);
        let id = self.alloc_expr_from(ExprKind::Unary { op: kind, operand }, start);
        ParseOutcome::consumed_ok(id)
    }

    /// Operand of a prefix operator.
    fn parse_unary_operand(&mut self) -> ParseOutcome<ExprId> {
        self.parse_expr_prec(Prec::Unary)
    }

    /// `<T> e`
    fn parse_type_cast(&mut self) -> ParseOutcome<ExprId> {
        let start = self.current_span();
        self.advance();
        let ty = require!(self, self.parse_type(), ErrorContext::TypeCast);
        committed!(self.cursor.expect(TokenKind::Gt));
        let operand = require!(self, self.parse_unary_operand(), ErrorContext::TypeCast);
        let id = self.alloc_expr_from(ExprKind::TypeCast { ty, operand }, start);
        ParseOutcome::consumed_ok(id)
    }

    /// Select the atomic construct from the current token.
    pub(crate) fn parse_primary(&mut self) -> ParseOutcome<ExprId> {
        let token = *self.cursor.current();
        trace!(kind = %token.kind, pos = self.position(), "primary");

        if let Some(kind) = literal_kind(&token) {
            self.advance();
            return ParseOutcome::consumed_ok(self.alloc_expr_from(kind, token.span));
        }

        match token.kind {
            TokenKind::Ident => self.parse_name_expr(),
            TokenKind::LParen => ParseOutcome::consumed_ok(self.parse_paren_site()),
            TokenKind::LBracket => {
                if is_type_only_keyword(self.cursor.peek_next_kind()) {
                    ParseOutcome::consumed_ok(self.parse_bracket_site())
                } else {
                    self.parse_list_constructor()
                }
            }
            TokenKind::LBrace => self.parse_mapping_constructor(),
            TokenKind::KwFrom => self.parse_query_expr(),
            TokenKind::KwStream if self.cursor.peek_next_kind() == TokenKind::KwFrom => {
                self.parse_query_expr()
            }
            TokenKind::KwTable
                if matches!(
                    self.cursor.peek_next_kind(),
                    TokenKind::KwKey | TokenKind::LBracket | TokenKind::KwFrom
                ) =>
            {
                self.parse_table_or_query()
            }
            TokenKind::KwLet => self.parse_let_expr(),
            TokenKind::KwFunction if self.cursor.peek_next_kind() == TokenKind::LParen => {
                self.parse_anonymous_function()
            }
            TokenKind::KwError
                if self.cursor.peek_next_kind() == TokenKind::LParen
                    || (self.cursor.peek_kind_at(1) == TokenKind::Ident
                        && matches!(
                            self.cursor.peek_kind_at(2),
                            TokenKind::LParen | TokenKind::Colon
                        )) =>
            {
                self.parse_error_constructor()
            }
            TokenKind::KwNew => self.parse_new_expr(),
            TokenKind::KwStart | TokenKind::KwWait => {
                self.advance();
                let operand =
                    require!(self, self.parse_unary_operand(), ErrorContext::Expression);
                let kind = if token.kind == TokenKind::KwStart {
                    ExprKind::Start(operand)
                } else {
                    ExprKind::Wait(operand)
                };
                ParseOutcome::consumed_ok(self.alloc_expr_from(kind, token.span))
            }
            kind if kind.is_type_keyword() && kind != TokenKind::KwVar => {
                self.parse_type_desc_expr()
            }
            TokenKind::Error => {
                // Already reported by the scanner.
                self.advance();
                ParseOutcome::consumed_ok(self.error_expr(token.span))
            }
            _ => ParseOutcome::empty_err(EXPR_START, self.position()),
        }
    }

    /// Identifier, qualified identifier, or single-parameter lambda.
    fn parse_name_expr(&mut self) -> ParseOutcome<ExprId> {
        if self.cursor.peek_next_kind() == TokenKind::FatArrow && self.context.allows_lambda() {
            return self.parse_single_param_lambda();
        }
        let start = self.current_span();
        if self.context.allows_qualified() && self.cursor.at_qualified_name() {
            let module = committed!(self.cursor.expect_ident());
            self.advance();
            let name = committed!(self.cursor.expect_ident());
            let id = self.alloc_expr_from(ExprKind::Qualified { module, name }, start);
            return ParseOutcome::consumed_ok(id);
        }
        let name = committed!(self.cursor.expect_ident());
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::Ident(name), start))
    }

    /// A type descriptor used as a value.
    pub(crate) fn parse_type_desc_expr(&mut self) -> ParseOutcome<ExprId> {
        let start = self.current_span();
        let ty = chain!(
            self,
            self.with_context(ParseContext::EXPR_TYPE, Parser::parse_type)
        );
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::TypeDesc(ty), start))
    }
}
