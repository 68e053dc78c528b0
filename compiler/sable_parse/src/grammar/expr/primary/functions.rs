//! Anonymous functions, inferred lambdas and `let` expressions.

use sable_ir::{
    ExprId, ExprKind, FunctionBody, LetDecl, LetDeclRange, Name, Span, TokenKind, TypeId,
};

use crate::error::ErrorContext;
use crate::grammar::ParamNames;
use crate::recovery::TokenSet;
use crate::{committed, require, ParseOutcome, Parser};

impl Parser<'_> {
    /// `function (params) [returns T] => e` or `... { stmts }`
    pub(crate) fn parse_anonymous_function(&mut self) -> ParseOutcome<ExprId> {
        let start = committed!(self.cursor.expect(TokenKind::KwFunction)).span;
        let signature = require!(
            self,
            self.parse_function_signature(ParamNames::Required),
            ErrorContext::AnonymousFunction
        );
        let body = if self.eat(TokenKind::FatArrow) {
            FunctionBody::Expr(require!(
                self,
                self.parse_expr(),
                ErrorContext::AnonymousFunction
            ))
        } else if self.check(TokenKind::LBrace) {
            FunctionBody::Block(self.parse_block())
        } else {
            let expected = TokenSet::single(TokenKind::FatArrow).with(TokenKind::LBrace);
            let error = self
                .expected_error(&expected, self.position())
                .with_context(format!(
                    "while parsing {}",
                    ErrorContext::AnonymousFunction.description()
                ));
            let span = error.span;
            return ParseOutcome::consumed_err(error, span);
        };
        let kind = ExprKind::AnonFunction {
            params: signature.params,
            returns: signature.returns,
            body,
        };
        ParseOutcome::consumed_ok(self.alloc_expr_from(kind, start))
    }

    /// `x => e`
    pub(crate) fn parse_single_param_lambda(&mut self) -> ParseOutcome<ExprId> {
        let start = self.current_span();
        let name = committed!(self.cursor.expect_ident());
        self.finish_lambda(start, vec![name])
    }

    /// `(a, b) => e`; the caller has checked the shape by lookahead.
    pub(crate) fn parse_paren_lambda(&mut self) -> ParseOutcome<ExprId> {
        let start = committed!(self.cursor.expect(TokenKind::LParen)).span;
        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(committed!(self.cursor.expect_ident()));
                if !self.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        committed!(self.cursor.expect(TokenKind::RParen));
        self.finish_lambda(start, params)
    }

    fn finish_lambda(&mut self, start: Span, params: Vec<Name>) -> ParseOutcome<ExprId> {
        committed!(self.cursor.expect(TokenKind::FatArrow));
        let body = require!(self, self.parse_expr(), ErrorContext::Lambda);
        let params = self.arena.alloc_names(params);
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::Lambda { params, body }, start))
    }

    /// True at `(` `[ident {, ident}]` `)` `=>`.
    pub(crate) fn at_paren_lambda(&self) -> bool {
        let cursor = &self.cursor;
        let mut offset = 1;
        if cursor.peek_kind_at(offset) == TokenKind::Ident {
            loop {
                offset += 1;
                match cursor.peek_kind_at(offset) {
                    TokenKind::Comma if cursor.peek_kind_at(offset + 1) == TokenKind::Ident => {
                        offset += 1;
                    }
                    _ => break,
                }
            }
        }
        cursor.peek_kind_at(offset) == TokenKind::RParen
            && cursor.peek_kind_at(offset + 1) == TokenKind::FatArrow
    }

    /// `let T x = e, var y = f in body`
    pub(crate) fn parse_let_expr(&mut self) -> ParseOutcome<ExprId> {
        let start = committed!(self.cursor.expect(TokenKind::KwLet)).span;
        let decls = require!(self, self.parse_let_decls(), ErrorContext::LetExpression);
        committed!(self.cursor.expect(TokenKind::KwIn));
        let body = require!(self, self.parse_expr(), ErrorContext::LetExpression);
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::Let { decls, body }, start))
    }

    /// One or more comma-separated `T bp = e` declarations.
    pub(crate) fn parse_let_decls(&mut self) -> ParseOutcome<LetDeclRange> {
        let mut decls = Vec::new();
        loop {
            let start = self.current_span();
            // `let int x = 1, y = 2`: an untyped name after a comma shares
            // the previous declaration's type.
            let inherited = match decls.last() {
                Some(LetDecl { ty, .. })
                    if self.check(TokenKind::Ident)
                        && self.cursor.peek_next_kind() == TokenKind::Eq =>
                {
                    Some(*ty)
                }
                _ => None,
            };
            let ty = match inherited {
                Some(ty) => ty,
                None => require!(self, self.parse_typed_binding_type(), ErrorContext::LetExpression),
            };
            let pattern = require!(
                self,
                self.parse_binding_pattern(),
                ErrorContext::LetExpression
            );
            committed!(self.cursor.expect(TokenKind::Eq));
            let init = require!(self, self.parse_expr(), ErrorContext::LetExpression);
            decls.push(LetDecl {
                ty,
                pattern,
                init,
                span: self.span_from(start),
            });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        ParseOutcome::consumed_ok(self.arena.alloc_let_decls(decls))
    }

    /// The `T` of a typed binding: `None` for `var`.
    pub(crate) fn parse_typed_binding_type(&mut self) -> ParseOutcome<Option<TypeId>> {
        if self.eat(TokenKind::KwVar) {
            return ParseOutcome::consumed_ok(None);
        }
        self.parse_type().map(Some)
    }
}
