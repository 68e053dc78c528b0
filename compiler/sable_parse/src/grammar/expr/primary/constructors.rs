//! List, mapping, table, error and `new` constructors.

use sable_ir::{
    Arg, ArgKind, ArgRange, ExprId, ExprKind, MappingField, MappingFieldKind, NameRange,
    QueryConstruct, Span, TokenKind,
};

use crate::error::ErrorContext;
use crate::recovery::{TokenSet, EXPR_START};
use crate::{chain, committed, require, ParseOutcome, Parser};

impl Parser<'_> {
    /// `[a, ...xs, b]`
    pub(crate) fn parse_list_constructor(&mut self) -> ParseOutcome<ExprId> {
        let open = committed!(self.cursor.expect(TokenKind::LBracket)).span;
        let members = self.delimited(
            TokenKind::LBracket,
            open,
            TokenKind::RBracket,
            ErrorContext::ListConstructor,
            Parser::parse_list_member,
            Parser::error_expr,
        );
        let members = self.arena.alloc_expr_list(members);
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::List(members), open))
    }

    fn parse_list_member(&mut self) -> ParseOutcome<ExprId> {
        if self.check(TokenKind::Ellipsis) {
            let start = self.advance().span;
            let inner = require!(self, self.parse_expr(), ErrorContext::ListConstructor);
            return ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::Spread(inner), start));
        }
        self.parse_expr()
    }

    /// `{k: v, "k": v, [e]: v, k, ...m, readonly k: v}`
    pub(crate) fn parse_mapping_constructor(&mut self) -> ParseOutcome<ExprId> {
        let open = committed!(self.cursor.expect(TokenKind::LBrace)).span;
        let fields = self.delimited(
            TokenKind::LBrace,
            open,
            TokenKind::RBrace,
            ErrorContext::MappingConstructor,
            Parser::parse_mapping_field,
            |p, span| MappingField {
                kind: MappingFieldKind::Spread(p.error_expr(span)),
                readonly: false,
                span,
            },
        );
        let fields = self.arena.alloc_mapping_fields(fields);
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::Mapping(fields), open))
    }

    fn parse_mapping_field(&mut self) -> ParseOutcome<MappingField> {
        let start = self.current_span();
        if self.eat(TokenKind::Ellipsis) {
            let value = require!(self, self.parse_expr(), ErrorContext::MappingConstructor);
            return ParseOutcome::consumed_ok(MappingField {
                kind: MappingFieldKind::Spread(value),
                readonly: false,
                span: self.span_from(start),
            });
        }

        let readonly = self.eat(TokenKind::KwReadonly);
        let token = *self.cursor.current();
        let kind = match token.kind {
            TokenKind::Ident if self.cursor.peek_next_kind() == TokenKind::Colon => {
                let key = committed!(self.cursor.expect_ident());
                self.advance();
                let value = require!(self, self.parse_expr(), ErrorContext::MappingConstructor);
                MappingFieldKind::KeyValue { key, value }
            }
            TokenKind::Ident => MappingFieldKind::Shorthand(committed!(self.cursor.expect_ident())),
            TokenKind::String => {
                self.advance();
                committed!(self.cursor.expect(TokenKind::Colon));
                let value = require!(self, self.parse_expr(), ErrorContext::MappingConstructor);
                match token.name() {
                    Some(key) => MappingFieldKind::StringKey { key, value },
                    None => MappingFieldKind::Spread(self.error_expr(token.span)),
                }
            }
            TokenKind::LBracket => {
                let open = self.advance().span;
                let key = require!(self, self.parse_expr(), ErrorContext::MappingConstructor);
                self.expect_closer(TokenKind::LBracket, open, TokenKind::RBracket);
                committed!(self.cursor.expect(TokenKind::Colon));
                let value = require!(self, self.parse_expr(), ErrorContext::MappingConstructor);
                MappingFieldKind::Computed { key, value }
            }
            _ if readonly => {
                let error = self.expected_error(&TokenSet::single(TokenKind::Ident), self.position());
                let span = error.span;
                return ParseOutcome::consumed_err(error, span);
            }
            _ => {
                return ParseOutcome::empty_err(
                    EXPR_START
                        .with(TokenKind::Ellipsis)
                        .with(TokenKind::KwReadonly),
                    self.position(),
                )
            }
        };
        ParseOutcome::consumed_ok(MappingField {
            kind,
            readonly,
            span: self.span_from(start),
        })
    }

    /// `key(a, b)` after `table`; `None` if there is no key specifier.
    pub(crate) fn parse_table_key_names(&mut self) -> ParseOutcome<Option<NameRange>> {
        if !self.eat(TokenKind::KwKey) {
            return ParseOutcome::empty_ok(None);
        }
        let open = committed!(self.cursor.expect(TokenKind::LParen)).span;
        let names = self.delimited(
            TokenKind::LParen,
            open,
            TokenKind::RParen,
            ErrorContext::TableConstructor,
            |p| {
                if !p.check(TokenKind::Ident) {
                    return ParseOutcome::empty_err(TokenSet::single(TokenKind::Ident), p.position());
                }
                ParseOutcome::consumed_ok(p.cursor.expect_ident().ok())
            },
            |_, _| None,
        );
        let names = self.arena.alloc_names(names.into_iter().flatten());
        ParseOutcome::consumed_ok(Some(names))
    }

    /// `table [key(..)] [rows]`, or a table query when `from` follows.
    pub(crate) fn parse_table_or_query(&mut self) -> ParseOutcome<ExprId> {
        let start = committed!(self.cursor.expect(TokenKind::KwTable)).span;
        let key = chain!(self, self.parse_table_key_names());
        if self.check(TokenKind::KwFrom) {
            return self.parse_query_body(start, QueryConstruct::Table { key });
        }
        let open = committed!(self.cursor.expect(TokenKind::LBracket)).span;
        let rows = self.delimited(
            TokenKind::LBracket,
            open,
            TokenKind::RBracket,
            ErrorContext::TableConstructor,
            Parser::parse_expr,
            Parser::error_expr,
        );
        let rows = self.arena.alloc_expr_list(rows);
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::Table { key, rows }, start))
    }

    /// `error(args)` or `error T(args)`
    pub(crate) fn parse_error_constructor(&mut self) -> ParseOutcome<ExprId> {
        let start = committed!(self.cursor.expect(TokenKind::KwError)).span;
        let ty = if self.check(TokenKind::Ident) {
            Some(require!(self, self.parse_type_reference(), ErrorContext::Expression))
        } else {
            None
        };
        let open = committed!(self.cursor.expect(TokenKind::LParen)).span;
        let args = self.parse_call_args(open);
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::ErrorCtor { ty, args }, start))
    }

    /// `new`, `new (args)` or `new T(args)`
    pub(crate) fn parse_new_expr(&mut self) -> ParseOutcome<ExprId> {
        let start = committed!(self.cursor.expect(TokenKind::KwNew)).span;
        let ty = if self.check(TokenKind::Ident) {
            Some(require!(self, self.parse_type_reference(), ErrorContext::Expression))
        } else {
            None
        };
        let args = if ty.is_some() || self.check(TokenKind::LParen) {
            let open = committed!(self.cursor.expect(TokenKind::LParen)).span;
            self.parse_call_args(open)
        } else {
            ArgRange::EMPTY
        };
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::New { ty, args }, start))
    }

    /// Arguments after an already-consumed `(`: positional, `name = e`
    /// and `...rest`.
    pub(crate) fn parse_call_args(&mut self, open: Span) -> ArgRange {
        let args = self.delimited(
            TokenKind::LParen,
            open,
            TokenKind::RParen,
            ErrorContext::CallArguments,
            Parser::parse_arg,
            |p, span| Arg {
                kind: ArgKind::Positional,
                value: p.error_expr(span),
                span,
            },
        );
        self.arena.alloc_args(args)
    }

    fn parse_arg(&mut self) -> ParseOutcome<Arg> {
        let start = self.current_span();
        let kind = if self.eat(TokenKind::Ellipsis) {
            ArgKind::Rest
        } else if self.check(TokenKind::Ident) && self.cursor.peek_next_kind() == TokenKind::Eq {
            let name = committed!(self.cursor.expect_ident());
            self.advance();
            ArgKind::Named(name)
        } else {
            let value = chain!(self, self.parse_expr());
            return ParseOutcome::consumed_ok(Arg {
                kind: ArgKind::Positional,
                value,
                span: self.span_from(start),
            });
        };
        let value = require!(self, self.parse_expr(), ErrorContext::CallArguments);
        ParseOutcome::consumed_ok(Arg {
            kind,
            value,
            span: self.span_from(start),
        })
    }
}
