//! Query expressions and the clause list shared with query actions.

use sable_ir::{
    ExprId, ExprKind, OrderDirection, OrderKey, OrderKeyRange, PatternId, QueryClause,
    QueryClauseRange, QueryConstruct, Span, TokenKind, TypeId,
};
use tracing::trace;

use crate::error::ErrorContext;
use crate::{committed, require, ParseOutcome, Parser};

impl Parser<'_> {
    /// `[stream] from ... select e [on conflict e]`
    pub(crate) fn parse_query_expr(&mut self) -> ParseOutcome<ExprId> {
        let start = self.current_span();
        let construct = if self.eat(TokenKind::KwStream) {
            QueryConstruct::Stream
        } else {
            QueryConstruct::Default
        };
        self.parse_query_body(start, construct)
    }

    /// Clauses through `select` and the optional `on conflict`, with any
    /// `stream`/`table` prefix already consumed.
    pub(crate) fn parse_query_body(
        &mut self,
        start: Span,
        construct: QueryConstruct,
    ) -> ParseOutcome<ExprId> {
        let clauses = require!(self, self.parse_query_clauses(), ErrorContext::QueryExpression);
        committed!(self.cursor.expect(TokenKind::KwSelect));
        let select = require!(self, self.parse_expr(), ErrorContext::QueryExpression);
        let on_conflict = if self.eat(TokenKind::KwOn) {
            committed!(self.cursor.expect(TokenKind::KwConflict));
            Some(require!(self, self.parse_expr(), ErrorContext::QueryExpression))
        } else {
            None
        };
        let kind = ExprKind::Query {
            construct,
            clauses,
            select,
            on_conflict,
        };
        ParseOutcome::consumed_ok(self.alloc_expr_from(kind, start))
    }

    /// A leading `from` clause and every intermediate clause after it.
    pub(crate) fn parse_query_clauses(&mut self) -> ParseOutcome<QueryClauseRange> {
        let mut clauses = vec![require!(
            self,
            self.parse_from_clause(),
            ErrorContext::QueryExpression
        )];
        loop {
            let start = self.current_span();
            let clause = match self.current_kind() {
                TokenKind::KwFrom => require!(
                    self,
                    self.parse_from_clause(),
                    ErrorContext::QueryExpression
                ),
                TokenKind::KwWhere => {
                    self.advance();
                    let cond = require!(self, self.parse_expr(), ErrorContext::QueryExpression);
                    QueryClause::Where(cond, self.span_from(start))
                }
                TokenKind::KwLet => {
                    self.advance();
                    let decls = require!(self, self.parse_let_decls(), ErrorContext::QueryExpression);
                    QueryClause::Let(decls, self.span_from(start))
                }
                TokenKind::KwJoin | TokenKind::KwOuter => {
                    require!(self, self.parse_join_clause(), ErrorContext::QueryExpression)
                }
                TokenKind::KwOrder => {
                    self.advance();
                    committed!(self.cursor.expect(TokenKind::KwBy));
                    let keys = require!(self, self.parse_order_keys(), ErrorContext::QueryExpression);
                    QueryClause::OrderBy(keys, self.span_from(start))
                }
                TokenKind::KwLimit => {
                    self.advance();
                    let limit = require!(self, self.parse_expr(), ErrorContext::QueryExpression);
                    QueryClause::Limit(limit, self.span_from(start))
                }
                _ => break,
            };
            clauses.push(clause);
        }
        trace!(count = clauses.len(), "query clauses");
        ParseOutcome::consumed_ok(self.arena.alloc_query_clauses(clauses))
    }

    /// `from T bp in e`
    fn parse_from_clause(&mut self) -> ParseOutcome<QueryClause> {
        let start = committed!(self.cursor.expect(TokenKind::KwFrom)).span;
        let (ty, pattern) = require!(self, self.parse_input_binding(), ErrorContext::QueryExpression);
        committed!(self.cursor.expect(TokenKind::KwIn));
        let source = require!(self, self.parse_expr(), ErrorContext::QueryExpression);
        ParseOutcome::consumed_ok(QueryClause::From {
            ty,
            pattern,
            source,
            span: self.span_from(start),
        })
    }

    /// `[outer] join T bp in e on l equals r`
    fn parse_join_clause(&mut self) -> ParseOutcome<QueryClause> {
        let start = self.current_span();
        let outer = self.eat(TokenKind::KwOuter);
        committed!(self.cursor.expect(TokenKind::KwJoin));
        let (ty, pattern) = require!(self, self.parse_input_binding(), ErrorContext::QueryExpression);
        committed!(self.cursor.expect(TokenKind::KwIn));
        let source = require!(self, self.parse_expr(), ErrorContext::QueryExpression);
        committed!(self.cursor.expect(TokenKind::KwOn));
        let on_left = require!(self, self.parse_expr(), ErrorContext::QueryExpression);
        committed!(self.cursor.expect(TokenKind::KwEquals));
        let on_right = require!(self, self.parse_expr(), ErrorContext::QueryExpression);
        ParseOutcome::consumed_ok(QueryClause::Join {
            outer,
            ty,
            pattern,
            source,
            on_left,
            on_right,
            span: self.span_from(start),
        })
    }

    /// The binding of `from`, `join` and `foreach`: `var bp`, `T bp`, or a
    /// bare name directly before `in`.
    pub(crate) fn parse_input_binding(&mut self) -> ParseOutcome<(Option<TypeId>, PatternId)> {
        let ty = if self.check(TokenKind::Ident) && self.cursor.peek_next_kind() == TokenKind::KwIn
        {
            None
        } else {
            require!(
                self,
                self.parse_typed_binding_type(),
                ErrorContext::TypeDescriptor
            )
        };
        let pattern = require!(
            self,
            self.parse_binding_pattern(),
            ErrorContext::QueryExpression
        );
        ParseOutcome::consumed_ok((ty, pattern))
    }

    /// `e [ascending|descending], ...`
    fn parse_order_keys(&mut self) -> ParseOutcome<OrderKeyRange> {
        let mut keys = Vec::new();
        loop {
            let expr = require!(self, self.parse_expr(), ErrorContext::QueryExpression);
            let direction = if self.eat(TokenKind::KwAscending) {
                Some(OrderDirection::Ascending)
            } else if self.eat(TokenKind::KwDescending) {
                Some(OrderDirection::Descending)
            } else {
                None
            };
            keys.push(OrderKey { expr, direction });
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        ParseOutcome::consumed_ok(self.arena.alloc_order_keys(keys))
    }
}
