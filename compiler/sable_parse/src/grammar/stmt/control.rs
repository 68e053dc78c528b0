//! Compound statements: `if`, `while`, `foreach` and `match`.

use sable_ir::{MatchClause, StmtId, StmtKind, TokenKind};

use crate::context::ParseContext;
use crate::error::ErrorContext;
use crate::recovery::STMT_BOUNDARY;
use crate::{committed, require, ParseOutcome, Parser, TokenSet};

impl Parser<'_> {
    /// `if c { } [else if c { } ...] [else { }]`
    pub(super) fn parse_if_stmt(&mut self) -> ParseOutcome<StmtId> {
        let start = committed!(self.cursor.expect(TokenKind::KwIf)).span;
        let cond = require!(self, self.parse_expr(), ErrorContext::IfStatement);
        let then_block = self.parse_block();
        let else_branch = if self.eat(TokenKind::KwElse) {
            if self.check(TokenKind::KwIf) {
                Some(require!(self, self.parse_if_stmt(), ErrorContext::IfStatement))
            } else {
                let block_start = self.current_span();
                let body = self.parse_block();
                Some(self.alloc_stmt_from(StmtKind::Block(body), block_start))
            }
        } else {
            None
        };
        let kind = StmtKind::If {
            cond,
            then_block,
            else_branch,
        };
        ParseOutcome::consumed_ok(self.alloc_stmt_from(kind, start))
    }

    /// `while c { }`
    pub(super) fn parse_while_stmt(&mut self) -> ParseOutcome<StmtId> {
        let start = committed!(self.cursor.expect(TokenKind::KwWhile)).span;
        let cond = require!(self, self.parse_expr(), ErrorContext::WhileStatement);
        let body = self.parse_block();
        ParseOutcome::consumed_ok(self.alloc_stmt_from(StmtKind::While { cond, body }, start))
    }

    /// `foreach [T|var] bp in e { }`
    pub(super) fn parse_foreach_stmt(&mut self) -> ParseOutcome<StmtId> {
        let start = committed!(self.cursor.expect(TokenKind::KwForeach)).span;
        let (ty, pattern) = require!(
            self,
            self.parse_input_binding(),
            ErrorContext::ForeachStatement
        );
        committed!(self.cursor.expect(TokenKind::KwIn));
        let source = require!(self, self.parse_expr(), ErrorContext::ForeachStatement);
        let body = self.parse_block();
        let kind = StmtKind::Foreach {
            ty,
            pattern,
            source,
            body,
        };
        ParseOutcome::consumed_ok(self.alloc_stmt_from(kind, start))
    }

    /// `match e { clauses }`
    ///
    /// A clause that fails to parse is reported and skipped through the
    /// next `;`, or through the end of the match body.
    pub(super) fn parse_match_stmt(&mut self) -> ParseOutcome<StmtId> {
        let start = committed!(self.cursor.expect(TokenKind::KwMatch)).span;
        let scrutinee = require!(self, self.parse_expr(), ErrorContext::MatchStatement);
        let open = committed!(self.cursor.expect(TokenKind::LBrace)).span;

        let mut clauses = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let outcome = self
                .parse_match_clause()
                .with_error_context(ErrorContext::MatchClause);
            match self.into_result(outcome) {
                Ok(clause) => clauses.push(clause),
                Err(error) => {
                    self.recover(error, STMT_BOUNDARY);
                    if !self.eat(TokenKind::Semi) {
                        break;
                    }
                }
            }
        }
        self.expect_closer(TokenKind::LBrace, open, TokenKind::RBrace);

        let clauses = self.arena.alloc_match_clauses(clauses);
        let kind = StmtKind::Match { scrutinee, clauses };
        ParseOutcome::consumed_ok(self.alloc_stmt_from(kind, start))
    }

    /// `p1 | p2 [if guard] => { }`
    fn parse_match_clause(&mut self) -> ParseOutcome<MatchClause> {
        let start = self.current_span();
        let mut patterns = vec![require!(
            self,
            self.parse_match_pattern(),
            ErrorContext::MatchClause
        )];
        while self.eat(TokenKind::Pipe) {
            patterns.push(require!(
                self,
                self.parse_match_pattern(),
                ErrorContext::MatchClause
            ));
        }
        let guard = if self.eat(TokenKind::KwIf) {
            Some(require!(
                self,
                self.with_context(ParseContext::IN_MATCH_GUARD, Parser::parse_expr),
                ErrorContext::MatchClause
            ))
        } else {
            None
        };
        if !self.eat(TokenKind::FatArrow) {
            let expected = TokenSet::single(TokenKind::FatArrow)
                .with(TokenKind::Pipe)
                .with(TokenKind::KwIf);
            let error = self.expected_error(&expected, self.position());
            let span = error.span;
            return ParseOutcome::consumed_err(error, span);
        }
        let body = self.parse_block();
        let patterns = self.arena.alloc_pattern_list(patterns);
        ParseOutcome::consumed_ok(MatchClause {
            patterns,
            guard,
            body,
            span: self.span_from(start),
        })
    }
}
