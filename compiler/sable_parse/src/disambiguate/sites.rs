//! The readings of each disambiguation site, in priority order.

use sable_ir::{ExprId, ExprKind, StmtId, StmtKind, TokenKind};

use super::{Alternative, Site};
use crate::context::ParseContext;
use crate::error::ErrorContext;
use crate::grammar::is_type_only_keyword;
use crate::recovery::{EXPR_START, LIST_BOUNDARY, STMT_BOUNDARY};
use crate::{chain, committed, ParseOutcome, Parser, TokenSet};

impl<'a> Parser<'a> {
    /// `(` in expression position: lambda, nil, group, parenthesized type,
    /// then any type descriptor starting with `(`.
    pub(crate) fn parse_paren_site(&mut self) -> ExprId {
        let alternatives = [
            Alternative::new("lambda", Parser::paren_lambda_reading),
            Alternative::new("nil literal", Parser::nil_reading),
            Alternative::new("grouped expression", Parser::group_reading),
            Alternative::new("parenthesized type", Parser::paren_type_reading),
            Alternative::new("type descriptor", Parser::parse_type_desc_expr),
        ];
        self.try_alternatives(Site::Paren, &alternatives, LIST_BOUNDARY, Parser::error_expr)
    }

    /// `[` before a type keyword: list constructor, then tuple type.
    pub(crate) fn parse_bracket_site(&mut self) -> ExprId {
        let alternatives = [
            Alternative::new("list constructor", Parser::list_reading),
            Alternative::new("tuple type", Parser::parse_type_desc_expr),
        ];
        self.try_alternatives(Site::Bracket, &alternatives, LIST_BOUNDARY, Parser::error_expr)
    }

    /// A conditional's true branch at `a:b`: the qualified name first, then
    /// `a` with the colon left for the conditional.
    pub(crate) fn parse_ternary_then_site(&mut self) -> ExprId {
        let alternatives = [
            Alternative::new("qualified name", Parser::qualified_then_reading),
            Alternative::new("colon split", Parser::split_then_reading),
        ];
        self.try_alternatives(
            Site::TernaryThen,
            &alternatives,
            LIST_BOUNDARY.with(TokenKind::Colon),
            Parser::error_expr,
        )
    }

    /// `{` at statement start: block, destructuring assignment, then a
    /// mapping constructor as an expression statement.
    pub(crate) fn parse_brace_stmt_site(&mut self) -> StmtId {
        let alternatives = [
            Alternative::new("block", Parser::block_stmt_reading),
            Alternative::new("destructuring assignment", Parser::parse_destructure_stmt),
            Alternative::new("expression statement", Parser::parse_expr_stmt),
        ];
        self.try_alternatives(
            Site::BraceStatement,
            &alternatives,
            STMT_BOUNDARY,
            Parser::error_stmt,
        )
    }

    /// A statement whose first token may begin a type: variable
    /// declaration, destructuring assignment, then an expression or
    /// assignment statement.
    pub(crate) fn parse_stmt_start_site(&mut self) -> StmtId {
        let alternatives = [
            Alternative::new("variable declaration", Parser::parse_var_decl_stmt),
            Alternative::new("destructuring assignment", Parser::parse_destructure_stmt),
            Alternative::new("expression statement", Parser::parse_expr_stmt),
        ];
        self.try_alternatives(
            Site::StatementStart,
            &alternatives,
            STMT_BOUNDARY,
            Parser::error_stmt,
        )
    }

    // Readings

    fn paren_lambda_reading(&mut self) -> ParseOutcome<ExprId> {
        if !self.at_paren_lambda() {
            return self.abandon();
        }
        self.parse_paren_lambda()
    }

    /// `()`
    fn nil_reading(&mut self) -> ParseOutcome<ExprId> {
        if self.cursor.peek_next_kind() != TokenKind::RParen {
            return self.abandon();
        }
        let start = committed!(self.cursor.expect(TokenKind::LParen)).span;
        committed!(self.cursor.expect(TokenKind::RParen));
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::Nil, start))
    }

    /// `(e)`, unless `e` is a bare type descriptor.
    fn group_reading(&mut self) -> ParseOutcome<ExprId> {
        let open = committed!(self.cursor.expect(TokenKind::LParen)).span;
        let inner = chain!(
            self,
            self.without_context(
                ParseContext::NO_QUALIFIED.with(ParseContext::IN_MATCH_GUARD),
                Parser::parse_expr
            )
        );
        if matches!(self.arena.get_expr(inner).kind, ExprKind::TypeDesc(_)) {
            return self.abandon();
        }
        self.expect_closer(TokenKind::LParen, open, TokenKind::RParen);
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::Group(inner), open))
    }

    /// `(T)` as a value, unless a type-only operator follows it.
    fn paren_type_reading(&mut self) -> ParseOutcome<ExprId> {
        let start = self.current_span();
        let ty = chain!(
            self,
            self.with_context(ParseContext::EXPR_TYPE, Parser::parse_paren_type)
        );
        if self.at_type_continuation() {
            return self.abandon();
        }
        ParseOutcome::consumed_ok(self.alloc_expr_from(ExprKind::TypeDesc(ty), start))
    }

    /// `[e, ...]`, unless every member is a type descriptor.
    fn list_reading(&mut self) -> ParseOutcome<ExprId> {
        let list = chain!(self, self.parse_list_constructor());
        if let ExprKind::List(members) = self.arena.get_expr(list).kind {
            let members = self.arena.get_expr_list(members);
            let all_types = !members.is_empty()
                && members
                    .iter()
                    .all(|&m| matches!(self.arena.get_expr(m).kind, ExprKind::TypeDesc(_)));
            if all_types {
                return self.abandon();
            }
        }
        ParseOutcome::consumed_ok(list)
    }

    fn qualified_then_reading(&mut self) -> ParseOutcome<ExprId> {
        let then_expr = chain!(self, self.parse_expr());
        self.then_branch_end(then_expr)
    }

    fn split_then_reading(&mut self) -> ParseOutcome<ExprId> {
        let then_expr = chain!(
            self,
            self.with_context(ParseContext::NO_QUALIFIED, Parser::parse_expr)
        );
        self.then_branch_end(then_expr)
    }

    /// A true branch is only complete at the conditional's `:`.
    fn then_branch_end(&mut self, then_expr: ExprId) -> ParseOutcome<ExprId> {
        if self.check(TokenKind::Colon) {
            ParseOutcome::consumed_ok(then_expr)
        } else {
            let error = self
                .expected_error(&TokenSet::single(TokenKind::Colon), self.position())
                .with_context(format!("while parsing {}", ErrorContext::Ternary.description()));
            let span = error.span;
            ParseOutcome::consumed_err(error, span)
        }
    }

    fn block_stmt_reading(&mut self) -> ParseOutcome<StmtId> {
        let start = self.current_span();
        let body = self.parse_block();
        ParseOutcome::consumed_ok(self.alloc_stmt_from(StmtKind::Block(body), start))
    }

    /// True at an operator that continues a type but not an expression:
    /// `[]`, `[*]`, a nullable `?`, or `|`/`&` before a type keyword.
    fn at_type_continuation(&self) -> bool {
        let next = self.cursor.peek_next_kind();
        match self.current_kind() {
            TokenKind::LBracket => matches!(next, TokenKind::RBracket | TokenKind::Star),
            TokenKind::Question => !EXPR_START.contains(next),
            TokenKind::Pipe | TokenKind::Amp => is_type_only_keyword(next),
            _ => false,
        }
    }
}
