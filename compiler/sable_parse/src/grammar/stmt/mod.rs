//! Statement parsing.
//!
//! A small statement grammar hosting the core: it calls into the
//! expression, type and pattern grammars and owns two of the
//! disambiguation sites (`{` at statement start, and a statement that may
//! begin with a type).
//!
//! - `mod.rs`: statement lists, blocks, declarations and simple statements
//! - `control.rs`: `if`, `while`, `foreach`, `match`

mod control;

use sable_diagnostic::ErrorCode;
use sable_ir::{BinaryOp, PatternKind, Span, Stmt, StmtId, StmtKind, StmtRange, TokenKind};
use sable_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::cursor::GreaterRun;
use crate::error::{ErrorContext, ParseError, RecoveryAction};
use crate::recovery::{synchronize, CLOSERS, DECLARATION_KEYWORDS, STMT_BOUNDARY, TYPE_START};
use crate::{chain, committed, require, ParseOutcome, Parser, TokenSet};

/// Binary operator of a compound assignment token.
fn compound_assign_op(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::PlusEq => BinaryOp::Add,
        TokenKind::MinusEq => BinaryOp::Sub,
        TokenKind::StarEq => BinaryOp::Mul,
        TokenKind::SlashEq => BinaryOp::Div,
        TokenKind::AmpEq => BinaryOp::BitAnd,
        TokenKind::PipeEq => BinaryOp::BitOr,
        TokenKind::CaretEq => BinaryOp::BitXor,
        TokenKind::ShlEq => BinaryOp::Shl,
        _ => return None,
    };
    Some(op)
}

impl Parser<'_> {
    /// Statements up to end of input.
    pub(crate) fn parse_top_level_statements(&mut self) -> StmtRange {
        let stmts = self.parse_stmt_list(TokenKind::Eof);
        trace!(count = stmts.len(), "top-level statements");
        self.arena.alloc_stmt_list(stmts)
    }

    /// `{ stmts }`
    ///
    /// A missing `}` is reported once and the block closed implicitly.
    pub(crate) fn parse_block(&mut self) -> StmtRange {
        ensure_sufficient_stack(|| {
            let open = self.current_span();
            if !self.eat(TokenKind::LBrace) {
                let error = self
                    .expected_error(&TokenSet::single(TokenKind::LBrace), self.position())
                    .with_context(format!("while parsing {}", ErrorContext::Block.description()));
                self.report(error.with_recovery(RecoveryAction::InsertedToken(TokenKind::LBrace)));
                return StmtRange::EMPTY;
            }
            let stmts = self.parse_stmt_list(TokenKind::RBrace);
            self.expect_closer(TokenKind::LBrace, open, TokenKind::RBrace);
            self.arena.alloc_stmt_list(stmts)
        })
    }

    /// Statements until `close` (not consumed) or EOF.
    ///
    /// A failed statement becomes an `Error` statement; the cursor skips to
    /// the next `;` (consumed) or statement boundary. Stray closers are
    /// reported and skipped one at a time.
    fn parse_stmt_list(&mut self, close: TokenKind) -> Vec<StmtId> {
        let mut stmts = Vec::new();
        loop {
            let kind = self.current_kind();
            if kind == close || kind == TokenKind::Eof {
                break;
            }
            if CLOSERS.contains(kind) {
                let span = self.advance().span;
                let error = ParseError::new(ErrorCode::E1010, format!("unexpected {kind}"), span)
                    .with_recovery(RecoveryAction::Skipped(1));
                self.report(error);
                continue;
            }
            if kind == TokenKind::Semi {
                let span = self.advance().span;
                self.report(ParseError::warning(ErrorCode::E1011, "empty statement", span));
                continue;
            }
            if DECLARATION_KEYWORDS.contains(kind) {
                self.skip_declaration();
                continue;
            }

            let before = self.position();
            let outcome = self.parse_stmt();
            let stmt = self.or_recover(outcome, STMT_BOUNDARY, Parser::error_stmt);
            if matches!(self.arena.get_stmt(stmt).kind, StmtKind::Error) {
                self.eat(TokenKind::Semi);
            }
            if self.position() == before {
                self.advance();
            }
            stmts.push(stmt);
        }
        stmts
    }

    /// Report a module-level declaration in statement position and skip it.
    fn skip_declaration(&mut self) {
        let token = self.advance();
        let skipped = 1 + synchronize(&mut self.cursor, STMT_BOUNDARY);
        self.eat(TokenKind::Semi);
        let error = ParseError::new(
            ErrorCode::E1010,
            format!("expected statement, found declaration keyword {}", token.kind),
            token.span,
        )
        .with_recovery(RecoveryAction::Skipped(skipped));
        self.report(error);
    }

    /// One statement.
    fn parse_stmt(&mut self) -> ParseOutcome<StmtId> {
        let start = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::LBrace => return ParseOutcome::consumed_ok(self.parse_brace_stmt_site()),
            TokenKind::KwIf => return self.parse_if_stmt(),
            TokenKind::KwWhile => return self.parse_while_stmt(),
            TokenKind::KwForeach => return self.parse_foreach_stmt(),
            TokenKind::KwMatch => return self.parse_match_stmt(),
            TokenKind::KwFrom => return self.parse_from_stmt(),
            TokenKind::KwDo => {
                self.advance();
                let body = self.parse_block();
                return ParseOutcome::consumed_ok(self.alloc_stmt_from(StmtKind::Do(body), start));
            }
            TokenKind::KwFinal | TokenKind::KwVar => {
                return self.parse_var_decl_stmt();
            }
            TokenKind::KwReturn => {
                self.advance();
                let value = if self.check(TokenKind::Semi) {
                    None
                } else {
                    Some(require!(self, self.parse_expr(), ErrorContext::Expression))
                };
                StmtKind::Return(value)
            }
            TokenKind::KwBreak => {
                self.advance();
                StmtKind::Break
            }
            TokenKind::KwContinue => {
                self.advance();
                StmtKind::Continue
            }
            TokenKind::KwPanic => {
                self.advance();
                StmtKind::Panic(require!(self, self.parse_expr(), ErrorContext::Expression))
            }
            kind if TYPE_START.contains(kind) || kind == TokenKind::Underscore => {
                return ParseOutcome::consumed_ok(self.parse_stmt_start_site());
            }
            _ => return self.parse_expr_stmt(),
        };
        self.expect_semi();
        ParseOutcome::consumed_ok(self.alloc_stmt_from(kind, start))
    }

    /// `[final] (T | var) bp [= e];`
    pub(crate) fn parse_var_decl_stmt(&mut self) -> ParseOutcome<StmtId> {
        let start = self.current_span();
        let is_final = self.eat(TokenKind::KwFinal);
        let ty = if is_final {
            require!(
                self,
                self.parse_typed_binding_type(),
                ErrorContext::VariableDeclaration
            )
        } else {
            chain!(self, self.parse_typed_binding_type())
        };
        let pattern = require!(
            self,
            self.parse_binding_pattern(),
            ErrorContext::VariableDeclaration
        );
        let init = if self.eat(TokenKind::Eq) {
            Some(require!(
                self,
                self.parse_expr(),
                ErrorContext::VariableDeclaration
            ))
        } else {
            None
        };
        self.expect_semi();
        let kind = StmtKind::VarDecl {
            is_final,
            ty,
            pattern,
            init,
        };
        ParseOutcome::consumed_ok(self.alloc_stmt_from(kind, start))
    }

    /// `bp = e;` with a structured destructuring pattern.
    ///
    /// A lone variable reference is left to the assignment reading.
    pub(crate) fn parse_destructure_stmt(&mut self) -> ParseOutcome<StmtId> {
        let start = self.current_span();
        let pattern = chain!(self, self.parse_destructuring_pattern());
        if matches!(
            self.arena.get_pattern(pattern).kind,
            PatternKind::VarRef(_)
        ) {
            return ParseOutcome::empty_err(TokenSet::new(), self.position());
        }
        committed!(self.cursor.expect(TokenKind::Eq));
        let value = require!(self, self.parse_expr(), ErrorContext::Expression);
        self.expect_semi();
        let kind = StmtKind::Destructure { pattern, value };
        ParseOutcome::consumed_ok(self.alloc_stmt_from(kind, start))
    }

    /// `e;`, `place = e;` or `place op= e;`
    pub(crate) fn parse_expr_stmt(&mut self) -> ParseOutcome<StmtId> {
        let start = self.current_span();
        let target = chain!(self, self.parse_expr());
        let kind = if self.eat(TokenKind::Eq) {
            let value = require!(self, self.parse_expr(), ErrorContext::Expression);
            StmtKind::Assign { target, value }
        } else if let Some(op) = self.eat_compound_assign() {
            let value = require!(self, self.parse_expr(), ErrorContext::Expression);
            StmtKind::CompoundAssign { op, target, value }
        } else {
            StmtKind::Expr(target)
        };
        self.expect_semi();
        ParseOutcome::consumed_ok(self.alloc_stmt_from(kind, start))
    }

    /// Consume a compound assignment operator, composing `>>=` and `>>>=`
    /// from adjacent tokens.
    fn eat_compound_assign(&mut self) -> Option<BinaryOp> {
        if let Some(op) = compound_assign_op(self.current_kind()) {
            self.advance();
            return Some(op);
        }
        let run = self.cursor.greater_run()?;
        let op = match run {
            GreaterRun::ShrAssign => BinaryOp::Shr,
            GreaterRun::UnsignedShrAssign => BinaryOp::UnsignedShr,
            _ => return None,
        };
        self.cursor.consume_compound(run.token_count());
        Some(op)
    }

    /// `from ... do { }` as a statement, or a query expression statement.
    fn parse_from_stmt(&mut self) -> ParseOutcome<StmtId> {
        let start = self.current_span();
        let mark = self.snapshot();
        let clauses = require!(self, self.parse_query_clauses(), ErrorContext::QueryExpression);
        if !self.eat(TokenKind::KwDo) {
            self.restore(mark);
            return self.parse_expr_stmt();
        }
        let body = self.parse_block();
        self.eat(TokenKind::Semi);
        let kind = StmtKind::QueryAction { clauses, body };
        ParseOutcome::consumed_ok(self.alloc_stmt_from(kind, start))
    }

    /// Allocate a statement spanning from `start` to the last consumed token.
    pub(crate) fn alloc_stmt_from(&mut self, kind: StmtKind, start: Span) -> StmtId {
        let span = self.span_from(start);
        self.arena.alloc_stmt(Stmt::new(kind, span))
    }
}
