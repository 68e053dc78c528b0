//! Expression parsing.
//!
//! - `mod.rs`: entry points and the precedence-climbing loop
//! - `operators.rs`: the operator table
//! - `primary.rs`: the primary-form dispatcher and prefix operators
//! - `postfix.rs`: calls, member access, indexing

mod operators;
mod postfix;
mod primary;

pub use operators::{Arity, Assoc, OperInfo, Prec};
pub(crate) use primary::{is_type_only_keyword, literal_kind};

use operators::InfixNode;
use sable_diagnostic::ErrorCode;
use sable_ir::{Expr, ExprId, ExprKind, Span, TokenKind};
use sable_stack::ensure_sufficient_stack;

use crate::context::ParseContext;
use crate::error::{ErrorContext, ParseError, RecoveryAction};
use crate::{chain, committed, require, ParseOutcome, Parser};

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> ParseOutcome<ExprId> {
        self.parse_expr_prec(Prec::Lowest)
    }

    /// Parse an expression whose operators all bind at least as tightly
    /// as `min`.
    pub(crate) fn parse_expr_prec(&mut self, min: Prec) -> ParseOutcome<ExprId> {
        ensure_sufficient_stack(|| self.parse_expr_prec_inner(min))
    }

    fn parse_expr_prec_inner(&mut self, min: Prec) -> ParseOutcome<ExprId> {
        let mut left = chain!(self, self.parse_unary());
        // Level of the last non-associative fold, to catch `a < b < c`.
        let mut last_non_assoc: Option<Prec> = None;

        while let Some((info, width)) = self.peek_infix() {
            if info.prec < min {
                break;
            }
            let op_span = self.cursor.consume_compound(width);

            if info.assoc == Assoc::NonAssoc {
                if last_non_assoc == Some(info.prec) {
                    let error = ParseError::new(
                        ErrorCode::E1009,
                        "this operator cannot be chained; add parentheses",
                        op_span,
                    )
                    .with_recovery(RecoveryAction::Continued);
                    self.report(error);
                }
                last_non_assoc = Some(info.prec);
            } else {
                last_non_assoc = None;
            }

            let right_min = match info.assoc {
                Assoc::Left | Assoc::NonAssoc => info.prec.next(),
                Assoc::Right => info.prec,
            };
            let left_span = self.arena.get_expr(left).span;

            let kind = match info.node {
                InfixNode::Binary(op) => {
                    let right = require!(
                        self,
                        self.parse_expr_prec(right_min),
                        ErrorContext::Expression
                    );
                    ExprKind::Binary { op, left, right }
                }
                InfixNode::TypeTest { negated } => {
                    let ty = require!(
                        self,
                        self.with_context(ParseContext::EXPR_TYPE, Parser::parse_type),
                        ErrorContext::TypeDescriptor
                    );
                    ExprKind::TypeTest {
                        operand: left,
                        ty,
                        negated,
                    }
                }
                // Both conditional forms take a full expression on the right.
                InfixNode::Elvis => {
                    let right = require!(
                        self,
                        self.parse_expr_prec(Prec::Lowest),
                        ErrorContext::Expression
                    );
                    ExprKind::Elvis { left, right }
                }
                InfixNode::Ternary => {
                    let then_expr = chain!(self, self.parse_ternary_then());
                    committed!(self.cursor.expect(TokenKind::Colon));
                    let else_expr = require!(
                        self,
                        self.parse_expr_prec(Prec::Lowest),
                        ErrorContext::Ternary
                    );
                    ExprKind::Ternary {
                        cond: left,
                        then_expr,
                        else_expr,
                    }
                }
            };
            let span = self.span_from(left_span);
            left = self.arena.alloc_expr(Expr::new(kind, span));
        }

        ParseOutcome::consumed_ok(left)
    }

    /// The true branch of a conditional, up to (not including) its `:`.
    ///
    /// An adjacent `a:b` here is either a qualified name or a name followed
    /// by the conditional's own colon; the disambiguation engine decides.
    fn parse_ternary_then(&mut self) -> ParseOutcome<ExprId> {
        if self.cursor.at_qualified_name() && self.context.allows_qualified() {
            return ParseOutcome::consumed_ok(self.parse_ternary_then_site());
        }
        let then_expr = require!(
            self,
            self.parse_expr_prec(Prec::Lowest),
            ErrorContext::Ternary
        );
        ParseOutcome::consumed_ok(then_expr)
    }

    /// Allocate an expression spanning from `start` to the last consumed token.
    pub(crate) fn alloc_expr_from(&mut self, kind: ExprKind, start: Span) -> ExprId {
        let span = self.span_from(start);
        self.arena.alloc_expr(Expr::new(kind, span))
    }
}
