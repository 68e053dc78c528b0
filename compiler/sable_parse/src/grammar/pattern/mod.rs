//! Binding, match and destructuring patterns.
//!
//! The three pattern grammars share the list, mapping and error structures
//! and differ in their leaves. A rest element has its own slot in the node:
//! once one is parsed the member loop only accepts the closer, so a rest
//! that is not last is reported and skipped rather than stored.

use sable_diagnostic::ErrorCode;
use sable_ir::{
    Expr, ExprKind, FieldPattern, FieldPatternRange, Name, Pattern, PatternId, PatternKind, Span,
    TokenKind, UnaryOp,
};
use sable_stack::ensure_sufficient_stack;

use super::expr::literal_kind;
use crate::context::ParseContext;
use crate::error::{ErrorContext, ParseError, RecoveryAction};
use crate::recovery::{synchronize, TokenSet, LIST_BOUNDARY, PATTERN_START, STMT_BOUNDARY};
use crate::{chain, committed, one_of, require, try_outcome, ParseOutcome, Parser};

/// Which pattern grammar is being parsed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PatternMode {
    /// `T bp = e`, `foreach`, `let`, query bindings.
    Binding,
    /// Match clause patterns.
    Match,
    /// Left-hand side of a destructuring assignment.
    Destructuring,
}

/// One member of a list pattern before it is placed.
enum ListMember {
    Member(PatternId),
    Rest(PatternId),
}

/// One field of a mapping pattern before it is placed.
enum FieldMember {
    Field(FieldPattern),
    Rest(PatternId),
    /// A field that failed to parse; already reported.
    Invalid,
}

/// One argument of an error pattern before it is placed.
enum ErrorArg {
    Positional(PatternId),
    Named(FieldPattern),
    Rest(PatternId),
}

impl Parser<'_> {
    pub(crate) fn parse_binding_pattern(&mut self) -> ParseOutcome<PatternId> {
        self.parse_pattern(PatternMode::Binding)
    }

    pub(crate) fn parse_match_pattern(&mut self) -> ParseOutcome<PatternId> {
        self.parse_pattern(PatternMode::Match)
    }

    pub(crate) fn parse_destructuring_pattern(&mut self) -> ParseOutcome<PatternId> {
        self.parse_pattern(PatternMode::Destructuring)
    }

    fn parse_pattern(&mut self, mode: PatternMode) -> ParseOutcome<PatternId> {
        ensure_sufficient_stack(|| self.parse_pattern_inner(mode))
    }

    fn parse_pattern_inner(&mut self, mode: PatternMode) -> ParseOutcome<PatternId> {
        let start = self.current_span();
        match self.current_kind() {
            TokenKind::Underscore => {
                self.advance();
                ParseOutcome::consumed_ok(self.alloc_pattern_from(PatternKind::Wildcard, start))
            }
            TokenKind::LBracket => self.parse_list_pattern(mode),
            TokenKind::LBrace => self.parse_mapping_pattern(mode),
            TokenKind::KwError
                if matches!(
                    self.cursor.peek_next_kind(),
                    TokenKind::LParen | TokenKind::Ident
                ) =>
            {
                self.parse_error_pattern(mode)
            }
            TokenKind::Error => {
                self.advance();
                ParseOutcome::consumed_ok(self.error_pattern(start))
            }
            _ => match mode {
                PatternMode::Binding => self.parse_capture_pattern(),
                PatternMode::Match => one_of!(
                    self,
                    self.parse_var_pattern(),
                    self.parse_literal_pattern(),
                    self.parse_const_ref_pattern(),
                ),
                PatternMode::Destructuring => self.parse_place_pattern(),
            },
        }
    }

    /// `x`
    fn parse_capture_pattern(&mut self) -> ParseOutcome<PatternId> {
        if !self.check(TokenKind::Ident) {
            return ParseOutcome::empty_err(PATTERN_START, self.position());
        }
        let start = self.current_span();
        let name = committed!(self.cursor.expect_ident());
        ParseOutcome::consumed_ok(self.alloc_pattern_from(PatternKind::Capture(name), start))
    }

    /// `var bp`
    fn parse_var_pattern(&mut self) -> ParseOutcome<PatternId> {
        if !self.check(TokenKind::KwVar) {
            return ParseOutcome::empty_err(TokenSet::single(TokenKind::KwVar), self.position());
        }
        let start = self.advance().span;
        let inner = require!(self, self.parse_binding_pattern(), ErrorContext::MatchClause);
        ParseOutcome::consumed_ok(self.alloc_pattern_from(PatternKind::Var(inner), start))
    }

    /// `1`, `-2.5`, `"a"`, `true`, `null`, `()`
    fn parse_literal_pattern(&mut self) -> ParseOutcome<PatternId> {
        let start = self.current_span();
        if self.check(TokenKind::LParen) && self.cursor.peek_next_kind() == TokenKind::RParen {
            self.advance();
            self.advance();
            let nil = self.alloc_expr_from(ExprKind::Nil, start);
            return ParseOutcome::consumed_ok(self.alloc_pattern_from(PatternKind::Literal(nil), start));
        }
        let sign = match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            _ => None,
        };
        let offset = usize::from(sign.is_some());
        let token = *self.cursor.peek_token_at(offset);
        let Some(literal) = literal_kind(&token) else {
            return ParseOutcome::empty_err(PATTERN_START, self.position());
        };
        if sign.is_some()
            && !matches!(
                token.kind,
                TokenKind::Int | TokenKind::Float | TokenKind::Decimal
            )
        {
            return ParseOutcome::empty_err(PATTERN_START, self.position());
        }
        for _ in 0..=offset {
            self.advance();
        }
        let mut value = self.arena.alloc_expr(Expr::new(literal, token.span));
        if let Some(op) = sign {
            value = self.alloc_expr_from(ExprKind::Unary { op, operand: value }, start);
        }
        ParseOutcome::consumed_ok(self.alloc_pattern_from(PatternKind::Literal(value), start))
    }

    /// `C` or `mod:C`
    fn parse_const_ref_pattern(&mut self) -> ParseOutcome<PatternId> {
        if !self.check(TokenKind::Ident) {
            return ParseOutcome::empty_err(PATTERN_START, self.position());
        }
        let start = self.current_span();
        let qualified = self.cursor.at_qualified_name();
        let first = committed!(self.cursor.expect_ident());
        let kind = if qualified {
            self.advance();
            let name = committed!(self.cursor.expect_ident());
            PatternKind::ConstRef {
                module: Some(first),
                name,
            }
        } else {
            PatternKind::ConstRef {
                module: None,
                name: first,
            }
        };
        ParseOutcome::consumed_ok(self.alloc_pattern_from(kind, start))
    }

    /// An assignable place: `x`, `r.f`, `a[i]`, `r.f[i].g`.
    fn parse_place_pattern(&mut self) -> ParseOutcome<PatternId> {
        if !self.check(TokenKind::Ident) {
            return ParseOutcome::empty_err(PATTERN_START, self.position());
        }
        let start = self.current_span();
        let place = self.with_context(ParseContext::IN_PATTERN, |p| {
            let name = committed!(p.cursor.expect_ident());
            let base = p.alloc_expr_from(ExprKind::Ident(name), start);
            p.parse_postfix(base)
        });
        let place = chain!(self, place);
        ParseOutcome::consumed_ok(self.alloc_pattern_from(PatternKind::VarRef(place), start))
    }

    /// `[p, q, ...rest]`
    fn parse_list_pattern(&mut self, mode: PatternMode) -> ParseOutcome<PatternId> {
        let open = committed!(self.cursor.expect(TokenKind::LBracket)).span;
        let members = self.parse_pattern_members(
            open,
            TokenKind::RBracket,
            ErrorContext::ListPattern,
            |p| {
                if p.check(TokenKind::Ellipsis) {
                    return p.parse_rest_pattern(mode).map(ListMember::Rest);
                }
                p.parse_pattern(mode).map(ListMember::Member)
            },
            |p, span| ListMember::Member(p.error_pattern(span)),
            |member| matches!(member, ListMember::Rest(_)),
        );
        let mut items = Vec::with_capacity(members.len());
        let mut rest = None;
        for member in members {
            match member {
                ListMember::Member(id) => items.push(id),
                ListMember::Rest(id) => rest = Some(id),
            }
        }
        let members = self.arena.alloc_pattern_list(items);
        ParseOutcome::consumed_ok(self.alloc_pattern_from(PatternKind::List { members, rest }, open))
    }

    /// `{f, g: p, ...rest}`
    fn parse_mapping_pattern(&mut self, mode: PatternMode) -> ParseOutcome<PatternId> {
        let open = committed!(self.cursor.expect(TokenKind::LBrace)).span;
        let members = self.parse_pattern_members(
            open,
            TokenKind::RBrace,
            ErrorContext::MappingPattern,
            |p| {
                if p.check(TokenKind::Ellipsis) {
                    return p.parse_rest_pattern(mode).map(FieldMember::Rest);
                }
                p.parse_field_pattern(mode, false).map(FieldMember::Field)
            },
            |_, _| FieldMember::Invalid,
            |member| matches!(member, FieldMember::Rest(_)),
        );
        let (fields, rest) = self.split_fields(members);
        ParseOutcome::consumed_ok(self.alloc_pattern_from(PatternKind::Mapping { fields, rest }, open))
    }

    /// `error [T] (message, cause, name = p, ...rest)`
    fn parse_error_pattern(&mut self, mode: PatternMode) -> ParseOutcome<PatternId> {
        let start = committed!(self.cursor.expect(TokenKind::KwError)).span;
        let ty = try_outcome!(self, self.parse_type_reference());
        let open = committed!(self.cursor.expect(TokenKind::LParen)).span;
        let args = self.parse_pattern_members(
            open,
            TokenKind::RParen,
            ErrorContext::ErrorPattern,
            |p| {
                if p.check(TokenKind::Ident) && p.cursor.peek_next_kind() == TokenKind::Eq {
                    return p.parse_field_pattern(mode, true).map(ErrorArg::Named);
                }
                if p.check(TokenKind::Ellipsis) {
                    return p.parse_rest_pattern(mode).map(ErrorArg::Rest);
                }
                p.parse_pattern(mode).map(ErrorArg::Positional)
            },
            |p, span| ErrorArg::Positional(p.error_pattern(span)),
            |arg| matches!(arg, ErrorArg::Rest(_)),
        );

        let mut positional = Vec::new();
        let mut named = Vec::new();
        let mut rest = None;
        for arg in args {
            match arg {
                ErrorArg::Positional(id) if named.is_empty() => positional.push(id),
                ErrorArg::Positional(id) => {
                    let error = ParseError::new(
                        ErrorCode::E1007,
                        "positional arguments must come before named arguments",
                        self.arena.get_pattern(id).span,
                    );
                    self.report(error);
                }
                ErrorArg::Named(field) => named.push(field),
                ErrorArg::Rest(id) => rest = Some(id),
            }
        }
        let positional = self.arena.alloc_pattern_list(positional);
        let named = self.arena.alloc_field_patterns(named);
        let kind = PatternKind::ErrorPattern {
            ty,
            positional,
            named,
            rest,
        };
        ParseOutcome::consumed_ok(self.alloc_pattern_from(kind, start))
    }

    /// A mapping field `f` / `f: p`, or an error-pattern field `f = p`.
    fn parse_field_pattern(
        &mut self,
        mode: PatternMode,
        error_args: bool,
    ) -> ParseOutcome<FieldPattern> {
        if !self.check(TokenKind::Ident) {
            return ParseOutcome::empty_err(
                TokenSet::single(TokenKind::Ident).with(TokenKind::Ellipsis),
                self.position(),
            );
        }
        let start = self.current_span();
        let name = committed!(self.cursor.expect_ident());
        let (separator, context) = if error_args {
            (TokenKind::Eq, ErrorContext::ErrorPattern)
        } else {
            (TokenKind::Colon, ErrorContext::MappingPattern)
        };
        let pattern = if error_args || self.check(separator) {
            committed!(self.cursor.expect(separator));
            Some(require!(self, self.parse_pattern(mode), context))
        } else {
            None
        };
        ParseOutcome::consumed_ok(FieldPattern {
            name,
            pattern,
            span: self.span_from(start),
        })
    }

    /// `...name`, or `...var name` in match patterns.
    fn parse_rest_pattern(&mut self, mode: PatternMode) -> ParseOutcome<PatternId> {
        let start = committed!(self.cursor.expect(TokenKind::Ellipsis)).span;
        if mode == PatternMode::Match {
            self.eat(TokenKind::KwVar);
        }
        let name: Name = committed!(self.cursor.expect_ident());
        ParseOutcome::consumed_ok(self.alloc_pattern_from(PatternKind::Rest(name), start))
    }

    /// The member loop shared by list, mapping and error patterns.
    ///
    /// After a rest member only the closer is accepted: a following comma
    /// is reported as a malformed pattern, the remaining members are
    /// skipped, and the pattern is closed.
    fn parse_pattern_members<T>(
        &mut self,
        open_span: Span,
        close: TokenKind,
        context: ErrorContext,
        mut member: impl FnMut(&mut Self) -> ParseOutcome<T>,
        placeholder: fn(&mut Self, Span) -> T,
        is_rest: fn(&T) -> bool,
    ) -> Vec<T> {
        let open = match close {
            TokenKind::RBracket => TokenKind::LBracket,
            TokenKind::RBrace => TokenKind::LBrace,
            _ => TokenKind::LParen,
        };
        let mut members = Vec::new();
        loop {
            if self.eat(close) {
                break;
            }
            if self.cursor.is_at_end() || self.check(TokenKind::Semi) {
                let error = ParseError::unclosed(open, open_span, close, self.cursor.current());
                self.report(error.with_context(format!("while parsing {}", context.description())));
                break;
            }
            let outcome = member(self).with_error_context(context);
            let item = self.or_recover(outcome, LIST_BOUNDARY, placeholder);
            let rest = is_rest(&item);
            members.push(item);

            if rest {
                if self.check(TokenKind::Comma) {
                    let comma = self.current_span();
                    let skipped = synchronize(&mut self.cursor, STMT_BOUNDARY);
                    let error = ParseError::new(
                        ErrorCode::E1007,
                        "rest element must be last",
                        comma,
                    )
                    .with_context(format!("while parsing {}", context.description()))
                    .with_recovery(RecoveryAction::Skipped(skipped));
                    self.report(error);
                }
                self.expect_closer(open, open_span, close);
                break;
            }
            if self.eat(TokenKind::Comma) || self.check(close) {
                continue;
            }
            self.expect_closer(open, open_span, close);
            break;
        }
        members
    }

    fn split_fields(
        &mut self,
        members: Vec<FieldMember>,
    ) -> (FieldPatternRange, Option<PatternId>) {
        let mut fields = Vec::with_capacity(members.len());
        let mut rest = None;
        for member in members {
            match member {
                FieldMember::Field(field) => fields.push(field),
                FieldMember::Rest(id) => rest = Some(id),
                FieldMember::Invalid => {}
            }
        }
        (self.arena.alloc_field_patterns(fields), rest)
    }

    /// Allocate a pattern spanning from `start` to the last consumed token.
    pub(crate) fn alloc_pattern_from(&mut self, kind: PatternKind, start: Span) -> PatternId {
        let span = self.span_from(start);
        self.arena.alloc_pattern(Pattern::new(kind, span))
    }
}
