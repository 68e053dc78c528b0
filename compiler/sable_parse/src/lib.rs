//! Parser for the Sable front end.
//!
//! Turns a [`TokenList`] into a flat syntax tree in an [`AstArena`]. The core
//! is three mutually recursive grammars:
//!
//! - expressions, by precedence climbing over a constant operator table
//! - type descriptors, by a second climb with its own table
//! - binding, match and destructuring patterns
//!
//! Where a token prefix does not decide between readings, the
//! disambiguation engine runs bounded trial parses and keeps the first
//! one that parses cleanly. Errors never abort a parse: each is recorded
//! with the recovery taken, the cursor resynchronizes to a boundary, and an
//! `Error` placeholder takes the failed construct's place in the tree.
//!
//! Entry points: [`parse_expression`], [`parse_type_descriptor`],
//! [`parse_binding_pattern`], [`parse_match_pattern`],
//! [`parse_destructuring_pattern`], [`parse_statements`] and the
//! scanner-fronted [`parse_source`].

mod context;
mod cursor;
mod disambiguate;
mod error;
mod grammar;
mod options;
mod outcome;
mod recovery;
mod snapshot;

#[cfg(test)]
mod tests;

pub use context::ParseContext;
pub use cursor::{Cursor, GreaterRun};
pub use error::{ErrorContext, ParseError, ParseErrorKind, RecoveryAction};
pub use grammar::{Arity, Assoc, OperInfo, Prec, TypePrec};
pub use options::ParseOptions;
pub use outcome::ParseOutcome;
pub use recovery::{synchronize, TokenSet};
pub use snapshot::ParserSnapshot;

use sable_diagnostic::{Diagnostic, ErrorCode};
use sable_ir::{
    AstArena, Expr, ExprId, ExprKind, Pattern, PatternId, PatternKind, Span, Stmt, StmtId,
    StmtKind, StmtRange, StringInterner, Token, TokenKind, TokenList, TypeId, TypeKind, TypeNode,
};
use sable_lexer::{lex, LexError};
use tracing::{debug, trace};

/// Parser state for one parse job.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: AstArena,
    context: ParseContext,
    options: ParseOptions,
    /// Diagnostics in the order they were reported, warnings included.
    errors: Vec<ParseError>,
    /// Error-severity diagnostics reported, including any dropped past the
    /// limit. Trial parses compare it before and after.
    error_count: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a TokenList, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: AstArena::new(),
            context: ParseContext::new(),
            options,
            errors: Vec::new(),
            error_count: 0,
        }
    }

    // Cursor delegation

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    #[inline]
    fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Span from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        let end = self.previous_span();
        if end.end >= start.end {
            start.merge(end)
        } else {
            start
        }
    }

    // Context

    /// Run `f` with `flags` added to the context.
    pub(crate) fn with_context<T>(
        &mut self,
        flags: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let old = self.context;
        self.context = old.with(flags);
        let result = f(self);
        self.context = old;
        result
    }

    /// Run `f` with `flags` removed from the context.
    pub(crate) fn without_context<T>(
        &mut self,
        flags: ParseContext,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let old = self.context;
        self.context = old.without(flags);
        let result = f(self);
        self.context = old;
        result
    }

    // Diagnostics

    /// Record a diagnostic, honoring the diagnostic limit.
    pub(crate) fn report(&mut self, error: ParseError) {
        if error.is_error() {
            self.error_count += 1;
        }
        let limit = self.options.max_diagnostics;
        if self.errors.len() < limit {
            if self.context.is_speculating() {
                trace!(code = %error.code, message = %error.message, "trial parse error");
            } else {
                debug!(code = %error.code, message = %error.message, "parse error");
            }
            self.errors.push(error);
        } else if self.errors.len() == limit {
            self.errors.push(ParseError::new(
                ErrorCode::E1012,
                format!("too many errors; stopped recording after {limit}"),
                error.span,
            ));
        }
    }

    /// Error for a soft failure at token index `position`.
    pub(crate) fn expected_error(&self, expected: &TokenSet, position: usize) -> ParseError {
        ParseError::expected(expected, self.cursor.token_at(position))
    }

    pub(crate) fn into_result<T>(&self, outcome: ParseOutcome<T>) -> Result<T, ParseError> {
        match outcome {
            ParseOutcome::ConsumedOk { value } | ParseOutcome::EmptyOk { value } => Ok(value),
            ParseOutcome::ConsumedErr { error, .. } => Err(error),
            ParseOutcome::EmptyErr { expected, position } => {
                Err(self.expected_error(&expected, position))
            }
        }
    }

    /// Take the value of `outcome`, or record its error, skip to `recovery`
    /// and build a placeholder covering the skipped tokens.
    pub(crate) fn or_recover<T>(
        &mut self,
        outcome: ParseOutcome<T>,
        recovery: TokenSet,
        placeholder: fn(&mut Self, Span) -> T,
    ) -> T {
        match self.into_result(outcome) {
            Ok(value) => value,
            Err(error) => {
                let span = self.recover(error, recovery);
                placeholder(self, span)
            }
        }
    }

    /// Record `error`, synchronize to `recovery` and return the span of
    /// the gap left behind.
    pub(crate) fn recover(&mut self, error: ParseError, recovery: TokenSet) -> Span {
        let start = error.span;
        let skipped = synchronize(&mut self.cursor, recovery);
        let action = match error.recovery {
            RecoveryAction::None => RecoveryAction::Placeholder { skipped },
            other => other,
        };
        self.report(error.with_recovery(action));
        if skipped == 0 {
            Span::point(start.start)
        } else {
            self.span_from(start)
        }
    }

    // Placeholders

    pub(crate) fn error_expr(&mut self, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(ExprKind::Error, span))
    }

    pub(crate) fn error_type(&mut self, span: Span) -> TypeId {
        self.arena.alloc_type(TypeNode::new(TypeKind::Error, span))
    }

    pub(crate) fn error_pattern(&mut self, span: Span) -> PatternId {
        self.arena
            .alloc_pattern(Pattern::new(PatternKind::Error, span))
    }

    pub(crate) fn error_stmt(&mut self, span: Span) -> StmtId {
        self.arena.alloc_stmt(Stmt::new(StmtKind::Error, span))
    }

    /// Report anything left before `Eof` and skip it.
    fn expect_end(&mut self) {
        if self.cursor.is_at_end() {
            return;
        }
        let error = ParseError::new(
            ErrorCode::E1001,
            format!("expected end of input, found {}", self.current_kind()),
            self.current_span(),
        );
        let mut skipped = 0u32;
        while !self.cursor.is_at_end() {
            self.advance();
            skipped += 1;
        }
        self.report(error.with_recovery(RecoveryAction::Skipped(skipped)));
    }

    fn into_output<R>(self, root: R) -> ParseOutput<R> {
        ParseOutput {
            arena: self.arena,
            root,
            diagnostics: self.errors,
        }
    }
}

/// A finished parse: the arena, the root node and every diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput<R> {
    pub arena: AstArena,
    pub root: R,
    pub diagnostics: Vec<ParseError>,
}

impl<R> ParseOutput<R> {
    /// True if any error-severity diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(ParseError::is_error)
    }
}

/// Scanner output plus the parse of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceParse<R> {
    pub tokens: TokenList,
    pub lex_errors: Vec<LexError>,
    pub output: ParseOutput<R>,
}

impl<R> SourceParse<R> {
    /// Scanner and parser diagnostics, ordered by position.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut all: Vec<(Span, Diagnostic)> = self
            .lex_errors
            .iter()
            .map(|e| (e.span, e.to_diagnostic()))
            .chain(
                self.output
                    .diagnostics
                    .iter()
                    .map(|e| (e.span, e.to_diagnostic())),
            )
            .collect();
        all.sort_by_key(|(span, _)| span.start);
        all.into_iter().map(|(_, diag)| diag).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.lex_errors.is_empty() || self.output.has_errors()
    }
}

/// Run `f` over `tokens`, then require end of input.
///
/// A list without a trailing `Eof` gets one appended.
fn run<R>(
    tokens: &TokenList,
    options: ParseOptions,
    f: impl FnOnce(&mut Parser<'_>) -> R,
) -> ParseOutput<R> {
    let terminated;
    let tokens = if tokens.is_terminated() {
        tokens
    } else {
        let mut owned = tokens.clone();
        let end = tokens.as_slice().last().map_or(0, |t| t.span.end);
        owned.push(Token::new(TokenKind::Eof, Span::point(end)));
        terminated = owned;
        &terminated
    };
    let mut parser = Parser::new(tokens, options);
    let root = f(&mut parser);
    parser.expect_end();
    debug!(
        nodes = parser.arena.node_count(),
        diagnostics = parser.errors.len(),
        "parse finished"
    );
    parser.into_output(root)
}

/// Parse one expression spanning the whole token list.
pub fn parse_expression(tokens: &TokenList, options: ParseOptions) -> ParseOutput<ExprId> {
    run(tokens, options, |p| {
        let outcome = p.parse_expr();
        p.or_recover(outcome, TokenSet::new(), Parser::error_expr)
    })
}

/// Parse one type descriptor spanning the whole token list.
pub fn parse_type_descriptor(tokens: &TokenList, options: ParseOptions) -> ParseOutput<TypeId> {
    run(tokens, options, |p| {
        let outcome = p.parse_type();
        p.or_recover(outcome, TokenSet::new(), Parser::error_type)
    })
}

/// Parse one binding pattern spanning the whole token list.
pub fn parse_binding_pattern(tokens: &TokenList, options: ParseOptions) -> ParseOutput<PatternId> {
    run(tokens, options, |p| {
        let outcome = p.parse_binding_pattern();
        p.or_recover(outcome, TokenSet::new(), Parser::error_pattern)
    })
}

/// Parse one match pattern spanning the whole token list.
pub fn parse_match_pattern(tokens: &TokenList, options: ParseOptions) -> ParseOutput<PatternId> {
    run(tokens, options, |p| {
        let outcome = p.parse_match_pattern();
        p.or_recover(outcome, TokenSet::new(), Parser::error_pattern)
    })
}

/// Parse one destructuring-assignment pattern spanning the whole token list.
pub fn parse_destructuring_pattern(
    tokens: &TokenList,
    options: ParseOptions,
) -> ParseOutput<PatternId> {
    run(tokens, options, |p| {
        let outcome = p.parse_destructuring_pattern();
        p.or_recover(outcome, TokenSet::new(), Parser::error_pattern)
    })
}

/// Parse a sequence of statements up to end of input.
pub fn parse_statements(tokens: &TokenList, options: ParseOptions) -> ParseOutput<StmtRange> {
    run(tokens, options, |p| p.parse_top_level_statements())
}

/// Scan `source` and parse it as statements.
pub fn parse_source(
    source: &str,
    interner: &StringInterner,
    options: ParseOptions,
) -> SourceParse<StmtRange> {
    parse_source_with(source, interner, options, parse_statements)
}

/// Scan `source` and run any token-level entry point over it.
pub fn parse_source_with<R>(
    source: &str,
    interner: &StringInterner,
    options: ParseOptions,
    entry: fn(&TokenList, ParseOptions) -> ParseOutput<R>,
) -> SourceParse<R> {
    let lexed = lex(source, interner);
    let output = entry(&lexed.tokens, options);
    SourceParse {
        tokens: lexed.tokens,
        lex_errors: lexed.errors,
        output,
    }
}
