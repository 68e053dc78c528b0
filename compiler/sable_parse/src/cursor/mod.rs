//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use crate::ParseError;
use sable_diagnostic::ErrorCode;
use sable_ir::{Name, Span, Token, TokenFlags, TokenKind, TokenList};
use tracing::trace;

/// Cursor for navigating tokens.
///
/// Reads kinds from the dense `kinds` slice so the hot checks never touch
/// the full 32-byte `Token`.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    /// Dense array of kinds, parallel to `tokens`.
    kinds: &'a [TokenKind],
    /// Per-token trivia flags, parallel to `tokens`.
    flags: &'a [TokenFlags],
    pos: usize,
}

/// How a run of `>` tokens starting at the cursor reads in an expression.
///
/// The scanner only ever produces single `>` tokens; shifts and `>=` are
/// composed here from adjacent tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GreaterRun {
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `>>`
    Shr,
    /// `>>>`
    UnsignedShr,
    /// `>>=`
    ShrAssign,
    /// `>>>=`
    UnsignedShrAssign,
}

impl GreaterRun {
    /// Number of tokens the operator spans.
    pub const fn token_count(self) -> usize {
        match self {
            GreaterRun::Greater => 1,
            GreaterRun::GreaterEq | GreaterRun::Shr => 2,
            GreaterRun::UnsignedShr | GreaterRun::ShrAssign => 3,
            GreaterRun::UnsignedShrAssign => 4,
        }
    }
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    ///
    /// The list must end with an `Eof` token.
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(tokens.is_terminated(), "token list must end with Eof");
        Cursor {
            tokens: tokens.as_slice(),
            kinds: tokens.kinds(),
            flags: tokens.flags(),
            pos: 0,
        }
    }

    /// Get the total number of tokens in the stream.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Get the current position in the token stream.
    ///
    /// Used for progress tracking - compare positions before and after
    /// parsing to determine if tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly.
    ///
    /// Used when restoring a `ParserSnapshot` after speculative parsing.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos < self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        trace!(from = self.pos, to = pos, "set_position");
        self.pos = pos;
    }

    /// Get the current token.
    ///
    /// Invariant: cursor position is always valid (`0..tokens.len()`).
    /// The last token is always EOF.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.kinds[self.pos]
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    /// Get the previous token's span, or a point at the start for position 0.
    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::point(self.tokens[0].span.start)
        }
    }

    /// Token at an absolute position, clamped to the trailing EOF.
    #[inline]
    pub fn token_at(&self, pos: usize) -> &'a Token {
        &self.tokens[pos.min(self.tokens.len() - 1)]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_ident(&self) -> bool {
        self.current_kind() == TokenKind::Ident
    }

    /// Peek at the token kind at offset `n` from current position.
    ///
    /// `peek_kind_at(0)` is the current token, `peek_kind_at(1)` is the next, etc.
    /// Returns `TokenKind::Eof` if past the end of the stream.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.kinds
            .get(self.pos + n)
            .copied()
            .unwrap_or(TokenKind::Eof)
    }

    /// Peek at the token at offset `n`, clamped to EOF.
    #[inline]
    pub fn peek_token_at(&self, n: usize) -> &'a Token {
        self.token_at(self.pos + n)
    }

    #[inline]
    pub fn peek_next_kind(&self) -> TokenKind {
        self.peek_kind_at(1)
    }

    /// True if the token at offset `n` directly follows the one before it,
    /// with no whitespace or comments in between.
    #[inline]
    pub fn is_adjacent_at(&self, n: usize) -> bool {
        self.flags
            .get(self.pos + n)
            .is_some_and(|flags| flags.is_adjacent())
    }

    /// `ident:ident` with no whitespace on either side of the colon.
    pub fn at_qualified_name(&self) -> bool {
        self.check_ident()
            && self.peek_kind_at(1) == TokenKind::Colon
            && self.peek_kind_at(2) == TokenKind::Ident
            && self.is_adjacent_at(1)
            && self.is_adjacent_at(2)
    }

    /// Classify a run of adjacent `>` tokens starting at the cursor.
    ///
    /// Returns `None` if the current token is not `>`.
    pub fn greater_run(&self) -> Option<GreaterRun> {
        if !self.check(TokenKind::Gt) {
            return None;
        }
        let mut gts = 1;
        while gts < 3 && self.peek_kind_at(gts) == TokenKind::Gt && self.is_adjacent_at(gts) {
            gts += 1;
        }
        let eq = self.peek_kind_at(gts) == TokenKind::Eq && self.is_adjacent_at(gts);
        Some(match (gts, eq) {
            (1, false) => GreaterRun::Greater,
            (1, true) => GreaterRun::GreaterEq,
            (2, false) => GreaterRun::Shr,
            (2, true) => GreaterRun::ShrAssign,
            (_, false) => GreaterRun::UnsignedShr,
            (_, true) => GreaterRun::UnsignedShrAssign,
        })
    }

    /// Consume `count` adjacent tokens as one compound operator.
    /// Returns the combined span.
    pub fn consume_compound(&mut self, count: usize) -> Span {
        let start = self.current_span();
        let mut end = start;
        for _ in 0..count {
            end = self.advance().span;
        }
        start.merge(end)
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// The scanner always appends an EOF token and the cursor never moves
    /// past it: advancing at EOF is a no-op.
    #[inline]
    pub fn advance(&mut self) -> &'a Token {
        let current = self.pos;
        let token = &self.tokens[current];
        trace!(
            pos = current,
            kind = %token.kind,
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if current + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    #[inline]
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the current token to be of the given kind, advance and return it.
    ///
    /// Split into inline happy path + `#[cold]` error path so that
    /// `format!()` allocations don't prevent LLVM from inlining the fast case.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind) -> ParseError {
        ParseError::new(
            ErrorCode::E1001,
            format!("expected {kind}, found {}", self.current_kind()),
            self.current_span(),
        )
    }

    /// Expect and consume an identifier, returning its interned name.
    #[inline]
    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        match self.current().name() {
            Some(name) if self.check_ident() => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.make_expect_ident_error()),
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_ident_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1004,
            format!("expected identifier, found {}", self.current_kind()),
            self.current_span(),
        )
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
