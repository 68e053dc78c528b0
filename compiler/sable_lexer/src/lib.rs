//! Scanner for Sable source using logos with string interning.
//!
//! Produces a [`TokenList`] ending in a single `Eof` token, along with any
//! scanner errors. Whitespace and comments are dropped but recorded in the
//! [`TokenFlags`] of the following token, which is how the parser tells
//! `a >> b` from `a > > b`.

mod escape;
mod lex_error;
mod raw_token;

use logos::Logos;
use sable_ir::{Span, StringInterner, Token, TokenFlags, TokenKind, TokenList, TokenValue};

pub use escape::escape_string;
pub use lex_error::{LexError, LexErrorKind};

use escape::unescape_string;
use raw_token::RawToken;

/// Tokens plus the errors found while producing them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan `source` into tokens, interning identifiers and string contents.
///
/// Unrecognized input becomes an `Error` token flagged `HAS_ERROR`; scanning
/// always continues to the end.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    let mut output = LexOutput {
        tokens: TokenList::with_capacity(source.len() / 4 + 1),
        errors: Vec::new(),
    };
    let mut logos = RawToken::lexer(source);

    let mut pending = TokenFlags::EMPTY;
    let mut prev_end: Option<u32> = None;

    while let Some(result) = logos.next() {
        let span = span_of(logos.span());
        let slice = logos.slice();

        let raw = match result {
            Ok(RawToken::LineComment) => {
                pending.set(TokenFlags::TRIVIA_BEFORE);
                continue;
            }
            Ok(RawToken::Newline) => {
                pending.set(TokenFlags::NEWLINE_BEFORE);
                continue;
            }
            Ok(raw) => Some(raw),
            Err(()) => None,
        };

        let mut flags = pending;
        pending = TokenFlags::EMPTY;
        match prev_end {
            Some(end) if end == span.start => flags.set(TokenFlags::ADJACENT),
            Some(end) if end < span.start => flags.set(TokenFlags::SPACE_BEFORE),
            _ => {}
        }

        let token = match raw {
            Some(raw) => {
                let before = output.errors.len();
                let token = convert(raw, slice, span, interner, &mut output.errors);
                if output.errors.len() > before {
                    flags.set(TokenFlags::HAS_ERROR);
                }
                token
            }
            None => {
                let c = slice.chars().next().unwrap_or('\0');
                output
                    .errors
                    .push(LexError::new(LexErrorKind::InvalidChar(c), span));
                flags.set(TokenFlags::HAS_ERROR);
                Token::new(TokenKind::Error, span)
            }
        };

        tracing::trace!(kind = ?token.kind, ?span, "token");
        output.tokens.push_with_flags(token, flags);
        prev_end = Some(span.end);
    }

    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source file exceeds {} bytes", u32::MAX));
    let mut eof_flags = pending;
    if prev_end.is_some_and(|end| end < eof_pos) {
        eof_flags.set(TokenFlags::SPACE_BEFORE);
    }
    output
        .tokens
        .push_with_flags(Token::new(TokenKind::Eof, Span::point(eof_pos)), eof_flags);

    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed source"
    );
    output
}

fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or_else(|e| panic!("{e}"))
}

fn convert(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
    errors: &mut Vec<LexError>,
) -> Token {
    let mut fail = |kind: LexErrorKind, at: Span| errors.push(LexError::new(kind, at));

    match raw {
        RawToken::Fixed(kind) => Token::new(kind, span),
        RawToken::Ident => {
            Token::with_value(TokenKind::Ident, TokenValue::Name(interner.intern(slice)), span)
        }
        RawToken::QuotedIdent => Token::with_value(
            TokenKind::Ident,
            TokenValue::Name(interner.intern(&slice[1..])),
            span,
        ),
        RawToken::Int => match slice.parse::<u64>() {
            Ok(n) => Token::with_value(TokenKind::Int, TokenValue::Int(n), span),
            Err(_) => {
                fail(LexErrorKind::IntOverflow(slice.to_owned()), span);
                Token::with_value(TokenKind::Int, TokenValue::Int(0), span)
            }
        },
        RawToken::HexInt => match u64::from_str_radix(&slice[2..], 16) {
            Ok(n) => Token::with_value(TokenKind::Int, TokenValue::Int(n), span),
            Err(_) => {
                fail(LexErrorKind::IntOverflow(slice.to_owned()), span);
                Token::with_value(TokenKind::Int, TokenValue::Int(0), span)
            }
        },
        RawToken::Float => {
            let digits = slice.trim_end_matches(['f', 'F']);
            match digits.parse::<f64>() {
                Ok(v) => Token::with_value(TokenKind::Float, TokenValue::Float(v.to_bits()), span),
                Err(_) => {
                    fail(LexErrorKind::BadNumber(slice.to_owned()), span);
                    Token::with_value(TokenKind::Float, TokenValue::Float(0), span)
                }
            }
        }
        RawToken::Decimal => Token::with_value(
            TokenKind::Decimal,
            TokenValue::Name(interner.intern(&slice[..slice.len() - 1])),
            span,
        ),
        RawToken::String => string_token(&slice[1..slice.len() - 1], span, interner, fail),
        RawToken::UnterminatedString => {
            fail(LexErrorKind::UnterminatedString, span);
            string_token(&slice[1..], span, interner, fail)
        }
        RawToken::LineComment | RawToken::Newline => Token::new(TokenKind::Error, span),
    }
}

fn string_token(
    body: &str,
    span: Span,
    interner: &StringInterner,
    mut on_error: impl FnMut(LexErrorKind, Span),
) -> Token {
    let unescaped = unescape_string(body);
    for (offset, c) in unescaped.invalid {
        // +1 skips the opening quote
        let start = span.start + 1 + u32::try_from(offset).unwrap_or(0);
        on_error(LexErrorKind::InvalidEscape(c), Span::new(start, start + 2));
    }
    Token::with_value(
        TokenKind::String,
        TokenValue::Name(interner.intern(&unescaped.text)),
        span,
    )
}

#[cfg(test)]
mod tests;
