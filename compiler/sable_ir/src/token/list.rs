//! Scanner output: tokens plus parallel tag and flag arrays.

use super::{Token, TokenFlags, TokenKind};

/// Ordered token stream ending in exactly one [`TokenKind::Eof`].
///
/// `kinds[i] == tokens[i].kind` and `flags[i]` describes the trivia before
/// `tokens[i]`. The parser's hot paths read the dense `kinds` array only.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
    kinds: Vec<TokenKind>,
    flags: Vec<TokenFlags>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            kinds: Vec::with_capacity(capacity),
            flags: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.push_with_flags(token, TokenFlags::EMPTY);
    }

    #[inline]
    pub fn push_with_flags(&mut self, token: Token, flags: TokenFlags) {
        self.kinds.push(token.kind);
        self.flags.push(flags);
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }

    #[inline]
    pub fn flags(&self) -> &[TokenFlags] {
        &self.flags
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Whether the list is terminated by a single trailing `Eof`.
    pub fn is_terminated(&self) -> bool {
        self.kinds.last() == Some(&TokenKind::Eof)
            && self.kinds.iter().filter(|k| **k == TokenKind::Eof).count() == 1
    }
}
