//! Tokens as produced by the scanner and consumed by the parser.

mod flags;
mod kind;
mod list;

pub use flags::TokenFlags;
pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::{Name, Span};

/// Payload carried by literal and identifier tokens.
///
/// Floats are stored as bits so tokens stay `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenValue {
    #[default]
    None,
    /// Identifier text, string literal body, or decimal literal text.
    Name(Name),
    Int(u64),
    Float(u64),
}

/// A classified token with its source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            value: TokenValue::None,
            span,
        }
    }

    #[inline]
    pub const fn with_value(kind: TokenKind, value: TokenValue, span: Span) -> Self {
        Token { kind, value, span }
    }

    /// Interned payload of an identifier, string or decimal token.
    #[inline]
    pub fn name(&self) -> Option<Name> {
        match self.value {
            TokenValue::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            TokenValue::None => write!(f, "{:?} @ {}", self.kind, self.span),
            value => write!(f, "{:?}({:?}) @ {}", self.kind, value, self.span),
        }
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind, TokenValue};
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(TokenValue, 16);
    crate::static_assert_size!(Token, 32);
}
