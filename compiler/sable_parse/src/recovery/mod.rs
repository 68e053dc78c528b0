//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after errors.
//! Uses bitset-based O(1) membership testing inspired by Go's parser.

use super::cursor::Cursor;
use sable_ir::TokenKind;

const _: () = assert!(
    TokenKind::COUNT <= 256,
    "TokenSet uses a 256-bit set; all token tags must be < 256"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Bit `n` of the 256-bit set corresponds to the token with tag `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSet([u128; 2]);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self([0, 0])
    }

    /// Create a token set containing a single token kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self::new().with(kind)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        let tag = kind.tag() as usize;
        let mut words = self.0;
        words[tag / 128] |= 1u128 << (tag % 128);
        Self(words)
    }

    /// Add every kind in `kinds`.
    #[must_use]
    pub const fn with_all(self, kinds: &[TokenKind]) -> Self {
        let mut set = self;
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self([self.0[0] | other.0[0], self.0[1] | other.0[1]])
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let tag = kind.tag() as usize;
        (self.0[tag / 128] & (1u128 << (tag % 128))) != 0
    }

    /// True if every member of `other` is also in `self`.
    #[inline]
    pub const fn contains_all(&self, other: &Self) -> bool {
        (self.0[0] & other.0[0]) == other.0[0] && (self.0[1] & other.0[1]) == other.0[1]
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    /// Count the number of token kinds in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0[0].count_ones() + self.0[1].count_ones()
    }

    /// Union with another set (non-const mutation).
    #[inline]
    pub fn union_with(&mut self, other: &Self) {
        self.0[0] |= other.0[0];
        self.0[1] |= other.0[1];
    }

    /// Iterate over the kinds in this set in tag order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL
            .iter()
            .copied()
            .filter(move |kind| self.contains(*kind))
    }

    /// Format this token set as a human-readable list for error messages.
    ///
    /// Returns a string like "`,`, `)`, or `}`" for multiple tokens,
    /// or "`(`" for a single token, or "nothing" for empty set.
    pub fn format_expected(&self) -> String {
        let names: Vec<String> = self.iter().map(|kind| kind.to_string()).collect();

        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => single.clone(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Opening delimiters; synchronization skips over balanced groups.
pub const OPENERS: TokenSet = TokenSet::new().with_all(&[
    TokenKind::LParen,
    TokenKind::LBracket,
    TokenKind::LBrace,
    TokenKind::LBracePipe,
]);

/// Closing delimiters. A closer at nesting depth zero always stops
/// synchronization: it belongs to an enclosing construct.
pub const CLOSERS: TokenSet = TokenSet::new().with_all(&[
    TokenKind::RParen,
    TokenKind::RBracket,
    TokenKind::RBrace,
    TokenKind::PipeRBrace,
]);

/// Keywords that begin a module-level declaration.
pub const DECLARATION_KEYWORDS: TokenSet = TokenSet::new().with_all(&[
    TokenKind::KwPublic,
    TokenKind::KwPrivate,
    TokenKind::KwRemote,
    TokenKind::KwConst,
    TokenKind::KwImport,
    TokenKind::KwType,
    TokenKind::KwService,
    TokenKind::KwClass,
    TokenKind::KwListener,
    TokenKind::KwAnnotation,
]);

/// Boundary for statement-level recovery.
pub const STMT_BOUNDARY: TokenSet = DECLARATION_KEYWORDS.with(TokenKind::Semi);

/// Boundary for recovery inside a comma-separated list.
pub const LIST_BOUNDARY: TokenSet = STMT_BOUNDARY.with(TokenKind::Comma);

/// Tokens that can begin an expression.
pub const EXPR_START: TokenSet = TokenSet::new().with_all(&[
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Decimal,
    TokenKind::String,
    TokenKind::Ident,
    TokenKind::KwTrue,
    TokenKind::KwFalse,
    TokenKind::KwNull,
    TokenKind::KwTypeof,
    TokenKind::KwCheck,
    TokenKind::KwCheckpanic,
    TokenKind::KwTrap,
    TokenKind::KwNew,
    TokenKind::KwStart,
    TokenKind::KwWait,
    TokenKind::KwFrom,
    TokenKind::KwLet,
    TokenKind::LParen,
    TokenKind::LBracket,
    TokenKind::LBrace,
    TokenKind::Lt,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Bang,
    TokenKind::Tilde,
]);

/// Tokens that can begin a type descriptor.
pub const TYPE_START: TokenSet = TokenSet::new().with_all(&[
    TokenKind::KwInt,
    TokenKind::KwFloat,
    TokenKind::KwDecimal,
    TokenKind::KwBoolean,
    TokenKind::KwString,
    TokenKind::KwByte,
    TokenKind::KwAny,
    TokenKind::KwAnydata,
    TokenKind::KwJson,
    TokenKind::KwXml,
    TokenKind::KwHandle,
    TokenKind::KwNever,
    TokenKind::KwReadonly,
    TokenKind::KwMap,
    TokenKind::KwStream,
    TokenKind::KwTable,
    TokenKind::KwFuture,
    TokenKind::KwTypedesc,
    TokenKind::KwError,
    TokenKind::KwObject,
    TokenKind::KwRecord,
    TokenKind::KwFunction,
    TokenKind::KwDistinct,
    TokenKind::KwClient,
    TokenKind::KwIsolated,
    TokenKind::Ident,
    TokenKind::LParen,
    TokenKind::LBracket,
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Decimal,
    TokenKind::String,
    TokenKind::KwTrue,
    TokenKind::KwFalse,
    TokenKind::KwNull,
    TokenKind::Minus,
    TokenKind::Plus,
]);

/// Tokens that can begin a binding, match or destructuring pattern.
pub const PATTERN_START: TokenSet = TokenSet::new().with_all(&[
    TokenKind::Ident,
    TokenKind::Underscore,
    TokenKind::LBracket,
    TokenKind::LBrace,
    TokenKind::KwError,
    TokenKind::KwVar,
    TokenKind::Int,
    TokenKind::Float,
    TokenKind::Decimal,
    TokenKind::String,
    TokenKind::KwTrue,
    TokenKind::KwFalse,
    TokenKind::KwNull,
    TokenKind::Minus,
    TokenKind::Plus,
    TokenKind::LParen,
]);

/// Advance the cursor until reaching a token in the recovery set at nesting
/// depth zero, a closer at depth zero, or EOF.
///
/// Balanced groups opened while skipping are skipped whole, so a `,` inside
/// a nested call never stops recovery for the enclosing list.
///
/// Returns the number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> u32 {
    let mut depth = 0u32;
    let mut skipped = 0u32;
    loop {
        let kind = cursor.current_kind();
        if kind == TokenKind::Eof {
            break;
        }
        if depth == 0 && (recovery.contains(kind) || CLOSERS.contains(kind)) {
            break;
        }
        if OPENERS.contains(kind) {
            depth += 1;
        } else if CLOSERS.contains(kind) {
            depth -= 1;
        }
        cursor.advance();
        skipped += 1;
    }
    tracing::trace!(skipped, stop = %cursor.current_kind(), "synchronized");
    skipped
}

#[cfg(test)]
mod tests;
