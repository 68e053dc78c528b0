//! Per-token trivia flags.

/// Whitespace context preceding a token, packed into one byte.
///
/// The parser leans on [`ADJACENT`](Self::ADJACENT) to compose `>>`, `>>>`
/// and `>=` from single `>` tokens and to read `mod:name` as one qualified
/// identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// Spaces or tabs preceded this token.
    pub const SPACE_BEFORE: u8 = 1 << 0;
    /// A newline preceded this token.
    pub const NEWLINE_BEFORE: u8 = 1 << 1;
    /// A comment preceded this token.
    pub const TRIVIA_BEFORE: u8 = 1 << 2;
    /// The scanner reported an error for this token.
    pub const HAS_ERROR: u8 = 1 << 3;
    /// Nothing at all separates this token from the previous one.
    pub const ADJACENT: u8 = 1 << 4;

    pub const EMPTY: Self = TokenFlags(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        TokenFlags(bits)
    }

    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.contains(Self::ADJACENT)
    }
}

const _: () = assert!(size_of::<TokenFlags>() == 1);
