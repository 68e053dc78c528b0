//! Interned identifier handle.

use std::fmt;

/// Interned string handle.
///
/// 32 bits: the top 4 select an interner shard, the low 28 index into it.
/// Equality is an integer compare; the text lives in the
/// [`StringInterner`](crate::StringInterner).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string, pre-interned in shard 0.
    pub const EMPTY: Name = Name(0);

    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    pub const NUM_SHARDS: usize = 16;

    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << 28) | local)
    }

    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.local())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
