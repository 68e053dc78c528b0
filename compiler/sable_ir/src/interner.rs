//! Sharded string interner.
//!
//! Identifiers, string literal bodies and decimal literal text are interned
//! once by the scanner; the parser and printer only ever handle [`Name`]s.
//! Shards are independently locked so the driver can scan several files on
//! worker threads against one shared interner.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct InternShard {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        shard.map.insert("", 0);
        shard.strings.push("");
        shard
    }
}

/// A shard ran out of 28-bit local indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {shard_idx} is full ({count} strings, max {})",
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Thread-safe string interner with per-shard `RwLock`s.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    total_count: AtomicUsize,
}

impl StringInterner {
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });
        let interner = Self {
            shards,
            total_count: AtomicUsize::new(1),
        };
        interner.pre_intern_builtin_names();
        interner
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Intern `s`, returning an error instead of panicking when a shard is full.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is below NUM_SHARDS"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        if let Some(&local) = shard.read().map.get(s) {
            return Ok(Name::new(shard_idx_u32, local));
        }

        let mut guard = shard.write();
        // Another thread may have won the race between the two locks.
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(shard_idx_u32, local));
        }

        let local = u32::try_from(guard.strings.len())
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard_idx,
                count: guard.strings.len(),
            })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(shard_idx_u32, local))
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// Panics if a shard exceeds 2^28 strings.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Text of an interned name. Interned strings are never freed.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings.get(name.local()).copied().unwrap_or("")
    }

    fn pre_intern_builtin_names(&self) {
        const NAMES: &[&str] = &[
            "int", "float", "decimal", "boolean", "string", "byte", "any", "anydata", "json",
            "xml", "handle", "never", "readonly", "map", "stream", "table", "future",
            "typedesc", "error", "object", "record", "function", "value", "key",
        ];
        for name in NAMES {
            self.intern(name);
        }
    }

    /// Number of interned strings, the empty string included.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read access to interned text, so printers and dumps need not name the
/// concrete interner.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Reference-counted interner handle shared by parallel parse jobs.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests;
