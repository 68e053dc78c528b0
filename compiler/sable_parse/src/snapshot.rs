//! Parser marks for speculative parsing.
//!
//! A [`ParserSnapshot`] records everything a trial parse can change: the
//! cursor position, how many diagnostics were recorded, the arena's table
//! lengths and the context flags. Restoring it rolls all four back, so an
//! abandoned alternative leaves no nodes and no diagnostics behind.
//!
//! Prefer plain token lookahead (`peek_kind_at`) when a decision only needs
//! a few tokens. Snapshots are for decisions that need a full parse, which
//! is what the disambiguation engine does at its sites.

use crate::context::ParseContext;
use crate::error::ParseError;
use crate::Parser;
use sable_ir::{ArenaMark, ArenaTail};

/// Plain-data snapshot of parser state. Taking one allocates nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    /// Position in the token stream.
    pub(crate) cursor_pos: usize,
    /// Number of recorded diagnostics, warnings included.
    pub(crate) errors_len: usize,
    /// Number of error-severity diagnostics reported.
    pub(crate) error_count: usize,
    pub(crate) arena: ArenaMark,
    pub(crate) context: ParseContext,
}

impl ParserSnapshot {
    /// Token index the snapshot was taken at.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor_pos
    }
}

impl Parser<'_> {
    /// Capture the current parser state.
    #[inline]
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor_pos: self.cursor.position(),
            errors_len: self.errors.len(),
            error_count: self.error_count,
            arena: self.arena.mark(),
            context: self.context,
        }
    }

    /// Roll the parser back to `snapshot`.
    ///
    /// Nodes and diagnostics recorded since the snapshot are discarded.
    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.errors.truncate(snapshot.errors_len);
        self.error_count = snapshot.error_count;
        self.arena.truncate(snapshot.arena);
        self.context = snapshot.context;
    }

    /// Roll back to `snapshot` like [`Parser::restore`], but keep what was
    /// undone so [`Parser::reattach`] can put it back without re-parsing.
    pub(crate) fn detach(&mut self, snapshot: ParserSnapshot) -> DetachedParse {
        let detached = DetachedParse {
            base: snapshot,
            cursor_pos: self.cursor.position(),
            errors: self.errors.split_off(snapshot.errors_len),
            error_count: self.error_count,
            arena: self.arena.split_off(snapshot.arena),
        };
        self.restore(snapshot);
        detached
    }

    /// Return to the state a detached parse ended in.
    ///
    /// Anything parsed since the detach is discarded first.
    pub(crate) fn reattach(&mut self, detached: DetachedParse) {
        self.restore(detached.base);
        self.cursor.set_position(detached.cursor_pos);
        self.errors.extend(detached.errors);
        self.error_count = detached.error_count;
        self.arena.append(detached.arena);
    }
}

/// The end state of a parse that was rolled back with [`Parser::detach`].
pub(crate) struct DetachedParse {
    base: ParserSnapshot,
    cursor_pos: usize,
    errors: Vec<ParseError>,
    error_count: usize,
    arena: ArenaTail,
}

#[cfg(test)]
mod tests;
