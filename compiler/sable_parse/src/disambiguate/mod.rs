//! Bounded speculative parsing for prefixes the grammar cannot decide with
//! a fixed lookahead.
//!
//! Each site lists its readings in a fixed priority order. A reading is
//! tried from a snapshot under [`ParseContext::SPECULATING`]; it succeeds
//! only if it returns a value and recorded no new diagnostic. The first
//! success is kept. When every reading fails, the end state of the one that
//! got furthest is put back so its diagnostics reach the user; if none got
//! past the leading token the site reports an ambiguous construct instead.
//!
//! Trials never outlive their site: the snapshot rolls back the cursor,
//! the arena and the diagnostic list, so a rejected reading leaves nothing
//! behind. No reading is ever parsed twice, so nested sites cost the sum
//! of their trials rather than a product.

mod sites;

use sable_diagnostic::ErrorCode;
use sable_ir::Span;
use tracing::{debug, trace};

use crate::context::ParseContext;
use crate::error::ParseError;
use crate::snapshot::DetachedParse;
use crate::{ParseOutcome, Parser, TokenSet};

/// Places where the engine runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Site {
    /// `(` in expression position.
    Paren,
    /// `[` followed by a type keyword in expression position.
    Bracket,
    /// `{` at the start of a statement.
    BraceStatement,
    /// A statement whose first token may begin a type.
    StatementStart,
    /// A conditional's true branch starting with `a:b`.
    TernaryThen,
}

impl Site {
    pub(crate) fn description(self) -> &'static str {
        match self {
            Site::Paren => "parenthesized construct",
            Site::Bracket => "bracketed construct",
            Site::BraceStatement => "braced statement",
            Site::StatementStart => "statement",
            Site::TernaryThen => "conditional branch",
        }
    }
}

/// One reading of a site.
pub(crate) struct Alternative<'a, T> {
    pub(crate) name: &'static str,
    pub(crate) parse: fn(&mut Parser<'a>) -> ParseOutcome<T>,
}

impl<'a, T> Alternative<'a, T> {
    pub(crate) fn new(name: &'static str, parse: fn(&mut Parser<'a>) -> ParseOutcome<T>) -> Self {
        Alternative { name, parse }
    }
}

impl<'a> Parser<'a> {
    /// Try each alternative in order and keep the first clean parse.
    ///
    /// On exhaustion the value comes from the furthest alternative's
    /// trial, or from `placeholder` after recovering to `recovery`. Either
    /// way the caller always gets a node.
    pub(crate) fn try_alternatives<T>(
        &mut self,
        site: Site,
        alternatives: &[Alternative<'a, T>],
        recovery: TokenSet,
        placeholder: fn(&mut Self, Span) -> T,
    ) -> T {
        let start = self.snapshot();
        // (alternative index, token position reached, trial outcome and state)
        let mut furthest: Option<(usize, usize, ParseOutcome<T>, DetachedParse)> = None;

        for (index, alternative) in alternatives.iter().enumerate() {
            trace!(site = ?site, alternative = alternative.name, "trying alternative");
            let outcome = self.with_context(ParseContext::SPECULATING, |p| (alternative.parse)(p));
            let clean = self.errors.len() == start.errors_len && self.error_count == start.error_count;

            let outcome = match outcome {
                ParseOutcome::ConsumedOk { value } | ParseOutcome::EmptyOk { value } if clean => {
                    debug!(site = ?site, alternative = alternative.name, "committed alternative");
                    return value;
                }
                rejected => rejected,
            };
            let reached = match &outcome {
                ParseOutcome::EmptyErr { expected, .. } if expected.is_empty() => None,
                ParseOutcome::EmptyErr { position, .. } => Some((*position).max(self.position())),
                _ => Some(self.position()),
            };
            trace!(
                site = ?site,
                alternative = alternative.name,
                ?reached,
                "rejected alternative"
            );
            // Abandoned readings are never kept.
            let further = reached.filter(|&reached| {
                furthest
                    .as_ref()
                    .map_or(true, |&(_, best, _, _)| reached > best)
            });
            if let Some(reached) = further {
                let detached = self.detach(start);
                furthest = Some((index, reached, outcome, detached));
            } else {
                self.restore(start);
            }
        }

        match furthest {
            Some((index, reached, outcome, detached)) if reached > start.position() + 1 => {
                let alternative = &alternatives[index];
                debug!(site = ?site, alternative = alternative.name, "keeping furthest alternative");
                self.reattach(detached);
                self.or_recover(outcome, recovery, placeholder)
            }
            _ => {
                let names: Vec<&str> = alternatives.iter().map(|a| a.name).collect();
                let error = ParseError::new(
                    ErrorCode::E1006,
                    format!(
                        "could not parse {} as any of: {}",
                        site.description(),
                        names.join(", ")
                    ),
                    self.current_span(),
                );
                let span = self.recover(error, recovery);
                placeholder(self, span)
            }
        }
    }

    /// Failure returned by an alternative that rejects its own reading.
    ///
    /// Unlike other failures it is never replayed on exhaustion.
    pub(crate) fn abandon<T>(&self) -> ParseOutcome<T> {
        ParseOutcome::empty_err(TokenSet::new(), self.position())
    }
}

#[cfg(test)]
mod tests;
