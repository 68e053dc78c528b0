//! Four-way parse outcome for progress-aware parsing.
//!
//! | Progress | Result | Variant | Meaning |
//! |----------|--------|---------|---------|
//! | Consumed | Ok | `ConsumedOk` | Committed to parse path, succeeded |
//! | Empty | Ok | `EmptyOk` | Optional content absent, succeeded |
//! | Consumed | Err | `ConsumedErr` | Real error, no backtracking |
//! | Empty | Err | `EmptyErr` | Try next alternative |
//!
//! The combination of progress and result decides the strategy:
//! `ConsumedErr` is reported and recovered at the nearest list, statement
//! or entry point; `EmptyErr` lets the caller try another production.
//!
//! ```ignore
//! fn parse_match_leaf(&mut self) -> ParseOutcome<PatternId> {
//!     one_of!(self,
//!         self.parse_literal_pattern(),
//!         self.parse_name_pattern(),
//!     )
//! }
//! ```

use crate::error::ErrorContext;
use crate::recovery::TokenSet;
use crate::ParseError;
use sable_ir::Span;

/// A four-way parse result distinguishing consumed vs empty and success vs
/// failure.
#[derive(Debug)]
pub enum ParseOutcome<T> {
    /// Consumed input and succeeded.
    ConsumedOk { value: T },

    /// No input consumed, but succeeded.
    ///
    /// Used for optional parsers; the value is typically `None`.
    EmptyOk { value: T },

    /// Consumed input then failed.
    ///
    /// The parser committed to a production but couldn't complete it.
    ConsumedErr {
        error: ParseError,
        /// Input consumed before the error.
        consumed_span: Span,
    },

    /// No input consumed, failed.
    EmptyErr {
        /// Set of token kinds that would have been valid here.
        expected: TokenSet,
        /// Token index where the mismatch occurred.
        position: usize,
    },
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn consumed_ok(value: T) -> Self {
        Self::ConsumedOk { value }
    }

    #[inline]
    pub fn empty_ok(value: T) -> Self {
        Self::EmptyOk { value }
    }

    #[cold]
    pub fn consumed_err(error: ParseError, consumed_span: Span) -> Self {
        Self::ConsumedErr {
            error,
            consumed_span,
        }
    }

    #[inline]
    pub fn empty_err(expected: TokenSet, position: usize) -> Self {
        Self::EmptyErr { expected, position }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::ConsumedOk { .. } | Self::EmptyOk { .. })
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Map the success value, preserving the outcome variant.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParseOutcome<U> {
        match self {
            Self::ConsumedOk { value } => ParseOutcome::ConsumedOk { value: f(value) },
            Self::EmptyOk { value } => ParseOutcome::EmptyOk { value: f(value) },
            Self::ConsumedErr {
                error,
                consumed_span,
            } => ParseOutcome::ConsumedErr {
                error,
                consumed_span,
            },
            Self::EmptyErr { expected, position } => ParseOutcome::EmptyErr { expected, position },
        }
    }

    /// Attach "while parsing X" to hard errors.
    ///
    /// `EmptyErr` is left alone: soft errors drive backtracking and never
    /// accumulate context.
    #[must_use]
    pub fn with_error_context(self, context: ErrorContext) -> Self {
        match self {
            Self::ConsumedErr {
                error,
                consumed_span,
            } => Self::ConsumedErr {
                error: error.with_context(format!("while parsing {}", context.description())),
                consumed_span,
            },
            other => other,
        }
    }

    /// Unwrap the success value.
    ///
    /// # Panics
    /// Panics if this is an error variant.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::ConsumedOk { value } | Self::EmptyOk { value } => value,
            Self::ConsumedErr { error, .. } => {
                panic!("called `ParseOutcome::unwrap()` on `ConsumedErr`: {error}")
            }
            Self::EmptyErr { expected, position } => panic!(
                "called `ParseOutcome::unwrap()` on `EmptyErr` at token {position}: expected {}",
                expected.format_expected()
            ),
        }
    }

    /// Convert to Option, discarding error information.
    pub fn ok(self) -> Option<T> {
        match self {
            Self::ConsumedOk { value } | Self::EmptyOk { value } => Some(value),
            Self::ConsumedErr { .. } | Self::EmptyErr { .. } => None,
        }
    }
}

// === Backtracking Macros ===
//
// - `ConsumedErr`: hard error, don't backtrack
// - `EmptyErr`: soft error, try the next alternative

/// Try multiple alternatives in order.
///
/// For each alternative:
/// - `ConsumedOk`, `EmptyOk` or `ConsumedErr`: return it immediately
/// - `EmptyErr`: accumulate expected tokens, restore, try the next one
///
/// If all fail with `EmptyErr`, returns a merged `EmptyErr`.
#[macro_export]
macro_rules! one_of {
    ($self:expr, $first:expr $(, $rest:expr)* $(,)?) => {{
        let original = $self.snapshot();
        let accumulated = $crate::recovery::TokenSet::new();
        let last_position: usize = $self.cursor.position();
        $crate::one_of!(@rest $self, original, accumulated, last_position, $first $(, $rest)*)
    }};

    (@rest $self:expr, $original:expr, $accumulated:expr, $last_pos:expr $(,)?) => {{
        $crate::ParseOutcome::EmptyErr {
            expected: $accumulated,
            position: $last_pos,
        }
    }};

    (@rest $self:expr, $original:expr, $accumulated:expr, $last_pos:expr, $next:expr $(, $rest:expr)* $(,)?) => {{
        match $next {
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                let mut acc = $accumulated;
                acc.union_with(&expected);
                let new_pos = $last_pos.max(position);
                $self.restore($original);
                $crate::one_of!(@rest $self, $original, acc, new_pos $(, $rest)*)
            }
            outcome => outcome,
        }
    }};
}

/// Parse something optional: `Some(value)` on success, `None` on a soft
/// error, early return on a hard error.
#[macro_export]
macro_rules! try_outcome {
    ($self:expr, $parser:expr) => {{
        let snapshot = $self.snapshot();
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value }
            | $crate::ParseOutcome::EmptyOk { value } => Some(value),
            $crate::ParseOutcome::ConsumedErr {
                error,
                consumed_span,
            } => {
                return $crate::ParseOutcome::ConsumedErr {
                    error,
                    consumed_span,
                };
            }
            $crate::ParseOutcome::EmptyErr { .. } => {
                $self.restore(snapshot);
                None
            }
        }
    }};
}

/// Require a successful parse, upgrading a soft error to a hard error that
/// names what was being parsed.
#[macro_export]
macro_rules! require {
    ($self:expr, $parser:expr, $context:expr) => {{
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value }
            | $crate::ParseOutcome::EmptyOk { value } => value,
            $crate::ParseOutcome::ConsumedErr {
                error,
                consumed_span,
            } => {
                return $crate::ParseOutcome::ConsumedErr {
                    error,
                    consumed_span,
                };
            }
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                let error = $self
                    .expected_error(&expected, position)
                    .with_context(format!("while parsing {}", $context.description()));
                let span = error.span;
                return $crate::ParseOutcome::ConsumedErr {
                    error,
                    consumed_span: span,
                };
            }
        }
    }};
}

/// Sequence a parse inside a production that has not committed yet:
/// any failure returns early unchanged.
#[macro_export]
macro_rules! chain {
    ($self:expr, $parser:expr) => {{
        match $parser {
            $crate::ParseOutcome::ConsumedOk { value }
            | $crate::ParseOutcome::EmptyOk { value } => value,
            $crate::ParseOutcome::ConsumedErr {
                error,
                consumed_span,
            } => {
                return $crate::ParseOutcome::ConsumedErr {
                    error,
                    consumed_span,
                };
            }
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                return $crate::ParseOutcome::EmptyErr { expected, position };
            }
        }
    }};
}

/// Bridge a `Result<T, ParseError>` after commitment: every `Err` becomes
/// `ConsumedErr`.
///
/// Use `chain!`/`require!` for calls that return `ParseOutcome`, and
/// `committed!` for calls that return `Result` (`expect`, `expect_ident`).
#[macro_export]
macro_rules! committed {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(error) => {
                let span = error.span;
                return $crate::ParseOutcome::ConsumedErr {
                    error,
                    consumed_span: span,
                };
            }
        }
    };
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
