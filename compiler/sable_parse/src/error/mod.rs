//! Parse error types.
//!
//! - [`ParseError`]: code, message, span, context and the recovery taken
//! - [`ParseErrorKind`]: expected-token, ambiguous, or malformed-pattern
//! - [`ErrorContext`] for "while parsing X" notes

mod context;
mod kind;
mod parse_error;

#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use kind::{ParseErrorKind, RecoveryAction};
pub use parse_error::ParseError;
