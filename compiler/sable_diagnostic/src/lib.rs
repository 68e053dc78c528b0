//! Diagnostics for the Sable front end.
//!
//! Every problem the scanner or parser finds becomes a [`Diagnostic`]: an
//! [`ErrorCode`], a message, labeled spans, and optional notes. Diagnostics
//! are collected in order and rendered afterwards by an
//! [`emitter`](emitter::DiagnosticEmitter); nothing in the front end prints
//! or aborts on its own.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, ParseErrorCodeError};
