//! Sable command-line driver.
//!
//! Thin layer over the front-end crates: reads files, runs the scanner and
//! parser, renders trees and diagnostics. The binary in `main.rs` only
//! parses arguments and maps results to exit codes.

pub mod commands;
mod error;
mod tracing_setup;

pub use error::DriverError;
pub use tracing_setup::init_tracing;
