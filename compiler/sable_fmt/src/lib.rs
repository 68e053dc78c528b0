//! Sable printer
//!
//! Two views of a parsed tree:
//!
//! - [`print_expr`] and friends render canonical source. Parentheses are
//!   added only where the operator levels require them, so printing a
//!   tree and parsing the output gives the same tree back.
//! - [`dump_expr`] and friends render S-expressions such as
//!   `(+ a (* b c))`, which make the shape of a tree easy to assert on.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction
//! - `printer`: source rendering and the parenthesization rules
//! - `dump`: S-expression rendering

mod dump;
pub mod emitter;
mod printer;

pub use emitter::{Emitter, StringEmitter};

use sable_ir::{AstArena, ExprId, PatternId, StmtRange, StringLookup, TypeId};

use dump::Dumper;
use printer::Printer;

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Source text of an expression, without a trailing newline.
pub fn print_expr(arena: &AstArena, interner: &dyn StringLookup, id: ExprId) -> String {
    let mut printer = Printer::new(arena, interner);
    printer.expr(id);
    printer.finish()
}

/// Source text of a type descriptor.
pub fn print_type(arena: &AstArena, interner: &dyn StringLookup, id: TypeId) -> String {
    let mut printer = Printer::new(arena, interner);
    printer.ty(id);
    printer.finish()
}

/// Source text of a binding, match or destructuring pattern.
pub fn print_pattern(arena: &AstArena, interner: &dyn StringLookup, id: PatternId) -> String {
    let mut printer = Printer::new(arena, interner);
    printer.pattern(id);
    printer.finish()
}

/// Source text of a statement list, one statement per line.
pub fn print_stmts(arena: &AstArena, interner: &dyn StringLookup, stmts: StmtRange) -> String {
    let mut printer = Printer::new(arena, interner);
    printer.stmt_lines(stmts);
    printer.finish_lines()
}

/// S-expression of an expression.
pub fn dump_expr(arena: &AstArena, interner: &dyn StringLookup, id: ExprId) -> String {
    Dumper::new(arena, interner).expr(id)
}

/// S-expression of a type descriptor.
pub fn dump_type(arena: &AstArena, interner: &dyn StringLookup, id: TypeId) -> String {
    Dumper::new(arena, interner).ty(id)
}

/// S-expression of a pattern.
pub fn dump_pattern(arena: &AstArena, interner: &dyn StringLookup, id: PatternId) -> String {
    Dumper::new(arena, interner).pattern(id)
}

/// S-expressions of a statement list, one statement per line.
pub fn dump_stmts(arena: &AstArena, interner: &dyn StringLookup, stmts: StmtRange) -> String {
    let dumper = Dumper::new(arena, interner);
    arena
        .get_stmt_list(stmts)
        .iter()
        .map(|&s| dumper.stmt(s))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests;
