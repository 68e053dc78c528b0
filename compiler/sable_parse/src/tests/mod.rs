//! Parser tests over scanned source.
//!
//! Trees are compared through their s-expression dump, so a failing test
//! shows the whole shape at once.
//!
//! - `expr`: precedence, associativity, primaries and postfix forms
//! - `types`: type descriptors
//! - `patterns`: binding, match and destructuring patterns
//! - `stmts`: the statement host
//! - `recovery`: diagnostics, placeholders and resynchronization

mod expr;
mod patterns;
mod stmts;

use sable_fmt::{dump_expr, dump_pattern, dump_stmts, dump_type};
use sable_ir::{AstArena, StringInterner, StringLookup, TokenList};

use crate::{
    parse_binding_pattern, parse_destructuring_pattern, parse_expression, parse_match_pattern,
    parse_source_with, parse_statements, parse_type_descriptor, ParseOptions, ParseOutput,
};

/// Parse `source` with `entry`, require a clean parse and dump the root.
fn clean<R: Copy>(
    source: &str,
    entry: fn(&TokenList, ParseOptions) -> ParseOutput<R>,
    dump: fn(&AstArena, &dyn StringLookup, R) -> String,
) -> String {
    let interner = StringInterner::new();
    let parsed = parse_source_with(source, &interner, ParseOptions::default(), entry);
    assert!(
        parsed.diagnostics().is_empty(),
        "{source}: {:#?}",
        parsed.output.diagnostics
    );
    dump(&parsed.output.arena, &interner, parsed.output.root)
}

pub(super) fn expr(source: &str) -> String {
    clean(source, parse_expression, dump_expr)
}

pub(super) fn ty(source: &str) -> String {
    clean(source, parse_type_descriptor, dump_type)
}

pub(super) fn binding(source: &str) -> String {
    clean(source, parse_binding_pattern, dump_pattern)
}

pub(super) fn matching(source: &str) -> String {
    clean(source, parse_match_pattern, dump_pattern)
}

pub(super) fn destructuring(source: &str) -> String {
    clean(source, parse_destructuring_pattern, dump_pattern)
}

pub(super) fn stmts(source: &str) -> String {
    clean(source, parse_statements, dump_stmts)
}
