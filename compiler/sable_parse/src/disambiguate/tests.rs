use pretty_assertions::assert_eq;
use sable_diagnostic::ErrorCode;
use sable_fmt::{dump_expr, dump_stmts};
use sable_ir::StringInterner;

use crate::{parse_expression, parse_source, parse_source_with, ParseOptions};

/// Dump of a cleanly parsed expression.
fn expr(source: &str) -> String {
    let interner = StringInterner::new();
    let parsed = parse_source_with(source, &interner, ParseOptions::default(), parse_expression);
    assert!(parsed.diagnostics().is_empty(), "{source}: {:?}", parsed.diagnostics());
    dump_expr(&parsed.output.arena, &interner, parsed.output.root)
}

/// Dump of cleanly parsed statements.
fn stmts(source: &str) -> String {
    let interner = StringInterner::new();
    let parsed = parse_source(source, &interner, ParseOptions::default());
    assert!(parsed.diagnostics().is_empty(), "{source}: {:?}", parsed.diagnostics());
    dump_stmts(&parsed.output.arena, &interner, parsed.output.root)
}

// Paren site

#[test]
fn paren_lambda_wins_before_arrow() {
    assert_eq!(expr("(x) => x"), "(lambda (params x) x)");
    assert_eq!(expr("(a, b) => a * b"), "(lambda (params a b) (* a b))");
}

#[test]
fn empty_parens_are_nil() {
    assert_eq!(expr("()"), "nil");
}

#[test]
fn paren_expression_is_group() {
    assert_eq!(expr("(a + b)"), "(group (+ a b))");
    assert_eq!(expr("(x)"), "(group x)");
}

#[test]
fn paren_type_keyword_is_type_value() {
    assert_eq!(expr("(int)"), "(typedesc (group int))");
}

#[test]
fn paren_type_with_array_suffix_is_whole_type() {
    assert_eq!(expr("(int)[]"), "(typedesc (array (group int) []))");
    assert_eq!(expr("(int|string)?"), "(typedesc (nullable (group (union int string))))");
}

#[test]
fn paren_site_with_no_reading_is_ambiguous() {
    let interner = StringInterner::new();
    let parsed = parse_source_with("(;", &interner, ParseOptions::default(), parse_expression);
    let codes: Vec<ErrorCode> = parsed.output.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E1006]);
    assert!(parsed.output.diagnostics[0]
        .message
        .starts_with("could not parse parenthesized construct as any of: lambda, nil literal"));
}

#[test]
fn furthest_reading_reports_its_own_error() {
    let interner = StringInterner::new();
    let parsed = parse_source_with("(a + )", &interner, ParseOptions::default(), parse_expression);
    assert!(parsed.has_errors());
    assert!(parsed
        .output
        .diagnostics
        .iter()
        .all(|d| d.code != ErrorCode::E1006));
}

// Bracket site

#[test]
fn bracketed_types_are_tuple() {
    assert_eq!(expr("[int, string]"), "(typedesc (tuple int string))");
    assert_eq!(expr("[int]"), "(typedesc (tuple int))");
}

#[test]
fn bracketed_values_are_list() {
    assert_eq!(expr("[1, 2]"), "(list 1 2)");
    assert_eq!(expr("[int, 1]"), "(list (typedesc int) 1)");
}

// Ternary true branch

#[test]
fn ternary_then_keeps_qualified_name() {
    assert_eq!(expr("c ? m:x : y"), "(? c m:x y)");
}

#[test]
fn ternary_then_splits_at_colon() {
    assert_eq!(expr("c ? a:b"), "(? c a b)");
}

// Statement sites

#[test]
fn brace_statement_is_block() {
    assert_eq!(stmts("{ }"), "(block)");
    assert_eq!(stmts("{ x = 1; }"), "(block (= x 1))");
}

#[test]
fn brace_statement_destructures_mapping() {
    assert_eq!(
        stmts("{a, b} = rec;"),
        "(destructure (mapping-pattern (field a) (field b)) rec)"
    );
}

#[test]
fn typed_statement_is_declaration() {
    assert_eq!(stmts("int x = 1;"), "(local int x 1)");
    assert_eq!(stmts("Person p;"), "(local Person p)");
}

#[test]
fn name_statement_is_assignment() {
    assert_eq!(stmts("x = 1;"), "(= x 1)");
    assert_eq!(stmts("x.y += 2;"), "(+= (. x y) 2)");
    assert_eq!(stmts("run();"), "(expr (call run))");
}

#[test]
fn bracket_statement_is_destructure() {
    assert_eq!(
        stmts("[a, b] = pair;"),
        "(destructure (list-pattern (ref a) (ref b)) pair)"
    );
    assert_eq!(stmts("_ = run();"), "(destructure _ (call run))");
}

#[test]
fn rejected_readings_leave_no_diagnostics() {
    let interner = StringInterner::new();
    let parsed = parse_source(
        "[a, b] = pair;\nx = (int)[];\n",
        &interner,
        ParseOptions::default(),
    );
    assert!(parsed.output.diagnostics.is_empty());
    assert_eq!(parsed.output.root.len(), 2);
}
