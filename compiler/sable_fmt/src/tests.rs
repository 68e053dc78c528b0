//! Printer tests against trees built by the parser.

use pretty_assertions::assert_eq;
use sable_ir::StringInterner;
use sable_parse::{
    parse_binding_pattern, parse_expression, parse_match_pattern, parse_source,
    parse_source_with, parse_type_descriptor, ParseOptions,
};

use crate::{dump_expr, dump_stmts, dump_type, print_expr, print_pattern, print_stmts, print_type};

fn expr(source: &str) -> String {
    let interner = StringInterner::new();
    let parsed = parse_source_with(source, &interner, ParseOptions::default(), parse_expression);
    assert!(!parsed.has_errors(), "{source}: {:?}", parsed.diagnostics());
    print_expr(&parsed.output.arena, &interner, parsed.output.root)
}

fn ty(source: &str) -> String {
    let interner = StringInterner::new();
    let parsed = parse_source_with(source, &interner, ParseOptions::default(), parse_type_descriptor);
    assert!(!parsed.has_errors(), "{source}: {:?}", parsed.diagnostics());
    print_type(&parsed.output.arena, &interner, parsed.output.root)
}

fn stmts(source: &str) -> String {
    let interner = StringInterner::new();
    let parsed = parse_source(source, &interner, ParseOptions::default());
    assert!(!parsed.has_errors(), "{source}: {:?}", parsed.diagnostics());
    print_stmts(&parsed.output.arena, &interner, parsed.output.root)
}

#[test]
fn canonical_expressions_print_unchanged() {
    for source in [
        "a + b * c",
        "(a + b) * c",
        "a - (b - c)",
        "a || b && !c",
        "x << 2 >>> 1",
        "-x * +y",
        "typeof value",
        "check fetch(id, retries = 3)",
        "trap parse(text)",
        "<int> value",
        "a ?: b ?: c",
        "cond ? first : second",
        "a ?: b ? c : d",
        "a ? b : c ?: d",
        "(a ?: b) ? c : d",
        "a is int ? b : c",
        "a is int == b",
        "(a is int) | b",
        "'int + 'from",
        "obj.field?.next[0].@display",
        "conn->get(\"/path\")",
        "[1, ...rest]",
        "{ a: 1, \"b\": 2, c, [k]: v, ...others }",
        "x => x + 1",
        "(a, b) => a * b",
        "let int n = 1 in n * 2",
        "from var x in xs where x > 0 order by x descending limit 10 select x",
        "new Client(url)",
        "error(\"boom\", cause)",
        "function (int a, string... rest) returns int => a",
        "start work()",
        "wait pending",
        "mod:value + 1",
    ] {
        assert_eq!(expr(source), source);
    }
}

#[test]
fn type_before_conditional_keeps_nullable_reading_apart() {
    // `int ? int : c` would read the first `?` as nullable.
    assert_eq!(expr("(a is int) ? int : c"), "(a is int) ? int : c");
    assert_eq!(expr("a is int? ? b : c"), "a is int? ? b : c");
}

#[test]
fn printed_statements_reparse_to_the_same_tree() {
    for source in [
        "x = a is int ? b : c;",
        "x = 'int;",
        "x = 'foreach.'map + 1;",
        "x = a ?: b ? c : d;",
        "x = (a ?: b) ? c : d;",
        "int[] xs = [1, 2];",
        "if (a) { b(); }",
    ] {
        let interner = StringInterner::new();
        let first = parse_source(source, &interner, ParseOptions::default());
        assert!(!first.has_errors(), "{source}: {:?}", first.diagnostics());
        let printed = print_stmts(&first.output.arena, &interner, first.output.root);
        let second = parse_source(&printed, &interner, ParseOptions::default());
        assert!(!second.has_errors(), "{printed}: {:?}", second.diagnostics());
        assert_eq!(
            dump_stmts(&second.output.arena, &interner, second.output.root),
            dump_stmts(&first.output.arena, &interner, first.output.root),
            "{source} printed as {printed}"
        );
    }
}

#[test]
fn redundant_whitespace_is_normalized() {
    assert_eq!(expr("a+b*  c"), "a + b * c");
    assert_eq!(expr("f( 1,2 )"), "f(1, 2)");
    assert_eq!(expr("{}"), "{}");
}

#[test]
fn literals_keep_their_spelling() {
    assert_eq!(expr("1.5"), "1.5");
    assert_eq!(expr("2.50d"), "2.50d");
    assert_eq!(expr("\"tab\\there\""), "\"tab\\there\"");
    assert_eq!(expr("()"), "()");
    assert_eq!(expr("null"), "null");
}

#[test]
fn canonical_types_print_unchanged() {
    for source in [
        "int",
        "int|string|()",
        "int[]",
        "string[3][]",
        "int?",
        "(int|string)[]",
        "map<json>",
        "stream<int, error>",
        "table<Row> key(id, name)",
        "[int, string...]",
        "record { int id; string name?; }",
        "record {| readonly int id; string...; |}",
        "client object { public function get(string path) returns json; }",
        "function (int, string) returns boolean",
        "distinct error",
        "error<Detail>",
        "A&B",
        "1|2|3",
        "\"on\"|\"off\"",
    ] {
        assert_eq!(ty(source), source);
    }
}

#[test]
fn patterns_print_in_source_form() {
    let interner = StringInterner::new();
    let binding = parse_source_with(
        "[first, _, ...rest]",
        &interner,
        ParseOptions::default(),
        parse_binding_pattern,
    );
    assert!(!binding.has_errors());
    assert_eq!(
        print_pattern(&binding.output.arena, &interner, binding.output.root),
        "[first, _, ...rest]"
    );

    let matching = parse_source_with(
        "{id: var n, kind: \"a\"}",
        &interner,
        ParseOptions::default(),
        parse_match_pattern,
    );
    assert!(!matching.has_errors());
    assert_eq!(
        print_pattern(&matching.output.arena, &interner, matching.output.root),
        "{id: var n, kind: \"a\"}"
    );
}

#[test]
fn statements_print_one_per_line() {
    let source = "int x = 1;\nx += 2;\nif x > 2 {\n    return x;\n} else {\n    panic error(\"small\");\n}\n";
    assert_eq!(stmts(source), source);
}

#[test]
fn nested_blocks_indent() {
    let source = "foreach var item in items {\n    while item.ready() {\n        break;\n    }\n}\n";
    assert_eq!(stmts(source), source);
}

#[test]
fn keyword_named_identifiers_keep_their_quote() {
    assert_eq!(stmts("x = 'int;"), "x = 'int;\n");
    assert_eq!(stmts("'error = f('start);"), "'error = f('start);\n");
}

#[test]
fn untyped_input_binding_prints_var() {
    assert_eq!(stmts("foreach x in xs { }"), "foreach var x in xs {}\n");
}

#[test]
fn dump_shows_precedence() {
    let interner = StringInterner::new();
    let parsed = parse_source_with(
        "a + b * c - d",
        &interner,
        ParseOptions::default(),
        parse_expression,
    );
    assert_eq!(
        dump_expr(&parsed.output.arena, &interner, parsed.output.root),
        "(- (+ a (* b c)) d)"
    );
}

#[test]
fn dump_shows_type_operator_binding() {
    let interner = StringInterner::new();
    let parsed = parse_source_with(
        "int|string[]?",
        &interner,
        ParseOptions::default(),
        parse_type_descriptor,
    );
    assert_eq!(
        dump_type(&parsed.output.arena, &interner, parsed.output.root),
        "(nullable (union int (array string [])))"
    );
}

#[test]
fn dump_statements_line_per_statement() {
    let interner = StringInterner::new();
    let parsed = parse_source("var x = 1; x = x * 2;", &interner, ParseOptions::default());
    assert_eq!(
        dump_stmts(&parsed.output.arena, &interner, parsed.output.root),
        "(local var x 1)\n(= x (* x 2))"
    );
}

#[test]
fn recovered_statement_prints_placeholder() {
    let interner = StringInterner::new();
    let parsed = parse_source("x = 1;\ny = ;\nz = 3;", &interner, ParseOptions::default());
    assert!(parsed.has_errors());
    let printed = print_stmts(&parsed.output.arena, &interner, parsed.output.root);
    assert!(printed.starts_with("x = 1;\n"), "{printed}");
    assert!(printed.contains("<error>;"), "{printed}");
    assert!(printed.ends_with("z = 3;\n"), "{printed}");
}
