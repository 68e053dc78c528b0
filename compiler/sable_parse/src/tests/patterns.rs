use pretty_assertions::assert_eq;

use super::{binding, destructuring, matching};

// Binding patterns

#[test]
fn test_binding_leaves() {
    assert_eq!(binding("x"), "x");
    assert_eq!(binding("_"), "_");
}

#[test]
fn test_binding_list_pattern() {
    assert_eq!(
        binding("[first, _, ...rest]"),
        "(list-pattern first _ (rest rest))"
    );
    assert_eq!(binding("[]"), "(list-pattern)");
    assert_eq!(binding("[[a, b], c]"), "(list-pattern (list-pattern a b) c)");
}

#[test]
fn test_binding_mapping_pattern() {
    assert_eq!(
        binding("{name, age: a, ...others}"),
        "(mapping-pattern (field name) (field age a) (rest others))"
    );
    assert_eq!(
        binding("{inner: {x, y}}"),
        "(mapping-pattern (field inner (mapping-pattern (field x) (field y))))"
    );
}

#[test]
fn test_binding_error_pattern() {
    assert_eq!(
        binding("error(msg, cause, code = c, ...r)"),
        "(error-pattern msg cause (field code c) (rest r))"
    );
    assert_eq!(binding("error MyErr(m)"), "(error-pattern MyErr m)");
    assert_eq!(binding("error mod:Failure(m)"), "(error-pattern mod:Failure m)");
}

// Match patterns

#[test]
fn test_match_leaves() {
    assert_eq!(matching("var x"), "(var x)");
    assert_eq!(matching("_"), "_");
    assert_eq!(matching("1"), "1");
    assert_eq!(matching("-1"), "(- 1)");
    assert_eq!(matching("\"ok\""), "\"ok\"");
    assert_eq!(matching("()"), "nil");
    assert_eq!(matching("Color"), "(const Color)");
    assert_eq!(matching("m:C"), "(const m:C)");
}

#[test]
fn test_match_var_binds_structure() {
    assert_eq!(matching("var [a, b]"), "(var (list-pattern a b))");
}

#[test]
fn test_match_structured_patterns() {
    assert_eq!(
        matching("[1, var x, ...var rest]"),
        "(list-pattern 1 (var x) (rest rest))"
    );
    assert_eq!(
        matching("{status: 200, body: var b}"),
        "(mapping-pattern (field status 200) (field body (var b)))"
    );
    assert_eq!(matching("error(var m)"), "(error-pattern (var m))");
}

// Destructuring patterns

#[test]
fn test_destructuring_places() {
    assert_eq!(destructuring("x"), "(ref x)");
    assert_eq!(destructuring("a.b[0]"), "(ref (index (. a b) 0))");
    assert_eq!(destructuring("_"), "_");
}

#[test]
fn test_destructuring_structures() {
    assert_eq!(
        destructuring("[x, r.f, ...rest]"),
        "(list-pattern (ref x) (ref (. r f)) (rest rest))"
    );
    assert_eq!(
        destructuring("{a: x, b}"),
        "(mapping-pattern (field a (ref x)) (field b))"
    );
    assert_eq!(
        destructuring("error(m, code = c)"),
        "(error-pattern (ref m) (field code (ref c)))"
    );
}
