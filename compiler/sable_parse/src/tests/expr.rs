//! Expression grammar: precedence climbing, prefix and postfix operators,
//! constructors, functions and queries.

use pretty_assertions::assert_eq;

use super::expr;

#[test]
fn test_literals() {
    assert_eq!(expr("42"), "42");
    assert_eq!(expr("1.5"), "1.5");
    assert_eq!(expr("2.50d"), "2.50d");
    assert_eq!(expr("\"text\""), "\"text\"");
    assert_eq!(expr("true"), "true");
    assert_eq!(expr("null"), "null");
    assert_eq!(expr("()"), "nil");
}

#[test]
fn test_multiplicative_binds_tighter_than_additive() {
    assert_eq!(expr("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(expr("1 * 2 + 3"), "(+ (* 1 2) 3)");
    assert_eq!(expr("a % b / c"), "(/ (% a b) c)");
}

#[test]
fn test_left_associativity() {
    assert_eq!(expr("a - b - c"), "(- (- a b) c)");
    assert_eq!(expr("a >> b >>> c"), "(>>> (>> a b) c)");
}

#[test]
fn test_shift_and_bitwise_levels() {
    assert_eq!(expr("a << 1 + 2"), "(<< a (+ 1 2))");
    assert_eq!(expr("a & b ^ c | d"), "(| (^ (& a b) c) d)");
}

#[test]
fn test_logical_and_equality_levels() {
    assert_eq!(
        expr("a == b && c != d || e"),
        "(|| (&& (== a b) (!= c d)) e)"
    );
    assert_eq!(expr("a === b == c"), "(=== a (== b c))");
    assert_eq!(expr("a < b == c"), "(== (< a b) c)");
    assert_eq!(expr("a >= b"), "(>= a b)");
}

#[test]
fn test_ranges() {
    assert_eq!(expr("1 ... 10"), "(... 1 10)");
    assert_eq!(expr("0 ..< n + 1"), "(..< 0 (+ n 1))");
}

#[test]
fn test_type_tests() {
    assert_eq!(expr("x is int && y"), "(&& (is x int) y)");
    assert_eq!(expr("x !is string"), "(!is x string)");
    // A trailing `?` with nothing after it is a nullable marker.
    assert_eq!(expr("x is int?"), "(is x (nullable int))");
    // One followed by an operand starts a conditional.
    assert_eq!(expr("x is int ? a : b"), "(? (is x int) a b)");
}

#[test]
fn test_conditional_and_elvis_are_right_associative() {
    assert_eq!(expr("a ?: b ?: c"), "(?: a (?: b c))");
    assert_eq!(expr("a ? b : c ? d : e"), "(? a b (? c d e))");
    assert_eq!(expr("a || b ? c : d"), "(? (|| a b) c d)");
    // The elvis right operand is a full expression, conditional included.
    assert_eq!(expr("a ?: b ? c : d"), "(?: a (? b c d))");
    assert_eq!(expr("a ? b : c ?: d"), "(? a b (?: c d))");
    assert_eq!(expr("a ?: b || c"), "(?: a (|| b c))");
}

#[test]
fn test_prefix_operators() {
    assert_eq!(expr("-a * b"), "(* (- a) b)");
    assert_eq!(expr("!a && b"), "(&& (! a) b)");
    assert_eq!(expr("~a"), "(~ a)");
    assert_eq!(expr("- - a"), "(- (- a))");
    assert_eq!(expr("typeof a == b"), "(== (typeof a) b)");
}

#[test]
fn test_check_trap_and_cast() {
    assert_eq!(expr("check f(x) + 1"), "(+ (check (call f x)) 1)");
    assert_eq!(expr("checkpanic f()"), "(checkpanic (call f))");
    assert_eq!(expr("trap f()"), "(trap (call f))");
    assert_eq!(expr("<int> x + 1"), "(+ (cast int x) 1)");
}

#[test]
fn test_names() {
    assert_eq!(expr("count"), "count");
    assert_eq!(expr("io:println(x)"), "(call io:println x)");
}

#[test]
fn test_calls_and_arguments() {
    assert_eq!(
        expr("f(1, x = 2, ...rest)"),
        "(call f 1 (= x 2) (... rest))"
    );
    assert_eq!(expr("f()"), "(call f)");
}

#[test]
fn test_member_access_chains_left_to_right() {
    assert_eq!(expr("obj.method(1)"), "(method obj method 1)");
    assert_eq!(expr("obj.field.inner"), "(. (. obj field) inner)");
    assert_eq!(expr("obj?.field"), "(?. obj field)");
    assert_eq!(expr("f(x)[0].y"), "(. (index (call f x) 0) y)");
    assert_eq!(expr("t[a, b]"), "(index t a b)");
}

#[test]
fn test_remote_call_and_annotation_access() {
    assert_eq!(expr("ep->get(\"/x\")"), "(-> ep get \"/x\")");
    assert_eq!(expr("v.@doc"), "(.@ v doc)");
    assert_eq!(expr("v.@meta:doc"), "(.@ v meta:doc)");
}

#[test]
fn test_list_constructor() {
    assert_eq!(expr("[]"), "(list)");
    assert_eq!(expr("[1, ...xs]"), "(list 1 (... xs))");
    assert_eq!(expr("[[1], [2, 3]]"), "(list (list 1) (list 2 3))");
}

#[test]
fn test_mapping_constructor() {
    assert_eq!(expr("{}"), "(mapping)");
    assert_eq!(
        expr("{a: 1, \"b\": 2, c, [k]: v, ...m}"),
        "(mapping (: a 1) (: \"b\" 2) c ([]: k v) (... m))"
    );
    assert_eq!(expr("{readonly a: 1}"), "(mapping (readonly (: a 1)))");
}

#[test]
fn test_table_constructor() {
    assert_eq!(
        expr("table key(id) [{id: 1}, {id: 2}]"),
        "(table (key id) (mapping (: id 1)) (mapping (: id 2)))"
    );
    assert_eq!(expr("table []"), "(table)");
}

#[test]
fn test_new_and_error_constructors() {
    assert_eq!(expr("new"), "(new)");
    assert_eq!(expr("new (1)"), "(new 1)");
    assert_eq!(expr("new Foo(1)"), "(new Foo 1)");
    assert_eq!(expr("error(\"e\")"), "(error \"e\")");
    assert_eq!(
        expr("error MyErr(\"e\", code = 1)"),
        "(error MyErr \"e\" (= code 1))"
    );
}

#[test]
fn test_anonymous_functions() {
    assert_eq!(
        expr("function (int a) returns int => a + 1"),
        "(function (params (param int a)) (returns int) (+ a 1))"
    );
    assert_eq!(
        expr("function (string s = \"x\") { return; }"),
        "(function (params (param string s \"x\")) (block (return)))"
    );
}

#[test]
fn test_inferred_lambdas() {
    assert_eq!(expr("x => x * 2"), "(lambda (params x) (* x 2))");
    assert_eq!(expr("() => 1"), "(lambda (params) 1)");
}

#[test]
fn test_let_expressions() {
    assert_eq!(
        expr("let int x = 1, y = 2 in x + y"),
        "(let (decl int x 1) (decl int y 2) (+ x y))"
    );
    assert_eq!(expr("let var x = f() in x"), "(let (decl var x (call f)) x)");
}

#[test]
fn test_query_expressions() {
    assert_eq!(
        expr("from var x in xs where x > 1 select x"),
        "(query (from var x xs) (where (> x 1)) (select x))"
    );
    assert_eq!(expr("from x in xs select x"), "(query (from var x xs) (select x))");
    assert_eq!(
        expr("stream from int x in xs select x"),
        "(query stream (from int x xs) (select x))"
    );
    assert_eq!(
        expr("table key(id) from var r in rows select r"),
        "(query (table (key id)) (from var r rows) (select r))"
    );
}

#[test]
fn test_query_clauses() {
    assert_eq!(
        expr("from var a in left join var b in right on a.id equals b.id select a"),
        "(query (from var a left) (join var b right (on (. a id) (. b id))) (select a))"
    );
    assert_eq!(
        expr("from var x in xs order by x.k ascending, x.n limit 5 select x"),
        "(query (from var x xs) (order-by (ascending (. x k)) (. x n)) (limit 5) (select x))"
    );
    assert_eq!(
        expr("from var x in xs let int y = x * 2 select y on conflict e"),
        "(query (from var x xs) (let (decl int y (* x 2))) (select y) (on-conflict e))"
    );
}

#[test]
fn test_start_and_wait() {
    assert_eq!(expr("start f()"), "(start (call f))");
    assert_eq!(expr("wait w"), "(wait w)");
}

#[test]
fn test_type_descriptor_values() {
    assert_eq!(expr("int"), "(typedesc int)");
    assert_eq!(expr("map<string>"), "(typedesc (map string))");
}
