use pretty_assertions::assert_eq;

use super::stmts;

#[test]
fn test_declarations() {
    assert_eq!(stmts("int x = 1;"), "(local int x 1)");
    assert_eq!(stmts("var y = f();"), "(local var y (call f))");
    assert_eq!(stmts("final string s = \"a\";"), "(final string s \"a\")");
    assert_eq!(stmts("final var t = 2;"), "(final var t 2)");
    assert_eq!(
        stmts("var [a, b] = pair;"),
        "(local var (list-pattern a b) pair)"
    );
}

#[test]
fn test_declarations_with_structured_types() {
    assert_eq!(stmts("int[] xs = [];"), "(local (array int []) xs (list))");
    assert_eq!(stmts("map<int> m = {};"), "(local (map int) m (mapping))");
    assert_eq!(stmts("int? n;"), "(local (nullable int) n)");
    assert_eq!(
        stmts("int|string v = 1;"),
        "(local (union int string) v 1)"
    );
    assert_eq!(
        stmts("http:Client c = new;"),
        "(local http:Client c (new))"
    );
}

#[test]
fn test_assignments() {
    assert_eq!(stmts("x = 1;"), "(= x 1)");
    assert_eq!(stmts("a[0] = b.c;"), "(= (index a 0) (. b c))");
    assert_eq!(stmts("x -= 1;"), "(-= x 1)");
    assert_eq!(stmts("x <<= 2;"), "(<<= x 2)");
    assert_eq!(stmts("x >>= 1;"), "(>>= x 1)");
    assert_eq!(stmts("x >>>= 1;"), "(>>>= x 1)");
}

#[test]
fn test_expression_statements() {
    assert_eq!(stmts("f();"), "(expr (call f))");
    assert_eq!(stmts("io:println(\"hi\");"), "(expr (call io:println \"hi\"))");
    assert_eq!(stmts("check f();"), "(expr (check (call f)))");
}

#[test]
fn test_statement_sequence() {
    assert_eq!(
        stmts("int x = 1;\nx += 2;\nf(x);"),
        "(local int x 1)\n(+= x 2)\n(expr (call f x))"
    );
}

#[test]
fn test_if_chains() {
    assert_eq!(stmts("if a { }"), "(if a (block))");
    assert_eq!(
        stmts("if a { x = 1; } else { x = 2; }"),
        "(if a (block (= x 1)) (block (= x 2)))"
    );
    assert_eq!(
        stmts("if a { } else if b { } else { }"),
        "(if a (block) (if b (block) (block)))"
    );
}

#[test]
fn test_loops() {
    assert_eq!(
        stmts("while i < n { i += 1; if i == 3 { continue; } break; }"),
        "(while (< i n) (block (+= i 1) (if (== i 3) (block (continue))) (break)))"
    );
    assert_eq!(
        stmts("foreach int i in 0 ..< n { }"),
        "(foreach int i (..< 0 n) (block))"
    );
    assert_eq!(
        stmts("foreach item in items { f(item); }"),
        "(foreach var item items (block (expr (call f item))))"
    );
    assert_eq!(
        stmts("foreach var [k, v] in pairs { }"),
        "(foreach var (list-pattern k v) pairs (block))"
    );
}

#[test]
fn test_match_statement() {
    assert_eq!(
        stmts("match v { 1 | 2 => { } var x if x > 0 => { f(x); } _ => { } }"),
        "(match v (clause (patterns 1 2) (block)) \
         (clause (patterns (var x)) (guard (> x 0)) (block (expr (call f x)))) \
         (clause (patterns _) (block)))"
    );
}

#[test]
fn test_simple_statements() {
    assert_eq!(stmts("return;"), "(return)");
    assert_eq!(stmts("return x + 1;"), "(return (+ x 1))");
    assert_eq!(stmts("panic error(\"x\");"), "(panic (error \"x\"))");
    assert_eq!(stmts("do { f(); }"), "(do (block (expr (call f))))");
}

#[test]
fn test_query_action_and_query_statement() {
    assert_eq!(
        stmts("from var x in xs do { f(x); }"),
        "(query-action (from var x xs) (block (expr (call f x))))"
    );
    assert_eq!(
        stmts("from var x in xs where x > 0 do { }"),
        "(query-action (from var x xs) (where (> x 0)) (block))"
    );
    assert_eq!(
        stmts("from var x in xs select x;"),
        "(expr (query (from var x xs) (select x)))"
    );
}

#[test]
fn test_destructuring_statements() {
    assert_eq!(
        stmts("error MyErr(m) = e;"),
        "(destructure (error-pattern MyErr (ref m)) e)"
    );
    assert_eq!(
        stmts("[a, r.f] = pair;"),
        "(destructure (list-pattern (ref a) (ref (. r f))) pair)"
    );
}

#[test]
fn test_nested_blocks() {
    assert_eq!(stmts("{ { x = 1; } }"), "(block (block (= x 1)))");
}
