use super::*;
use sable_ir::StringInterner;

/// Owns the token list and interner so `Cursor` can borrow them.
struct TestCtx {
    tokens: TokenList,
    interner: StringInterner,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = sable_lexer::lex(source, &interner).tokens;
        Self { tokens, interner }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens)
    }
}

#[test]
fn test_cursor_navigation() {
    let ctx = TestCtx::new("var x = 42;");
    let mut cursor = ctx.cursor();

    assert!(cursor.check(TokenKind::KwVar));
    assert!(!cursor.is_at_end());

    cursor.advance();
    assert!(cursor.check_ident());

    cursor.advance();
    assert!(cursor.check(TokenKind::Eq));

    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::Int);

    cursor.advance();
    assert!(cursor.check(TokenKind::Semi));

    cursor.advance();
    assert!(cursor.is_at_end());
}

#[test]
fn test_advance_at_eof_stays_put() {
    let ctx = TestCtx::new("x");
    let mut cursor = ctx.cursor();
    cursor.advance();
    assert!(cursor.is_at_end());
    let position = cursor.position();
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert_eq!(cursor.position(), position);
}

#[test]
fn test_expect_success() {
    let ctx = TestCtx::new("var x");
    let mut cursor = ctx.cursor();
    assert!(cursor.expect(TokenKind::KwVar).is_ok());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_expect_failure_names_both_tokens() {
    let ctx = TestCtx::new("var x");
    let mut cursor = ctx.cursor();
    let error = cursor.expect(TokenKind::KwIf).unwrap_err();
    assert_eq!(error.message, "expected `if`, found `var`");
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_expect_ident_returns_name() {
    let ctx = TestCtx::new("total 1");
    let mut cursor = ctx.cursor();
    let name = cursor.expect_ident().unwrap();
    assert_eq!(ctx.interner.lookup(name), "total");

    let error = cursor.expect_ident().unwrap_err();
    assert_eq!(error.code, ErrorCode::E1004);
}

#[test]
fn test_eat() {
    let ctx = TestCtx::new("( )");
    let mut cursor = ctx.cursor();
    assert!(!cursor.eat(TokenKind::RParen));
    assert!(cursor.eat(TokenKind::LParen));
    assert!(cursor.eat(TokenKind::RParen));
}

#[test]
fn test_peek_past_end_is_eof() {
    let ctx = TestCtx::new("a b");
    let cursor = ctx.cursor();
    assert_eq!(cursor.peek_kind_at(0), TokenKind::Ident);
    assert_eq!(cursor.peek_next_kind(), TokenKind::Ident);
    assert_eq!(cursor.peek_kind_at(2), TokenKind::Eof);
    assert_eq!(cursor.peek_kind_at(40), TokenKind::Eof);
    assert_eq!(cursor.peek_token_at(40).kind, TokenKind::Eof);
}

#[test]
fn test_qualified_name_needs_adjacency() {
    let ctx = TestCtx::new("io:println");
    assert!(ctx.cursor().at_qualified_name());

    let ctx = TestCtx::new("io : println");
    assert!(!ctx.cursor().at_qualified_name());

    let ctx = TestCtx::new("io: println");
    assert!(!ctx.cursor().at_qualified_name());
}

#[test]
fn test_greater_runs() {
    let cases = [
        ("a > b", GreaterRun::Greater),
        ("a >= b", GreaterRun::GreaterEq),
        ("a >> b", GreaterRun::Shr),
        ("a >>> b", GreaterRun::UnsignedShr),
        ("a >>= b", GreaterRun::ShrAssign),
        ("a >>>= b", GreaterRun::UnsignedShrAssign),
        ("a > > b", GreaterRun::Greater),
    ];
    for (source, expected) in cases {
        let ctx = TestCtx::new(source);
        let mut cursor = ctx.cursor();
        cursor.advance();
        assert_eq!(cursor.greater_run(), Some(expected), "{source}");
    }
}

#[test]
fn test_greater_run_absent_off_gt() {
    let ctx = TestCtx::new("a < b");
    let mut cursor = ctx.cursor();
    cursor.advance();
    assert_eq!(cursor.greater_run(), None);
}

#[test]
fn test_consume_compound_merges_spans() {
    let ctx = TestCtx::new("a >>> b");
    let mut cursor = ctx.cursor();
    cursor.advance();
    let run = cursor.greater_run().unwrap();
    let span = cursor.consume_compound(run.token_count());
    assert_eq!(span, Span::new(2, 5));
    assert!(cursor.check_ident());
}

#[test]
fn test_previous_span() {
    let ctx = TestCtx::new("ab cd");
    let mut cursor = ctx.cursor();
    assert_eq!(cursor.previous_span(), Span::point(0));
    cursor.advance();
    assert_eq!(cursor.previous_span(), Span::new(0, 2));
}

#[test]
fn test_adjacency_ignores_newlines_and_spaces() {
    let ctx = TestCtx::new("a\nb c:d");
    let cursor = ctx.cursor();
    assert!(!cursor.is_adjacent_at(1));
    assert!(!cursor.is_adjacent_at(2));
    assert!(cursor.is_adjacent_at(3));
    assert!(cursor.is_adjacent_at(4));
}

#[test]
fn test_set_position_round_trips() {
    let ctx = TestCtx::new("a b c");
    let mut cursor = ctx.cursor();
    cursor.advance();
    cursor.advance();
    let span = cursor.current_span();
    cursor.set_position(0);
    assert_eq!(cursor.position(), 0);
    cursor.set_position(2);
    assert_eq!(cursor.current_span(), span);
    assert_eq!(cursor.token_count(), 4);
}
