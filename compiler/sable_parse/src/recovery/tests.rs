use super::*;
use sable_ir::{StringInterner, TokenList};

/// Owns the token list so `Cursor` can borrow it.
struct TestCtx {
    tokens: TokenList,
}

impl TestCtx {
    fn new(source: &str) -> Self {
        let interner = StringInterner::new();
        let tokens = sable_lexer::lex(source, &interner).tokens;
        Self { tokens }
    }

    fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens)
    }
}

#[test]
fn test_token_set_empty() {
    let set = TokenSet::new();
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);
    assert!(!set.contains(TokenKind::Semi));
    assert_eq!(set, TokenSet::default());
}

#[test]
fn test_token_set_single() {
    let set = TokenSet::single(TokenKind::Semi);
    assert!(!set.is_empty());
    assert_eq!(set.count(), 1);
    assert!(set.contains(TokenKind::Semi));
    assert!(!set.contains(TokenKind::Comma));
}

#[test]
fn test_token_set_with() {
    let set = TokenSet::new()
        .with(TokenKind::Semi)
        .with(TokenKind::Comma)
        .with(TokenKind::KwVar);

    assert_eq!(set.count(), 3);
    assert!(set.contains(TokenKind::Semi));
    assert!(set.contains(TokenKind::Comma));
    assert!(set.contains(TokenKind::KwVar));
    assert!(!set.contains(TokenKind::Plus));
}

#[test]
fn test_token_set_union() {
    let set1 = TokenSet::new().with(TokenKind::Semi).with(TokenKind::Comma);
    let set2 = TokenSet::new().with(TokenKind::Comma).with(TokenKind::Colon);

    let union = set1.union(set2);
    assert_eq!(union.count(), 3);
    assert!(union.contains_all(&set1));
    assert!(union.contains_all(&set2));
    assert!(!set1.contains_all(&union));

    let mut accumulated = set1;
    accumulated.union_with(&set2);
    assert_eq!(accumulated, union);
}

#[test]
fn test_token_set_high_tags() {
    // Eof is the last kind, past tag 127.
    let set = TokenSet::single(TokenKind::Eof).with(TokenKind::Int);
    assert!(set.contains(TokenKind::Eof));
    assert!(set.contains(TokenKind::Int));
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![TokenKind::Int, TokenKind::Eof]);
}

#[test]
fn test_with_all_matches_chained_with() {
    let chained = TokenSet::new()
        .with(TokenKind::LParen)
        .with(TokenKind::LBracket)
        .with(TokenKind::LBrace)
        .with(TokenKind::LBracePipe);
    assert_eq!(OPENERS, chained);
}

#[test]
fn test_iter_follows_tag_order() {
    let set = TokenSet::new().with(TokenKind::Comma).with(TokenKind::RParen);
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec![TokenKind::RParen, TokenKind::Comma]
    );
}

#[test]
fn test_format_expected() {
    assert_eq!(TokenSet::new().format_expected(), "nothing");
    assert_eq!(TokenSet::single(TokenKind::LParen).format_expected(), "`(`");
    assert_eq!(TokenSet::single(TokenKind::Ident).format_expected(), "identifier");
    assert_eq!(
        TokenSet::new()
            .with(TokenKind::Comma)
            .with(TokenKind::RParen)
            .format_expected(),
        "`)` or `,`"
    );
    assert_eq!(
        TokenSet::new()
            .with(TokenKind::Comma)
            .with(TokenKind::RParen)
            .with(TokenKind::Semi)
            .format_expected(),
        "`)`, `;`, or `,`"
    );
}

#[test]
fn test_boundary_sets_nest() {
    assert!(STMT_BOUNDARY.contains_all(&DECLARATION_KEYWORDS));
    assert!(STMT_BOUNDARY.contains(TokenKind::Semi));
    assert!(LIST_BOUNDARY.contains_all(&STMT_BOUNDARY));
    assert!(LIST_BOUNDARY.contains(TokenKind::Comma));
    assert!(!STMT_BOUNDARY.contains(TokenKind::Comma));
}

#[test]
fn test_start_sets() {
    assert!(EXPR_START.contains(TokenKind::Ident));
    assert!(EXPR_START.contains(TokenKind::Lt));
    assert!(!EXPR_START.contains(TokenKind::Semi));
    assert!(TYPE_START.contains(TokenKind::KwInt));
    assert!(TYPE_START.contains(TokenKind::KwRecord));
    assert!(!TYPE_START.contains(TokenKind::KwIf));
    assert!(PATTERN_START.contains(TokenKind::Underscore));
    assert!(PATTERN_START.contains(TokenKind::KwVar));
}

#[test]
fn test_synchronize_stops_at_recovery_token() {
    let ctx = TestCtx::new("a b ; c");
    let mut cursor = ctx.cursor();
    let skipped = synchronize(&mut cursor, STMT_BOUNDARY);
    assert_eq!(skipped, 2);
    assert!(cursor.check(TokenKind::Semi));
}

#[test]
fn test_synchronize_already_at_boundary() {
    let ctx = TestCtx::new("; a");
    let mut cursor = ctx.cursor();
    assert_eq!(synchronize(&mut cursor, STMT_BOUNDARY), 0);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_synchronize_skips_balanced_groups() {
    let ctx = TestCtx::new("x f(a, b) [c, d] , z");
    let mut cursor = ctx.cursor();
    let skipped = synchronize(&mut cursor, LIST_BOUNDARY);
    assert_eq!(skipped, 12);
    assert!(cursor.check(TokenKind::Comma));
}

#[test]
fn test_synchronize_stops_at_unmatched_closer() {
    let ctx = TestCtx::new("a b ) c");
    let mut cursor = ctx.cursor();
    let skipped = synchronize(&mut cursor, TokenSet::single(TokenKind::Semi));
    assert_eq!(skipped, 2);
    assert!(cursor.check(TokenKind::RParen));
}

#[test]
fn test_synchronize_stops_at_declaration_keyword() {
    let ctx = TestCtx::new("a + type");
    let mut cursor = ctx.cursor();
    assert_eq!(synchronize(&mut cursor, STMT_BOUNDARY), 2);
    assert!(cursor.check(TokenKind::KwType));
}

#[test]
fn test_synchronize_runs_to_eof() {
    let ctx = TestCtx::new("a b c");
    let mut cursor = ctx.cursor();
    assert_eq!(synchronize(&mut cursor, STMT_BOUNDARY), 3);
    assert!(cursor.is_at_end());

    // An unclosed group swallows the boundary inside it.
    let ctx = TestCtx::new("( a ; b");
    let mut cursor = ctx.cursor();
    assert_eq!(synchronize(&mut cursor, STMT_BOUNDARY), 4);
    assert!(cursor.is_at_end());
}
