use pretty_assertions::assert_eq;
use sable_diagnostic::{ErrorCode, Severity};
use sable_ir::{Span, Token, TokenKind};

use super::*;
use crate::recovery::{TokenSet, EXPR_START, PATTERN_START, TYPE_START};

fn token(kind: TokenKind, start: u32, end: u32) -> Token {
    Token::new(kind, Span::new(start, end))
}

#[test]
fn test_new_derives_kind_from_code() {
    let err = ParseError::new(ErrorCode::E1006, "ambiguous", Span::new(0, 1));
    assert_eq!(err.kind, ParseErrorKind::Ambiguous);
    assert!(err.is_error());

    let err = ParseError::new(ErrorCode::E1007, "rest", Span::new(0, 1));
    assert_eq!(err.kind, ParseErrorKind::MalformedPattern);

    let err = ParseError::new(ErrorCode::E1001, "x", Span::new(0, 1));
    assert_eq!(err.kind, ParseErrorKind::ExpectedToken);
}

#[test]
fn test_warning_is_not_error() {
    let warn = ParseError::warning(ErrorCode::E1011, "empty statement", Span::new(3, 4));
    assert_eq!(warn.severity, Severity::Warning);
    assert!(!warn.is_error());
    assert!(!warn.to_diagnostic().is_error());
}

#[test]
fn test_expected_names_whole_categories() {
    let found = token(TokenKind::RParen, 4, 5);

    let err = ParseError::expected(&EXPR_START, &found);
    assert_eq!(err.code, ErrorCode::E1002);
    assert_eq!(err.message, "expected expression, found `)`");
    assert_eq!(err.span, Span::new(4, 5));

    let err = ParseError::expected(&TYPE_START, &found);
    assert_eq!(err.code, ErrorCode::E1005);
    assert_eq!(err.message, "expected type descriptor, found `)`");

    let err = ParseError::expected(&PATTERN_START, &found);
    assert_eq!(err.code, ErrorCode::E1008);

    let err = ParseError::expected(&TokenSet::single(TokenKind::Ident), &found);
    assert_eq!(err.code, ErrorCode::E1004);
    assert_eq!(err.message, "expected identifier, found `)`");
}

#[test]
fn test_expected_lists_small_sets() {
    let set = TokenSet::new()
        .with(TokenKind::Comma)
        .with(TokenKind::RBracket);
    let err = ParseError::expected(&set, &token(TokenKind::Eof, 9, 9));
    assert_eq!(err.code, ErrorCode::E1001);
    assert_eq!(err.message, "expected `]` or `,`, found end of file");
}

#[test]
fn test_unclosed_points_at_opener() {
    let err = ParseError::unclosed(
        TokenKind::LParen,
        Span::new(0, 1),
        TokenKind::RParen,
        &token(TokenKind::Semi, 6, 7),
    );
    assert_eq!(err.code, ErrorCode::E1003);
    assert_eq!(err.recovery, RecoveryAction::InsertedCloser(TokenKind::RParen));
    assert_eq!(err.related, Some((Span::new(0, 1), "`(` opened here".to_string())));

    let diag = err.to_diagnostic();
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].is_primary);
    assert!(!diag.labels[1].is_primary);
    assert_eq!(diag.suggestions, vec!["insert `)`".to_string()]);
}

#[test]
fn test_context_first_wins() {
    let err = ParseError::new(ErrorCode::E1001, "x", Span::new(0, 1))
        .with_context("while parsing a list pattern")
        .with_context("while parsing a match clause");
    assert_eq!(err.context.as_deref(), Some("while parsing a list pattern"));
    assert_eq!(
        err.to_diagnostic().notes,
        vec!["while parsing a list pattern".to_string()]
    );
}

#[test]
fn test_recovery_descriptions() {
    assert_eq!(RecoveryAction::None.describe(), None);
    assert_eq!(RecoveryAction::Skipped(0).describe(), None);
    assert_eq!(
        RecoveryAction::Skipped(1).describe().as_deref(),
        Some("skipped 1 token")
    );
    assert_eq!(
        RecoveryAction::Placeholder { skipped: 3 }.describe().as_deref(),
        Some("skipped 3 tokens")
    );
    assert_eq!(
        RecoveryAction::InsertedToken(TokenKind::Semi).describe().as_deref(),
        Some("insert `;`")
    );
}

#[test]
fn test_display() {
    let err = ParseError::new(ErrorCode::E1004, "expected identifier", Span::new(0, 1));
    assert_eq!(err.to_string(), "[E1004] expected identifier");
}
