#![expect(clippy::unwrap_used, reason = "tests assert on known-good input")]

use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    lex(source, &interner).tokens.kinds().to_vec()
}

#[test]
fn ends_with_single_eof() {
    use TokenKind::*;
    assert_eq!(kinds(""), vec![Eof]);
    assert_eq!(kinds("   // only a comment\n"), vec![Eof]);
    assert_eq!(kinds("x"), vec![Ident, Eof]);
}

#[test]
fn keywords_and_identifiers() {
    use TokenKind::*;
    assert_eq!(
        kinds("int intx is 'is var _"),
        vec![KwInt, Ident, KwIs, Ident, KwVar, Underscore, Eof]
    );
}

#[test]
fn quoted_identifier_strips_quote() {
    let interner = StringInterner::new();
    let out = lex("'match", &interner);
    let token = out.tokens.get(0).unwrap();
    assert_eq!(token.kind, TokenKind::Ident);
    assert_eq!(interner.lookup(token.name().unwrap()), "match");
}

#[test]
fn punctuation_longest_match() {
    use TokenKind::*;
    assert_eq!(
        kinds("a ?: b ?. c ... ..< === !== => -> {| |} .@"),
        vec![
            Ident, Elvis, Ident, QuestionDot, Ident, Ellipsis, DotDotLt, EqEqEq, NotEqEq,
            FatArrow, Arrow, LBracePipe, PipeRBrace, DotAt, Eof
        ]
    );
}

#[test]
fn greater_than_is_never_merged() {
    use TokenKind::*;
    let interner = StringInterner::new();
    let out = lex("a >>> b >= c", &interner);
    assert_eq!(
        out.tokens.kinds(),
        &[Ident, Gt, Gt, Gt, Ident, Gt, Eq, Ident, Eof]
    );
    let flags = out.tokens.flags();
    assert!(!flags[1].is_adjacent());
    assert!(flags[2].is_adjacent());
    assert!(flags[3].is_adjacent());
    assert!(!flags[4].is_adjacent());
    assert!(flags[6].is_adjacent());
}

#[test]
fn newline_and_comment_flags() {
    let interner = StringInterner::new();
    let out = lex("a // note\nb", &interner);
    let flags = out.tokens.flags();
    assert!(flags[1].contains(TokenFlags::NEWLINE_BEFORE));
    assert!(flags[1].contains(TokenFlags::TRIVIA_BEFORE));
    assert!(!flags[1].is_adjacent());
}

#[test]
fn numeric_literals() {
    let interner = StringInterner::new();
    let out = lex("42 0xFF 1.5 2e3 7f 3.25d", &interner);
    let tokens = out.tokens.as_slice();
    assert_eq!(tokens[0].value, TokenValue::Int(42));
    assert_eq!(tokens[1].value, TokenValue::Int(255));
    assert_eq!(tokens[2].value, TokenValue::Float(1.5f64.to_bits()));
    assert_eq!(tokens[3].value, TokenValue::Float(2000f64.to_bits()));
    assert_eq!(tokens[4].value, TokenValue::Float(7f64.to_bits()));
    assert_eq!(tokens[5].kind, TokenKind::Decimal);
    assert_eq!(interner.lookup(tokens[5].name().unwrap()), "3.25");
    assert!(!out.has_errors());
}

#[test]
fn range_after_int_is_not_a_float() {
    use TokenKind::*;
    assert_eq!(kinds("1...5"), vec![Int, Ellipsis, Int, Eof]);
    assert_eq!(kinds("1..<5"), vec![Int, DotDotLt, Int, Eof]);
}

#[test]
fn int_overflow_reports_e0003() {
    let interner = StringInterner::new();
    let out = lex("99999999999999999999999", &interner);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].code(), sable_diagnostic::ErrorCode::E0003);
    assert!(out.tokens.flags()[0].contains(TokenFlags::HAS_ERROR));
}

#[test]
fn string_literal_is_unescaped() {
    let interner = StringInterner::new();
    let out = lex(r#""a\tb""#, &interner);
    let token = out.tokens.get(0).unwrap();
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(interner.lookup(token.name().unwrap()), "a\tb");
}

#[test]
fn unterminated_string() {
    let interner = StringInterner::new();
    let out = lex("\"abc\nx", &interner);
    assert_eq!(out.tokens.kinds(), &[TokenKind::String, TokenKind::Ident, TokenKind::Eof]);
    assert_eq!(out.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(out.errors[0].span, Span::new(0, 4));
}

#[test]
fn bad_escape_points_at_escape() {
    let interner = StringInterner::new();
    let out = lex(r#""ab\q""#, &interner);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::InvalidEscape('q'));
    assert_eq!(out.errors[0].span, Span::new(3, 5));
}

#[test]
fn invalid_character_becomes_error_token() {
    let interner = StringInterner::new();
    let out = lex("a # b", &interner);
    assert_eq!(
        out.tokens.kinds(),
        &[TokenKind::Ident, TokenKind::Error, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(out.errors[0].kind, LexErrorKind::InvalidChar('#'));
    let diag = out.errors[0].to_diagnostic();
    assert_eq!(diag.code, sable_diagnostic::ErrorCode::E0001);
}
