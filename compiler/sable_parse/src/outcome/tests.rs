use super::*;
use sable_diagnostic::ErrorCode;
use sable_ir::TokenKind;

fn make_error() -> ParseError {
    ParseError::new(ErrorCode::E1001, "test error", Span::new(0, 1))
}

#[test]
fn test_consumed_ok() {
    let outcome: ParseOutcome<i32> = ParseOutcome::consumed_ok(42);
    assert!(outcome.is_ok());
    assert!(matches!(outcome, ParseOutcome::ConsumedOk { .. } | ParseOutcome::ConsumedErr { .. }));
    assert_eq!(outcome.unwrap(), 42);
}

#[test]
fn test_empty_ok() {
    let outcome: ParseOutcome<i32> = ParseOutcome::empty_ok(42);
    assert!(outcome.is_ok());
    assert!(matches!(outcome, ParseOutcome::EmptyOk { .. } | ParseOutcome::EmptyErr { .. }));
    assert_eq!(outcome.ok().unwrap(), 42);
}

#[test]
fn test_consumed_err() {
    let outcome: ParseOutcome<i32> = ParseOutcome::consumed_err(make_error(), Span::new(0, 10));
    assert!(outcome.is_err());
    assert!(matches!(outcome, ParseOutcome::ConsumedOk { .. } | ParseOutcome::ConsumedErr { .. }));
}

#[test]
fn test_empty_err() {
    let outcome: ParseOutcome<i32> = ParseOutcome::empty_err(TokenSet::single(TokenKind::LParen), 5);
    assert!(outcome.is_err());
    assert!(matches!(outcome, ParseOutcome::EmptyOk { .. } | ParseOutcome::EmptyErr { .. }));
    assert!(matches!(outcome, ParseOutcome::EmptyErr { .. }));
    assert!(outcome.ok().is_none());
}

#[test]
fn test_map_preserves_progress() {
    let outcome = ParseOutcome::consumed_ok(42).map(|x| x * 2);
    assert!(matches!(outcome, ParseOutcome::ConsumedOk { .. } | ParseOutcome::ConsumedErr { .. }));
    assert_eq!(outcome.unwrap(), 84);

    let outcome = ParseOutcome::empty_ok(42).map(|x| x * 2);
    assert!(matches!(outcome, ParseOutcome::EmptyOk { .. } | ParseOutcome::EmptyErr { .. }));
    assert_eq!(outcome.unwrap(), 84);
}

#[test]
fn test_error_context_only_on_hard_errors() {
    let outcome: ParseOutcome<i32> = ParseOutcome::consumed_err(make_error(), Span::new(0, 1))
        .with_error_context(ErrorContext::RecordType);
    match outcome {
        ParseOutcome::ConsumedErr { error, .. } => {
            assert_eq!(
                error.context.as_deref(),
                Some("while parsing a record type")
            );
        }
        other => panic!("expected ConsumedErr, got {other:?}"),
    }

    let outcome: ParseOutcome<i32> = ParseOutcome::empty_err(TokenSet::new(), 0)
        .with_error_context(ErrorContext::RecordType);
    assert!(matches!(outcome, ParseOutcome::EmptyErr { .. }));
}

#[test]
fn test_innermost_context_wins() {
    let outcome: ParseOutcome<i32> = ParseOutcome::consumed_err(make_error(), Span::new(0, 1))
        .with_error_context(ErrorContext::TupleType)
        .with_error_context(ErrorContext::TypeDescriptor);
    let ParseOutcome::ConsumedErr { error, .. } = outcome else {
        panic!("expected ConsumedErr");
    };
    assert!(error.context.unwrap().contains("tuple"));
}
