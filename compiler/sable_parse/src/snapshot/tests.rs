use proptest::prelude::*;
use sable_ir::{Expr, ExprKind, Span, StringInterner};
use sable_lexer::lex;

use super::*;
use crate::{ParseError, ParseOptions};
use sable_diagnostic::ErrorCode;

fn with_parser<R>(source: &str, f: impl FnOnce(&mut Parser<'_>) -> R) -> R {
    let interner = StringInterner::new();
    let lexed = lex(source, &interner);
    let mut parser = Parser::new(&lexed.tokens, ParseOptions::default());
    f(&mut parser)
}

#[test]
fn test_snapshot_is_small() {
    assert!(
        std::mem::size_of::<ParserSnapshot>() <= 128,
        "ParserSnapshot should stay small (got {} bytes)",
        std::mem::size_of::<ParserSnapshot>()
    );
}

#[test]
fn test_restore_discards_nodes_and_errors() {
    with_parser("a b c d", |p| {
        p.cursor.advance();
        let snapshot = p.snapshot();
        assert_eq!(snapshot.position(), 1);

        p.cursor.advance();
        p.arena
            .alloc_expr(Expr::new(ExprKind::Error, Span::new(0, 1)));
        p.report(ParseError::new(ErrorCode::E1001, "trial", Span::new(2, 3)));
        p.context = p.context.with(ParseContext::SPECULATING);
        assert_eq!(p.error_count, 1);

        p.restore(snapshot);
        assert_eq!(p.cursor.position(), 1);
        assert_eq!(p.arena.node_count(), 0);
        assert!(p.errors.is_empty());
        assert_eq!(p.error_count, 0);
        assert!(!p.context.is_speculating());
    });
}

#[test]
fn test_reattach_restores_detached_work() {
    with_parser("a b c d", |p| {
        let snapshot = p.snapshot();
        p.cursor.advance();
        p.cursor.advance();
        let node = p.arena.alloc_expr(Expr::new(ExprKind::Error, Span::new(0, 3)));
        p.report(ParseError::new(ErrorCode::E1001, "kept", Span::new(2, 3)));

        let detached = p.detach(snapshot);
        assert_eq!(p.cursor.position(), 0);
        assert!(p.errors.is_empty());

        // A later trial is thrown away by the reattach.
        p.cursor.advance();
        p.arena.alloc_expr(Expr::new(ExprKind::Nil, Span::new(0, 1)));
        p.report(ParseError::new(ErrorCode::E1002, "dropped", Span::new(0, 1)));

        p.reattach(detached);
        assert_eq!(p.cursor.position(), 2);
        assert_eq!(p.error_count, 1);
        assert_eq!(p.errors[0].message, "kept");
        assert_eq!(p.arena.node_count(), 1);
        assert_eq!(p.arena.get_expr(node).kind, ExprKind::Error);
    });
}

proptest! {
    /// Any sequence of advances after a mark is undone by resetting to it.
    #[test]
    fn mark_reset_round_trips(skip in 0usize..6, extra in 0usize..10) {
        with_parser("x + y * ( z - 1 ) ;", |p| {
            for _ in 0..skip {
                p.cursor.advance();
            }
            let mark = p.snapshot();
            let kind = p.cursor.current_kind();
            for _ in 0..extra {
                p.cursor.advance();
            }
            p.restore(mark);
            prop_assert_eq!(p.cursor.position(), mark.position());
            prop_assert_eq!(p.cursor.current_kind(), kind);
            Ok(())
        })?;
    }
}
