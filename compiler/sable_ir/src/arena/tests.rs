use super::*;
use crate::ast::{ExprKind, PatternKind, TypeKind};
use crate::Span;

fn ident(arena: &mut AstArena, n: u32) -> ExprId {
    arena.alloc_expr(Expr::new(ExprKind::Int(u64::from(n)), Span::new(n, n + 1)))
}

#[test]
fn ids_are_sequential_per_table() {
    let mut arena = AstArena::new();
    let a = ident(&mut arena, 0);
    let b = ident(&mut arena, 1);
    let t = arena.alloc_type(TypeNode::new(TypeKind::Nil, Span::new(0, 2)));
    assert_eq!(a.index(), 0);
    assert_eq!(b.index(), 1);
    assert_eq!(t.index(), 0);
    assert_eq!(arena.get_expr(b).kind, ExprKind::Int(1));
    assert_eq!(arena.node_count(), 3);
}

#[test]
fn lists_round_trip() {
    let mut arena = AstArena::new();
    let items: Vec<_> = (0..4).map(|n| ident(&mut arena, n)).collect();
    let range = arena.alloc_expr_list(items.iter().copied());
    let empty = arena.alloc_expr_list([]);
    assert_eq!(arena.get_expr_list(range), items.as_slice());
    assert!(empty.is_empty());
    assert!(arena.get_expr_list(empty).is_empty());
}

#[test]
fn truncate_discards_only_later_nodes() {
    let mut arena = AstArena::new();
    let kept = ident(&mut arena, 0);
    let kept_list = arena.alloc_expr_list([kept]);
    let mark = arena.mark();

    let dropped = ident(&mut arena, 1);
    arena.alloc_expr_list([dropped, kept]);
    arena.alloc_pattern(Pattern::new(PatternKind::Wildcard, Span::new(5, 6)));
    assert_ne!(arena.mark(), mark);

    arena.truncate(mark);
    assert_eq!(arena.mark(), mark);
    assert_eq!(arena.node_count(), 1);
    assert_eq!(arena.get_expr_list(kept_list), &[kept]);

    // Allocation resumes at the rolled-back index.
    assert_eq!(ident(&mut arena, 2), dropped);
}

#[test]
fn split_off_and_append_restore_the_same_ids() {
    let mut arena = AstArena::new();
    ident(&mut arena, 0);
    let mark = arena.mark();

    let a = ident(&mut arena, 1);
    let list = arena.alloc_expr_list([a]);
    let before = arena.clone();

    let tail = arena.split_off(mark);
    assert_eq!(arena.mark(), mark);

    // Work done after the split is replaced by the tail.
    ident(&mut arena, 9);
    arena.append(tail);
    assert_eq!(arena, before);
    assert_eq!(arena.get_expr(a).kind, ExprKind::Int(1));
    assert_eq!(arena.get_expr_list(list), &[a]);
}

#[test]
fn lists_longer_than_u16() {
    let mut arena = AstArena::new();
    let item = ident(&mut arena, 0);
    let range = arena.alloc_expr_list(std::iter::repeat(item).take(70_000));
    assert_eq!(range.len(), 70_000);
    assert_eq!(arena.get_expr_list(range).len(), 70_000);
}
