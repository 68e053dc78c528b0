use pretty_assertions::assert_eq;
use sable_ir::{
    ArrayDim, AstArena, BinaryOp, BuiltinType, Expr, ExprKind, FieldPattern, Pattern, PatternKind,
    PatternRange, Span, Stmt, StmtKind, StringInterner, TypeKind, TypeNode,
};

use super::Dumper;

fn int(arena: &mut AstArena, value: u64) -> sable_ir::ExprId {
    arena.alloc_expr(Expr::new(ExprKind::Int(value), Span::DUMMY))
}

fn builtin(arena: &mut AstArena, builtin: BuiltinType) -> sable_ir::TypeId {
    arena.alloc_type(TypeNode::new(TypeKind::Builtin(builtin), Span::DUMMY))
}

#[test]
fn operators_nest_by_tree_shape() {
    let mut arena = AstArena::new();
    let interner = StringInterner::new();
    let a = int(&mut arena, 1);
    let b = int(&mut arena, 2);
    let c = int(&mut arena, 3);
    let product = arena.alloc_expr(Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Mul,
            left: b,
            right: c,
        },
        Span::DUMMY,
    ));
    let sum = arena.alloc_expr(Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Add,
            left: a,
            right: product,
        },
        Span::DUMMY,
    ));
    assert_eq!(Dumper::new(&arena, &interner).expr(sum), "(+ 1 (* 2 3))");
}

#[test]
fn literals_dump_as_source() {
    let mut arena = AstArena::new();
    let interner = StringInterner::new();
    let text = interner.intern("say \"hi\"\n");
    let digits = interner.intern("1.50");
    let string = arena.alloc_expr(Expr::new(ExprKind::String(text), Span::DUMMY));
    let decimal = arena.alloc_expr(Expr::new(ExprKind::Decimal(digits), Span::DUMMY));
    let float = arena.alloc_expr(Expr::new(ExprKind::Float(2.5f64.to_bits()), Span::DUMMY));
    let nil = arena.alloc_expr(Expr::new(ExprKind::Nil, Span::DUMMY));
    let dumper = Dumper::new(&arena, &interner);
    assert_eq!(dumper.expr(string), r#""say \"hi\"\n""#);
    assert_eq!(dumper.expr(decimal), "1.50d");
    assert_eq!(dumper.expr(float), "2.5");
    assert_eq!(dumper.expr(nil), "nil");
}

#[test]
fn union_of_nullable_array() {
    let mut arena = AstArena::new();
    let interner = StringInterner::new();
    let int = builtin(&mut arena, BuiltinType::Int);
    let string = builtin(&mut arena, BuiltinType::String);
    let nullable = arena.alloc_type(TypeNode::new(TypeKind::Nullable(string), Span::DUMMY));
    let dims = arena.alloc_array_dims([ArrayDim::Empty, ArrayDim::Fixed(3)]);
    let array = arena.alloc_type(TypeNode::new(
        TypeKind::Array {
            element: int,
            dims,
        },
        Span::DUMMY,
    ));
    let union = arena.alloc_type(TypeNode::new(
        TypeKind::Union {
            left: array,
            right: nullable,
        },
        Span::DUMMY,
    ));
    assert_eq!(
        Dumper::new(&arena, &interner).ty(union),
        "(union (array int [] [3]) (nullable string))"
    );
}

#[test]
fn parameterless_types_dump_bare() {
    let mut arena = AstArena::new();
    let interner = StringInterner::new();
    let error = arena.alloc_type(TypeNode::new(TypeKind::ErrorType(None), Span::DUMMY));
    let function = arena.alloc_type(TypeNode::new(
        TypeKind::Function { signature: None },
        Span::DUMMY,
    ));
    let dumper = Dumper::new(&arena, &interner);
    assert_eq!(dumper.ty(error), "error");
    assert_eq!(dumper.ty(function), "function");
}

#[test]
fn list_pattern_keeps_rest_last() {
    let mut arena = AstArena::new();
    let interner = StringInterner::new();
    let a = arena.alloc_pattern(Pattern::new(
        PatternKind::Capture(interner.intern("a")),
        Span::DUMMY,
    ));
    let wildcard = arena.alloc_pattern(Pattern::new(PatternKind::Wildcard, Span::DUMMY));
    let rest = arena.alloc_pattern(Pattern::new(
        PatternKind::Rest(interner.intern("tail")),
        Span::DUMMY,
    ));
    let members = arena.alloc_pattern_list([a, wildcard]);
    let list = arena.alloc_pattern(Pattern::new(
        PatternKind::List {
            members,
            rest: Some(rest),
        },
        Span::DUMMY,
    ));
    assert_eq!(
        Dumper::new(&arena, &interner).pattern(list),
        "(list-pattern a _ (rest tail))"
    );
}

#[test]
fn mapping_pattern_shorthand_field() {
    let mut arena = AstArena::new();
    let interner = StringInterner::new();
    let id = interner.intern("id");
    let name = interner.intern("name");
    let bound = arena.alloc_pattern(Pattern::new(
        PatternKind::Capture(interner.intern("n")),
        Span::DUMMY,
    ));
    let fields = arena.alloc_field_patterns([
        FieldPattern {
            name: id,
            pattern: None,
            span: Span::DUMMY,
        },
        FieldPattern {
            name,
            pattern: Some(bound),
            span: Span::DUMMY,
        },
    ]);
    let mapping = arena.alloc_pattern(Pattern::new(
        PatternKind::Mapping { fields, rest: None },
        Span::DUMMY,
    ));
    assert_eq!(
        Dumper::new(&arena, &interner).pattern(mapping),
        "(mapping-pattern (field id) (field name n))"
    );
}

#[test]
fn statements_and_placeholders() {
    let mut arena = AstArena::new();
    let interner = StringInterner::new();
    let x = arena.alloc_expr(Expr::new(
        ExprKind::Ident(interner.intern("x")),
        Span::DUMMY,
    ));
    let bad = arena.alloc_expr(Expr::new(ExprKind::Error, Span::DUMMY));
    let assign = arena.alloc_stmt(Stmt::new(
        StmtKind::CompoundAssign {
            op: BinaryOp::Add,
            target: x,
            value: bad,
        },
        Span::DUMMY,
    ));
    let ret = arena.alloc_stmt(Stmt::new(StmtKind::Return(None), Span::DUMMY));
    let body = arena.alloc_stmt_list([assign, ret]);
    let block = arena.alloc_stmt(Stmt::new(StmtKind::Do(body), Span::DUMMY));
    let dumper = Dumper::new(&arena, &interner);
    assert_eq!(
        dumper.stmt(block),
        "(do (block (+= x <error>) (return)))"
    );
}

#[test]
fn empty_match_clause_patterns() {
    let mut arena = AstArena::new();
    let interner = StringInterner::new();
    let x = int(&mut arena, 0);
    let clauses = arena.alloc_match_clauses([sable_ir::MatchClause {
        patterns: PatternRange::EMPTY,
        guard: Some(x),
        body: sable_ir::StmtRange::EMPTY,
        span: Span::DUMMY,
    }]);
    let stmt = arena.alloc_stmt(Stmt::new(
        StmtKind::Match {
            scrutinee: x,
            clauses,
        },
        Span::DUMMY,
    ));
    assert_eq!(
        Dumper::new(&arena, &interner).stmt(stmt),
        "(match 0 (clause (patterns) (guard 0) (block)))"
    );
}
