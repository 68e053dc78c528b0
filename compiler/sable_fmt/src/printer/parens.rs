//! Parenthesization rules.
//!
//! Every node has a binding level on the same scale the parser climbs
//! with. A child printed where a minimum level is required gets
//! parentheses when its own level is lower. Groups the source wrote are
//! `Group` nodes and print their own parentheses, so these rules only add
//! the ones the tree's shape demands.

use sable_ir::{AstArena, ExprId, ExprKind, FunctionBody, QueryConstruct, TypeId, TypeKind};

/// Expression levels that are not a [`BinaryOp`](sable_ir::BinaryOp)
/// precedence.
pub(super) mod level {
    /// Forms that extend as far right as possible: lambdas, `let`, queries.
    pub(crate) const OPEN: u8 = 0;
    pub(crate) const TERNARY: u8 = 1;
    pub(crate) const ELVIS: u8 = 2;
    pub(crate) const TYPE_TEST: u8 = 10;
    pub(crate) const UNARY: u8 = 16;
    pub(crate) const POSTFIX: u8 = 17;
    pub(crate) const PRIMARY: u8 = 18;
}

/// Type levels, matching the type grammar's climb.
pub(super) mod ty_level {
    /// `function (..) returns T`: the return type extends right.
    pub(crate) const OPEN: u8 = 0;
    pub(crate) const NULLABLE: u8 = 1;
    pub(crate) const UNION: u8 = 2;
    pub(crate) const ARRAY: u8 = 3;
    pub(crate) const INTERSECTION: u8 = 4;
    pub(crate) const PRIMARY: u8 = 5;
}

/// Binding level of an expression.
pub(super) fn expr_level(arena: &AstArena, id: ExprId) -> u8 {
    match arena.get_expr(id).kind {
        ExprKind::Lambda { .. } | ExprKind::Let { .. } | ExprKind::Query { .. } => level::OPEN,
        ExprKind::AnonFunction { body, .. } => match body {
            FunctionBody::Expr(_) => level::OPEN,
            FunctionBody::Block(_) => level::PRIMARY,
        },
        ExprKind::Ternary { .. } => level::TERNARY,
        ExprKind::Elvis { .. } => level::ELVIS,
        ExprKind::Binary { op, .. } => op.precedence(),
        ExprKind::TypeTest { .. } => level::TYPE_TEST,
        ExprKind::Unary { .. }
        | ExprKind::Check { .. }
        | ExprKind::Trap(_)
        | ExprKind::TypeCast { .. }
        | ExprKind::Start(_)
        | ExprKind::Wait(_) => level::UNARY,
        ExprKind::Call { .. }
        | ExprKind::MethodCall { .. }
        | ExprKind::RemoteCall { .. }
        | ExprKind::Field { .. }
        | ExprKind::OptionalField { .. }
        | ExprKind::AnnotAccess { .. }
        | ExprKind::Index { .. } => level::POSTFIX,
        ExprKind::TypeDesc(ty) if type_level(arena, ty) < ty_level::PRIMARY => level::OPEN,
        _ => level::PRIMARY,
    }
}

/// Binding level of a type descriptor.
pub(super) fn type_level(arena: &AstArena, id: TypeId) -> u8 {
    match arena.get_type(id).kind {
        TypeKind::Nullable(_) => ty_level::NULLABLE,
        TypeKind::Union { .. } => ty_level::UNION,
        TypeKind::Array { .. } => ty_level::ARRAY,
        TypeKind::Intersection { .. } => ty_level::INTERSECTION,
        TypeKind::Function {
            signature: Some(signature),
        } if signature.returns.is_some() => ty_level::OPEN,
        _ => ty_level::PRIMARY,
    }
}

/// True if an expression's rightmost leaf is a type descriptor, so an
/// operator printed after it would be read as part of that type.
///
/// A parenthesized type is closed and does not count.
pub(super) fn ends_with_type(arena: &AstArena, id: ExprId) -> bool {
    match arena.get_expr(id).kind {
        ExprKind::TypeTest { .. } => true,
        ExprKind::TypeDesc(ty) => !matches!(arena.get_type(ty).kind, TypeKind::Group(_)),
        ExprKind::Binary { right, .. } | ExprKind::Elvis { right, .. } => ends_with_type(arena, right),
        ExprKind::Ternary { else_expr, .. } => ends_with_type(arena, else_expr),
        ExprKind::Unary { operand, .. }
        | ExprKind::Check { operand, .. }
        | ExprKind::TypeCast { operand, .. }
        | ExprKind::Trap(operand)
        | ExprKind::Start(operand)
        | ExprKind::Wait(operand) => ends_with_type(arena, operand),
        _ => false,
    }
}

/// True if `id` prints starting with a token that can only begin an
/// expression, so a `?` printed before it reads as a conditional.
///
/// Type keywords and `function`, `error`, `table` and `stream` do not
/// count: after a type they leave the `?` as a nullable marker.
pub(super) fn starts_with_operand(arena: &AstArena, id: ExprId) -> bool {
    let wrapped = |operand: ExprId, min: u8| {
        expr_level(arena, operand) < min || starts_with_operand(arena, operand)
    };
    match arena.get_expr(id).kind {
        ExprKind::Binary { op, left, .. } => {
            let prec = op.precedence();
            wrapped(left, if op.is_non_associative() { prec + 1 } else { prec })
        }
        ExprKind::TypeTest { operand, .. } => wrapped(operand, level::TYPE_TEST),
        ExprKind::Ternary { cond: left, .. } | ExprKind::Elvis { left, .. } => {
            wrapped(left, level::ELVIS + 1)
        }
        ExprKind::Call { func: receiver, .. }
        | ExprKind::MethodCall { receiver, .. }
        | ExprKind::RemoteCall {
            client: receiver, ..
        }
        | ExprKind::Field { receiver, .. }
        | ExprKind::OptionalField { receiver, .. }
        | ExprKind::AnnotAccess { receiver, .. }
        | ExprKind::Index { receiver, .. } => {
            ends_with_type(arena, receiver) || wrapped(receiver, level::POSTFIX)
        }
        ExprKind::Query { construct, .. } => matches!(construct, QueryConstruct::Default),
        ExprKind::TypeDesc(_)
        | ExprKind::AnonFunction { .. }
        | ExprKind::ErrorCtor { .. }
        | ExprKind::Table { .. }
        | ExprKind::Spread(_) => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use sable_ir::{BinaryOp, BuiltinType, Expr, Span, TypeNode};

    use super::*;

    #[test]
    fn binary_level_is_operator_precedence() {
        let mut arena = AstArena::new();
        let a = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::DUMMY));
        let b = arena.alloc_expr(Expr::new(ExprKind::Int(2), Span::DUMMY));
        let sum = arena.alloc_expr(Expr::new(
            ExprKind::Binary {
                op: BinaryOp::Add,
                left: a,
                right: b,
            },
            Span::DUMMY,
        ));
        assert_eq!(expr_level(&arena, sum), BinaryOp::Add.precedence());
        assert_eq!(expr_level(&arena, a), level::PRIMARY);
    }

    #[test]
    fn operator_type_descriptor_is_open() {
        let mut arena = AstArena::new();
        let int = arena.alloc_type(TypeNode::new(TypeKind::Builtin(BuiltinType::Int), Span::DUMMY));
        let optional = arena.alloc_type(TypeNode::new(TypeKind::Nullable(int), Span::DUMMY));
        let bare = arena.alloc_expr(Expr::new(ExprKind::TypeDesc(int), Span::DUMMY));
        let nullable = arena.alloc_expr(Expr::new(ExprKind::TypeDesc(optional), Span::DUMMY));
        assert_eq!(expr_level(&arena, bare), level::PRIMARY);
        assert_eq!(expr_level(&arena, nullable), level::OPEN);
    }

    #[test]
    fn type_test_under_prefix_ends_with_type() {
        let mut arena = AstArena::new();
        let x = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::DUMMY));
        let int = arena.alloc_type(TypeNode::new(TypeKind::Builtin(BuiltinType::Int), Span::DUMMY));
        let test = arena.alloc_expr(Expr::new(
            ExprKind::TypeTest {
                operand: x,
                ty: int,
                negated: false,
            },
            Span::DUMMY,
        ));
        let group = arena.alloc_type(TypeNode::new(TypeKind::Group(int), Span::DUMMY));
        let closed = arena.alloc_expr(Expr::new(ExprKind::TypeDesc(group), Span::DUMMY));
        assert!(ends_with_type(&arena, test));
        assert!(!ends_with_type(&arena, closed));
        assert!(!ends_with_type(&arena, x));
    }
}
