//! Type-descriptor operator table.

use sable_ir::TokenKind;

use crate::grammar::{Arity, Assoc, OperInfo};

/// Type-descriptor precedence levels, lowest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TypePrec {
    Lowest = 0,
    /// `T?`
    Nullable,
    /// `A | B`
    Union,
    /// `T[]`, `T[N]`, `T[*]`, `T[C]`
    Array,
    /// `A & B`
    Intersection,
    /// A primary with no continuation.
    Primary,
}

impl TypePrec {
    #[inline]
    pub const fn level(self) -> u8 {
        self as u8
    }

    pub const fn next(self) -> TypePrec {
        match self {
            TypePrec::Lowest => TypePrec::Nullable,
            TypePrec::Nullable => TypePrec::Union,
            TypePrec::Union => TypePrec::Array,
            TypePrec::Array => TypePrec::Intersection,
            TypePrec::Intersection | TypePrec::Primary => TypePrec::Primary,
        }
    }
}

/// Nodes a type continuation folds into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum TypeOp {
    Intersection,
    Array,
    Union,
    Nullable,
}

const fn entry(prec: TypePrec, assoc: Assoc, arity: Arity, node: TypeOp) -> Option<OperInfo<TypeOp, TypePrec>> {
    Some(OperInfo {
        prec,
        assoc,
        arity,
        node,
    })
}

const fn build_table() -> [Option<OperInfo<TypeOp, TypePrec>>; TokenKind::COUNT] {
    let mut table = [None; TokenKind::COUNT];
    table[TokenKind::Amp as usize] = entry(
        TypePrec::Intersection,
        Assoc::Left,
        Arity::Binary,
        TypeOp::Intersection,
    );
    table[TokenKind::LBracket as usize] = entry(
        TypePrec::Array,
        Assoc::Left,
        Arity::VariadicPostfix,
        TypeOp::Array,
    );
    table[TokenKind::Pipe as usize] =
        entry(TypePrec::Union, Assoc::Right, Arity::Binary, TypeOp::Union);
    table[TokenKind::Question as usize] = entry(
        TypePrec::Nullable,
        Assoc::Left,
        Arity::UnaryPostfix,
        TypeOp::Nullable,
    );
    table
}

/// Type continuations, indexed by tag.
pub(crate) const TYPE_OPERATORS: [Option<OperInfo<TypeOp, TypePrec>>; TokenKind::COUNT] =
    build_table();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_operators_bind_in_order() {
        let prec = |kind: TokenKind| TYPE_OPERATORS[kind as usize].map(|info| info.prec);
        assert_eq!(prec(TokenKind::Question), Some(TypePrec::Nullable));
        assert_eq!(prec(TokenKind::Pipe), Some(TypePrec::Union));
        assert_eq!(prec(TokenKind::LBracket), Some(TypePrec::Array));
        assert_eq!(prec(TokenKind::Amp), Some(TypePrec::Intersection));
        assert_eq!(prec(TokenKind::Plus), None);
        assert!(TypePrec::Nullable < TypePrec::Union);
        assert!(TypePrec::Array < TypePrec::Intersection);
        assert_eq!(TypePrec::Intersection.next(), TypePrec::Primary);
    }
}
