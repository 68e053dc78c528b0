//! Sable IR: the data shared by every stage of the front end.
//!
//! - [`Span`] byte ranges and interned [`Name`]s
//! - [`Token`]s and the scanner's [`TokenList`]
//! - syntax-tree nodes ([`ast`]) and the [`AstArena`] that owns them
//!
//! Trees are flat: nodes hold `u32` ids of their children, never boxes or
//! references. Floats are stored as bits so every node is `Eq + Hash`.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod ids;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ArenaMark, ArenaTail, AstArena};
pub use ast::{
    Arg, ArgKind, ArgRange, ArrayDim, ArrayDimRange, BinaryOp, BuiltinType, CheckKind, Expr,
    ExprKind, ExprRange, FieldPattern, FieldPatternRange, FunctionBody, FunctionSignature,
    LetDecl, LetDeclRange, MappingField, MappingFieldKind, MappingFieldRange, MatchClause,
    MatchClauseRange, NameRange, ObjectMember, ObjectMemberKind, ObjectMemberRange,
    ObjectQualifiers, OrderDirection, OrderKey, OrderKeyRange, Param, ParamRange, Pattern,
    PatternKind, PatternRange, QueryClause, QueryClauseRange, QueryConstruct, RecordField,
    RecordFieldKind, RecordFieldRange, Stmt, StmtKind, StmtRange, TableKey, TypeKind, TypeNode,
    TypeRange, UnaryOp, Visibility,
};
pub use ids::{ExprId, PatternId, StmtId, TypeId};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenFlags, TokenKind, TokenList, TokenValue};
