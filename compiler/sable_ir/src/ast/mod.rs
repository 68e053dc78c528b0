//! Syntax-tree node types.
//!
//! Nodes are plain data stored in the [`AstArena`](crate::AstArena).
//! Children are ids or ranges into the arena's side tables.

mod expr;
mod operators;
mod pattern;
mod ranges;
mod stmt;
mod ty;

pub use expr::{
    Arg, ArgKind, Expr, ExprKind, FunctionBody, LetDecl, MappingField, MappingFieldKind,
    OrderDirection, OrderKey, Param, QueryClause, QueryConstruct,
};
pub use operators::{BinaryOp, CheckKind, UnaryOp};
pub use pattern::{FieldPattern, Pattern, PatternKind};
pub use ranges::{
    ArgRange, ArrayDimRange, ExprRange, FieldPatternRange, LetDeclRange, MappingFieldRange,
    MatchClauseRange, NameRange, ObjectMemberRange, OrderKeyRange, ParamRange, PatternRange,
    QueryClauseRange, RecordFieldRange, StmtRange, TypeRange,
};
pub use stmt::{MatchClause, Stmt, StmtKind};
pub use ty::{
    ArrayDim, BuiltinType, FunctionSignature, ObjectMember, ObjectMemberKind, ObjectQualifiers,
    RecordField, RecordFieldKind, TableKey, TypeKind, TypeNode, Visibility,
};
