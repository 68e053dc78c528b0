//! Expression nodes.

use super::{
    ArgRange, BinaryOp, CheckKind, ExprRange, LetDeclRange, MappingFieldRange, NameRange,
    OrderKeyRange, ParamRange, QueryClauseRange, StmtRange, UnaryOp,
};
use crate::{ExprId, Name, PatternId, Span, TypeId};

/// An expression node: kind plus source span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    // Literals
    Int(u64),
    /// Float bits.
    Float(u64),
    /// Decimal literal text, kept exact.
    Decimal(Name),
    String(Name),
    Bool(bool),
    Null,
    /// `()`
    Nil,

    // References
    Ident(Name),
    /// `module:name`
    Qualified {
        module: Name,
        name: Name,
    },

    /// `(e)`, kept so printing reproduces the source grouping.
    Group(ExprId),

    // Operators
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Check {
        kind: CheckKind,
        operand: ExprId,
    },
    Trap(ExprId),
    /// `<T> e`
    TypeCast {
        ty: TypeId,
        operand: ExprId,
    },
    /// `e is T` / `e !is T`
    TypeTest {
        operand: ExprId,
        ty: TypeId,
        negated: bool,
    },
    /// `c ? a : b`
    Ternary {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },
    /// `a ?: b`
    Elvis {
        left: ExprId,
        right: ExprId,
    },

    // Postfix
    Call {
        func: ExprId,
        args: ArgRange,
    },
    MethodCall {
        receiver: ExprId,
        method: Name,
        args: ArgRange,
    },
    /// `client->method(args)`
    RemoteCall {
        client: ExprId,
        method: Name,
        args: ArgRange,
    },
    Field {
        receiver: ExprId,
        field: Name,
    },
    /// `e?.field`
    OptionalField {
        receiver: ExprId,
        field: Name,
    },
    /// `e.@annot` or `e.@mod:annot`
    AnnotAccess {
        receiver: ExprId,
        module: Option<Name>,
        annot: Name,
    },
    /// `e[k]` or multi-key `e[k1, k2]`
    Index {
        receiver: ExprId,
        keys: ExprRange,
    },

    // Constructors
    /// `[a, ...xs]`; spread members are `Spread` nodes.
    List(ExprRange),
    /// `...e` inside a list constructor.
    Spread(ExprId),
    Mapping(MappingFieldRange),
    /// `table key(k) [rows]`
    Table {
        key: Option<NameRange>,
        rows: ExprRange,
    },
    /// `new T(args)` / `new (args)` / bare `new`
    New {
        ty: Option<TypeId>,
        args: ArgRange,
    },
    /// `error("msg", cause, k = v)` or `error MyError(...)`
    ErrorCtor {
        ty: Option<TypeId>,
        args: ArgRange,
    },

    // Functions
    /// `function (params) returns T { ... }` / `=> e`
    AnonFunction {
        params: ParamRange,
        returns: Option<TypeId>,
        body: FunctionBody,
    },
    /// `x => e` / `(a, b) => e`
    Lambda {
        params: NameRange,
        body: ExprId,
    },

    // Keyword forms
    /// `let T x = e, ... in body`
    Let {
        decls: LetDeclRange,
        body: ExprId,
    },
    Query {
        construct: QueryConstruct,
        clauses: QueryClauseRange,
        select: ExprId,
        on_conflict: Option<ExprId>,
    },
    Start(ExprId),
    Wait(ExprId),
    /// A type descriptor used as a value (`typedesc t = int;`).
    TypeDesc(TypeId),

    /// Placeholder left where an expression failed to parse.
    Error,
}

/// Call and constructor argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Arg {
    pub kind: ArgKind,
    pub value: ExprId,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgKind {
    Positional,
    /// `name = value`
    Named(Name),
    /// `...value`
    Rest,
}

/// Mapping constructor field.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MappingField {
    pub kind: MappingFieldKind,
    pub readonly: bool,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum MappingFieldKind {
    /// `name: value`
    KeyValue { key: Name, value: ExprId },
    /// `"name": value`
    StringKey { key: Name, value: ExprId },
    /// `[expr]: value`
    Computed { key: ExprId, value: ExprId },
    /// `name`
    Shorthand(Name),
    /// `...expr`
    Spread(ExprId),
}

/// Parameter of an anonymous function or function type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub ty: TypeId,
    /// Absent in function types that only list parameter types.
    pub name: Option<Name>,
    pub default: Option<ExprId>,
    /// `T... name`
    pub rest: bool,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionBody {
    /// `=> expr`
    Expr(ExprId),
    Block(StmtRange),
}

/// `T bp = e` inside a `let` expression or query `let` clause.
/// `ty` is `None` for `var`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct LetDecl {
    pub ty: Option<TypeId>,
    pub pattern: PatternId,
    pub init: ExprId,
    pub span: Span,
}

/// What a query expression constructs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryConstruct {
    /// No prefix: the result kind follows the source.
    Default,
    Stream,
    Table { key: Option<NameRange> },
}

/// Intermediate query clause.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryClause {
    /// `from T bp in e`; `ty` is `None` for `var`.
    From {
        ty: Option<TypeId>,
        pattern: PatternId,
        source: ExprId,
        span: Span,
    },
    Where(ExprId, Span),
    Let(LetDeclRange, Span),
    /// `[outer] join T bp in e on l equals r`
    Join {
        outer: bool,
        ty: Option<TypeId>,
        pattern: PatternId,
        source: ExprId,
        on_left: ExprId,
        on_right: ExprId,
        span: Span,
    },
    OrderBy(OrderKeyRange, Span),
    Limit(ExprId, Span),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderKey {
    pub expr: ExprId,
    pub direction: Option<OrderDirection>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderDirection {
    Ascending,
    Descending,
}
