//! Statement nodes hosting the expression, type and pattern grammars.

use super::{MatchClauseRange, PatternRange, QueryClauseRange, StmtRange};
use crate::{BinaryOp, ExprId, PatternId, Span, StmtId, TypeId};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    #[inline]
    pub const fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum StmtKind {
    Block(StmtRange),
    /// `[final] T bp [= e];`; `ty` is `None` for `var`.
    VarDecl {
        is_final: bool,
        ty: Option<TypeId>,
        pattern: PatternId,
        init: Option<ExprId>,
    },
    /// `place = e;`
    Assign {
        target: ExprId,
        value: ExprId,
    },
    /// `place op= e;`
    CompoundAssign {
        op: BinaryOp,
        target: ExprId,
        value: ExprId,
    },
    /// `[a, b] = e;` / `{f: x} = e;` / `error(m) = e;`
    Destructure {
        pattern: PatternId,
        value: ExprId,
    },
    Expr(ExprId),
    If {
        cond: ExprId,
        then_block: StmtRange,
        /// Either another `If` or a `Block`.
        else_branch: Option<StmtId>,
    },
    While {
        cond: ExprId,
        body: StmtRange,
    },
    /// `foreach T bp in e { ... }`
    Foreach {
        ty: Option<TypeId>,
        pattern: PatternId,
        source: ExprId,
        body: StmtRange,
    },
    Match {
        scrutinee: ExprId,
        clauses: MatchClauseRange,
    },
    Return(Option<ExprId>),
    Break,
    Continue,
    Panic(ExprId),
    Do(StmtRange),
    /// `from ... do { ... };`
    QueryAction {
        clauses: QueryClauseRange,
        body: StmtRange,
    },
    /// Placeholder left where a statement failed to parse.
    Error,
}

/// `p1 | p2 [if guard] => { body }`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchClause {
    pub patterns: PatternRange,
    pub guard: Option<ExprId>,
    pub body: StmtRange,
    pub span: Span,
}
