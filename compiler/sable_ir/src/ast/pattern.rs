//! Pattern nodes.
//!
//! Binding, match and destructuring patterns share one node type; the parser
//! entry point decides which kinds may appear. A rest element is stored in a
//! dedicated `rest` slot, never among the ordinary members, so "rest comes
//! last" holds for every tree the parser can build.

use super::{FieldPatternRange, PatternRange};
use crate::{ExprId, Name, PatternId, Span, TypeId};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    #[inline]
    pub const fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternKind {
    /// Binds a new variable.
    Capture(Name),
    /// `_`
    Wildcard,
    /// `[p1, p2, ...rest]`
    List {
        members: PatternRange,
        rest: Option<PatternId>,
    },
    /// `{f1, f2: p, ...rest}`
    Mapping {
        fields: FieldPatternRange,
        rest: Option<PatternId>,
    },
    /// `error [T] (message, cause, name = p, ...rest)`
    ErrorPattern {
        ty: Option<TypeId>,
        positional: PatternRange,
        named: FieldPatternRange,
        rest: Option<PatternId>,
    },
    /// `...name`, or `...var name` in match patterns.
    Rest(Name),
    /// Literal constant in a match pattern (`1`, `-2`, `"a"`, `()`, `null`).
    Literal(ExprId),
    /// Reference to a named constant in a match pattern.
    ConstRef {
        module: Option<Name>,
        name: Name,
    },
    /// `var bp` in a match pattern.
    Var(PatternId),
    /// Assignable place in a destructuring assignment (`x`, `r.f`, `a[i]`).
    VarRef(ExprId),
    /// Placeholder left where a pattern failed to parse.
    Error,
}

/// `name` or `name: pattern` inside a mapping or error pattern.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldPattern {
    pub name: Name,
    /// `None` for the shorthand `{name}`.
    pub pattern: Option<PatternId>,
    pub span: Span,
}
