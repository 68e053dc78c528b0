//! Type-descriptor nodes.

use super::{ArrayDimRange, NameRange, ObjectMemberRange, ParamRange, RecordFieldRange, TypeRange};
use crate::{ExprId, Name, Span, TypeId};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeNode {
    pub kind: TypeKind,
    pub span: Span,
}

impl TypeNode {
    #[inline]
    pub const fn new(kind: TypeKind, span: Span) -> Self {
        TypeNode { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeKind {
    Builtin(BuiltinType),
    /// `()`
    Nil,
    Named(Name),
    /// `module:Type`
    Qualified {
        module: Name,
        name: Name,
    },
    /// Literal used as a type: `1`, `"on"`, `true`, `-1`.
    Singleton(ExprId),
    /// `(T)`
    Group(TypeId),
    /// `[T, U, R...]`
    Tuple {
        members: TypeRange,
        rest: Option<TypeId>,
    },
    /// `record { ... }` (inclusive) or `record {| ... |}` (exclusive)
    Record {
        exclusive: bool,
        fields: RecordFieldRange,
        rest: Option<TypeId>,
    },
    Object {
        qualifiers: ObjectQualifiers,
        members: ObjectMemberRange,
    },
    Map(TypeId),
    /// `stream<T>` / `stream<T, E>`
    Stream {
        value: TypeId,
        completion: Option<TypeId>,
    },
    /// `table<Row> key(a, b)` / `table<Row> key<K>`
    Table {
        row: TypeId,
        key: Option<TableKey>,
    },
    Future(Option<TypeId>),
    Typedesc(Option<TypeId>),
    Xml(Option<TypeId>),
    /// `error` / `error<Detail>`
    ErrorType(Option<TypeId>),
    /// `function` alone or `function (params) returns T`
    Function {
        signature: Option<FunctionSignature>,
    },
    Distinct(TypeId),

    // Operators
    Union {
        left: TypeId,
        right: TypeId,
    },
    Intersection {
        left: TypeId,
        right: TypeId,
    },
    /// Element type plus one or more stacked dimensions, outermost last.
    Array {
        element: TypeId,
        dims: ArrayDimRange,
    },
    /// `T?`
    Nullable(TypeId),

    /// Placeholder left where a type descriptor failed to parse.
    Error,
}

/// Builtin simple and behavioral type keywords.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BuiltinType {
    Int,
    Float,
    Decimal,
    Boolean,
    String,
    Byte,
    Any,
    Anydata,
    Json,
    Handle,
    Never,
    Readonly,
}

impl BuiltinType {
    pub const fn as_keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Byte => "byte",
            Self::Any => "any",
            Self::Anydata => "anydata",
            Self::Json => "json",
            Self::Handle => "handle",
            Self::Never => "never",
            Self::Readonly => "readonly",
        }
    }
}

/// One `[...]` array suffix.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrayDim {
    /// `[]`
    Empty,
    /// `[N]`
    Fixed(u64),
    /// `[*]`
    Star,
    /// `[LENGTH]` naming a constant
    Const(Name),
}

/// Key constraint of a table type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TableKey {
    /// `key(a, b)`
    Fields(NameRange),
    /// `key<K>`
    Type(TypeId),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionSignature {
    pub params: ParamRange,
    pub returns: Option<TypeId>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordField {
    pub kind: RecordFieldKind,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordFieldKind {
    /// `[readonly] T name[?] [= default];`
    Field {
        readonly: bool,
        ty: TypeId,
        name: Name,
        optional: bool,
        default: Option<ExprId>,
    },
    /// `*T;`
    Inclusion(TypeId),
}

/// Object type qualifiers, packed as bits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectQualifiers(u8);

impl ObjectQualifiers {
    pub const CLIENT: u8 = 1 << 0;
    pub const ISOLATED: u8 = 1 << 1;
    pub const SERVICE: u8 = 1 << 2;

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        ObjectQualifiers(bits)
    }

    #[inline]
    pub const fn has(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: u8) -> Self {
        ObjectQualifiers(self.0 | flag)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectMember {
    pub kind: ObjectMemberKind,
    pub span: Span,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectMemberKind {
    /// `[public|private] T name;`
    Field {
        visibility: Visibility,
        ty: TypeId,
        name: Name,
    },
    /// `[public|private] [remote] [isolated] function name(params) [returns T];`
    Method {
        visibility: Visibility,
        remote: bool,
        isolated: bool,
        name: Name,
        signature: FunctionSignature,
    },
    /// `*T;`
    Inclusion(TypeId),
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    #[default]
    Default,
    Public,
    Private,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_qualifiers_accumulate() {
        let q = ObjectQualifiers::default()
            .with(ObjectQualifiers::CLIENT)
            .with(ObjectQualifiers::ISOLATED);
        assert!(q.has(ObjectQualifiers::CLIENT));
        assert!(q.has(ObjectQualifiers::ISOLATED));
        assert!(!q.has(ObjectQualifiers::SERVICE));
    }
}
