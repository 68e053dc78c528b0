//! Expression operators.
//!
//! The parser's operator table owns associativity and arity; the tree only
//! remembers which operator was folded. [`BinaryOp::precedence`] repeats the
//! table's levels so the printer can decide where parentheses are needed.

/// Binary operators, grouped by the level they parse at.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Multiplicative
    Mul,
    Div,
    Rem,

    // Additive
    Add,
    Sub,

    // Shift
    Shl,
    Shr,
    UnsignedShr,

    // Range
    RangeInclusive,
    RangeExclusive,

    // Relational
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Equality
    Eq,
    NotEq,
    RefEq,
    RefNotEq,

    // Bitwise
    BitAnd,
    BitXor,
    BitOr,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Source spelling, as printed and as quoted in diagnostics.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UnsignedShr => ">>>",
            Self::RangeInclusive => "...",
            Self::RangeExclusive => "..<",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::RefEq => "===",
            Self::RefNotEq => "!==",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Binding strength, higher binds tighter.
    ///
    /// Levels 1 and 2 are the conditional and elvis operators, 10 is the
    /// `is` type test, 16 unary prefix and 17 postfix.
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 3,
            Self::And => 4,
            Self::BitOr => 5,
            Self::BitXor => 6,
            Self::BitAnd => 7,
            Self::RefEq | Self::RefNotEq => 8,
            Self::Eq | Self::NotEq => 9,
            Self::Lt | Self::Gt | Self::LtEq | Self::GtEq => 11,
            Self::RangeInclusive | Self::RangeExclusive => 12,
            Self::Shl | Self::Shr | Self::UnsignedShr => 13,
            Self::Add | Self::Sub => 14,
            Self::Mul | Self::Div | Self::Rem => 15,
        }
    }

    /// Relational and range operators do not chain.
    pub const fn is_non_associative(self) -> bool {
        matches!(
            self,
            Self::Lt
                | Self::Gt
                | Self::LtEq
                | Self::GtEq
                | Self::RangeInclusive
                | Self::RangeExclusive
        )
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Plus,
    Neg,
    Not,
    BitNot,
    Typeof,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Neg => "-",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::Typeof => "typeof",
        }
    }
}

/// `check` propagates an error value; `checkpanic` panics on it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckKind {
    Check,
    Checkpanic,
}

impl CheckKind {
    pub const fn as_keyword(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Checkpanic => "checkpanic",
        }
    }
}
