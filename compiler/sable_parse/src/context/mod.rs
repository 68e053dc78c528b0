//! Parse context flags for context-sensitive parsing.
//!
//! The same tokens read differently depending on where the parser is: a
//! trailing `?` after a type may be a nullable marker or the start of a
//! ternary, and `a:b` may be a qualified name or a ternary's colon.

/// Context flags for parsing.
///
/// Multiple flags can be combined using bitwise OR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParseContext(u16);

impl ParseContext {
    /// No special context.
    pub const NONE: Self = Self(0);

    /// Parsing the leaves of a destructuring pattern.
    /// Postfix operators are limited to field access and indexing.
    pub const IN_PATTERN: Self = Self(1 << 0);

    /// Parsing a type descriptor embedded in an expression (`x is T`,
    /// `<T> e`, type-descriptor expressions).
    /// A trailing `?` is nullable only if no expression can follow it.
    pub const EXPR_TYPE: Self = Self(1 << 1);

    /// `a:b` is never read as a qualified name.
    /// Used for the colon-split reading of a ternary's true branch.
    pub const NO_QUALIFIED: Self = Self(1 << 2);

    /// Inside a trial parse of the disambiguation engine.
    pub const SPECULATING: Self = Self(1 << 3);

    /// Parsing a match guard: `x =>` ends the guard instead of starting a
    /// lambda.
    pub const IN_MATCH_GUARD: Self = Self(1 << 4);

    /// Create a new context with no flags set.
    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Check if a flag is set.
    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Add a flag to the context.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Remove a flag from the context.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    #[inline]
    pub const fn in_pattern(self) -> bool {
        self.has(Self::IN_PATTERN)
    }

    #[inline]
    pub const fn in_expr_type(self) -> bool {
        self.has(Self::EXPR_TYPE)
    }

    #[inline]
    pub const fn allows_qualified(self) -> bool {
        !self.has(Self::NO_QUALIFIED)
    }

    #[inline]
    pub const fn allows_lambda(self) -> bool {
        !self.has(Self::IN_MATCH_GUARD)
    }

    #[inline]
    pub const fn is_speculating(self) -> bool {
        self.has(Self::SPECULATING)
    }
}
