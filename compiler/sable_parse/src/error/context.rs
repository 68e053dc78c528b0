//! Error context for "while parsing X" messages.

/// Context describing what was being parsed when an error occurred.
///
/// This is distinct from `ParseContext` (the bitfield for
/// context-sensitive parsing behavior).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    // === Expressions ===
    Expression,
    Group,
    ListConstructor,
    MappingConstructor,
    TableConstructor,
    CallArguments,
    IndexExpression,
    TypeCast,
    AnonymousFunction,
    Lambda,
    LetExpression,
    QueryExpression,
    Ternary,

    // === Types ===
    TypeDescriptor,
    TupleType,
    RecordType,
    ObjectType,
    FunctionSignature,
    TypeParameter,
    ArrayDimension,

    // === Patterns ===
    ListPattern,
    MappingPattern,
    ErrorPattern,
    MatchClause,

    // === Statements ===
    Block,
    VariableDeclaration,
    IfStatement,
    WhileStatement,
    ForeachStatement,
    MatchStatement,
}

impl ErrorContext {
    /// Get a human-readable description of this context.
    ///
    /// Returns a phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::Expression => "an expression",
            Self::Group => "a parenthesized expression",
            Self::ListConstructor => "a list constructor",
            Self::MappingConstructor => "a mapping constructor",
            Self::TableConstructor => "a table constructor",
            Self::CallArguments => "call arguments",
            Self::IndexExpression => "an index expression",
            Self::TypeCast => "a type cast",
            Self::AnonymousFunction => "an anonymous function",
            Self::Lambda => "a lambda",
            Self::LetExpression => "a let expression",
            Self::QueryExpression => "a query expression",
            Self::Ternary => "a conditional expression",

            Self::TypeDescriptor => "a type descriptor",
            Self::TupleType => "a tuple type",
            Self::RecordType => "a record type",
            Self::ObjectType => "an object type",
            Self::FunctionSignature => "a function signature",
            Self::TypeParameter => "a type parameter",
            Self::ArrayDimension => "an array dimension",

            Self::ListPattern => "a list pattern",
            Self::MappingPattern => "a mapping pattern",
            Self::ErrorPattern => "an error pattern",
            Self::MatchClause => "a match clause",

            Self::Block => "a block",
            Self::VariableDeclaration => "a variable declaration",
            Self::IfStatement => "an if statement",
            Self::WhileStatement => "a while statement",
            Self::ForeachStatement => "a foreach statement",
            Self::MatchStatement => "a match statement",
        }
    }
}
