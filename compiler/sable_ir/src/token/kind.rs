//! Token kinds.
//!
//! `TokenKind` is a fieldless `repr(u8)` enum: the discriminant doubles as the
//! dense tag stored in [`TokenList`](super::TokenList) and as the bit index
//! the parser's token sets use. Literal payloads live in
//! [`TokenValue`](super::TokenValue).

/// Declares `TokenKind` together with its display table.
macro_rules! define_token_kinds {
    ($( $(#[$meta:meta])* $variant:ident => $text:literal, )*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum TokenKind {
            $( $(#[$meta])* $variant, )*
        }

        impl TokenKind {
            /// Every kind, in discriminant order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            /// Number of kinds. Token sets are sized for up to 256.
            pub const COUNT: usize = Self::ALL.len();

            /// Source text for keywords and punctuation, a category word for
            /// literal kinds.
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $text,)*
                }
            }
        }
    };
}

define_token_kinds! {
    // Literals and identifiers
    Int => "integer",
    Float => "float literal",
    Decimal => "decimal literal",
    String => "string literal",
    Ident => "identifier",

    // Builtin type keywords
    KwInt => "int",
    KwFloat => "float",
    KwDecimal => "decimal",
    KwBoolean => "boolean",
    KwString => "string",
    KwByte => "byte",
    KwAny => "any",
    KwAnydata => "anydata",
    KwJson => "json",
    KwXml => "xml",
    KwHandle => "handle",
    KwNever => "never",
    KwReadonly => "readonly",
    KwMap => "map",
    KwStream => "stream",
    KwTable => "table",
    KwFuture => "future",
    KwTypedesc => "typedesc",
    KwError => "error",
    KwObject => "object",
    KwRecord => "record",
    KwFunction => "function",
    KwDistinct => "distinct",
    KwClient => "client",
    KwIsolated => "isolated",
    KwVar => "var",

    // Expression keywords
    KwTrue => "true",
    KwFalse => "false",
    KwNull => "null",
    KwTypeof => "typeof",
    KwCheck => "check",
    KwCheckpanic => "checkpanic",
    KwTrap => "trap",
    KwNew => "new",
    KwStart => "start",
    KwWait => "wait",
    KwIs => "is",
    KwReturns => "returns",

    // Query keywords
    KwFrom => "from",
    KwIn => "in",
    KwWhere => "where",
    KwLet => "let",
    KwSelect => "select",
    KwOrder => "order",
    KwBy => "by",
    KwAscending => "ascending",
    KwDescending => "descending",
    KwLimit => "limit",
    KwJoin => "join",
    KwOuter => "outer",
    KwOn => "on",
    KwEquals => "equals",
    KwConflict => "conflict",
    KwDo => "do",
    KwKey => "key",

    // Statement keywords
    KwIf => "if",
    KwElse => "else",
    KwMatch => "match",
    KwForeach => "foreach",
    KwWhile => "while",
    KwReturn => "return",
    KwBreak => "break",
    KwContinue => "continue",
    KwPanic => "panic",
    KwFinal => "final",

    // Declaration keywords
    KwPublic => "public",
    KwPrivate => "private",
    KwRemote => "remote",
    KwConst => "const",
    KwImport => "import",
    KwType => "type",
    KwService => "service",
    KwClass => "class",
    KwListener => "listener",
    KwAnnotation => "annotation",

    // Delimiters
    LParen => "(",
    RParen => ")",
    LBracket => "[",
    RBracket => "]",
    LBrace => "{",
    RBrace => "}",
    /// `{|` opening an exclusive record.
    LBracePipe => "{|",
    /// `|}` closing an exclusive record.
    PipeRBrace => "|}",
    Semi => ";",
    Comma => ",",
    Colon => ":",

    // Operators and punctuation
    Question => "?",
    /// `?:`
    Elvis => "?:",
    /// `?.`
    QuestionDot => "?.",
    Dot => ".",
    /// `.@` annotation access
    DotAt => ".@",
    /// `...` spread, rest and inclusive range
    Ellipsis => "...",
    /// `..<` exclusive range
    DotDotLt => "..<",
    Eq => "=",
    FatArrow => "=>",
    /// `->` remote method call
    Arrow => "->",
    At => "@",
    Plus => "+",
    Minus => "-",
    Star => "*",
    Slash => "/",
    Percent => "%",
    Bang => "!",
    Tilde => "~",
    EqEq => "==",
    NotEq => "!=",
    EqEqEq => "===",
    NotEqEq => "!==",
    Lt => "<",
    /// Always a single `>`; `>=`, `>>` and `>>>` are composed by the parser
    /// from adjacent tokens so nested type arguments close cleanly.
    Gt => ">",
    LtEq => "<=",
    Shl => "<<",
    Amp => "&",
    Caret => "^",
    Pipe => "|",
    AmpAmp => "&&",
    PipePipe => "||",
    Underscore => "_",
    PlusEq => "+=",
    MinusEq => "-=",
    StarEq => "*=",
    SlashEq => "/=",
    AmpEq => "&=",
    PipeEq => "|=",
    CaretEq => "^=",
    ShlEq => "<<=",

    /// Scanner could not classify the input; already reported.
    Error => "invalid token",
    Eof => "end of file",
}

impl TokenKind {
    /// Dense tag used by the token list and token sets.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= TokenKind::KwInt && self <= TokenKind::KwAnnotation
    }

    /// The keyword spelled `text`, if it is one. An identifier with this
    /// spelling has to be written quoted (`'int`).
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.is_keyword() && kind.display_name() == text)
    }

    /// Keywords naming a builtin simple or parameterized type.
    #[inline]
    pub fn is_type_keyword(self) -> bool {
        self >= TokenKind::KwInt && self <= TokenKind::KwVar
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::Decimal
            | TokenKind::String
            | TokenKind::Ident
            | TokenKind::Error
            | TokenKind::Eof => f.write_str(self.display_name()),
            _ => write!(f, "`{}`", self.display_name()),
        }
    }
}
