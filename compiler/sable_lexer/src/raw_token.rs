//! The logos-derived scanner alphabet.
//!
//! Keywords and punctuation map straight to a [`TokenKind`] through the
//! `Fixed` variant; only literals, identifiers and trivia need their own
//! variants because their text must be processed further.

use logos::Logos;
use sable_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[regex(r"[0-9]+", priority = 3)]
    Int,
    #[regex(r"0[xX][0-9a-fA-F]+")]
    HexInt,
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?[fF]?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fF]?")]
    #[regex(r"[0-9]+[fF]")]
    Float,
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[dD]")]
    Decimal,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,
    #[regex(r#""([^"\\\n]|\\.)*"#, priority = 1)]
    UnterminatedString,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    /// `'name` lets keywords be used as identifiers.
    #[regex(r"'[A-Za-z_][A-Za-z0-9_]*")]
    QuotedIdent,

    // Builtin type keywords
    #[token("int", |_| TokenKind::KwInt)]
    #[token("float", |_| TokenKind::KwFloat)]
    #[token("decimal", |_| TokenKind::KwDecimal)]
    #[token("boolean", |_| TokenKind::KwBoolean)]
    #[token("string", |_| TokenKind::KwString)]
    #[token("byte", |_| TokenKind::KwByte)]
    #[token("any", |_| TokenKind::KwAny)]
    #[token("anydata", |_| TokenKind::KwAnydata)]
    #[token("json", |_| TokenKind::KwJson)]
    #[token("xml", |_| TokenKind::KwXml)]
    #[token("handle", |_| TokenKind::KwHandle)]
    #[token("never", |_| TokenKind::KwNever)]
    #[token("readonly", |_| TokenKind::KwReadonly)]
    #[token("map", |_| TokenKind::KwMap)]
    #[token("stream", |_| TokenKind::KwStream)]
    #[token("table", |_| TokenKind::KwTable)]
    #[token("future", |_| TokenKind::KwFuture)]
    #[token("typedesc", |_| TokenKind::KwTypedesc)]
    #[token("error", |_| TokenKind::KwError)]
    #[token("object", |_| TokenKind::KwObject)]
    #[token("record", |_| TokenKind::KwRecord)]
    #[token("function", |_| TokenKind::KwFunction)]
    #[token("distinct", |_| TokenKind::KwDistinct)]
    #[token("client", |_| TokenKind::KwClient)]
    #[token("isolated", |_| TokenKind::KwIsolated)]
    #[token("var", |_| TokenKind::KwVar)]
    // Expression keywords
    #[token("true", |_| TokenKind::KwTrue)]
    #[token("false", |_| TokenKind::KwFalse)]
    #[token("null", |_| TokenKind::KwNull)]
    #[token("typeof", |_| TokenKind::KwTypeof)]
    #[token("check", |_| TokenKind::KwCheck)]
    #[token("checkpanic", |_| TokenKind::KwCheckpanic)]
    #[token("trap", |_| TokenKind::KwTrap)]
    #[token("new", |_| TokenKind::KwNew)]
    #[token("start", |_| TokenKind::KwStart)]
    #[token("wait", |_| TokenKind::KwWait)]
    #[token("is", |_| TokenKind::KwIs)]
    #[token("returns", |_| TokenKind::KwReturns)]
    // Query keywords
    #[token("from", |_| TokenKind::KwFrom)]
    #[token("in", |_| TokenKind::KwIn)]
    #[token("where", |_| TokenKind::KwWhere)]
    #[token("let", |_| TokenKind::KwLet)]
    #[token("select", |_| TokenKind::KwSelect)]
    #[token("order", |_| TokenKind::KwOrder)]
    #[token("by", |_| TokenKind::KwBy)]
    #[token("ascending", |_| TokenKind::KwAscending)]
    #[token("descending", |_| TokenKind::KwDescending)]
    #[token("limit", |_| TokenKind::KwLimit)]
    #[token("join", |_| TokenKind::KwJoin)]
    #[token("outer", |_| TokenKind::KwOuter)]
    #[token("on", |_| TokenKind::KwOn)]
    #[token("equals", |_| TokenKind::KwEquals)]
    #[token("conflict", |_| TokenKind::KwConflict)]
    #[token("do", |_| TokenKind::KwDo)]
    #[token("key", |_| TokenKind::KwKey)]
    // Statement keywords
    #[token("if", |_| TokenKind::KwIf)]
    #[token("else", |_| TokenKind::KwElse)]
    #[token("match", |_| TokenKind::KwMatch)]
    #[token("foreach", |_| TokenKind::KwForeach)]
    #[token("while", |_| TokenKind::KwWhile)]
    #[token("return", |_| TokenKind::KwReturn)]
    #[token("break", |_| TokenKind::KwBreak)]
    #[token("continue", |_| TokenKind::KwContinue)]
    #[token("panic", |_| TokenKind::KwPanic)]
    #[token("final", |_| TokenKind::KwFinal)]
    // Declaration keywords
    #[token("public", |_| TokenKind::KwPublic)]
    #[token("private", |_| TokenKind::KwPrivate)]
    #[token("remote", |_| TokenKind::KwRemote)]
    #[token("const", |_| TokenKind::KwConst)]
    #[token("import", |_| TokenKind::KwImport)]
    #[token("type", |_| TokenKind::KwType)]
    #[token("service", |_| TokenKind::KwService)]
    #[token("class", |_| TokenKind::KwClass)]
    #[token("listener", |_| TokenKind::KwListener)]
    #[token("annotation", |_| TokenKind::KwAnnotation)]
    // Delimiters
    #[token("(", |_| TokenKind::LParen)]
    #[token(")", |_| TokenKind::RParen)]
    #[token("[", |_| TokenKind::LBracket)]
    #[token("]", |_| TokenKind::RBracket)]
    #[token("{", |_| TokenKind::LBrace)]
    #[token("}", |_| TokenKind::RBrace)]
    #[token("{|", |_| TokenKind::LBracePipe)]
    #[token("|}", |_| TokenKind::PipeRBrace)]
    #[token(";", |_| TokenKind::Semi)]
    #[token(",", |_| TokenKind::Comma)]
    #[token(":", |_| TokenKind::Colon)]
    // Operators
    #[token("?", |_| TokenKind::Question)]
    #[token("?:", |_| TokenKind::Elvis)]
    #[token("?.", |_| TokenKind::QuestionDot)]
    #[token(".", |_| TokenKind::Dot)]
    #[token(".@", |_| TokenKind::DotAt)]
    #[token("...", |_| TokenKind::Ellipsis)]
    #[token("..<", |_| TokenKind::DotDotLt)]
    #[token("=", |_| TokenKind::Eq)]
    #[token("=>", |_| TokenKind::FatArrow)]
    #[token("->", |_| TokenKind::Arrow)]
    #[token("@", |_| TokenKind::At)]
    #[token("+", |_| TokenKind::Plus)]
    #[token("-", |_| TokenKind::Minus)]
    #[token("*", |_| TokenKind::Star)]
    #[token("/", |_| TokenKind::Slash)]
    #[token("%", |_| TokenKind::Percent)]
    #[token("!", |_| TokenKind::Bang)]
    #[token("~", |_| TokenKind::Tilde)]
    #[token("==", |_| TokenKind::EqEq)]
    #[token("!=", |_| TokenKind::NotEq)]
    #[token("===", |_| TokenKind::EqEqEq)]
    #[token("!==", |_| TokenKind::NotEqEq)]
    #[token("<", |_| TokenKind::Lt)]
    #[token(">", |_| TokenKind::Gt)]
    #[token("<=", |_| TokenKind::LtEq)]
    #[token("<<", |_| TokenKind::Shl)]
    #[token("&", |_| TokenKind::Amp)]
    #[token("^", |_| TokenKind::Caret)]
    #[token("|", |_| TokenKind::Pipe)]
    #[token("&&", |_| TokenKind::AmpAmp)]
    #[token("||", |_| TokenKind::PipePipe)]
    #[token("_", |_| TokenKind::Underscore, priority = 3)]
    #[token("+=", |_| TokenKind::PlusEq)]
    #[token("-=", |_| TokenKind::MinusEq)]
    #[token("*=", |_| TokenKind::StarEq)]
    #[token("/=", |_| TokenKind::SlashEq)]
    #[token("&=", |_| TokenKind::AmpEq)]
    #[token("|=", |_| TokenKind::PipeEq)]
    #[token("^=", |_| TokenKind::CaretEq)]
    #[token("<<=", |_| TokenKind::ShlEq)]
    Fixed(TokenKind),
}
