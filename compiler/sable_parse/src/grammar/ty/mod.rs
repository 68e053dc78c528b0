//! Type-descriptor parsing.
//!
//! A second precedence climb, over [`TYPE_OPERATORS`]. Primaries are the
//! builtin keywords, names, `()`, `(T)`, tuples, singleton literals and the
//! parameterized and structured descriptors in `structured.rs`.
//!
//! Child types are allocated before their parent, so every node refers only
//! to nodes already in the arena.

mod operators;
mod structured;

pub use operators::TypePrec;
pub(crate) use structured::ParamNames;

use operators::{TypeOp, TYPE_OPERATORS};
use sable_diagnostic::ErrorCode;
use sable_ir::{
    ArrayDim, ArrayDimRange, BuiltinType, Expr, ExprKind, Span, TokenKind, TokenValue, TypeId, TypeKind,
    TypeNode, UnaryOp,
};
use sable_stack::ensure_sufficient_stack;
use tracing::trace;

use super::expr::literal_kind;
use crate::context::ParseContext;
use crate::error::{ErrorContext, ParseError};
use crate::recovery::{EXPR_START, TYPE_START};
use crate::{chain, committed, require, Assoc, OperInfo, ParseOutcome, Parser};

/// Builtin type for a simple type keyword.
fn builtin_for(kind: TokenKind) -> Option<BuiltinType> {
    Some(match kind {
        TokenKind::KwInt => BuiltinType::Int,
        TokenKind::KwFloat => BuiltinType::Float,
        TokenKind::KwDecimal => BuiltinType::Decimal,
        TokenKind::KwBoolean => BuiltinType::Boolean,
        TokenKind::KwString => BuiltinType::String,
        TokenKind::KwByte => BuiltinType::Byte,
        TokenKind::KwAny => BuiltinType::Any,
        TokenKind::KwAnydata => BuiltinType::Anydata,
        TokenKind::KwJson => BuiltinType::Json,
        TokenKind::KwHandle => BuiltinType::Handle,
        TokenKind::KwNever => BuiltinType::Never,
        TokenKind::KwReadonly => BuiltinType::Readonly,
        _ => return None,
    })
}

impl Parser<'_> {
    /// Parse a full type descriptor.
    pub(crate) fn parse_type(&mut self) -> ParseOutcome<TypeId> {
        self.parse_type_prec(TypePrec::Lowest)
    }

    /// Parse a type whose continuations all bind at least as tightly as `min`.
    pub(crate) fn parse_type_prec(&mut self, min: TypePrec) -> ParseOutcome<TypeId> {
        ensure_sufficient_stack(|| self.parse_type_prec_inner(min))
    }

    fn parse_type_prec_inner(&mut self, min: TypePrec) -> ParseOutcome<TypeId> {
        let start = self.current_span();
        let mut left = chain!(self, self.parse_type_primary());

        while let Some(info) = self.peek_type_operator() {
            if info.prec < min {
                break;
            }
            let kind = match info.node {
                TypeOp::Intersection | TypeOp::Union => {
                    self.advance();
                    let right_min = match info.assoc {
                        Assoc::Right => info.prec,
                        Assoc::Left | Assoc::NonAssoc => info.prec.next(),
                    };
                    let right = require!(
                        self,
                        self.parse_type_prec(right_min),
                        ErrorContext::TypeDescriptor
                    );
                    if info.node == TypeOp::Union {
                        TypeKind::Union { left, right }
                    } else {
                        TypeKind::Intersection { left, right }
                    }
                }
                TypeOp::Array => {
                    let dims = self.parse_array_dims();
                    TypeKind::Array {
                        element: left,
                        dims,
                    }
                }
                TypeOp::Nullable => {
                    self.advance();
                    TypeKind::Nullable(left)
                }
            };
            left = self.alloc_type_from(kind, start);
        }

        ParseOutcome::consumed_ok(left)
    }

    /// The continuation at the cursor, if any.
    ///
    /// `[` continues only when the bracket holds an array dimension, so
    /// `int [a, b] = e` leaves the list pattern alone. Inside an expression
    /// a `?` followed by something that starts an expression belongs to a
    /// conditional, not to the type.
    fn peek_type_operator(&self) -> Option<OperInfo<TypeOp, TypePrec>> {
        let kind = self.current_kind();
        let info = TYPE_OPERATORS[kind as usize]?;
        match info.node {
            TypeOp::Array if !self.at_array_dim() => None,
            TypeOp::Nullable
                if self.context.in_expr_type()
                    && EXPR_START.contains(self.cursor.peek_next_kind()) =>
            {
                None
            }
            _ => Some(info),
        }
    }

    /// `[` followed by `]`, `N ]`, `* ]` or `C ]`.
    fn at_array_dim(&self) -> bool {
        if !self.check(TokenKind::LBracket) {
            return false;
        }
        match self.cursor.peek_kind_at(1) {
            TokenKind::RBracket => true,
            TokenKind::Int | TokenKind::Star | TokenKind::Ident => {
                self.cursor.peek_kind_at(2) == TokenKind::RBracket
            }
            _ => false,
        }
    }

    /// Consecutive array dimensions, outermost last.
    fn parse_array_dims(&mut self) -> ArrayDimRange {
        let mut dims = Vec::new();
        while self.at_array_dim() {
            self.advance();
            let token = *self.cursor.current();
            let dim = match (token.kind, token.value) {
                (TokenKind::RBracket, _) => ArrayDim::Empty,
                (TokenKind::Int, TokenValue::Int(size)) => ArrayDim::Fixed(size),
                (TokenKind::Star, _) => ArrayDim::Star,
                (TokenKind::Ident, TokenValue::Name(name)) => ArrayDim::Const(name),
                _ => ArrayDim::Empty,
            };
            if token.kind != TokenKind::RBracket {
                self.advance();
            }
            self.advance();
            dims.push(dim);
        }
        trace!(count = dims.len(), "array dims");
        self.arena.alloc_array_dims(dims)
    }

    /// A type primary: no continuation is consumed.
    fn parse_type_primary(&mut self) -> ParseOutcome<TypeId> {
        let token = *self.cursor.current();
        if let Some(builtin) = builtin_for(token.kind) {
            self.advance();
            return ParseOutcome::consumed_ok(self.alloc_type_from(TypeKind::Builtin(builtin), token.span));
        }
        match token.kind {
            TokenKind::Ident => self.parse_type_reference(),
            TokenKind::LParen => self.parse_paren_type(),
            TokenKind::LBracket => self.parse_tuple_type(),
            TokenKind::KwMap => {
                self.advance();
                let [value, _] = chain!(self, self.parse_type_args(1));
                let value = value.unwrap_or_else(|| self.error_type(token.span));
                ParseOutcome::consumed_ok(self.alloc_type_from(TypeKind::Map(value), token.span))
            }
            TokenKind::KwStream => {
                self.advance();
                let [value, completion] = chain!(self, self.parse_type_args(2));
                let value = value.unwrap_or_else(|| self.error_type(token.span));
                let kind = TypeKind::Stream { value, completion };
                ParseOutcome::consumed_ok(self.alloc_type_from(kind, token.span))
            }
            TokenKind::KwTable => self.parse_table_type(),
            TokenKind::KwXml
            | TokenKind::KwFuture
            | TokenKind::KwTypedesc
            | TokenKind::KwError => {
                self.advance();
                let param = if self.check(TokenKind::Lt) {
                    let [param, _] = chain!(self, self.parse_type_args(1));
                    param
                } else {
                    None
                };
                let kind = match token.kind {
                    TokenKind::KwXml => TypeKind::Xml(param),
                    TokenKind::KwFuture => TypeKind::Future(param),
                    TokenKind::KwTypedesc => TypeKind::Typedesc(param),
                    _ => TypeKind::ErrorType(param),
                };
                ParseOutcome::consumed_ok(self.alloc_type_from(kind, token.span))
            }
            TokenKind::KwFunction => {
                self.advance();
                let signature = if self.check(TokenKind::LParen) {
                    Some(require!(
                        self,
                        self.parse_function_signature(ParamNames::Optional),
                        ErrorContext::FunctionSignature
                    ))
                } else {
                    None
                };
                let kind = TypeKind::Function { signature };
                ParseOutcome::consumed_ok(self.alloc_type_from(kind, token.span))
            }
            TokenKind::KwDistinct => {
                self.advance();
                let inner = require!(
                    self,
                    self.parse_type_prec(TypePrec::Primary),
                    ErrorContext::TypeDescriptor
                );
                ParseOutcome::consumed_ok(self.alloc_type_from(TypeKind::Distinct(inner), token.span))
            }
            TokenKind::KwRecord => self.parse_record_type(),
            TokenKind::KwObject | TokenKind::KwClient | TokenKind::KwIsolated => {
                self.parse_object_type()
            }
            TokenKind::Int
            | TokenKind::Float
            | TokenKind::Decimal
            | TokenKind::String
            | TokenKind::KwTrue
            | TokenKind::KwFalse
            | TokenKind::KwNull
            | TokenKind::Minus
            | TokenKind::Plus => self.parse_singleton_type(),
            TokenKind::Error => {
                self.advance();
                ParseOutcome::consumed_ok(self.error_type(token.span))
            }
            _ => ParseOutcome::empty_err(TYPE_START, self.position()),
        }
    }

    /// `T` or `mod:T`
    pub(crate) fn parse_type_reference(&mut self) -> ParseOutcome<TypeId> {
        let start = self.current_span();
        if !self.check(TokenKind::Ident) {
            return ParseOutcome::empty_err(TYPE_START, self.position());
        }
        let first = committed!(self.cursor.expect_ident());
        let kind = if self.cursor.is_adjacent_at(0)
            && self.check(TokenKind::Colon)
            && self.cursor.peek_next_kind() == TokenKind::Ident
            && self.cursor.is_adjacent_at(1)
        {
            self.advance();
            let name = committed!(self.cursor.expect_ident());
            TypeKind::Qualified {
                module: first,
                name,
            }
        } else {
            TypeKind::Named(first)
        };
        ParseOutcome::consumed_ok(self.alloc_type_from(kind, start))
    }

    /// `()` or `(T)`
    pub(crate) fn parse_paren_type(&mut self) -> ParseOutcome<TypeId> {
        let open = committed!(self.cursor.expect(TokenKind::LParen)).span;
        if self.eat(TokenKind::RParen) {
            return ParseOutcome::consumed_ok(self.alloc_type_from(TypeKind::Nil, open));
        }
        let inner = require!(
            self,
            self.without_context(ParseContext::EXPR_TYPE, Parser::parse_type),
            ErrorContext::TypeDescriptor
        );
        self.expect_closer(TokenKind::LParen, open, TokenKind::RParen);
        ParseOutcome::consumed_ok(self.alloc_type_from(TypeKind::Group(inner), open))
    }

    /// `1`, `"on"`, `true`, `null`, `-1`
    fn parse_singleton_type(&mut self) -> ParseOutcome<TypeId> {
        let start = self.current_span();
        let sign = match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Plus),
            _ => None,
        };
        if sign.is_some() {
            if !matches!(
                self.cursor.peek_next_kind(),
                TokenKind::Int | TokenKind::Float | TokenKind::Decimal
            ) {
                return ParseOutcome::empty_err(TYPE_START, self.position());
            }
            self.advance();
        }
        let token = *self.advance();
        let Some(literal) = literal_kind(&token) else {
            let error = ParseError::expected(&TYPE_START, &token);
            return ParseOutcome::consumed_err(error, token.span);
        };
        let mut value = self.arena.alloc_expr(Expr::new(literal, token.span));
        if let Some(op) = sign {
            value = self.alloc_expr_from(ExprKind::Unary { op, operand: value }, start);
        }
        ParseOutcome::consumed_ok(self.alloc_type_from(TypeKind::Singleton(value), start))
    }

    /// `<T>` or `<T, U>` with up to `max` arguments.
    ///
    /// Missing arguments come back as `None`.
    fn parse_type_args(&mut self, max: usize) -> ParseOutcome<[Option<TypeId>; 2]> {
        let open = committed!(self.cursor.expect(TokenKind::Lt)).span;
        let args = chain!(
            self,
            self.without_context(ParseContext::EXPR_TYPE, |p| p.parse_type_arg_list(max))
        );
        self.expect_closer(TokenKind::Lt, open, TokenKind::Gt);
        ParseOutcome::consumed_ok(args)
    }

    fn parse_type_arg_list(&mut self, max: usize) -> ParseOutcome<[Option<TypeId>; 2]> {
        let mut args = [None, None];
        let mut count = 0;
        loop {
            let arg = require!(self, self.parse_type(), ErrorContext::TypeParameter);
            if count < max {
                args[count] = Some(arg);
            } else {
                let error = ParseError::new(
                    ErrorCode::E1001,
                    format!("too many type parameters; expected at most {max}"),
                    self.arena.get_type(arg).span,
                );
                self.report(error);
            }
            count += 1;
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        ParseOutcome::consumed_ok(args)
    }

    /// Allocate a type spanning from `start` to the last consumed token.
    pub(crate) fn alloc_type_from(&mut self, kind: TypeKind, start: Span) -> TypeId {
        let span = self.span_from(start);
        self.arena.alloc_type(TypeNode::new(kind, span))
    }
}
