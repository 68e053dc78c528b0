//! Structured type descriptors: tuples, tables, records, objects and
//! function signatures.

use sable_diagnostic::ErrorCode;
use sable_ir::{
    FunctionSignature, ObjectMember, ObjectMemberKind, ObjectQualifiers, Param, RecordField,
    RecordFieldKind, TableKey, TokenKind, TypeId, TypeKind, Visibility,
};

use crate::context::ParseContext;
use crate::error::{ErrorContext, ParseError};
use crate::recovery::{TokenSet, CLOSERS, DECLARATION_KEYWORDS, STMT_BOUNDARY};
use crate::{chain, committed, require, ParseOutcome, Parser};

/// Whether parameters in a signature must be named.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ParamNames {
    /// Anonymous functions and object methods.
    Required,
    /// Function types, where `function (int, string) returns int` is valid.
    Optional,
}

/// Declaration keywords that also begin an object member.
const MEMBER_QUALIFIERS: TokenSet = TokenSet::new().with_all(&[
    TokenKind::KwPublic,
    TokenKind::KwPrivate,
    TokenKind::KwRemote,
]);

/// A tuple member before the rest check.
enum TupleMember {
    Member(TypeId),
    Rest(TypeId),
}

impl Parser<'_> {
    /// `[T, U, R...]`
    pub(crate) fn parse_tuple_type(&mut self) -> ParseOutcome<TypeId> {
        let open = committed!(self.cursor.expect(TokenKind::LBracket)).span;
        let members = self.without_context(ParseContext::EXPR_TYPE, |p| {
            p.delimited(
                TokenKind::LBracket,
                open,
                TokenKind::RBracket,
                ErrorContext::TupleType,
                |p| {
                    let ty = chain!(p, p.parse_type());
                    if p.eat(TokenKind::Ellipsis) {
                        ParseOutcome::consumed_ok(TupleMember::Rest(ty))
                    } else {
                        ParseOutcome::consumed_ok(TupleMember::Member(ty))
                    }
                },
                |p, span| TupleMember::Member(p.error_type(span)),
            )
        });

        let mut types = Vec::with_capacity(members.len());
        let mut rest = None;
        let last = members.len().saturating_sub(1);
        for (index, member) in members.into_iter().enumerate() {
            match member {
                TupleMember::Member(ty) => types.push(ty),
                TupleMember::Rest(ty) if index == last => rest = Some(ty),
                TupleMember::Rest(ty) => {
                    let error = ParseError::new(
                        ErrorCode::E1001,
                        "rest descriptor must be the last tuple member",
                        self.arena.get_type(ty).span,
                    );
                    self.report(error);
                    types.push(ty);
                }
            }
        }
        let members = self.arena.alloc_type_list(types);
        ParseOutcome::consumed_ok(self.alloc_type_from(TypeKind::Tuple { members, rest }, open))
    }

    /// `table<Row>`, `table<Row> key(a, b)` or `table<Row> key<K>`
    pub(crate) fn parse_table_type(&mut self) -> ParseOutcome<TypeId> {
        let start = committed!(self.cursor.expect(TokenKind::KwTable)).span;
        let [row, _] = chain!(self, self.parse_type_args(1));
        let row = row.unwrap_or_else(|| self.error_type(start));
        let key = if self.check(TokenKind::KwKey) && self.cursor.peek_next_kind() == TokenKind::Lt {
            self.advance();
            let [key, _] = chain!(self, self.parse_type_args(1));
            key.map(TableKey::Type)
        } else if self.check(TokenKind::KwKey) {
            chain!(self, self.parse_table_key_names()).map(TableKey::Fields)
        } else {
            None
        };
        ParseOutcome::consumed_ok(self.alloc_type_from(TypeKind::Table { row, key }, start))
    }

    /// `(params) [returns T]`
    pub(crate) fn parse_function_signature(
        &mut self,
        names: ParamNames,
    ) -> ParseOutcome<FunctionSignature> {
        let open = committed!(self.cursor.expect(TokenKind::LParen)).span;
        let params = self.without_context(ParseContext::EXPR_TYPE, |p| {
            p.delimited(
                TokenKind::LParen,
                open,
                TokenKind::RParen,
                ErrorContext::FunctionSignature,
                |p| p.parse_param(names),
                |p, span| Param {
                    ty: p.error_type(span),
                    name: None,
                    default: None,
                    rest: false,
                    span,
                },
            )
        });
        let params = self.arena.alloc_params(params);
        let returns = if self.eat(TokenKind::KwReturns) {
            Some(require!(
                self,
                self.parse_type(),
                ErrorContext::FunctionSignature
            ))
        } else {
            None
        };
        ParseOutcome::consumed_ok(FunctionSignature { params, returns })
    }

    /// `T [...] [name] [= default]`
    fn parse_param(&mut self, names: ParamNames) -> ParseOutcome<Param> {
        let start = self.current_span();
        let ty = chain!(self, self.parse_type());
        let rest = self.eat(TokenKind::Ellipsis);
        let name = if names == ParamNames::Required || self.check(TokenKind::Ident) {
            Some(committed!(self.cursor.expect_ident()))
        } else {
            None
        };
        let default = if name.is_some() && !rest && self.eat(TokenKind::Eq) {
            Some(require!(self, self.parse_expr(), ErrorContext::FunctionSignature))
        } else {
            None
        };
        ParseOutcome::consumed_ok(Param {
            ty,
            name,
            default,
            rest,
            span: self.span_from(start),
        })
    }

    /// `record { ... }` or `record {| ... |}`
    pub(crate) fn parse_record_type(&mut self) -> ParseOutcome<TypeId> {
        let start = committed!(self.cursor.expect(TokenKind::KwRecord)).span;
        let open_token = *self.cursor.current();
        let (exclusive, close) = match open_token.kind {
            TokenKind::LBrace => (false, TokenKind::RBrace),
            TokenKind::LBracePipe => (true, TokenKind::PipeRBrace),
            _ => {
                let expected = TokenSet::single(TokenKind::LBrace).with(TokenKind::LBracePipe);
                let error = self.expected_error(&expected, self.position());
                let span = error.span;
                return ParseOutcome::consumed_err(error, span);
            }
        };
        self.advance();

        let mut fields = Vec::new();
        let mut rest = None;
        self.without_context(ParseContext::EXPR_TYPE, |p| {
            while !p.at_body_end(close, TokenSet::new()) {
                let before = p.position();
                let outcome = p
                    .parse_record_field(&mut rest)
                    .with_error_context(ErrorContext::RecordType);
                let field = p.or_recover(outcome, STMT_BOUNDARY, |p, span| {
                    Some(RecordField {
                        kind: RecordFieldKind::Inclusion(p.error_type(span)),
                        span,
                    })
                });
                fields.extend(field);
                p.expect_semi();
                if p.position() == before {
                    p.advance();
                }
            }
        });
        self.expect_closer(open_token.kind, open_token.span, close);

        let fields = self.arena.alloc_record_fields(fields);
        let kind = TypeKind::Record {
            exclusive,
            fields,
            rest,
        };
        ParseOutcome::consumed_ok(self.alloc_type_from(kind, start))
    }

    /// One record field without its `;`. A rest descriptor `T...` is
    /// stored in `rest` and yields no field.
    fn parse_record_field(
        &mut self,
        rest: &mut Option<TypeId>,
    ) -> ParseOutcome<Option<RecordField>> {
        let start = self.current_span();
        if self.eat(TokenKind::Star) {
            let ty = require!(self, self.parse_type(), ErrorContext::RecordType);
            return ParseOutcome::consumed_ok(Some(RecordField {
                kind: RecordFieldKind::Inclusion(ty),
                span: self.span_from(start),
            }));
        }
        // `readonly T x;` marks the field; `readonly x;` and `readonly & T x;`
        // use `readonly` as the type.
        let readonly = self.check(TokenKind::KwReadonly)
            && !matches!(
                self.cursor.peek_next_kind(),
                TokenKind::Ident | TokenKind::Amp | TokenKind::LBracket | TokenKind::Question
            );
        if readonly {
            self.advance();
        }
        let ty = chain!(self, self.parse_type());
        if self.eat(TokenKind::Ellipsis) {
            if rest.is_some() {
                let error = ParseError::new(
                    ErrorCode::E1001,
                    "a record type has at most one rest descriptor",
                    self.span_from(start),
                );
                self.report(error);
            }
            *rest = Some(ty);
            return ParseOutcome::consumed_ok(None);
        }
        let name = committed!(self.cursor.expect_ident());
        let optional = self.eat(TokenKind::Question);
        let default = if self.eat(TokenKind::Eq) {
            Some(require!(self, self.parse_expr(), ErrorContext::RecordType))
        } else {
            None
        };
        ParseOutcome::consumed_ok(Some(RecordField {
            kind: RecordFieldKind::Field {
                readonly,
                ty,
                name,
                optional,
                default,
            },
            span: self.span_from(start),
        }))
    }

    /// `[client|isolated]* object { members }`
    pub(crate) fn parse_object_type(&mut self) -> ParseOutcome<TypeId> {
        let start = self.current_span();
        let mut qualifiers = ObjectQualifiers::default();
        loop {
            match self.current_kind() {
                TokenKind::KwClient => qualifiers = qualifiers.with(ObjectQualifiers::CLIENT),
                TokenKind::KwIsolated => qualifiers = qualifiers.with(ObjectQualifiers::ISOLATED),
                _ => break,
            }
            self.advance();
        }
        committed!(self.cursor.expect(TokenKind::KwObject));
        let open = committed!(self.cursor.expect(TokenKind::LBrace)).span;

        let mut members = Vec::new();
        self.without_context(ParseContext::EXPR_TYPE, |p| {
            while !p.at_body_end(TokenKind::RBrace, MEMBER_QUALIFIERS) {
                let before = p.position();
                let outcome = p
                    .parse_object_member()
                    .with_error_context(ErrorContext::ObjectType);
                let member = p.or_recover(outcome, STMT_BOUNDARY, |p, span| ObjectMember {
                    kind: ObjectMemberKind::Inclusion(p.error_type(span)),
                    span,
                });
                members.push(member);
                p.expect_semi();
                if p.position() == before {
                    p.advance();
                }
            }
        });
        self.expect_closer(TokenKind::LBrace, open, TokenKind::RBrace);

        let members = self.arena.alloc_object_members(members);
        let kind = TypeKind::Object {
            qualifiers,
            members,
        };
        ParseOutcome::consumed_ok(self.alloc_type_from(kind, start))
    }

    fn parse_object_member(&mut self) -> ParseOutcome<ObjectMember> {
        let start = self.current_span();
        if self.eat(TokenKind::Star) {
            let ty = require!(self, self.parse_type(), ErrorContext::ObjectType);
            return ParseOutcome::consumed_ok(ObjectMember {
                kind: ObjectMemberKind::Inclusion(ty),
                span: self.span_from(start),
            });
        }
        let visibility = if self.eat(TokenKind::KwPublic) {
            Visibility::Public
        } else if self.eat(TokenKind::KwPrivate) {
            Visibility::Private
        } else {
            Visibility::Default
        };

        // A method starts with its qualifiers and `function name`; a bare
        // `function` followed by `(` is a function-typed field.
        let mut remote = false;
        let mut isolated = false;
        let mut offset = 0;
        loop {
            match self.cursor.peek_kind_at(offset) {
                TokenKind::KwRemote => remote = true,
                TokenKind::KwIsolated => isolated = true,
                _ => break,
            }
            offset += 1;
        }
        let is_method = self.cursor.peek_kind_at(offset) == TokenKind::KwFunction
            && self.cursor.peek_kind_at(offset + 1) == TokenKind::Ident;
        if is_method {
            for _ in 0..=offset {
                self.advance();
            }
            let name = committed!(self.cursor.expect_ident());
            let signature = require!(
                self,
                self.parse_function_signature(ParamNames::Required),
                ErrorContext::ObjectType
            );
            return ParseOutcome::consumed_ok(ObjectMember {
                kind: ObjectMemberKind::Method {
                    visibility,
                    remote,
                    isolated,
                    name,
                    signature,
                },
                span: self.span_from(start),
            });
        }

        let ty = require!(self, self.parse_type(), ErrorContext::ObjectType);
        let name = committed!(self.cursor.expect_ident());
        ParseOutcome::consumed_ok(ObjectMember {
            kind: ObjectMemberKind::Field {
                visibility,
                ty,
                name,
            },
            span: self.span_from(start),
        })
    }

    /// True at the closer of a record or object body, or at a token that
    /// ends every enclosing construct. Declaration keywords in
    /// `member_starts` stay inside the body.
    fn at_body_end(&self, close: TokenKind, member_starts: TokenSet) -> bool {
        let kind = self.current_kind();
        kind == close
            || kind == TokenKind::Eof
            || CLOSERS.contains(kind)
            || (DECLARATION_KEYWORDS.contains(kind) && !member_starts.contains(kind))
    }
}
