//! Expressions.

use sable_ir::{
    Arg, ArgKind, ArgRange, BinaryOp, ExprId, ExprKind, FunctionBody, LetDecl, LetDeclRange, MappingField,
    MappingFieldKind, NameRange, OrderDirection, OrderKey, PatternId, QueryClause,
    QueryClauseRange, QueryConstruct, TypeId, UnaryOp,
};
use sable_lexer::escape_string;

use super::parens::{ends_with_type, expr_level, level, starts_with_operand};
use super::{Printer, ERROR_PLACEHOLDER};

impl Printer<'_> {
    pub(crate) fn expr(&mut self, id: ExprId) {
        self.expr_at(id, level::OPEN);
    }

    /// Print `id` where its level must be at least `min`.
    fn expr_at(&mut self, id: ExprId, min: u8) {
        let wrap = expr_level(self.arena, id) < min;
        self.parenthesized(wrap, |p| p.expr_inner(id));
    }

    /// Print `id` where a postfix suffix follows it.
    fn leading_operand(&mut self, id: ExprId, min: u8) {
        self.infix_operand(id, min, true);
    }

    /// Print `id` before an infix operator. `continues_type` is true when
    /// that operator would extend a type descriptor printed last in `id`.
    fn infix_operand(&mut self, id: ExprId, min: u8, continues_type: bool) {
        let wrap = expr_level(self.arena, id) < min
            || (continues_type && ends_with_type(self.arena, id));
        self.parenthesized(wrap, |p| p.expr_inner(id));
    }

    fn parenthesized(&mut self, wrap: bool, f: impl FnOnce(&mut Self)) {
        if wrap {
            self.emit("(");
        }
        f(self);
        if wrap {
            self.emit(")");
        }
    }

    fn expr_inner(&mut self, id: ExprId) {
        let arena = self.arena;
        let interner = self.interner;
        match arena.get_expr(id).kind {
            ExprKind::Int(value) => self.emit(&value.to_string()),
            ExprKind::Float(bits) => self.emit(&format!("{:?}", f64::from_bits(bits))),
            ExprKind::Decimal(text) => {
                let interner = self.interner;
                self.emit(interner.lookup(text));
                self.emit("d");
            }
            ExprKind::String(text) => self.string_literal(interner.lookup(text)),
            ExprKind::Bool(value) => self.emit(if value { "true" } else { "false" }),
            ExprKind::Null => self.emit("null"),
            ExprKind::Nil => self.emit("()"),
            ExprKind::Ident(name) => self.name(name),
            ExprKind::Qualified { module, name } => self.qualified(module, name),
            ExprKind::Group(inner) => {
                self.emit("(");
                self.expr(inner);
                self.emit(")");
            }

            ExprKind::Binary { op, left, right } => {
                let prec = op.precedence();
                let left_min = if op.is_non_associative() { prec + 1 } else { prec };
                // `|` and `&` after a type read as union and intersection.
                let continues_type = matches!(op, BinaryOp::BitOr | BinaryOp::BitAnd);
                self.infix_operand(left, left_min, continues_type);
                self.space();
                self.emit(op.as_symbol());
                self.space();
                self.expr_at(right, prec + 1);
            }
            ExprKind::Unary { op, operand } => {
                self.emit(op.as_symbol());
                if op == UnaryOp::Typeof {
                    self.space();
                }
                self.expr_at(operand, level::UNARY);
            }
            ExprKind::Check { kind, operand } => {
                self.emit(kind.as_keyword());
                self.space();
                self.expr_at(operand, level::UNARY);
            }
            ExprKind::Trap(operand) => self.keyword_operand("trap", operand),
            ExprKind::Start(operand) => self.keyword_operand("start", operand),
            ExprKind::Wait(operand) => self.keyword_operand("wait", operand),
            ExprKind::TypeCast { ty, operand } => {
                self.emit("<");
                self.ty(ty);
                self.emit("> ");
                self.expr_at(operand, level::UNARY);
            }
            ExprKind::TypeTest {
                operand,
                ty,
                negated,
            } => {
                self.infix_operand(operand, level::TYPE_TEST, false);
                self.emit(if negated { " !is " } else { " is " });
                self.ty(ty);
            }
            ExprKind::Ternary {
                cond,
                then_expr,
                else_expr,
            } => {
                // A `?` after a type is nullable unless an operand follows.
                let continues_type = !starts_with_operand(arena, then_expr);
                self.infix_operand(cond, level::ELVIS + 1, continues_type);
                self.emit(" ? ");
                self.expr(then_expr);
                self.emit(" : ");
                self.expr(else_expr);
            }
            ExprKind::Elvis { left, right } => {
                self.infix_operand(left, level::ELVIS + 1, false);
                self.emit(" ?: ");
                self.expr(right);
            }

            ExprKind::Call { func, args } => {
                self.leading_operand(func, level::POSTFIX);
                self.args(args);
            }
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => {
                self.leading_operand(receiver, level::POSTFIX);
                self.emit(".");
                self.name(method);
                self.args(args);
            }
            ExprKind::RemoteCall {
                client,
                method,
                args,
            } => {
                self.leading_operand(client, level::POSTFIX);
                self.emit("->");
                self.name(method);
                self.args(args);
            }
            ExprKind::Field { receiver, field } => {
                self.leading_operand(receiver, level::POSTFIX);
                self.emit(".");
                self.name(field);
            }
            ExprKind::OptionalField { receiver, field } => {
                self.leading_operand(receiver, level::POSTFIX);
                self.emit("?.");
                self.name(field);
            }
            ExprKind::AnnotAccess {
                receiver,
                module,
                annot,
            } => {
                self.leading_operand(receiver, level::POSTFIX);
                self.emit(".@");
                match module {
                    Some(module) => self.qualified(module, annot),
                    None => self.name(annot),
                }
            }
            ExprKind::Index { receiver, keys } => {
                self.leading_operand(receiver, level::POSTFIX);
                self.emit("[");
                self.comma_separated(arena.get_expr_list(keys), Printer::expr);
                self.emit("]");
            }

            ExprKind::List(members) => {
                self.emit("[");
                self.comma_separated(arena.get_expr_list(members), Printer::expr);
                self.emit("]");
            }
            ExprKind::Spread(inner) => {
                self.emit("...");
                self.expr_at(inner, level::UNARY);
            }
            ExprKind::Mapping(fields) => {
                let fields = arena.get_mapping_fields(fields);
                if fields.is_empty() {
                    self.emit("{}");
                } else {
                    self.emit("{ ");
                    self.comma_separated(fields, Printer::mapping_field);
                    self.emit(" }");
                }
            }
            ExprKind::Table { key, rows } => {
                self.emit("table ");
                if let Some(key) = key {
                    self.key_names(key);
                    self.space();
                }
                self.emit("[");
                self.comma_separated(arena.get_expr_list(rows), Printer::expr);
                self.emit("]");
            }
            ExprKind::New { ty, args } => {
                self.emit("new");
                match ty {
                    Some(ty) => {
                        self.space();
                        self.ty(ty);
                        self.args(args);
                    }
                    None if !args.is_empty() => {
                        self.space();
                        self.args(args);
                    }
                    None => {}
                }
            }
            ExprKind::ErrorCtor { ty, args } => {
                self.emit("error");
                if let Some(ty) = ty {
                    self.space();
                    self.ty(ty);
                }
                self.args(args);
            }

            ExprKind::AnonFunction {
                params,
                returns,
                body,
            } => {
                self.emit("function ");
                self.params(params);
                if let Some(returns) = returns {
                    self.emit(" returns ");
                    self.ty(returns);
                }
                match body {
                    FunctionBody::Expr(body) => {
                        self.emit(" => ");
                        self.expr(body);
                    }
                    FunctionBody::Block(stmts) => {
                        self.space();
                        self.block(stmts);
                    }
                }
            }
            ExprKind::Lambda { params, body } => {
                let names = arena.get_names(params);
                if let [single] = names {
                    self.name(*single);
                } else {
                    self.emit("(");
                    self.comma_separated(names, Printer::name);
                    self.emit(")");
                }
                self.emit(" => ");
                self.expr(body);
            }
            ExprKind::Let { decls, body } => {
                self.emit("let ");
                self.let_decls(decls);
                self.emit(" in ");
                self.expr(body);
            }
            ExprKind::Query {
                construct,
                clauses,
                select,
                on_conflict,
            } => {
                match construct {
                    QueryConstruct::Default => {}
                    QueryConstruct::Stream => self.emit("stream "),
                    QueryConstruct::Table { key } => {
                        self.emit("table ");
                        if let Some(key) = key {
                            self.key_names(key);
                            self.space();
                        }
                    }
                }
                self.query_clauses(clauses);
                self.emit(" select ");
                self.expr(select);
                if let Some(on_conflict) = on_conflict {
                    self.emit(" on conflict ");
                    self.expr(on_conflict);
                }
            }
            ExprKind::TypeDesc(ty) => self.ty(ty),
            ExprKind::Error => self.emit(ERROR_PLACEHOLDER),
        }
    }

    fn keyword_operand(&mut self, keyword: &str, operand: ExprId) {
        self.emit(keyword);
        self.space();
        self.expr_at(operand, level::UNARY);
    }

    fn string_literal(&mut self, text: &str) {
        self.emit("\"");
        self.emit(&escape_string(text));
        self.emit("\"");
    }

    /// `(a, name = b, ...rest)`
    fn args(&mut self, args: ArgRange) {
        let arena = self.arena;
        self.emit("(");
        self.comma_separated(arena.get_args(args), Printer::arg);
        self.emit(")");
    }

    fn arg(&mut self, arg: Arg) {
        match arg.kind {
            ArgKind::Positional => {}
            ArgKind::Named(name) => {
                self.name(name);
                self.emit(" = ");
            }
            ArgKind::Rest => self.emit("..."),
        }
        self.expr(arg.value);
    }

    fn mapping_field(&mut self, field: MappingField) {
        if field.readonly {
            self.emit("readonly ");
        }
        match field.kind {
            MappingFieldKind::KeyValue { key, value } => {
                self.name(key);
                self.emit(": ");
                self.expr(value);
            }
            MappingFieldKind::StringKey { key, value } => {
                let interner = self.interner;
                self.string_literal(interner.lookup(key));
                self.emit(": ");
                self.expr(value);
            }
            MappingFieldKind::Computed { key, value } => {
                self.emit("[");
                self.expr(key);
                self.emit("]: ");
                self.expr(value);
            }
            MappingFieldKind::Shorthand(name) => self.name(name),
            MappingFieldKind::Spread(value) => {
                self.emit("...");
                self.expr(value);
            }
        }
    }

    /// `key(a, b)`
    fn key_names(&mut self, names: NameRange) {
        let arena = self.arena;
        self.emit("key(");
        self.comma_separated(arena.get_names(names), Printer::name);
        self.emit(")");
    }

    /// `T p = e, var q = f`
    fn let_decls(&mut self, decls: LetDeclRange) {
        let arena = self.arena;
        self.comma_separated(arena.get_let_decls(decls), |p, decl: LetDecl| {
            p.binding_type(decl.ty);
            p.space();
            p.pattern(decl.pattern);
            p.emit(" = ");
            p.expr(decl.init);
        });
    }

    pub(super) fn query_clauses(&mut self, clauses: QueryClauseRange) {
        let arena = self.arena;
        for (index, &clause) in arena.get_query_clauses(clauses).iter().enumerate() {
            if index > 0 {
                self.space();
            }
            self.query_clause(clause);
        }
    }

    fn query_clause(&mut self, clause: QueryClause) {
        match clause {
            QueryClause::From {
                ty,
                pattern,
                source,
                ..
            } => {
                self.emit("from ");
                self.input_binding(ty, pattern);
                self.emit(" in ");
                self.expr(source);
            }
            QueryClause::Where(cond, _) => {
                self.emit("where ");
                self.expr(cond);
            }
            QueryClause::Let(decls, _) => {
                self.emit("let ");
                self.let_decls(decls);
            }
            QueryClause::Join {
                outer,
                ty,
                pattern,
                source,
                on_left,
                on_right,
                ..
            } => {
                if outer {
                    self.emit("outer ");
                }
                self.emit("join ");
                self.input_binding(ty, pattern);
                self.emit(" in ");
                self.expr(source);
                self.emit(" on ");
                self.expr(on_left);
                self.emit(" equals ");
                self.expr(on_right);
            }
            QueryClause::OrderBy(keys, _) => {
                let arena = self.arena;
                self.emit("order by ");
                self.comma_separated(arena.get_order_keys(keys), |p, key: OrderKey| {
                    p.expr(key.expr);
                    match key.direction {
                        Some(OrderDirection::Ascending) => p.emit(" ascending"),
                        Some(OrderDirection::Descending) => p.emit(" descending"),
                        None => {}
                    }
                });
            }
            QueryClause::Limit(limit, _) => {
                self.emit("limit ");
                self.expr(limit);
            }
        }
    }

    /// `T p` or `var p` in `from`, `join` and `foreach`.
    pub(super) fn input_binding(&mut self, ty: Option<TypeId>, pattern: PatternId) {
        self.binding_type(ty);
        self.space();
        self.pattern(pattern);
    }
}
