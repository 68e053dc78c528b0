//! S-expression tree dump.
//!
//! Leaves print as their source text; every other node prints as
//! `(head child ...)`. Operators use their symbol as the head, so
//! `a + b * c` dumps as `(+ a (* b c))`. Optional children that are
//! absent are left out, and list members are spliced in place.

use sable_ir::{
    Arg, ArgKind, ArgRange, ArrayDim, AstArena, ExprId, ExprKind, ExprRange, FieldPattern,
    FieldPatternRange, FunctionBody, LetDecl, LetDeclRange, MappingFieldKind, MatchClause, Name,
    NameRange, ObjectMemberKind, ObjectQualifiers, OrderDirection, ParamRange, PatternId,
    PatternKind, QueryClause, QueryClauseRange, QueryConstruct, RecordFieldKind, StmtId, StmtKind,
    StmtRange, StringLookup, TableKey, TypeId, TypeKind, Visibility,
};
use sable_lexer::escape_string;

/// Dump text for a node left behind by error recovery.
const ERROR: &str = "<error>";

/// `(head a b ...)`
fn node(head: &str, children: impl IntoIterator<Item = String>) -> String {
    let mut out = format!("({head}");
    for child in children {
        out.push(' ');
        out.push_str(&child);
    }
    out.push(')');
    out
}

pub(crate) struct Dumper<'a> {
    arena: &'a AstArena,
    interner: &'a dyn StringLookup,
}

impl<'a> Dumper<'a> {
    pub(crate) fn new(arena: &'a AstArena, interner: &'a dyn StringLookup) -> Self {
        Dumper { arena, interner }
    }

    fn name(&self, name: Name) -> String {
        self.interner.lookup(name).to_string()
    }

    fn qualified(&self, module: Option<Name>, name: Name) -> String {
        match module {
            Some(module) => format!("{}:{}", self.name(module), self.name(name)),
            None => self.name(name),
        }
    }

    fn names(&self, names: NameRange) -> Vec<String> {
        self.arena
            .get_names(names)
            .iter()
            .map(|&n| self.name(n))
            .collect()
    }

    fn exprs(&self, range: ExprRange) -> Vec<String> {
        self.arena
            .get_expr_list(range)
            .iter()
            .map(|&e| self.expr(e))
            .collect()
    }

    pub(crate) fn expr(&self, id: ExprId) -> String {
        match self.arena.get_expr(id).kind {
            ExprKind::Int(value) => value.to_string(),
            ExprKind::Float(bits) => format!("{:?}", f64::from_bits(bits)),
            ExprKind::Decimal(text) => format!("{}d", self.name(text)),
            ExprKind::String(text) => format!("\"{}\"", escape_string(self.interner.lookup(text))),
            ExprKind::Bool(value) => value.to_string(),
            ExprKind::Null => "null".to_string(),
            ExprKind::Nil => "nil".to_string(),
            ExprKind::Ident(name) => self.name(name),
            ExprKind::Qualified { module, name } => self.qualified(Some(module), name),
            ExprKind::Group(inner) => node("group", [self.expr(inner)]),

            ExprKind::Binary { op, left, right } => {
                node(op.as_symbol(), [self.expr(left), self.expr(right)])
            }
            ExprKind::Unary { op, operand } => node(op.as_symbol(), [self.expr(operand)]),
            ExprKind::Check { kind, operand } => node(kind.as_keyword(), [self.expr(operand)]),
            ExprKind::Trap(operand) => node("trap", [self.expr(operand)]),
            ExprKind::TypeCast { ty, operand } => node("cast", [self.ty(ty), self.expr(operand)]),
            ExprKind::TypeTest {
                operand,
                ty,
                negated,
            } => node(
                if negated { "!is" } else { "is" },
                [self.expr(operand), self.ty(ty)],
            ),
            ExprKind::Ternary {
                cond,
                then_expr,
                else_expr,
            } => node(
                "?",
                [self.expr(cond), self.expr(then_expr), self.expr(else_expr)],
            ),
            ExprKind::Elvis { left, right } => node("?:", [self.expr(left), self.expr(right)]),

            ExprKind::Call { func, args } => {
                node("call", std::iter::once(self.expr(func)).chain(self.args(args)))
            }
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => node(
                "method",
                [self.expr(receiver), self.name(method)]
                    .into_iter()
                    .chain(self.args(args)),
            ),
            ExprKind::RemoteCall {
                client,
                method,
                args,
            } => node(
                "->",
                [self.expr(client), self.name(method)]
                    .into_iter()
                    .chain(self.args(args)),
            ),
            ExprKind::Field { receiver, field } => {
                node(".", [self.expr(receiver), self.name(field)])
            }
            ExprKind::OptionalField { receiver, field } => {
                node("?.", [self.expr(receiver), self.name(field)])
            }
            ExprKind::AnnotAccess {
                receiver,
                module,
                annot,
            } => node(".@", [self.expr(receiver), self.qualified(module, annot)]),
            ExprKind::Index { receiver, keys } => node(
                "index",
                std::iter::once(self.expr(receiver)).chain(self.exprs(keys)),
            ),

            ExprKind::List(members) => node("list", self.exprs(members)),
            ExprKind::Spread(inner) => node("...", [self.expr(inner)]),
            ExprKind::Mapping(fields) => {
                let fields = self.arena.get_mapping_fields(fields).iter().map(|field| {
                    let entry = match field.kind {
                        MappingFieldKind::KeyValue { key, value } => {
                            node(":", [self.name(key), self.expr(value)])
                        }
                        MappingFieldKind::StringKey { key, value } => node(
                            ":",
                            [
                                format!("\"{}\"", escape_string(self.interner.lookup(key))),
                                self.expr(value),
                            ],
                        ),
                        MappingFieldKind::Computed { key, value } => {
                            node("[]:", [self.expr(key), self.expr(value)])
                        }
                        MappingFieldKind::Shorthand(name) => self.name(name),
                        MappingFieldKind::Spread(value) => node("...", [self.expr(value)]),
                    };
                    if field.readonly {
                        node("readonly", [entry])
                    } else {
                        entry
                    }
                });
                node("mapping", fields.collect::<Vec<_>>())
            }
            ExprKind::Table { key, rows } => node(
                "table",
                key.map(|key| node("key", self.names(key)))
                    .into_iter()
                    .chain(self.exprs(rows)),
            ),
            ExprKind::New { ty, args } => node(
                "new",
                ty.map(|ty| self.ty(ty)).into_iter().chain(self.args(args)),
            ),
            ExprKind::ErrorCtor { ty, args } => node(
                "error",
                ty.map(|ty| self.ty(ty)).into_iter().chain(self.args(args)),
            ),

            ExprKind::AnonFunction {
                params,
                returns,
                body,
            } => {
                let body = match body {
                    FunctionBody::Expr(body) => self.expr(body),
                    FunctionBody::Block(stmts) => self.block(stmts),
                };
                node(
                    "function",
                    [self.params(params)]
                        .into_iter()
                        .chain(returns.map(|ty| node("returns", [self.ty(ty)])))
                        .chain([body]),
                )
            }
            ExprKind::Lambda { params, body } => node(
                "lambda",
                [node("params", self.names(params)), self.expr(body)],
            ),
            ExprKind::Let { decls, body } => node(
                "let",
                self.let_decls(decls).into_iter().chain([self.expr(body)]),
            ),
            ExprKind::Query {
                construct,
                clauses,
                select,
                on_conflict,
            } => {
                let head = match construct {
                    QueryConstruct::Default => None,
                    QueryConstruct::Stream => Some("stream".to_string()),
                    QueryConstruct::Table { key } => Some(node(
                        "table",
                        key.map(|key| node("key", self.names(key))),
                    )),
                };
                node(
                    "query",
                    head.into_iter()
                        .chain(self.query_clauses(clauses))
                        .chain([node("select", [self.expr(select)])])
                        .chain(on_conflict.map(|e| node("on-conflict", [self.expr(e)]))),
                )
            }
            ExprKind::Start(operand) => node("start", [self.expr(operand)]),
            ExprKind::Wait(operand) => node("wait", [self.expr(operand)]),
            ExprKind::TypeDesc(ty) => node("typedesc", [self.ty(ty)]),
            ExprKind::Error => ERROR.to_string(),
        }
    }

    fn args(&self, args: ArgRange) -> Vec<String> {
        self.arena
            .get_args(args)
            .iter()
            .map(|&Arg { kind, value, .. }| match kind {
                ArgKind::Positional => self.expr(value),
                ArgKind::Named(name) => node("=", [self.name(name), self.expr(value)]),
                ArgKind::Rest => node("...", [self.expr(value)]),
            })
            .collect()
    }

    fn let_decls(&self, decls: LetDeclRange) -> Vec<String> {
        self.arena
            .get_let_decls(decls)
            .iter()
            .map(|&LetDecl { ty, pattern, init, .. }| {
                node("decl", [self.binding_type(ty), self.pattern(pattern), self.expr(init)])
            })
            .collect()
    }

    fn binding_type(&self, ty: Option<TypeId>) -> String {
        ty.map_or_else(|| "var".to_string(), |ty| self.ty(ty))
    }

    fn query_clauses(&self, clauses: QueryClauseRange) -> Vec<String> {
        self.arena
            .get_query_clauses(clauses)
            .iter()
            .map(|&clause| match clause {
                QueryClause::From {
                    ty,
                    pattern,
                    source,
                    ..
                } => node(
                    "from",
                    [self.binding_type(ty), self.pattern(pattern), self.expr(source)],
                ),
                QueryClause::Where(cond, _) => node("where", [self.expr(cond)]),
                QueryClause::Let(decls, _) => node("let", self.let_decls(decls)),
                QueryClause::Join {
                    outer,
                    ty,
                    pattern,
                    source,
                    on_left,
                    on_right,
                    ..
                } => node(
                    if outer { "outer-join" } else { "join" },
                    [
                        self.binding_type(ty),
                        self.pattern(pattern),
                        self.expr(source),
                        node("on", [self.expr(on_left), self.expr(on_right)]),
                    ],
                ),
                QueryClause::OrderBy(keys, _) => node(
                    "order-by",
                    self.arena.get_order_keys(keys).iter().map(|key| {
                        let expr = self.expr(key.expr);
                        match key.direction {
                            Some(OrderDirection::Ascending) => node("ascending", [expr]),
                            Some(OrderDirection::Descending) => node("descending", [expr]),
                            None => expr,
                        }
                    }),
                ),
                QueryClause::Limit(limit, _) => node("limit", [self.expr(limit)]),
            })
            .collect()
    }

    pub(crate) fn ty(&self, id: TypeId) -> String {
        let arena = self.arena;
        match arena.get_type(id).kind {
            TypeKind::Builtin(builtin) => builtin.as_keyword().to_string(),
            TypeKind::Nil => "nil".to_string(),
            TypeKind::Named(name) => self.name(name),
            TypeKind::Qualified { module, name } => self.qualified(Some(module), name),
            TypeKind::Singleton(value) => node("singleton", [self.expr(value)]),
            TypeKind::Group(inner) => node("group", [self.ty(inner)]),
            TypeKind::Tuple { members, rest } => node(
                "tuple",
                arena
                    .get_type_list(members)
                    .iter()
                    .map(|&t| self.ty(t))
                    .chain(rest.map(|t| node("rest", [self.ty(t)]))),
            ),
            TypeKind::Record {
                exclusive,
                fields,
                rest,
            } => {
                let fields = arena.get_record_fields(fields).iter().map(|field| match field.kind {
                    RecordFieldKind::Field {
                        readonly,
                        ty,
                        name,
                        optional,
                        default,
                    } => node(
                        "field",
                        readonly
                            .then(|| "readonly".to_string())
                            .into_iter()
                            .chain([self.ty(ty), self.name(name)])
                            .chain(optional.then(|| "?".to_string()))
                            .chain(default.map(|e| self.expr(e))),
                    ),
                    RecordFieldKind::Inclusion(ty) => node("*", [self.ty(ty)]),
                });
                node(
                    if exclusive { "record-exclusive" } else { "record" },
                    fields.chain(rest.map(|t| node("rest", [self.ty(t)]))).collect::<Vec<_>>(),
                )
            }
            TypeKind::Object {
                qualifiers,
                members,
            } => {
                let quals = [
                    (ObjectQualifiers::CLIENT, "client"),
                    (ObjectQualifiers::ISOLATED, "isolated"),
                    (ObjectQualifiers::SERVICE, "service"),
                ]
                .into_iter()
                .filter(|&(flag, _)| qualifiers.has(flag))
                .map(|(_, keyword)| keyword.to_string());
                let members = arena.get_object_members(members).iter().map(|member| match member.kind {
                    ObjectMemberKind::Field {
                        visibility,
                        ty,
                        name,
                    } => node(
                        "field",
                        visibility_word(visibility)
                            .into_iter()
                            .chain([self.ty(ty), self.name(name)]),
                    ),
                    ObjectMemberKind::Method {
                        visibility,
                        remote,
                        isolated,
                        name,
                        signature,
                    } => node(
                        "method",
                        visibility_word(visibility)
                            .into_iter()
                            .chain(remote.then(|| "remote".to_string()))
                            .chain(isolated.then(|| "isolated".to_string()))
                            .chain([self.name(name), self.params(signature.params)])
                            .chain(signature.returns.map(|t| node("returns", [self.ty(t)]))),
                    ),
                    ObjectMemberKind::Inclusion(ty) => node("*", [self.ty(ty)]),
                });
                node("object", quals.chain(members).collect::<Vec<_>>())
            }
            TypeKind::Map(value) => node("map", [self.ty(value)]),
            TypeKind::Stream { value, completion } => node(
                "stream",
                std::iter::once(self.ty(value)).chain(completion.map(|t| self.ty(t))),
            ),
            TypeKind::Table { row, key } => node(
                "table",
                std::iter::once(self.ty(row)).chain(key.map(|key| match key {
                    TableKey::Fields(names) => node("key", self.names(names)),
                    TableKey::Type(ty) => node("key", [self.ty(ty)]),
                })),
            ),
            TypeKind::Future(param) => self.parameterized("future", param),
            TypeKind::Typedesc(param) => self.parameterized("typedesc", param),
            TypeKind::Xml(param) => self.parameterized("xml", param),
            TypeKind::ErrorType(param) => self.parameterized("error", param),
            TypeKind::Function { signature } => match signature {
                Some(signature) => node(
                    "function",
                    std::iter::once(self.params(signature.params))
                        .chain(signature.returns.map(|t| node("returns", [self.ty(t)]))),
                ),
                None => "function".to_string(),
            },
            TypeKind::Distinct(inner) => node("distinct", [self.ty(inner)]),
            TypeKind::Union { left, right } => node("union", [self.ty(left), self.ty(right)]),
            TypeKind::Intersection { left, right } => {
                node("intersection", [self.ty(left), self.ty(right)])
            }
            TypeKind::Array { element, dims } => node(
                "array",
                std::iter::once(self.ty(element)).chain(arena.get_array_dims(dims).iter().map(
                    |&dim| match dim {
                        ArrayDim::Empty => "[]".to_string(),
                        ArrayDim::Fixed(len) => format!("[{len}]"),
                        ArrayDim::Star => "[*]".to_string(),
                        ArrayDim::Const(name) => format!("[{}]", self.name(name)),
                    },
                )),
            ),
            TypeKind::Nullable(inner) => node("nullable", [self.ty(inner)]),
            TypeKind::Error => ERROR.to_string(),
        }
    }

    /// `name` alone, or `(name T)`.
    fn parameterized(&self, name: &str, param: Option<TypeId>) -> String {
        match param {
            Some(param) => node(name, [self.ty(param)]),
            None => name.to_string(),
        }
    }

    fn params(&self, params: ParamRange) -> String {
        let params = self.arena.get_params(params).iter().map(|param| {
            node(
                if param.rest { "rest-param" } else { "param" },
                std::iter::once(self.ty(param.ty))
                    .chain(param.name.map(|n| self.name(n)))
                    .chain(param.default.map(|e| self.expr(e))),
            )
        });
        node("params", params.collect::<Vec<_>>())
    }

    pub(crate) fn pattern(&self, id: PatternId) -> String {
        let arena = self.arena;
        match arena.get_pattern(id).kind {
            PatternKind::Capture(name) => self.name(name),
            PatternKind::Wildcard => "_".to_string(),
            PatternKind::List { members, rest } => node(
                "list-pattern",
                self.patterns(arena.get_pattern_list(members))
                    .into_iter()
                    .chain(rest.map(|r| self.pattern(r))),
            ),
            PatternKind::Mapping { fields, rest } => node(
                "mapping-pattern",
                self.field_patterns(fields)
                    .into_iter()
                    .chain(rest.map(|r| self.pattern(r))),
            ),
            PatternKind::ErrorPattern {
                ty,
                positional,
                named,
                rest,
            } => node(
                "error-pattern",
                ty.map(|t| self.ty(t))
                    .into_iter()
                    .chain(self.patterns(arena.get_pattern_list(positional)))
                    .chain(self.field_patterns(named))
                    .chain(rest.map(|r| self.pattern(r))),
            ),
            PatternKind::Rest(name) => node("rest", [self.name(name)]),
            PatternKind::Literal(value) => self.expr(value),
            PatternKind::ConstRef { module, name } => node("const", [self.qualified(module, name)]),
            PatternKind::Var(inner) => node("var", [self.pattern(inner)]),
            PatternKind::VarRef(place) => node("ref", [self.expr(place)]),
            PatternKind::Error => ERROR.to_string(),
        }
    }

    fn patterns(&self, ids: &[PatternId]) -> Vec<String> {
        ids.iter().map(|&p| self.pattern(p)).collect()
    }

    fn field_patterns(&self, fields: FieldPatternRange) -> Vec<String> {
        self.arena
            .get_field_patterns(fields)
            .iter()
            .map(|&FieldPattern { name, pattern, .. }| {
                node(
                    "field",
                    std::iter::once(self.name(name)).chain(pattern.map(|p| self.pattern(p))),
                )
            })
            .collect()
    }

    pub(crate) fn stmt(&self, id: StmtId) -> String {
        match self.arena.get_stmt(id).kind {
            StmtKind::Block(stmts) => self.block(stmts),
            StmtKind::VarDecl {
                is_final,
                ty,
                pattern,
                init,
            } => node(
                if is_final { "final" } else { "local" },
                [self.binding_type(ty), self.pattern(pattern)]
                    .into_iter()
                    .chain(init.map(|e| self.expr(e))),
            ),
            StmtKind::Assign { target, value } => node("=", [self.expr(target), self.expr(value)]),
            StmtKind::CompoundAssign { op, target, value } => node(
                &format!("{}=", op.as_symbol()),
                [self.expr(target), self.expr(value)],
            ),
            StmtKind::Destructure { pattern, value } => {
                node("destructure", [self.pattern(pattern), self.expr(value)])
            }
            StmtKind::Expr(expr) => node("expr", [self.expr(expr)]),
            StmtKind::If {
                cond,
                then_block,
                else_branch,
            } => node(
                "if",
                [self.expr(cond), self.block(then_block)]
                    .into_iter()
                    .chain(else_branch.map(|s| self.stmt(s))),
            ),
            StmtKind::While { cond, body } => node("while", [self.expr(cond), self.block(body)]),
            StmtKind::Foreach {
                ty,
                pattern,
                source,
                body,
            } => node(
                "foreach",
                [
                    self.binding_type(ty),
                    self.pattern(pattern),
                    self.expr(source),
                    self.block(body),
                ],
            ),
            StmtKind::Match { scrutinee, clauses } => node(
                "match",
                std::iter::once(self.expr(scrutinee)).chain(
                    self.arena
                        .get_match_clauses(clauses)
                        .iter()
                        .map(|&clause| self.match_clause(clause)),
                ),
            ),
            StmtKind::Return(value) => node("return", value.map(|e| self.expr(e))),
            StmtKind::Break => "(break)".to_string(),
            StmtKind::Continue => "(continue)".to_string(),
            StmtKind::Panic(value) => node("panic", [self.expr(value)]),
            StmtKind::Do(body) => node("do", [self.block(body)]),
            StmtKind::QueryAction { clauses, body } => node(
                "query-action",
                self.query_clauses(clauses)
                    .into_iter()
                    .chain([self.block(body)]),
            ),
            StmtKind::Error => ERROR.to_string(),
        }
    }

    fn block(&self, stmts: StmtRange) -> String {
        node(
            "block",
            self.arena
                .get_stmt_list(stmts)
                .iter()
                .map(|&s| self.stmt(s))
                .collect::<Vec<_>>(),
        )
    }

    fn match_clause(&self, clause: MatchClause) -> String {
        node(
            "clause",
            [node(
                "patterns",
                self.patterns(self.arena.get_pattern_list(clause.patterns)),
            )]
            .into_iter()
            .chain(clause.guard.map(|g| node("guard", [self.expr(g)])))
            .chain([self.block(clause.body)]),
        )
    }
}

fn visibility_word(visibility: Visibility) -> Option<String> {
    match visibility {
        Visibility::Default => None,
        Visibility::Public => Some("public".to_string()),
        Visibility::Private => Some("private".to_string()),
    }
}

#[cfg(test)]
mod tests;
