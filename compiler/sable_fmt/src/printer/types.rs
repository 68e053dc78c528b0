//! Type descriptors.

use sable_ir::{
    ArrayDim, ObjectMember, ObjectMemberKind, ObjectQualifiers, Param, ParamRange, RecordField,
    RecordFieldKind, TableKey, TypeId, TypeKind, Visibility,
};

use super::parens::{ty_level as tl, type_level};
use super::{Printer, ERROR_PLACEHOLDER};

impl Printer<'_> {
    pub(crate) fn ty(&mut self, id: TypeId) {
        self.ty_at(id, tl::OPEN);
    }

    fn ty_at(&mut self, id: TypeId, min: u8) {
        let wrap = type_level(self.arena, id) < min;
        if wrap {
            self.emit("(");
        }
        self.ty_inner(id);
        if wrap {
            self.emit(")");
        }
    }

    /// The type of a typed binding: `var` when absent.
    pub(super) fn binding_type(&mut self, ty: Option<TypeId>) {
        match ty {
            Some(ty) => self.ty(ty),
            None => self.emit("var"),
        }
    }

    fn ty_inner(&mut self, id: TypeId) {
        let arena = self.arena;
        match arena.get_type(id).kind {
            TypeKind::Builtin(builtin) => self.emit(builtin.as_keyword()),
            TypeKind::Nil => self.emit("()"),
            TypeKind::Named(name) => self.name(name),
            TypeKind::Qualified { module, name } => self.qualified(module, name),
            TypeKind::Singleton(value) => self.expr(value),
            TypeKind::Group(inner) => {
                self.emit("(");
                self.ty(inner);
                self.emit(")");
            }
            TypeKind::Tuple { members, rest } => {
                self.emit("[");
                self.comma_separated(arena.get_type_list(members), Printer::ty);
                if let Some(rest) = rest {
                    if !members.is_empty() {
                        self.emit(", ");
                    }
                    self.ty(rest);
                    self.emit("...");
                }
                self.emit("]");
            }
            TypeKind::Record {
                exclusive,
                fields,
                rest,
            } => {
                self.emit(if exclusive { "record {|" } else { "record {" });
                for &field in arena.get_record_fields(fields) {
                    self.space();
                    self.record_field(field);
                }
                if let Some(rest) = rest {
                    self.space();
                    self.ty(rest);
                    self.emit("...;");
                }
                self.emit(if exclusive { " |}" } else { " }" });
            }
            TypeKind::Object {
                qualifiers,
                members,
            } => {
                for (flag, keyword) in [
                    (ObjectQualifiers::CLIENT, "client "),
                    (ObjectQualifiers::ISOLATED, "isolated "),
                    (ObjectQualifiers::SERVICE, "service "),
                ] {
                    if qualifiers.has(flag) {
                        self.emit(keyword);
                    }
                }
                self.emit("object {");
                for &member in arena.get_object_members(members) {
                    self.space();
                    self.object_member(member);
                }
                self.emit(" }");
            }
            TypeKind::Map(value) => self.type_args("map", &[value]),
            TypeKind::Stream { value, completion } => match completion {
                Some(completion) => self.type_args("stream", &[value, completion]),
                None => self.type_args("stream", &[value]),
            },
            TypeKind::Table { row, key } => {
                self.type_args("table", &[row]);
                match key {
                    Some(TableKey::Fields(names)) => {
                        self.emit(" key(");
                        self.comma_separated(arena.get_names(names), Printer::name);
                        self.emit(")");
                    }
                    Some(TableKey::Type(key)) => {
                        self.space();
                        self.type_args("key", &[key]);
                    }
                    None => {}
                }
            }
            TypeKind::Future(param) => self.optional_type_arg("future", param),
            TypeKind::Typedesc(param) => self.optional_type_arg("typedesc", param),
            TypeKind::Xml(param) => self.optional_type_arg("xml", param),
            TypeKind::ErrorType(param) => self.optional_type_arg("error", param),
            TypeKind::Function { signature } => {
                self.emit("function");
                if let Some(signature) = signature {
                    self.space();
                    self.params(signature.params);
                    if let Some(returns) = signature.returns {
                        self.emit(" returns ");
                        self.ty(returns);
                    }
                }
            }
            TypeKind::Distinct(inner) => {
                self.emit("distinct ");
                self.ty_at(inner, tl::PRIMARY);
            }

            TypeKind::Union { left, right } => {
                self.ty_at(left, tl::UNION + 1);
                self.emit("|");
                self.ty_at(right, tl::UNION);
            }
            TypeKind::Intersection { left, right } => {
                self.ty_at(left, tl::INTERSECTION);
                self.emit("&");
                self.ty_at(right, tl::INTERSECTION + 1);
            }
            TypeKind::Array { element, dims } => {
                self.ty_at(element, tl::ARRAY);
                for &dim in arena.get_array_dims(dims) {
                    match dim {
                        ArrayDim::Empty => self.emit("[]"),
                        ArrayDim::Fixed(len) => self.emit(&format!("[{len}]")),
                        ArrayDim::Star => self.emit("[*]"),
                        ArrayDim::Const(name) => {
                            self.emit("[");
                            self.name(name);
                            self.emit("]");
                        }
                    }
                }
            }
            TypeKind::Nullable(inner) => {
                self.ty_at(inner, tl::NULLABLE);
                self.emit("?");
            }
            TypeKind::Error => self.emit(ERROR_PLACEHOLDER),
        }
    }

    /// `name<A, B>`
    fn type_args(&mut self, name: &str, args: &[TypeId]) {
        self.emit(name);
        self.emit("<");
        self.comma_separated(args, Printer::ty);
        self.emit(">");
    }

    fn optional_type_arg(&mut self, name: &str, param: Option<TypeId>) {
        match param {
            Some(param) => self.type_args(name, &[param]),
            None => self.emit(name),
        }
    }

    /// `(T a, U b = e, R... rest)`
    pub(super) fn params(&mut self, params: ParamRange) {
        let arena = self.arena;
        self.emit("(");
        self.comma_separated(arena.get_params(params), |p, param: Param| {
            p.ty(param.ty);
            if param.rest {
                p.emit("...");
            }
            if let Some(name) = param.name {
                p.space();
                p.name(name);
            }
            if let Some(default) = param.default {
                p.emit(" = ");
                p.expr(default);
            }
        });
        self.emit(")");
    }

    fn record_field(&mut self, field: RecordField) {
        match field.kind {
            RecordFieldKind::Field {
                readonly,
                ty,
                name,
                optional,
                default,
            } => {
                if readonly {
                    self.emit("readonly ");
                }
                self.ty(ty);
                self.space();
                self.name(name);
                if optional {
                    self.emit("?");
                }
                if let Some(default) = default {
                    self.emit(" = ");
                    self.expr(default);
                }
            }
            RecordFieldKind::Inclusion(ty) => {
                self.emit("*");
                self.ty(ty);
            }
        }
        self.emit(";");
    }

    fn object_member(&mut self, member: ObjectMember) {
        match member.kind {
            ObjectMemberKind::Field {
                visibility,
                ty,
                name,
            } => {
                self.visibility(visibility);
                self.ty(ty);
                self.space();
                self.name(name);
            }
            ObjectMemberKind::Method {
                visibility,
                remote,
                isolated,
                name,
                signature,
            } => {
                self.visibility(visibility);
                if remote {
                    self.emit("remote ");
                }
                if isolated {
                    self.emit("isolated ");
                }
                self.emit("function ");
                self.name(name);
                self.params(signature.params);
                if let Some(returns) = signature.returns {
                    self.emit(" returns ");
                    self.ty(returns);
                }
            }
            ObjectMemberKind::Inclusion(ty) => {
                self.emit("*");
                self.ty(ty);
            }
        }
        self.emit(";");
    }

    fn visibility(&mut self, visibility: Visibility) {
        match visibility {
            Visibility::Default => {}
            Visibility::Public => self.emit("public "),
            Visibility::Private => self.emit("private "),
        }
    }
}
