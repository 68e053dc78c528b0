//! Patterns.

use sable_ir::{FieldPattern, PatternId, PatternKind};

use super::{Printer, ERROR_PLACEHOLDER};

impl Printer<'_> {
    pub(crate) fn pattern(&mut self, id: PatternId) {
        let arena = self.arena;
        match arena.get_pattern(id).kind {
            PatternKind::Capture(name) => self.name(name),
            PatternKind::Wildcard => self.emit("_"),
            PatternKind::List { members, rest } => {
                self.emit("[");
                self.comma_separated(arena.get_pattern_list(members), Printer::pattern);
                self.rest_member(!members.is_empty(), rest);
                self.emit("]");
            }
            PatternKind::Mapping { fields, rest } => {
                self.emit("{");
                self.comma_separated(arena.get_field_patterns(fields), |p, field| {
                    p.field_pattern(field, ": ");
                });
                self.rest_member(!fields.is_empty(), rest);
                self.emit("}");
            }
            PatternKind::ErrorPattern {
                ty,
                positional,
                named,
                rest,
            } => {
                self.emit("error");
                if let Some(ty) = ty {
                    self.space();
                    self.ty(ty);
                }
                self.emit("(");
                self.comma_separated(arena.get_pattern_list(positional), Printer::pattern);
                if !named.is_empty() {
                    if !positional.is_empty() {
                        self.emit(", ");
                    }
                    self.comma_separated(arena.get_field_patterns(named), |p, field| {
                        p.field_pattern(field, " = ");
                    });
                }
                self.rest_member(!positional.is_empty() || !named.is_empty(), rest);
                self.emit(")");
            }
            PatternKind::Rest(name) => {
                self.emit("...");
                self.name(name);
            }
            PatternKind::Literal(value) | PatternKind::VarRef(value) => self.expr(value),
            PatternKind::ConstRef { module, name } => match module {
                Some(module) => self.qualified(module, name),
                None => self.name(name),
            },
            PatternKind::Var(inner) => {
                self.emit("var ");
                self.pattern(inner);
            }
            PatternKind::Error => self.emit(ERROR_PLACEHOLDER),
        }
    }

    /// A trailing `...rest` member, comma-separated from any before it.
    fn rest_member(&mut self, after_members: bool, rest: Option<PatternId>) {
        if let Some(rest) = rest {
            if after_members {
                self.emit(", ");
            }
            self.pattern(rest);
        }
    }

    /// `name`, or `name: p` / `name = p` with the given separator.
    fn field_pattern(&mut self, field: FieldPattern, separator: &str) {
        self.name(field.name);
        if let Some(pattern) = field.pattern {
            self.emit(separator);
            self.pattern(pattern);
        }
    }
}
