//! Source rendering.
//!
//! One [`Printer`] walks one tree. Expressions, types and patterns render
//! on a single line; statements render one per line with nested blocks
//! indented by [`INDENT_WIDTH`](crate::INDENT_WIDTH).
//!
//! - `expr.rs`: expressions, arguments, constructors, queries
//! - `types.rs`: type descriptors and signatures
//! - `patterns.rs`: binding, match and destructuring patterns
//! - `stmts.rs`: statements and blocks
//! - `parens.rs`: where parentheses are required

mod expr;
mod parens;
mod patterns;
mod stmts;
mod types;

use sable_ir::{AstArena, Name, StringLookup, TokenKind};

use crate::emitter::{Emitter, StringEmitter};

/// Text for a node left behind by error recovery. It does not reparse.
const ERROR_PLACEHOLDER: &str = "<error>";

pub(crate) struct Printer<'a> {
    arena: &'a AstArena,
    interner: &'a dyn StringLookup,
    out: StringEmitter,
    indent: usize,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(arena: &'a AstArena, interner: &'a dyn StringLookup) -> Self {
        Printer {
            arena,
            interner,
            out: StringEmitter::new(),
            indent: 0,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out.output()
    }

    /// Output of a statement list: every line newline-terminated.
    pub(crate) fn finish_lines(mut self) -> String {
        self.out.ensure_trailing_newline();
        self.out.output()
    }

    fn emit(&mut self, text: &str) {
        self.out.emit(text);
    }

    fn space(&mut self) {
        self.out.emit_space();
    }

    /// An identifier. One spelled like a keyword keeps its quote.
    fn name(&mut self, name: Name) {
        let interner = self.interner;
        let text = interner.lookup(name);
        if TokenKind::keyword(text).is_some() {
            self.out.emit("'");
        }
        self.out.emit(text);
    }

    /// `module:name`
    fn qualified(&mut self, module: Name, name: Name) {
        self.name(module);
        self.emit(":");
        self.name(name);
    }

    /// Items separated by `, `.
    fn comma_separated<T: Copy>(&mut self, items: &[T], mut item: impl FnMut(&mut Self, T)) {
        for (index, &value) in items.iter().enumerate() {
            if index > 0 {
                self.emit(", ");
            }
            item(self, value);
        }
    }

    /// Start a new line at the current indentation.
    fn line_break(&mut self) {
        self.out.emit_newline();
        self.out.emit_indent(self.indent);
    }
}
