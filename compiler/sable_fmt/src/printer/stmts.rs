//! Statements and blocks.

use sable_ir::{MatchClause, StmtId, StmtKind, StmtRange};

use super::{Printer, ERROR_PLACEHOLDER};

impl Printer<'_> {
    /// Top-level statements, one per line.
    pub(crate) fn stmt_lines(&mut self, stmts: StmtRange) {
        let arena = self.arena;
        for (index, &stmt) in arena.get_stmt_list(stmts).iter().enumerate() {
            if index > 0 {
                self.line_break();
            }
            self.stmt(stmt);
        }
    }

    /// `{ ... }` with each statement on its own indented line.
    pub(super) fn block(&mut self, stmts: StmtRange) {
        if stmts.is_empty() {
            self.emit("{}");
            return;
        }
        let arena = self.arena;
        self.emit("{");
        self.indent += 1;
        for &stmt in arena.get_stmt_list(stmts) {
            self.line_break();
            self.stmt(stmt);
        }
        self.indent -= 1;
        self.line_break();
        self.emit("}");
    }

    fn stmt(&mut self, id: StmtId) {
        let arena = self.arena;
        match arena.get_stmt(id).kind {
            StmtKind::Block(stmts) => self.block(stmts),
            StmtKind::VarDecl {
                is_final,
                ty,
                pattern,
                init,
            } => {
                if is_final {
                    self.emit("final ");
                }
                self.input_binding(ty, pattern);
                if let Some(init) = init {
                    self.emit(" = ");
                    self.expr(init);
                }
                self.emit(";");
            }
            StmtKind::Assign { target, value } => {
                self.expr(target);
                self.emit(" = ");
                self.expr(value);
                self.emit(";");
            }
            StmtKind::CompoundAssign { op, target, value } => {
                self.expr(target);
                self.space();
                self.emit(op.as_symbol());
                self.emit("= ");
                self.expr(value);
                self.emit(";");
            }
            StmtKind::Destructure { pattern, value } => {
                self.pattern(pattern);
                self.emit(" = ");
                self.expr(value);
                self.emit(";");
            }
            StmtKind::Expr(expr) => {
                self.expr(expr);
                self.emit(";");
            }
            StmtKind::If {
                cond,
                then_block,
                else_branch,
            } => {
                self.emit("if ");
                self.expr(cond);
                self.space();
                self.block(then_block);
                if let Some(else_branch) = else_branch {
                    self.emit(" else ");
                    self.stmt(else_branch);
                }
            }
            StmtKind::While { cond, body } => {
                self.emit("while ");
                self.expr(cond);
                self.space();
                self.block(body);
            }
            StmtKind::Foreach {
                ty,
                pattern,
                source,
                body,
            } => {
                self.emit("foreach ");
                self.input_binding(ty, pattern);
                self.emit(" in ");
                self.expr(source);
                self.space();
                self.block(body);
            }
            StmtKind::Match { scrutinee, clauses } => {
                self.emit("match ");
                self.expr(scrutinee);
                self.emit(" {");
                self.indent += 1;
                for &clause in arena.get_match_clauses(clauses) {
                    self.line_break();
                    self.match_clause(clause);
                }
                self.indent -= 1;
                self.line_break();
                self.emit("}");
            }
            StmtKind::Return(value) => {
                self.emit("return");
                if let Some(value) = value {
                    self.space();
                    self.expr(value);
                }
                self.emit(";");
            }
            StmtKind::Break => self.emit("break;"),
            StmtKind::Continue => self.emit("continue;"),
            StmtKind::Panic(value) => {
                self.emit("panic ");
                self.expr(value);
                self.emit(";");
            }
            StmtKind::Do(body) => {
                self.emit("do ");
                self.block(body);
            }
            StmtKind::QueryAction { clauses, body } => {
                self.query_clauses(clauses);
                self.emit(" do ");
                self.block(body);
            }
            StmtKind::Error => {
                self.emit(ERROR_PLACEHOLDER);
                self.emit(";");
            }
        }
    }

    /// `p1 | p2 if guard => { }`
    fn match_clause(&mut self, clause: MatchClause) {
        let arena = self.arena;
        for (index, &pattern) in arena.get_pattern_list(clause.patterns).iter().enumerate() {
            if index > 0 {
                self.emit(" | ");
            }
            self.pattern(pattern);
        }
        if let Some(guard) = clause.guard {
            self.emit(" if ");
            self.expr(guard);
        }
        self.emit(" => ");
        self.block(clause.body);
    }
}
