//! Append-only node storage.
//!
//! One arena per parse job. Nodes are pushed and never edited; children are
//! referenced by id, and variable-length child lists live in flat side
//! tables addressed by `(start, len)` ranges.
//!
//! The only way to remove nodes is [`AstArena::truncate`], which rolls the
//! arena back to an earlier [`ArenaMark`]. The parser uses it to discard the
//! nodes built by an abandoned speculative alternative; nothing allocated
//! before the mark is touched. [`AstArena::split_off`] does the same but
//! hands the removed nodes back as an [`ArenaTail`], which
//! [`AstArena::append`] can restore at the same mark.

use crate::ast::{
    Arg, ArgRange, ArrayDim, ArrayDimRange, Expr, ExprRange, FieldPattern, FieldPatternRange,
    LetDecl, LetDeclRange, MappingField, MappingFieldRange, MatchClause, MatchClauseRange,
    NameRange, ObjectMember, ObjectMemberRange, OrderKey, OrderKeyRange, Param, ParamRange,
    Pattern, PatternRange, QueryClause, QueryClauseRange, RecordField, RecordFieldRange, Stmt,
    StmtRange, TypeNode, TypeRange,
};
use crate::{ExprId, Name, PatternId, StmtId, TypeId};

/// Convert a table length to a node index.
///
/// # Panics
/// Panics if a single parse job allocates more than `u32::MAX` entries.
#[inline]
fn index_of(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("arena table exceeded u32::MAX entries"))
}

/// Convert a side-table span to a range start and length.
///
/// A list can never outgrow its table, so the `index_of` bound covers both.
#[inline]
fn range_of(start: usize, end: usize) -> (u32, u32) {
    (index_of(start), index_of(end - start))
}

macro_rules! define_arena {
    (
        nodes { $($node_field:ident: $node_ty:ty => $id:ident, $alloc_node:ident, $get_node:ident;)* }
        lists { $($list_field:ident: $item_ty:ty => $range:ident, $alloc_list:ident, $get_list:ident;)* }
    ) => {
        /// Owner of every node produced by one parse job.
        #[derive(Clone, Default, PartialEq, Eq, Debug)]
        pub struct AstArena {
            $($node_field: Vec<$node_ty>,)*
            $($list_field: Vec<$item_ty>,)*
        }

        /// Table lengths at a point in time; see [`AstArena::truncate`].
        #[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
        pub struct ArenaMark {
            $($node_field: u32,)*
            $($list_field: u32,)*
        }

        /// Nodes removed by [`AstArena::split_off`], with the mark they
        /// were cut at.
        #[derive(Clone, Default, PartialEq, Eq, Debug)]
        pub struct ArenaTail {
            mark: ArenaMark,
            $($node_field: Vec<$node_ty>,)*
            $($list_field: Vec<$item_ty>,)*
        }

        impl AstArena {
            /// Current table lengths.
            pub fn mark(&self) -> ArenaMark {
                ArenaMark {
                    $($node_field: index_of(self.$node_field.len()),)*
                    $($list_field: index_of(self.$list_field.len()),)*
                }
            }

            /// Drop everything allocated since `mark`.
            pub fn truncate(&mut self, mark: ArenaMark) {
                $(self.$node_field.truncate(mark.$node_field as usize);)*
                $(self.$list_field.truncate(mark.$list_field as usize);)*
            }

            /// Remove everything allocated since `mark` and return it.
            pub fn split_off(&mut self, mark: ArenaMark) -> ArenaTail {
                ArenaTail {
                    mark,
                    $($node_field: self.$node_field.split_off(mark.$node_field as usize),)*
                    $($list_field: self.$list_field.split_off(mark.$list_field as usize),)*
                }
            }

            /// Put back a tail taken by [`AstArena::split_off`].
            ///
            /// The arena is first rolled back to the tail's mark, so ids
            /// handed out before the split are valid again.
            pub fn append(&mut self, tail: ArenaTail) {
                self.truncate(tail.mark);
                let ArenaTail { mark: _, $($node_field,)* $($list_field,)* } = tail;
                $(self.$node_field.extend($node_field);)*
                $(self.$list_field.extend($list_field);)*
            }

            $(
                #[inline]
                pub fn $alloc_node(&mut self, node: $node_ty) -> $id {
                    let id = $id::new(index_of(self.$node_field.len()));
                    self.$node_field.push(node);
                    id
                }

                /// # Panics
                /// Panics if the id does not belong to this arena.
                #[inline]
                #[track_caller]
                pub fn $get_node(&self, id: $id) -> &$node_ty {
                    &self.$node_field[id.index()]
                }
            )*

            $(
                pub fn $alloc_list(&mut self, items: impl IntoIterator<Item = $item_ty>) -> $range {
                    let start = self.$list_field.len();
                    self.$list_field.extend(items);
                    let (start, len) = range_of(start, self.$list_field.len());
                    $range::new(start, len)
                }

                /// # Panics
                /// Panics if the range does not belong to this arena.
                #[inline]
                #[track_caller]
                pub fn $get_list(&self, range: $range) -> &[$item_ty] {
                    &self.$list_field[range.to_range()]
                }
            )*
        }
    };
}

define_arena! {
    nodes {
        exprs: Expr => ExprId, alloc_expr, get_expr;
        types: TypeNode => TypeId, alloc_type, get_type;
        patterns: Pattern => PatternId, alloc_pattern, get_pattern;
        stmts: Stmt => StmtId, alloc_stmt, get_stmt;
    }
    lists {
        expr_lists: ExprId => ExprRange, alloc_expr_list, get_expr_list;
        type_lists: TypeId => TypeRange, alloc_type_list, get_type_list;
        pattern_lists: PatternId => PatternRange, alloc_pattern_list, get_pattern_list;
        stmt_lists: StmtId => StmtRange, alloc_stmt_list, get_stmt_list;
        names: Name => NameRange, alloc_names, get_names;
        args: Arg => ArgRange, alloc_args, get_args;
        mapping_fields: MappingField => MappingFieldRange, alloc_mapping_fields, get_mapping_fields;
        params: Param => ParamRange, alloc_params, get_params;
        record_fields: RecordField => RecordFieldRange, alloc_record_fields, get_record_fields;
        object_members: ObjectMember => ObjectMemberRange, alloc_object_members, get_object_members;
        array_dims: ArrayDim => ArrayDimRange, alloc_array_dims, get_array_dims;
        field_patterns: FieldPattern => FieldPatternRange, alloc_field_patterns, get_field_patterns;
        let_decls: LetDecl => LetDeclRange, alloc_let_decls, get_let_decls;
        query_clauses: QueryClause => QueryClauseRange, alloc_query_clauses, get_query_clauses;
        order_keys: OrderKey => OrderKeyRange, alloc_order_keys, get_order_keys;
        match_clauses: MatchClause => MatchClauseRange, alloc_match_clauses, get_match_clauses;
    }
}

impl AstArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total node count across expressions, types, patterns and statements.
    pub fn node_count(&self) -> usize {
        self.exprs.len() + self.types.len() + self.patterns.len() + self.stmts.len()
    }
}

#[cfg(test)]
mod tests;
