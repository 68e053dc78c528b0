//! Expression operator table.
//!
//! One entry per token tag. The climbing loop reads precedence,
//! associativity and the node to build from here; only the tokens that
//! need neighbors to classify (`>` runs, `!is`) are special-cased in
//! [`Parser::peek_infix`].

use sable_ir::{BinaryOp, TokenKind};

use crate::cursor::GreaterRun;
use crate::Parser;

/// Expression precedence levels, lowest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Prec {
    Lowest = 0,
    /// `c ? a : b`
    Ternary,
    /// `a ?: b`
    Elvis,
    /// `||`
    Or,
    /// `&&`
    And,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `=== !==`
    RefEquality,
    /// `== !=`
    Equality,
    /// `is`, `!is`
    TypeTest,
    /// `< > <= >=`
    Relational,
    /// `... ..<`
    Range,
    /// `<< >> >>>`
    Shift,
    /// `+ -`
    Additive,
    /// `* / %`
    Multiplicative,
    /// Prefix operators, casts and `check`.
    Unary,
    /// Calls, member access, indexing.
    Postfix,
}

impl Prec {
    #[inline]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// The level a left operand must exceed to chain at this level.
    pub const fn next(self) -> Prec {
        match self {
            Prec::Lowest => Prec::Ternary,
            Prec::Ternary => Prec::Elvis,
            Prec::Elvis => Prec::Or,
            Prec::Or => Prec::And,
            Prec::And => Prec::BitOr,
            Prec::BitOr => Prec::BitXor,
            Prec::BitXor => Prec::BitAnd,
            Prec::BitAnd => Prec::RefEquality,
            Prec::RefEquality => Prec::Equality,
            Prec::Equality => Prec::TypeTest,
            Prec::TypeTest => Prec::Relational,
            Prec::Relational => Prec::Range,
            Prec::Range => Prec::Shift,
            Prec::Shift => Prec::Additive,
            Prec::Additive => Prec::Multiplicative,
            Prec::Multiplicative => Prec::Unary,
            Prec::Unary | Prec::Postfix => Prec::Postfix,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Assoc {
    Left,
    Right,
    /// A second operator at the same level is an error.
    NonAssoc,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    UnaryPrefix,
    /// One operand plus a non-expression suffix (`is T`, `?`).
    UnaryPostfix,
    Binary,
    /// `c ? a : b`
    Ternary,
    /// A repeatable suffix (`[]` dimensions).
    VariadicPostfix,
}

/// One operator table entry: binding strength, associativity, arity and
/// the node the operator folds into.
///
/// `P` is the precedence scale of the grammar the table belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OperInfo<N, P = Prec> {
    pub prec: P,
    pub assoc: Assoc,
    pub arity: Arity,
    pub node: N,
}

/// Nodes an infix expression operator folds into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum InfixNode {
    Binary(BinaryOp),
    TypeTest { negated: bool },
    Elvis,
    Ternary,
}

const fn binary(prec: Prec, assoc: Assoc, op: BinaryOp) -> Option<OperInfo<InfixNode>> {
    Some(OperInfo {
        prec,
        assoc,
        arity: Arity::Binary,
        node: InfixNode::Binary(op),
    })
}

const fn build_table() -> [Option<OperInfo<InfixNode>>; TokenKind::COUNT] {
    use Assoc::{Left, NonAssoc, Right};

    let mut table = [None; TokenKind::COUNT];
    table[TokenKind::Star as usize] = binary(Prec::Multiplicative, Left, BinaryOp::Mul);
    table[TokenKind::Slash as usize] = binary(Prec::Multiplicative, Left, BinaryOp::Div);
    table[TokenKind::Percent as usize] = binary(Prec::Multiplicative, Left, BinaryOp::Rem);
    table[TokenKind::Plus as usize] = binary(Prec::Additive, Left, BinaryOp::Add);
    table[TokenKind::Minus as usize] = binary(Prec::Additive, Left, BinaryOp::Sub);
    table[TokenKind::Shl as usize] = binary(Prec::Shift, Left, BinaryOp::Shl);
    table[TokenKind::Ellipsis as usize] = binary(Prec::Range, NonAssoc, BinaryOp::RangeInclusive);
    table[TokenKind::DotDotLt as usize] = binary(Prec::Range, NonAssoc, BinaryOp::RangeExclusive);
    table[TokenKind::Lt as usize] = binary(Prec::Relational, NonAssoc, BinaryOp::Lt);
    table[TokenKind::LtEq as usize] = binary(Prec::Relational, NonAssoc, BinaryOp::LtEq);
    table[TokenKind::KwIs as usize] = Some(OperInfo {
        prec: Prec::TypeTest,
        assoc: Left,
        arity: Arity::UnaryPostfix,
        node: InfixNode::TypeTest { negated: false },
    });
    table[TokenKind::EqEq as usize] = binary(Prec::Equality, Left, BinaryOp::Eq);
    table[TokenKind::NotEq as usize] = binary(Prec::Equality, Left, BinaryOp::NotEq);
    table[TokenKind::EqEqEq as usize] = binary(Prec::RefEquality, Left, BinaryOp::RefEq);
    table[TokenKind::NotEqEq as usize] = binary(Prec::RefEquality, Left, BinaryOp::RefNotEq);
    table[TokenKind::Amp as usize] = binary(Prec::BitAnd, Left, BinaryOp::BitAnd);
    table[TokenKind::Caret as usize] = binary(Prec::BitXor, Left, BinaryOp::BitXor);
    table[TokenKind::Pipe as usize] = binary(Prec::BitOr, Left, BinaryOp::BitOr);
    table[TokenKind::AmpAmp as usize] = binary(Prec::And, Left, BinaryOp::And);
    table[TokenKind::PipePipe as usize] = binary(Prec::Or, Left, BinaryOp::Or);
    table[TokenKind::Elvis as usize] = Some(OperInfo {
        prec: Prec::Elvis,
        assoc: Right,
        arity: Arity::Binary,
        node: InfixNode::Elvis,
    });
    table[TokenKind::Question as usize] = Some(OperInfo {
        prec: Prec::Ternary,
        assoc: Right,
        arity: Arity::Ternary,
        node: InfixNode::Ternary,
    });
    table
}

/// Infix and postfix-with-operand expression operators, indexed by tag.
pub(crate) const EXPR_OPERATORS: [Option<OperInfo<InfixNode>>; TokenKind::COUNT] = build_table();

impl Parser<'_> {
    /// Classify the operator at the cursor and the number of tokens it spans.
    ///
    /// `>` runs compose into `>`, `>=`, `>>` and `>>>`; a run ending in `=`
    /// as a shift (`>>=`) is a compound assignment and stops the climb.
    pub(crate) fn peek_infix(&self) -> Option<(OperInfo<InfixNode>, usize)> {
        let kind = self.current_kind();
        match kind {
            TokenKind::Gt => {
                let run = self.cursor.greater_run()?;
                let (prec, assoc, op) = match run {
                    GreaterRun::Greater => (Prec::Relational, Assoc::NonAssoc, BinaryOp::Gt),
                    GreaterRun::GreaterEq => (Prec::Relational, Assoc::NonAssoc, BinaryOp::GtEq),
                    GreaterRun::Shr => (Prec::Shift, Assoc::Left, BinaryOp::Shr),
                    GreaterRun::UnsignedShr => (Prec::Shift, Assoc::Left, BinaryOp::UnsignedShr),
                    GreaterRun::ShrAssign | GreaterRun::UnsignedShrAssign => return None,
                };
                Some((binary(prec, assoc, op)?, run.token_count()))
            }
            TokenKind::Bang if self.cursor.peek_next_kind() == TokenKind::KwIs => Some((
                OperInfo {
                    prec: Prec::TypeTest,
                    assoc: Assoc::Left,
                    arity: Arity::UnaryPostfix,
                    node: InfixNode::TypeTest { negated: true },
                },
                2,
            )),
            _ => EXPR_OPERATORS[kind as usize].map(|info| (info, 1)),
        }
    }
}
