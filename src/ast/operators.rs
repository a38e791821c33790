//! Operator payloads and the operator capability surface.

use crate::ast::Node;
use serde::{Deserialize, Serialize};

/// Operator kind, used to look up dialect precedence and associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Dot,
    Mul,
    Div,
    /// Modulo (%)
    Rem,
    Add,
    Sub,
    IsNull,
    IsNotNull,
    IsTrue,
    IsNotTrue,
    IsFalse,
    IsNotFalse,
    In,
    NotIn,
    Between,
    NotBetween,
    Like,
    NotLike,
    ILike,
    NotILike,
    Lt,
    Lte,
    Gt,
    Gte,
    Eq,
    NotEq,
    Not,
    And,
    Or,
}

/// How equal-precedence operators nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Associativity {
    NonAssociative,
    Left,
    Right,
}

/// The `.` joiner binds tighter than any dialect table entry.
pub(crate) const DOT_PRECEDENCE: u32 = 100;

/// A prefix or postfix operator such as `NOT` or `IS NULL`.
///
/// `negated` is the operator's negated twin (kind plus symbol); operators
/// that carry one are rewritten instead of being wrapped in `NOT`.
/// `precedence` and `associativity` override the dialect lookup when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOperator {
    pub kind: OpKind,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negated: Option<(OpKind, String)>,
    pub expr: Box<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precedence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associativity: Option<Associativity>,
}

/// An infix operator. `suppress_space` drops the spaces around the symbol
/// (used by `.`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOperator {
    pub kind: OpKind,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negated: Option<(OpKind, String)>,
    pub left: Box<Node>,
    pub right: Box<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precedence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associativity: Option<Associativity>,
    #[serde(default, skip_serializing_if = "crate::ast::is_false")]
    pub suppress_space: bool,
}

/// A two-symbol operator over three operands, e.g.
/// `a BETWEEN low AND high`. The negated twin carries both symbols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TernaryOperator {
    pub kind: OpKind,
    pub symbols: (String, String),
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negated: Option<(OpKind, String, String)>,
    pub first: Box<Node>,
    pub second: Box<Node>,
    pub third: Box<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precedence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associativity: Option<Associativity>,
}

/// What the paren-insertion rules need to know about an operator node:
/// its kind plus any instance-level overrides.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OperatorInfo {
    pub kind: OpKind,
    pub precedence: Option<u32>,
    pub associativity: Option<Associativity>,
}

impl UnaryOperator {
    pub(crate) fn info(&self) -> OperatorInfo {
        OperatorInfo {
            kind: self.kind,
            precedence: self.precedence,
            associativity: self.associativity,
        }
    }
}

impl BinaryOperator {
    pub(crate) fn info(&self) -> OperatorInfo {
        OperatorInfo {
            kind: self.kind,
            precedence: self.precedence,
            associativity: self.associativity,
        }
    }
}

impl TernaryOperator {
    pub(crate) fn info(&self) -> OperatorInfo {
        OperatorInfo {
            kind: self.kind,
            precedence: self.precedence,
            associativity: self.associativity,
        }
    }
}

impl Node {
    /// Operator capability lookup. `None` for every non-operator node.
    pub(crate) fn operator_info(&self) -> Option<OperatorInfo> {
        match self {
            Node::Unary(op) => Some(op.info()),
            Node::Binary(op) => Some(op.info()),
            Node::Ternary(op) => Some(op.info()),
            Node::Not(_) => Some(OperatorInfo {
                kind: OpKind::Not,
                precedence: None,
                associativity: None,
            }),
            _ => None,
        }
    }

    /// Whether `negate` produces a rewritten operator rather than a
    /// wrapping `NOT`.
    pub fn negatable(&self) -> bool {
        match self {
            Node::Not(_) => true,
            Node::Unary(op) => op.negated.is_some(),
            Node::Binary(op) => op.negated.is_some(),
            Node::Ternary(op) => op.negated.is_some(),
            _ => false,
        }
    }

    /// The logical negation of this expression.
    ///
    /// Operators with a negated twin swap into it (`=` becomes `<>`,
    /// `IS NULL` becomes `IS NOT NULL`), `NOT x` unwraps to `x`, and
    /// everything else is wrapped in a `NOT`. Always builds a fresh node;
    /// instance overrides are preserved.
    pub fn negate(self) -> Node {
        match self {
            Node::Not(inner) => *inner,
            Node::Unary(op) => {
                let op = *op;
                match op.negated {
                    Some((kind, symbol)) => Node::Unary(Box::new(UnaryOperator {
                        negated: Some((op.kind, op.symbol)),
                        kind,
                        symbol,
                        expr: op.expr,
                        precedence: op.precedence,
                        associativity: op.associativity,
                    })),
                    None => Node::Not(Box::new(Node::Unary(Box::new(op)))),
                }
            }
            Node::Binary(op) => {
                let op = *op;
                match op.negated {
                    Some((kind, symbol)) => Node::Binary(Box::new(BinaryOperator {
                        negated: Some((op.kind, op.symbol)),
                        kind,
                        symbol,
                        left: op.left,
                        right: op.right,
                        precedence: op.precedence,
                        associativity: op.associativity,
                        suppress_space: op.suppress_space,
                    })),
                    None => Node::Not(Box::new(Node::Binary(Box::new(op)))),
                }
            }
            Node::Ternary(op) => {
                let op = *op;
                match op.negated {
                    Some((kind, first_symbol, second_symbol)) => {
                        Node::Ternary(Box::new(TernaryOperator {
                            negated: Some((op.kind, op.symbols.0, op.symbols.1)),
                            kind,
                            symbols: (first_symbol, second_symbol),
                            first: op.first,
                            second: op.second,
                            third: op.third,
                            precedence: op.precedence,
                            associativity: op.associativity,
                        }))
                    }
                    None => Node::Not(Box::new(Node::Ternary(Box::new(op)))),
                }
            }
            other => Node::Not(Box::new(other)),
        }
    }
}
