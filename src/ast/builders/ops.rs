//! Operator constructors.

use crate::ast::operators::DOT_PRECEDENCE;
use crate::ast::{
    Associativity, BinaryOperator, Node, OpKind, TernaryOperator, UnaryOperator,
};

fn unary_op(kind: OpKind, symbol: &str, negated: Option<(OpKind, &str)>, expr: Node) -> Node {
    Node::Unary(Box::new(UnaryOperator {
        kind,
        symbol: symbol.to_string(),
        negated: negated.map(|(kind, symbol)| (kind, symbol.to_string())),
        expr: Box::new(expr),
        precedence: None,
        associativity: None,
    }))
}

fn binary_op(
    kind: OpKind,
    symbol: &str,
    negated: Option<(OpKind, &str)>,
    left: Node,
    right: Node,
) -> Node {
    Node::Binary(Box::new(BinaryOperator {
        kind,
        symbol: symbol.to_string(),
        negated: negated.map(|(kind, symbol)| (kind, symbol.to_string())),
        left: Box::new(left),
        right: Box::new(right),
        precedence: None,
        associativity: None,
        suppress_space: false,
    }))
}

fn ternary_op(
    kind: OpKind,
    symbols: (&str, &str),
    negated: (OpKind, &str, &str),
    first: Node,
    second: Node,
    third: Node,
) -> Node {
    Node::Ternary(Box::new(TernaryOperator {
        kind,
        symbols: (symbols.0.to_string(), symbols.1.to_string()),
        negated: Some((negated.0, negated.1.to_string(), negated.2.to_string())),
        first: Box::new(first),
        second: Box::new(second),
        third: Box::new(third),
        precedence: None,
        associativity: None,
    }))
}

/// Logical negation. Pushed into the child during compilation whenever
/// the child has a negated twin.
pub fn not(expr: impl Into<Node>) -> Node {
    Node::Not(Box::new(expr.into()))
}

pub fn is_null(expr: impl Into<Node>) -> Node {
    unary_op(
        OpKind::IsNull,
        "IS NULL",
        Some((OpKind::IsNotNull, "IS NOT NULL")),
        expr.into(),
    )
}

pub fn is_not_null(expr: impl Into<Node>) -> Node {
    unary_op(
        OpKind::IsNotNull,
        "IS NOT NULL",
        Some((OpKind::IsNull, "IS NULL")),
        expr.into(),
    )
}

pub fn is_true(expr: impl Into<Node>) -> Node {
    unary_op(
        OpKind::IsTrue,
        "IS TRUE",
        Some((OpKind::IsNotTrue, "IS NOT TRUE")),
        expr.into(),
    )
}

pub fn is_not_true(expr: impl Into<Node>) -> Node {
    unary_op(
        OpKind::IsNotTrue,
        "IS NOT TRUE",
        Some((OpKind::IsTrue, "IS TRUE")),
        expr.into(),
    )
}

pub fn is_false(expr: impl Into<Node>) -> Node {
    unary_op(
        OpKind::IsFalse,
        "IS FALSE",
        Some((OpKind::IsNotFalse, "IS NOT FALSE")),
        expr.into(),
    )
}

pub fn is_not_false(expr: impl Into<Node>) -> Node {
    unary_op(
        OpKind::IsNotFalse,
        "IS NOT FALSE",
        Some((OpKind::IsFalse, "IS FALSE")),
        expr.into(),
    )
}

/// Identifier joiner rendered without surrounding spaces. Carries its own
/// precedence and associativity, so no dialect table entry is consulted.
pub fn dot(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    Node::Binary(Box::new(BinaryOperator {
        kind: OpKind::Dot,
        symbol: ".".to_string(),
        negated: None,
        left: Box::new(left.into()),
        right: Box::new(right.into()),
        precedence: Some(DOT_PRECEDENCE),
        associativity: Some(Associativity::Left),
        suppress_space: true,
    }))
}

pub fn and(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::And, "AND", None, left.into(), right.into())
}

pub fn or(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Or, "OR", None, left.into(), right.into())
}

pub fn add(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Add, "+", None, left.into(), right.into())
}

pub fn sub(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Sub, "-", None, left.into(), right.into())
}

pub fn mul(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Mul, "*", None, left.into(), right.into())
}

pub fn div(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Div, "/", None, left.into(), right.into())
}

/// Modulo (%).
pub fn rem(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Rem, "%", None, left.into(), right.into())
}

pub fn lt(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Lt, "<", None, left.into(), right.into())
}

pub fn lte(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Lte, "<=", None, left.into(), right.into())
}

pub fn gt(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Gt, ">", None, left.into(), right.into())
}

pub fn gte(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(OpKind::Gte, ">=", None, left.into(), right.into())
}

pub fn eq(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(
        OpKind::Eq,
        "=",
        Some((OpKind::NotEq, "<>")),
        left.into(),
        right.into(),
    )
}

pub fn ne(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(
        OpKind::NotEq,
        "<>",
        Some((OpKind::Eq, "=")),
        left.into(),
        right.into(),
    )
}

pub fn is_in(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(
        OpKind::In,
        "IN",
        Some((OpKind::NotIn, "NOT IN")),
        left.into(),
        right.into(),
    )
}

pub fn not_in(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(
        OpKind::NotIn,
        "NOT IN",
        Some((OpKind::In, "IN")),
        left.into(),
        right.into(),
    )
}

pub fn like(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(
        OpKind::Like,
        "LIKE",
        Some((OpKind::NotLike, "NOT LIKE")),
        left.into(),
        right.into(),
    )
}

pub fn not_like(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(
        OpKind::NotLike,
        "NOT LIKE",
        Some((OpKind::Like, "LIKE")),
        left.into(),
        right.into(),
    )
}

pub fn ilike(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(
        OpKind::ILike,
        "ILIKE",
        Some((OpKind::NotILike, "NOT ILIKE")),
        left.into(),
        right.into(),
    )
}

pub fn not_ilike(left: impl Into<Node>, right: impl Into<Node>) -> Node {
    binary_op(
        OpKind::NotILike,
        "NOT ILIKE",
        Some((OpKind::ILike, "ILIKE")),
        left.into(),
        right.into(),
    )
}

pub fn between(expr: impl Into<Node>, low: impl Into<Node>, high: impl Into<Node>) -> Node {
    ternary_op(
        OpKind::Between,
        ("BETWEEN", "AND"),
        (OpKind::NotBetween, "NOT BETWEEN", "AND"),
        expr.into(),
        low.into(),
        high.into(),
    )
}

pub fn not_between(expr: impl Into<Node>, low: impl Into<Node>, high: impl Into<Node>) -> Node {
    ternary_op(
        OpKind::NotBetween,
        ("NOT BETWEEN", "AND"),
        (OpKind::Between, "BETWEEN", "AND"),
        expr.into(),
        low.into(),
        high.into(),
    )
}
