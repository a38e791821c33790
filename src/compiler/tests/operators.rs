use super::{assert_compiles, compile, compile_err};
use crate::ast::builders::{
    add, and, between, div, dot, eq, ilike, is_false, is_in, is_not_false, is_not_null,
    is_not_true, is_null, is_true, like, ne, not, not_between, not_ilike, not_in, not_like, or,
    sub, tuple, verbatim,
};
use crate::ast::{Associativity, BinaryOperator, Node, OpKind, UnaryOperator};
use crate::error::SelqError;

#[test]
fn test_not_pushdown() {
    let a = || verbatim("a");
    assert_compiles(vec![
        (not(is_null(a())), "a IS NOT NULL"),
        (not(is_not_null(a())), "a IS NULL"),
        (not(is_true(a())), "a IS NOT TRUE"),
        (not(is_not_true(a())), "a IS TRUE"),
        (not(is_false(a())), "a IS NOT FALSE"),
        (not(is_not_false(a())), "a IS FALSE"),
        (not(not(a())), "a"),
        (not(eq(a(), a())), "a <> a"),
        (not(ne(a(), a())), "a = a"),
        (not(not(is_null(a()))), "a IS NULL"),
        (not(not(is_not_null(a()))), "a IS NOT NULL"),
        (not(not(is_true(a()))), "a IS TRUE"),
        (not(not(is_not_true(a()))), "a IS NOT TRUE"),
        (not(not(is_false(a()))), "a IS FALSE"),
        (not(not(is_not_false(a()))), "a IS NOT FALSE"),
        (not(not(not(a()))), "NOT a"),
        (not(not(eq(a(), a()))), "a = a"),
        (not(not(ne(a(), a()))), "a <> a"),
        (is_null(not(a())), "(NOT a) IS NULL"),
        (is_null(not(not(a()))), "a IS NULL"),
        (not(is_null(not(not(a())))), "a IS NOT NULL"),
        (not(is_null(not(a()))), "(NOT a) IS NOT NULL"),
    ]);
}

#[test]
fn test_binary_parenthesisation() {
    let f = || verbatim("f");
    assert_compiles(vec![
        (dot(f(), f()), "f.f"),
        (sub(f(), f()), "f - f"),
        (sub(f(), sub(f(), f())), "f - (f - f)"),
        (sub(sub(f(), f()), f()), "f - f - f"),
        (div(f(), sub(f(), f())), "f / (f - f)"),
        (sub(div(f(), f()), f()), "f / f - f"),
        (sub(f(), div(f(), f())), "f - f / f"),
        (div(sub(f(), f()), f()), "(f - f) / f"),
        (sub(div(sub(f(), f()), f()), f()), "(f - f) / f - f"),
        (div(sub(f(), f()), sub(f(), f())), "(f - f) / (f - f)"),
        (sub(div(f(), f()), div(f(), f())), "f / f - f / f"),
        (sub(div(f(), f()), sub(f(), f())), "f / f - (f - f)"),
        (div(div(f(), f()), sub(f(), f())), "f / f / (f - f)"),
        (div(f(), div(f(), sub(f(), f()))), "f / (f / (f - f))"),
        (eq(eq(f(), f()), f()), "(f = f) = f"),
        (eq(f(), eq(f(), f())), "f = (f = f)"),
    ]);
}

#[test]
fn test_not_around_operators() {
    let f = || verbatim("f");
    assert_compiles(vec![
        (not(add(f(), f())), "NOT f + f"),
        (add(f(), not(f())), "f + (NOT f)"),
        (add(not(f()), f()), "(NOT f) + f"),
    ]);
}

#[test]
fn test_logical_operators() {
    let f = || verbatim("f");
    assert_compiles(vec![
        (and(f(), f()), "f AND f"),
        (or(f(), f()), "f OR f"),
        (or(and(f(), f()), f()), "f AND f OR f"),
        (and(or(f(), f()), f()), "(f OR f) AND f"),
        (not(and(f(), f())), "NOT (f AND f)"),
    ]);
}

#[test]
fn test_like_family() {
    let f = || verbatim("f");
    assert_compiles(vec![
        (like(f(), f()), "f LIKE f"),
        (not_like(f(), f()), "f NOT LIKE f"),
        (ilike(f(), f()), "f ILIKE f"),
        (not_ilike(f(), f()), "f NOT ILIKE f"),
        (not(like(f(), f())), "f NOT LIKE f"),
        (not(not_like(f(), f())), "f LIKE f"),
        (not(ilike(f(), f())), "f NOT ILIKE f"),
        (not(not_ilike(f(), f())), "f ILIKE f"),
        (like(f(), like(f(), f())), "f LIKE (f LIKE f)"),
        (like(like(f(), f()), f()), "(f LIKE f) LIKE f"),
        (like(not(f()), f()), "(NOT f) LIKE f"),
        (like(f(), not(f())), "f LIKE (NOT f)"),
    ]);
}

#[test]
fn test_in() {
    let f = || verbatim("f");
    assert_compiles(vec![
        (is_in(f(), tuple([f()])), "f IN (f)"),
        (not(is_in(f(), tuple([f()]))), "f NOT IN (f)"),
        (not(not(is_in(f(), tuple([f()])))), "f IN (f)"),
        (not_in(f(), tuple([f()])), "f NOT IN (f)"),
        (not(not_in(f(), tuple([f()]))), "f IN (f)"),
        (not(not(not_in(f(), tuple([f()])))), "f NOT IN (f)"),
        (
            is_in(is_in(f(), tuple([f()])), tuple([f()])),
            "(f IN (f)) IN (f)",
        ),
    ]);
}

#[test]
fn test_between() {
    let f = || verbatim("f");
    assert_compiles(vec![
        (between(f(), f(), f()), "f BETWEEN f AND f"),
        (not(between(f(), f(), f())), "f NOT BETWEEN f AND f"),
        (not(not(between(f(), f(), f()))), "f BETWEEN f AND f"),
        (not_between(f(), f(), f()), "f NOT BETWEEN f AND f"),
        (not(not_between(f(), f(), f())), "f BETWEEN f AND f"),
        (
            not(not(not_between(f(), f(), f()))),
            "f NOT BETWEEN f AND f",
        ),
        (
            between(between(f(), f(), f()), f(), f()),
            "(f BETWEEN f AND f) BETWEEN f AND f",
        ),
        (
            between(f(), between(f(), f(), f()), f()),
            "f BETWEEN (f BETWEEN f AND f) AND f",
        ),
        (
            between(f(), f(), between(f(), f(), f())),
            "f BETWEEN f AND (f BETWEEN f AND f)",
        ),
    ]);
}

#[test]
fn test_transform_is_idempotent() {
    let f = || verbatim("f");
    let trees = vec![
        not(is_null(f())),
        not(not(f())),
        not(and(f(), f())),
        and(not(eq(f(), f())), not(not(is_in(f(), tuple([f()]))))),
        between(f(), not(between(f(), f(), f())), f()),
    ];
    for tree in trees {
        let once = tree.transform();
        assert_eq!(once.clone().transform(), once);
    }
}

#[test]
fn test_negate() {
    let f = || verbatim("f");
    assert_compiles(vec![
        (eq(f(), f()).negate(), "f <> f"),
        (is_null(f()).negate(), "f IS NOT NULL"),
        (not(f()).negate(), "f"),
        (and(f(), f()).negate(), "NOT (f AND f)"),
        (verbatim("f").negate(), "NOT f"),
    ]);
}

#[test]
fn test_negate_preserves_overrides() {
    let op = Node::Unary(Box::new(UnaryOperator {
        kind: OpKind::IsNull,
        symbol: "IS NULL".to_string(),
        negated: Some((OpKind::IsNotNull, "IS NOT NULL".to_string())),
        expr: Box::new(verbatim("f")),
        precedence: Some(42),
        associativity: Some(Associativity::Left),
    }));
    let negated = op.negate();
    match &negated {
        Node::Unary(inner) => {
            assert_eq!(inner.kind, OpKind::IsNotNull);
            assert_eq!(inner.precedence, Some(42));
            assert_eq!(inner.associativity, Some(Associativity::Left));
        }
        other => panic!("expected a unary operator, got {other:?}"),
    }
    assert_eq!(compile(negated), "f IS NOT NULL");
}

#[test]
fn test_missing_dialect_entries() {
    // A dot without its instance overrides has no dialect rows to fall
    // back on.
    let bare_dot = |associativity| {
        Node::Binary(Box::new(BinaryOperator {
            kind: OpKind::Dot,
            symbol: ".".to_string(),
            negated: None,
            left: Box::new(verbatim("f")),
            right: Box::new(verbatim("f")),
            precedence: None,
            associativity,
            suppress_space: true,
        }))
    };
    assert_eq!(
        compile_err(bare_dot(None)),
        SelqError::NoAssociativity(OpKind::Dot)
    );
    assert_eq!(
        compile_err(bare_dot(Some(Associativity::Left))),
        SelqError::NoPrecedence(OpKind::Dot)
    );
}

#[test]
fn test_non_associative_unary_is_rejected() {
    let op = Node::Unary(Box::new(UnaryOperator {
        kind: OpKind::IsNull,
        symbol: "IS NULL".to_string(),
        negated: None,
        expr: Box::new(verbatim("f")),
        precedence: None,
        associativity: Some(Associativity::NonAssociative),
    }));
    assert_eq!(compile_err(op), SelqError::NonAssociative(OpKind::IsNull));
}
