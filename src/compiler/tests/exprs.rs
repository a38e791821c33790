use super::{assert_compiles, compile, compile_err};
use crate::ast::builders::{
    case_when, col, column, func, func0, label, placeholder_tuple, quote, schema_table, table,
    tuple, verbatim,
};
use crate::ast::Node;
use crate::compiler::Compiler;
use crate::error::SelqError;

#[test]
fn test_column() {
    assert_compiles(vec![
        (column("t", "a"), r#""t"."a""#),
        (col("a"), r#""a""#),
    ]);
}

#[test]
fn test_labeled() {
    assert_compiles(vec![
        (label(column("t", "a"), "t_a").into(), r#""t"."a" "t_a""#),
        (label(verbatim("1"), "f").into(), r#"1 "f""#),
    ]);
}

#[test]
fn test_table() {
    assert_compiles(vec![
        (schema_table("a", "b"), r#""a"."b""#),
        (table("b"), r#""b""#),
    ]);
}

#[test]
fn test_quoted() {
    assert_compiles(vec![
        (quote("a"), r#""a""#),
        (quote("1a"), r#""1a""#),
        (quote("日本語"), r#"U&"\+0065E5\+00672C\+008A9E""#),
    ]);
}

#[test]
fn test_bare_string_is_quoted() {
    let node: Node = "a".into();
    assert_eq!(compile(node), r#""a""#);
}

#[test]
fn test_tuple() {
    let f = || verbatim("f");
    assert_compiles(vec![
        (tuple([f()]), "(f)"),
        (tuple([f(), f()]), "(f,f)"),
    ]);
}

#[test]
fn test_empty_tuple_is_rejected() {
    assert_eq!(compile_err(Node::Tuple(vec![])), SelqError::ZeroLength);
}

#[test]
fn test_empty_list_emits_nothing() {
    assert_eq!(compile(Node::List(vec![])), "");
}

#[test]
fn test_placeholder_tuple() {
    let (names, node) = placeholder_tuple("a", 2).unwrap();
    assert_eq!(names, vec!["a1".to_string(), "a2".to_string()]);

    let mut compiler = Compiler::postgres();
    assert_eq!(compiler.compile(node).unwrap(), "($1,$2)");
}

#[test]
fn test_placeholder_tuple_zero_length() {
    assert_eq!(
        placeholder_tuple("x", 0).unwrap_err(),
        SelqError::ZeroLength
    );
}

#[test]
fn test_func() {
    let f = || verbatim("f");
    assert_compiles(vec![
        (func("foobar").build(), "foobar()"),
        (func("foobar").arg(f()).build(), "foobar(f)"),
        (func("foobar").arg(f()).arg(f()).build(), "foobar(f,f)"),
        (func("a.b").args([f(), f()]).build(), "a.b(f,f)"),
        (func0("foobar"), "foobar"),
    ]);
}

#[test]
#[should_panic(expected = "illegal function name: 1")]
fn test_func_name_starting_with_digit_panics() {
    func("1");
}

#[test]
#[should_panic(expected = "illegal function name: a-")]
fn test_func_name_with_illegal_character_panics() {
    func("a-");
}

#[test]
fn test_case() {
    let v = verbatim;
    assert_compiles(vec![
        (
            case_when(v("a"), v("b")).into(),
            "CASE WHEN a THEN b END",
        ),
        (
            case_when(v("a"), v("b")).when(v("c"), v("d")).into(),
            "CASE WHEN a THEN b WHEN c THEN d END",
        ),
        (
            case_when(v("a"), v("b"))
                .when(v("c"), v("d"))
                .otherwise(v("e")),
            "CASE WHEN a THEN b WHEN c THEN d ELSE e END",
        ),
    ]);
}

#[test]
fn test_empty_case_is_rejected() {
    let node = Node::Case {
        branches: vec![],
        else_expr: None,
    };
    assert_eq!(compile_err(node), SelqError::ZeroLength);
}
