//! Compiler tests, split by concern.

mod exprs;
mod operators;

use crate::ast::Node;
use crate::compiler::Compiler;
use crate::error::SelqError;

fn compile(node: impl Into<Node>) -> String {
    Compiler::postgres()
        .compile(node)
        .expect("compilation should succeed")
}

fn compile_err(node: impl Into<Node>) -> SelqError {
    Compiler::postgres()
        .compile(node)
        .expect_err("compilation should fail")
}

fn assert_compiles(cases: Vec<(Node, &str)>) {
    for (node, expected) in cases {
        assert_eq!(compile(node), expected);
    }
}
