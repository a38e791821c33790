//! AST model: nodes, operators, statement payloads, and builders.

pub mod builders;
mod node;
mod operators;
mod stmt;

pub use node::{Expr, FuncExpr, Labeled, Node};
pub use operators::{Associativity, BinaryOperator, OpKind, TernaryOperator, UnaryOperator};
pub use stmt::{
    FromItem, JoinClause, JoinKind, LabeledSelect, Nulls, OrderByItem, SelectStmt, SortOrder,
    TableRef,
};

pub(crate) use operators::OperatorInfo;

/// Helper for `skip_serializing_if` on bool fields.
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
