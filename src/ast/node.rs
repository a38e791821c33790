//! The AST node model.

use crate::ast::{
    BinaryOperator, FromItem, JoinClause, LabeledSelect, OrderByItem, SelectStmt, TernaryOperator,
    UnaryOperator,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FUNC_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_.]*$").unwrap());

/// Any AST element: expression, clause, or statement.
///
/// Clause and statement variants render their own keywords, so any node
/// can be handed to [`crate::Compiler::compile`] on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Raw SQL emitted as-is. Escape hatch; values belong in placeholders.
    Verbatim(String),
    /// A single identifier segment, quoted by the dialect.
    Quoted(String),
    /// A column, optionally qualified by a table label.
    Column {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        table: Option<String>,
        name: String,
    },
    /// A table, optionally qualified by a schema.
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<String>,
        name: String,
    },
    /// `expr "label"`.
    Labeled(Box<Labeled>),
    /// Forced parentheses around the inner node.
    Paren(Box<Node>),
    /// Comma-separated sequence, no delimiters. Empty emits nothing.
    List(Vec<Node>),
    /// Parenthesised comma-separated sequence. Must be non-empty.
    Tuple(Vec<Node>),
    Func(FuncExpr),
    /// A named bind parameter, resolved to a position during compilation.
    Placeholder(String),
    /// `CASE WHEN ... THEN ... [ELSE ...] END`. Must have a branch.
    Case {
        branches: Vec<(Node, Node)>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        else_expr: Option<Box<Node>>,
    },
    Unary(Box<UnaryOperator>),
    Binary(Box<BinaryOperator>),
    Ternary(Box<TernaryOperator>),
    /// The `NOT` operator. Pushed into its child during the transform
    /// pass whenever the child has a negated twin.
    Not(Box<Node>),
    Select(Box<SelectStmt>),
    /// `(SELECT ...) "label"`.
    Subquery(Box<LabeledSelect>),
    /// `FROM <item>`.
    From(Box<FromItem>),
    /// A bare join: `left JOIN right ON expr`.
    Join(Box<JoinClause>),
    /// `WHERE <expr>`.
    Where(Box<Node>),
    /// `GROUP BY <exprs>`. Must be non-empty.
    GroupBy(Vec<Node>),
    /// `HAVING <expr>`.
    Having(Box<Node>),
    /// `ORDER BY <items>`. Must be non-empty.
    OrderBy(Vec<OrderByItem>),
    /// A single sort key with direction and nulls placement.
    OrderItem(Box<OrderByItem>),
    /// `LIMIT <expr>`.
    Limit(Box<Node>),
    /// `OFFSET <expr>`.
    Offset(Box<Node>),
}

/// A `Node` used in value position.
pub type Expr = Node;

/// An expression with a quoted output label: `expr "label"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labeled {
    pub expr: Node,
    pub label: String,
}

/// A function call. `bare` suppresses the parentheses of zero-argument
/// calls (`now` instead of `now()`).
///
/// The name is validated at construction, so the fields stay private and
/// every reachable `FuncExpr` carries a legal name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncExpr {
    pub(crate) name: String,
    pub(crate) args: Vec<Node>,
    #[serde(default, skip_serializing_if = "crate::ast::is_false")]
    pub(crate) bare: bool,
}

fn check_func_name(name: &str) {
    if !FUNC_NAME.is_match(name) {
        panic!("illegal function name: {name}");
    }
}

impl FuncExpr {
    /// A regular call; renders `name(...)` even with no arguments.
    ///
    /// # Panics
    /// Panics when `name` does not match `^[A-Za-z][A-Za-z0-9_.]*$`.
    pub fn new(name: impl Into<String>, args: Vec<Node>) -> Self {
        let name = name.into();
        check_func_name(&name);
        Self {
            name,
            args,
            bare: false,
        }
    }

    /// A zero-argument call rendered without parentheses.
    ///
    /// # Panics
    /// Panics when `name` does not match `^[A-Za-z][A-Za-z0-9_.]*$`.
    pub fn bare(name: impl Into<String>) -> Self {
        let name = name.into();
        check_func_name(&name);
        Self {
            name,
            args: Vec::new(),
            bare: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Node] {
        &self.args
    }
}

impl From<Labeled> for Node {
    fn from(labeled: Labeled) -> Self {
        Node::Labeled(Box::new(labeled))
    }
}

impl From<FuncExpr> for Node {
    fn from(func: FuncExpr) -> Self {
        Node::Func(func)
    }
}

impl From<SelectStmt> for Node {
    fn from(select: SelectStmt) -> Self {
        Node::Select(Box::new(select))
    }
}

impl From<LabeledSelect> for Node {
    fn from(subquery: LabeledSelect) -> Self {
        Node::Subquery(Box::new(subquery))
    }
}

impl From<JoinClause> for Node {
    fn from(join: JoinClause) -> Self {
        Node::Join(Box::new(join))
    }
}

impl From<OrderByItem> for Node {
    fn from(item: OrderByItem) -> Self {
        Node::OrderItem(Box::new(item))
    }
}

impl From<&str> for Node {
    /// A bare string in expression position is a quoted identifier.
    fn from(name: &str) -> Self {
        Node::Quoted(name.to_string())
    }
}

impl From<String> for Node {
    fn from(name: String) -> Self {
        Node::Quoted(name)
    }
}
