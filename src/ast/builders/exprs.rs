//! Identifier, literal, tuple, function, and CASE constructors.

use crate::ast::{FuncExpr, Labeled, Node};
use crate::error::{SelqError, SelqResult};

/// Raw SQL emitted verbatim. Values belong in placeholders, not here.
pub fn verbatim(sql: impl Into<String>) -> Node {
    Node::Verbatim(sql.into())
}

/// An integer literal, safe to emit verbatim.
pub fn int(value: i64) -> Node {
    Node::Verbatim(value.to_string())
}

/// A single quoted identifier segment.
pub fn quote(name: impl Into<String>) -> Node {
    Node::Quoted(name.into())
}

/// An unqualified column.
pub fn col(name: impl Into<String>) -> Node {
    Node::Column {
        table: None,
        name: name.into(),
    }
}

/// A column qualified by a table label: `"t"."a"`.
pub fn column(table: impl Into<String>, name: impl Into<String>) -> Node {
    Node::Column {
        table: Some(table.into()),
        name: name.into(),
    }
}

/// An unqualified table.
pub fn table(name: impl Into<String>) -> Node {
    Node::Table {
        schema: None,
        name: name.into(),
    }
}

/// A schema-qualified table: `"s"."t"`.
pub fn schema_table(schema: impl Into<String>, name: impl Into<String>) -> Node {
    Node::Table {
        schema: Some(schema.into()),
        name: name.into(),
    }
}

/// Attach a quoted output label: `expr "label"`.
pub fn label(expr: impl Into<Node>, label: impl Into<String>) -> Labeled {
    Labeled {
        expr: expr.into(),
        label: label.into(),
    }
}

/// A named bind parameter.
///
/// # Panics
/// Panics on an empty name.
pub fn placeholder(name: impl Into<String>) -> Node {
    let name = name.into();
    assert!(!name.is_empty(), "placeholder name must not be empty");
    Node::Placeholder(name)
}

/// A parenthesised expression list: `(a,b,c)`. Compiling an empty tuple
/// fails with [`SelqError::ZeroLength`].
pub fn tuple<I>(exprs: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Node::Tuple(exprs.into_iter().map(Into::into).collect())
}

/// A tuple of `len` placeholders named `prefix1..prefixN`, returned along
/// with the generated names for binding.
pub fn placeholder_tuple(prefix: &str, len: usize) -> SelqResult<(Vec<String>, Node)> {
    if len == 0 {
        return Err(SelqError::ZeroLength);
    }
    let names: Vec<String> = (1..=len).map(|i| format!("{prefix}{i}")).collect();
    let exprs = names
        .iter()
        .map(|name| Node::Placeholder(name.clone()))
        .collect();
    Ok((names, Node::Tuple(exprs)))
}

/// Start a function call: `func("lower").arg(col("name"))`.
///
/// # Panics
/// Panics when `name` does not match `^[A-Za-z][A-Za-z0-9_.]*$`.
pub fn func(name: impl Into<String>) -> FuncBuilder {
    FuncBuilder {
        func: FuncExpr::new(name, Vec::new()),
    }
}

/// A zero-argument function rendered without parentheses, e.g.
/// `current_timestamp`.
///
/// # Panics
/// Panics when `name` does not match `^[A-Za-z][A-Za-z0-9_.]*$`.
pub fn func0(name: impl Into<String>) -> Node {
    Node::Func(FuncExpr::bare(name))
}

/// Builder for function calls.
#[derive(Debug, Clone)]
pub struct FuncBuilder {
    func: FuncExpr,
}

impl FuncBuilder {
    pub fn arg(mut self, expr: impl Into<Node>) -> Self {
        self.func.args.push(expr.into());
        self
    }

    pub fn args<I>(mut self, exprs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.func.args.extend(exprs.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Node {
        Node::Func(self.func)
    }
}

impl From<FuncBuilder> for Node {
    fn from(builder: FuncBuilder) -> Self {
        builder.build()
    }
}

/// Start a `CASE` expression with its first branch.
pub fn case_when(when: impl Into<Node>, then: impl Into<Node>) -> CaseBuilder {
    CaseBuilder {
        branches: vec![(when.into(), then.into())],
    }
}

/// Builder for `CASE` expressions.
#[derive(Debug, Clone)]
pub struct CaseBuilder {
    branches: Vec<(Node, Node)>,
}

impl CaseBuilder {
    pub fn when(mut self, when: impl Into<Node>, then: impl Into<Node>) -> Self {
        self.branches.push((when.into(), then.into()));
        self
    }

    /// Finish with an `ELSE` arm.
    pub fn otherwise(self, expr: impl Into<Node>) -> Node {
        Node::Case {
            branches: self.branches,
            else_expr: Some(Box::new(expr.into())),
        }
    }

    /// Finish without an `ELSE` arm.
    pub fn build(self) -> Node {
        Node::Case {
            branches: self.branches,
            else_expr: None,
        }
    }
}

impl From<CaseBuilder> for Node {
    fn from(builder: CaseBuilder) -> Self {
        builder.build()
    }
}
