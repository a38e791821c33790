//! The `SELECT` statement and its clause payloads.

use crate::ast::{Labeled, Node};
use serde::{Deserialize, Serialize};

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL JOIN",
        }
    }
}

impl std::fmt::Display for JoinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for an `ORDER BY` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Nulls placement for an `ORDER BY` item. `Default` leaves the choice
/// to the dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Nulls {
    #[default]
    Default,
    First,
    Last,
}

/// One sort key: expression, direction, nulls placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByItem {
    pub expr: Node,
    pub order: SortOrder,
    pub nulls: Nulls,
}

/// A table reference with a mandatory label: `"s"."t" "s_t"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub name: String,
    pub label: String,
}

impl TableRef {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            label: label.into(),
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

/// A labeled subquery: `(SELECT ...) "label"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSelect {
    pub select: Box<SelectStmt>,
    pub label: String,
}

/// One alternative of a `FROM` clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FromItem {
    Table(TableRef),
    Subquery(LabeledSelect),
    Join(Box<JoinClause>),
}

impl From<TableRef> for FromItem {
    fn from(table: TableRef) -> Self {
        FromItem::Table(table)
    }
}

impl From<LabeledSelect> for FromItem {
    fn from(subquery: LabeledSelect) -> Self {
        FromItem::Subquery(subquery)
    }
}

impl From<JoinClause> for FromItem {
    fn from(join: JoinClause) -> Self {
        FromItem::Join(Box::new(join))
    }
}

/// `left KIND right ON expr`. Joins nest through their `FromItem` sides,
/// so chains render flat without parentheses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub left: FromItem,
    pub right: FromItem,
    pub on: Node,
}

/// A `SELECT` statement. Clauses render in the fixed SQL order; empty
/// `Vec` fields mean the clause is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SelectStmt {
    pub columns: Vec<Labeled>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<FromItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub having: Option<Node>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<OrderByItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Node>,
}

impl SelectStmt {
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = Labeled>,
    {
        Self {
            columns: columns.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn from(mut self, item: impl Into<FromItem>) -> Self {
        self.from = Some(item.into());
        self
    }

    /// Set the `WHERE` condition.
    pub fn filter(mut self, expr: impl Into<Node>) -> Self {
        self.where_clause = Some(expr.into());
        self
    }

    pub fn group_by<I>(mut self, exprs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.group_by = exprs.into_iter().map(Into::into).collect();
        self
    }

    pub fn having(mut self, expr: impl Into<Node>) -> Self {
        self.having = Some(expr.into());
        self
    }

    pub fn order_by<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = OrderByItem>,
    {
        self.order_by = items.into_iter().collect();
        self
    }

    pub fn limit(mut self, expr: impl Into<Node>) -> Self {
        self.limit = Some(expr.into());
        self
    }

    pub fn offset(mut self, expr: impl Into<Node>) -> Self {
        self.offset = Some(expr.into());
        self
    }
}
