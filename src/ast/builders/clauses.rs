//! Clause constructors: from items, joins, grouping, ordering.

use crate::ast::{
    FromItem, JoinClause, JoinKind, LabeledSelect, Node, Nulls, OrderByItem, SelectStmt,
    SortOrder, TableRef,
};

/// A schema-qualified, labeled table reference for a `FROM` clause.
pub fn table_ref(
    schema: impl Into<String>,
    name: impl Into<String>,
    label: impl Into<String>,
) -> FromItem {
    FromItem::Table(TableRef::new(name, label).schema(schema))
}

/// A labeled subquery for a `FROM` clause: `(SELECT ...) "label"`.
pub fn subquery(select: SelectStmt, label: impl Into<String>) -> FromItem {
    FromItem::Subquery(LabeledSelect {
        select: Box::new(select),
        label: label.into(),
    })
}

fn join_kind(
    kind: JoinKind,
    left: impl Into<FromItem>,
    right: impl Into<FromItem>,
    on: impl Into<Node>,
) -> JoinClause {
    JoinClause {
        kind,
        left: left.into(),
        right: right.into(),
        on: on.into(),
    }
}

pub fn join(
    left: impl Into<FromItem>,
    right: impl Into<FromItem>,
    on: impl Into<Node>,
) -> JoinClause {
    join_kind(JoinKind::Inner, left, right, on)
}

pub fn left_join(
    left: impl Into<FromItem>,
    right: impl Into<FromItem>,
    on: impl Into<Node>,
) -> JoinClause {
    join_kind(JoinKind::Left, left, right, on)
}

pub fn right_join(
    left: impl Into<FromItem>,
    right: impl Into<FromItem>,
    on: impl Into<Node>,
) -> JoinClause {
    join_kind(JoinKind::Right, left, right, on)
}

pub fn full_join(
    left: impl Into<FromItem>,
    right: impl Into<FromItem>,
    on: impl Into<Node>,
) -> JoinClause {
    join_kind(JoinKind::Full, left, right, on)
}

/// A `GROUP BY` clause node. Compiling an empty one fails.
pub fn group_by<I>(exprs: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    Node::GroupBy(exprs.into_iter().map(Into::into).collect())
}

/// An `ORDER BY` clause node. Compiling an empty one fails.
pub fn order_by<I>(items: I) -> Node
where
    I: IntoIterator<Item = OrderByItem>,
{
    Node::OrderBy(items.into_iter().collect())
}

/// An ascending sort key.
pub fn asc(expr: impl Into<Node>) -> OrderByItem {
    OrderByItem {
        expr: expr.into(),
        order: SortOrder::Asc,
        nulls: Nulls::Default,
    }
}

/// A descending sort key.
pub fn desc(expr: impl Into<Node>) -> OrderByItem {
    OrderByItem {
        expr: expr.into(),
        order: SortOrder::Desc,
        nulls: Nulls::Default,
    }
}

pub fn nulls_first(mut item: OrderByItem) -> OrderByItem {
    item.nulls = Nulls::First;
    item
}

pub fn nulls_last(mut item: OrderByItem) -> OrderByItem {
    item.nulls = Nulls::Last;
    item
}
