//! The AST-to-AST rewrite pass that runs before printing.
//!
//! The only rewrite is NOT-pushdown: `NOT x` becomes `x.negate()` whenever
//! `x` has a negated twin, recursively, so `NOT (a = b)` prints as
//! `a <> b` and `NOT NOT a` collapses to `a`. The pass is idempotent.

use crate::ast::{FromItem, JoinClause, Node, OrderByItem, SelectStmt};

fn transform_box(node: Box<Node>) -> Box<Node> {
    Box::new((*node).transform())
}

fn transform_vec(nodes: Vec<Node>) -> Vec<Node> {
    nodes.into_iter().map(Node::transform).collect()
}

impl Node {
    /// Produce the semantically-equivalent rewritten tree. Takes
    /// ownership; callers clone when they need the original.
    pub fn transform(self) -> Node {
        match self {
            Node::Not(inner) => {
                let inner = *inner;
                if inner.negatable() {
                    inner.negate().transform()
                } else {
                    Node::Not(Box::new(inner.transform()))
                }
            }
            Node::Unary(op) => {
                let mut op = *op;
                op.expr = transform_box(op.expr);
                Node::Unary(Box::new(op))
            }
            Node::Binary(op) => {
                let mut op = *op;
                op.left = transform_box(op.left);
                op.right = transform_box(op.right);
                Node::Binary(Box::new(op))
            }
            Node::Ternary(op) => {
                let mut op = *op;
                op.first = transform_box(op.first);
                op.second = transform_box(op.second);
                op.third = transform_box(op.third);
                Node::Ternary(Box::new(op))
            }
            Node::Labeled(labeled) => {
                let mut labeled = *labeled;
                labeled.expr = labeled.expr.transform();
                Node::Labeled(Box::new(labeled))
            }
            Node::Paren(inner) => Node::Paren(transform_box(inner)),
            Node::List(items) => Node::List(transform_vec(items)),
            Node::Tuple(items) => Node::Tuple(transform_vec(items)),
            Node::Func(mut func) => {
                func.args = transform_vec(func.args);
                Node::Func(func)
            }
            Node::Case {
                branches,
                else_expr,
            } => Node::Case {
                branches: branches
                    .into_iter()
                    .map(|(when, then)| (when.transform(), then.transform()))
                    .collect(),
                else_expr: else_expr.map(transform_box),
            },
            Node::Select(select) => Node::Select(Box::new(select.transform())),
            Node::Subquery(subquery) => {
                let mut subquery = *subquery;
                subquery.select = Box::new(subquery.select.transform());
                Node::Subquery(Box::new(subquery))
            }
            Node::From(item) => Node::From(Box::new(item.transform())),
            Node::Join(join) => Node::Join(Box::new(join.transform())),
            Node::Where(expr) => Node::Where(transform_box(expr)),
            Node::GroupBy(exprs) => Node::GroupBy(transform_vec(exprs)),
            Node::Having(expr) => Node::Having(transform_box(expr)),
            Node::OrderBy(items) => {
                Node::OrderBy(items.into_iter().map(OrderByItem::transform).collect())
            }
            Node::OrderItem(item) => Node::OrderItem(Box::new(item.transform())),
            Node::Limit(expr) => Node::Limit(transform_box(expr)),
            Node::Offset(expr) => Node::Offset(transform_box(expr)),
            leaf @ (Node::Verbatim(_)
            | Node::Quoted(_)
            | Node::Column { .. }
            | Node::Table { .. }
            | Node::Placeholder(_)) => leaf,
        }
    }
}

impl SelectStmt {
    fn transform(mut self) -> SelectStmt {
        self.columns = self
            .columns
            .into_iter()
            .map(|mut labeled| {
                labeled.expr = labeled.expr.transform();
                labeled
            })
            .collect();
        self.from = self.from.map(FromItem::transform);
        self.where_clause = self.where_clause.map(Node::transform);
        self.group_by = transform_vec(self.group_by);
        self.having = self.having.map(Node::transform);
        self.order_by = self
            .order_by
            .into_iter()
            .map(OrderByItem::transform)
            .collect();
        self.limit = self.limit.map(Node::transform);
        self.offset = self.offset.map(Node::transform);
        self
    }
}

impl FromItem {
    fn transform(self) -> FromItem {
        match self {
            FromItem::Table(table) => FromItem::Table(table),
            FromItem::Subquery(mut subquery) => {
                subquery.select = Box::new(subquery.select.transform());
                FromItem::Subquery(subquery)
            }
            FromItem::Join(join) => FromItem::Join(Box::new(join.transform())),
        }
    }
}

impl JoinClause {
    fn transform(mut self) -> JoinClause {
        self.left = self.left.transform();
        self.right = self.right.transform();
        self.on = self.on.transform();
        self
    }
}

impl OrderByItem {
    fn transform(mut self) -> OrderByItem {
        self.expr = self.expr.transform();
        self
    }
}
