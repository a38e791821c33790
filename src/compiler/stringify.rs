//! The printing traversal: dialect-aware serialization with
//! precedence-driven parenthesisation and placeholder interning.

use crate::ast::{
    Associativity, BinaryOperator, FromItem, FuncExpr, JoinClause, Labeled, LabeledSelect, Node,
    OpKind, OperatorInfo, OrderByItem, SelectStmt, TernaryOperator, UnaryOperator,
};
use crate::compiler::Compiler;
use crate::error::{SelqError, SelqResult};

impl Compiler {
    fn resolve_precedence(&self, info: &OperatorInfo) -> SelqResult<u32> {
        info.precedence
            .or_else(|| self.dialect().precedence(info.kind))
            .ok_or(SelqError::NoPrecedence(info.kind))
    }

    fn resolve_associativity(&self, info: &OperatorInfo) -> SelqResult<Associativity> {
        info.associativity
            .or_else(|| self.dialect().associativity(info.kind))
            .ok_or(SelqError::NoAssociativity(info.kind))
    }

    pub(crate) fn stringify(&mut self, node: &Node) -> SelqResult<()> {
        match node {
            Node::Verbatim(sql) => {
                self.write(sql);
                Ok(())
            }
            Node::Quoted(name) => {
                self.write_identifier(name);
                Ok(())
            }
            Node::Column { table, name } => {
                if let Some(table) = table {
                    self.write_identifier(table);
                    self.write(".");
                }
                self.write_identifier(name);
                Ok(())
            }
            Node::Table { schema, name } => {
                if let Some(schema) = schema {
                    self.write_identifier(schema);
                    self.write(".");
                }
                self.write_identifier(name);
                Ok(())
            }
            Node::Labeled(labeled) => self.stringify_labeled(labeled),
            Node::Paren(inner) => self.stringify_paren(inner),
            Node::List(items) => self.stringify_comma_separated(items),
            Node::Tuple(items) => {
                if items.is_empty() {
                    return Err(SelqError::ZeroLength);
                }
                self.write("(");
                self.stringify_comma_separated(items)?;
                self.write(")");
                Ok(())
            }
            Node::Func(func) => self.stringify_func(func),
            Node::Placeholder(name) => {
                let position = self.placeholders.insert(name);
                let rendered = self.dialect().make_placeholder(name, position);
                self.write(&rendered);
                Ok(())
            }
            Node::Case {
                branches,
                else_expr,
            } => self.stringify_case(branches, else_expr.as_deref()),
            Node::Unary(op) => self.stringify_unary(op),
            Node::Binary(op) => self.stringify_binary(op),
            Node::Ternary(op) => self.stringify_ternary(op),
            Node::Not(expr) => {
                let info = OperatorInfo {
                    kind: OpKind::Not,
                    precedence: None,
                    associativity: None,
                };
                self.stringify_unary_parts(info, "NOT", expr)
            }
            Node::Select(select) => self.stringify_select(select),
            Node::Subquery(subquery) => self.stringify_subquery(subquery),
            Node::From(item) => {
                self.write("FROM ");
                self.stringify_from_item(item)
            }
            Node::Join(join) => self.stringify_join(join),
            Node::Where(expr) => {
                self.write("WHERE ");
                self.stringify(expr)
            }
            Node::GroupBy(exprs) => {
                if exprs.is_empty() {
                    return Err(SelqError::ZeroLength);
                }
                self.write("GROUP BY ");
                self.stringify_comma_separated(exprs)
            }
            Node::Having(expr) => {
                self.write("HAVING ");
                self.stringify(expr)
            }
            Node::OrderBy(items) => self.stringify_order_by(items),
            Node::OrderItem(item) => self.stringify_order_item(item),
            Node::Limit(expr) => {
                self.write("LIMIT ");
                self.stringify(expr)
            }
            Node::Offset(expr) => {
                self.write("OFFSET ");
                self.stringify(expr)
            }
        }
    }

    fn stringify_paren(&mut self, node: &Node) -> SelqResult<()> {
        self.write("(");
        self.stringify(node)?;
        self.write(")");
        Ok(())
    }

    fn stringify_comma_separated(&mut self, nodes: &[Node]) -> SelqResult<()> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            self.stringify(node)?;
        }
        Ok(())
    }

    fn stringify_labeled(&mut self, labeled: &Labeled) -> SelqResult<()> {
        self.stringify(&labeled.expr)?;
        self.write(" ");
        self.write_identifier(&labeled.label);
        Ok(())
    }

    fn stringify_func(&mut self, func: &FuncExpr) -> SelqResult<()> {
        self.write(&func.name);
        if func.args.is_empty() {
            if !func.bare {
                self.write("()");
            }
            return Ok(());
        }
        self.write("(");
        self.stringify_comma_separated(&func.args)?;
        self.write(")");
        Ok(())
    }

    fn stringify_case(
        &mut self,
        branches: &[(Node, Node)],
        else_expr: Option<&Node>,
    ) -> SelqResult<()> {
        if branches.is_empty() {
            return Err(SelqError::ZeroLength);
        }
        self.write("CASE");
        for (when, then) in branches {
            self.write(" WHEN ");
            self.stringify(when)?;
            self.write(" THEN ");
            self.stringify(then)?;
        }
        if let Some(expr) = else_expr {
            self.write(" ELSE ");
            self.stringify(expr)?;
        }
        self.write(" END");
        Ok(())
    }

    /// Shared by `Unary` and `Not`. Right-associative operators print as
    /// prefixes, left-associative ones as postfixes; a non-associative
    /// unary has no rendering. The child is wrapped only when it binds
    /// looser than this operator.
    fn stringify_unary_parts(
        &mut self,
        info: OperatorInfo,
        symbol: &str,
        expr: &Node,
    ) -> SelqResult<()> {
        let associativity = self.resolve_associativity(&info)?;
        if associativity == Associativity::NonAssociative {
            return Err(SelqError::NonAssociative(info.kind));
        }
        let ours = self.resolve_precedence(&info)?;
        let wrap = match expr.operator_info() {
            Some(theirs) => self.resolve_precedence(&theirs)? < ours,
            None => false,
        };

        if associativity == Associativity::Right {
            self.write(symbol);
            self.write(" ");
        }
        if wrap {
            self.stringify_paren(expr)?;
        } else {
            self.stringify(expr)?;
        }
        if associativity == Associativity::Left {
            self.write(" ");
            self.write(symbol);
        }
        Ok(())
    }

    fn stringify_unary(&mut self, op: &UnaryOperator) -> SelqResult<()> {
        self.stringify_unary_parts(op.info(), &op.symbol, &op.expr)
    }

    fn stringify_binary(&mut self, op: &BinaryOperator) -> SelqResult<()> {
        let info = op.info();
        let associativity = self.resolve_associativity(&info)?;
        let ours = self.resolve_precedence(&info)?;

        self.stringify_operand(&op.left, ours, associativity, Associativity::Right)?;
        if op.suppress_space {
            self.write(&op.symbol);
        } else {
            self.write(" ");
            self.write(&op.symbol);
            self.write(" ");
        }
        self.stringify_operand(&op.right, ours, associativity, Associativity::Left)
    }

    /// One side of a binary operator. `wrap_side` is the associativity for
    /// which an equal-precedence child on this side still needs
    /// parentheses: the left operand passes `Right`, the right operand
    /// passes `Left`, so only the side away from the natural fold wraps.
    fn stringify_operand(
        &mut self,
        expr: &Node,
        ours: u32,
        associativity: Associativity,
        wrap_side: Associativity,
    ) -> SelqResult<()> {
        let Some(info) = expr.operator_info() else {
            return self.stringify(expr);
        };
        let theirs = self.resolve_precedence(&info)?;
        let wrap = if associativity == Associativity::NonAssociative {
            theirs <= ours
        } else {
            theirs < ours || (theirs == ours && associativity == wrap_side)
        };
        if wrap {
            self.stringify_paren(expr)
        } else {
            self.stringify(expr)
        }
    }

    fn stringify_ternary(&mut self, op: &TernaryOperator) -> SelqResult<()> {
        let ours = self.resolve_precedence(&op.info())?;
        self.stringify_ternary_operand(&op.first, ours)?;
        self.write(" ");
        self.write(&op.symbols.0);
        self.write(" ");
        self.stringify_ternary_operand(&op.second, ours)?;
        self.write(" ");
        self.write(&op.symbols.1);
        self.write(" ");
        self.stringify_ternary_operand(&op.third, ours)
    }

    /// Ternary operands wrap on equal precedence too: SQL requires a
    /// nested `BETWEEN` to be parenthesised in every slot.
    fn stringify_ternary_operand(&mut self, expr: &Node, ours: u32) -> SelqResult<()> {
        let Some(info) = expr.operator_info() else {
            return self.stringify(expr);
        };
        if self.resolve_precedence(&info)? <= ours {
            self.stringify_paren(expr)
        } else {
            self.stringify(expr)
        }
    }

    fn stringify_select(&mut self, select: &SelectStmt) -> SelqResult<()> {
        if select.columns.is_empty() {
            return Err(SelqError::ZeroLength);
        }
        self.write("SELECT ");
        for (i, column) in select.columns.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            self.stringify_labeled(column)?;
        }
        if let Some(item) = &select.from {
            self.write(" FROM ");
            self.stringify_from_item(item)?;
        }
        if let Some(expr) = &select.where_clause {
            self.write(" WHERE ");
            self.stringify(expr)?;
        }
        if !select.group_by.is_empty() {
            self.write(" GROUP BY ");
            self.stringify_comma_separated(&select.group_by)?;
        }
        if let Some(expr) = &select.having {
            self.write(" HAVING ");
            self.stringify(expr)?;
        }
        if !select.order_by.is_empty() {
            self.write(" ");
            self.stringify_order_by(&select.order_by)?;
        }
        if let Some(expr) = &select.limit {
            self.write(" LIMIT ");
            self.stringify(expr)?;
        }
        if let Some(expr) = &select.offset {
            self.write(" OFFSET ");
            self.stringify(expr)?;
        }
        Ok(())
    }

    fn stringify_from_item(&mut self, item: &FromItem) -> SelqResult<()> {
        match item {
            FromItem::Table(table) => {
                if let Some(schema) = &table.schema {
                    self.write_identifier(schema);
                    self.write(".");
                }
                self.write_identifier(&table.name);
                self.write(" ");
                self.write_identifier(&table.label);
                Ok(())
            }
            FromItem::Subquery(subquery) => self.stringify_subquery(subquery),
            FromItem::Join(join) => self.stringify_join(join),
        }
    }

    fn stringify_subquery(&mut self, subquery: &LabeledSelect) -> SelqResult<()> {
        self.write("(");
        self.stringify_select(&subquery.select)?;
        self.write(") ");
        self.write_identifier(&subquery.label);
        Ok(())
    }

    fn stringify_join(&mut self, join: &JoinClause) -> SelqResult<()> {
        self.stringify_from_item(&join.left)?;
        self.write(" ");
        self.write(join.kind.as_str());
        self.write(" ");
        self.stringify_from_item(&join.right)?;
        self.write(" ON ");
        self.stringify(&join.on)
    }

    fn stringify_order_by(&mut self, items: &[OrderByItem]) -> SelqResult<()> {
        if items.is_empty() {
            return Err(SelqError::ZeroLength);
        }
        self.write("ORDER BY ");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            self.stringify_order_item(item)?;
        }
        Ok(())
    }

    fn stringify_order_item(&mut self, item: &OrderByItem) -> SelqResult<()> {
        use crate::ast::{Nulls, SortOrder};

        self.stringify(&item.expr)?;
        if item.order == SortOrder::Desc {
            self.write(" DESC");
        }
        if !self
            .dialect()
            .nulls_ordering_is_default(item.order, item.nulls)
        {
            match item.nulls {
                Nulls::First => self.write(" NULLS FIRST"),
                Nulls::Last => self.write(" NULLS LAST"),
                Nulls::Default => {}
            }
        }
        Ok(())
    }
}
