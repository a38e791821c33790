//! Dialect-aware SQL `SELECT` builder.
//!
//! Queries are assembled as a typed AST, compiled against a [`Dialect`]
//! into SQL text plus a registry of named placeholders, and bound with a
//! `{name → value}` map that yields the positional parameter vector for a
//! prepared statement.
//!
//! ```
//! use selq::prelude::*;
//! use std::collections::HashMap;
//!
//! let query = SelectStmt::new([label(col("name"), "user_name")])
//!     .from(table_ref("app", "users", "u"))
//!     .filter(eq(column("u", "id"), placeholder("id")));
//!
//! let mut compiler = Compiler::postgres();
//! let sql = compiler.compile(query).unwrap();
//! assert_eq!(
//!     sql,
//!     r#"SELECT "name" "user_name" FROM "app"."users" "u" WHERE "u"."id" = $1"#
//! );
//!
//! let params = compiler.build_params(&HashMap::from([("id", 42)])).unwrap();
//! assert_eq!(params, vec![42]);
//! ```

pub mod ast;
pub mod compiler;
pub mod dialect;
pub mod error;

pub use compiler::{Compiler, PlaceholderRegistry};
pub use dialect::{Dialect, MySql, Postgres};
pub use error::{SelqError, SelqResult};

pub mod prelude {
    pub use crate::ast::builders::{
        add, and, asc, between, case_when, col, column, desc, div, dot, eq, full_join, func, func0,
        group_by, gt, gte, ilike, int, is_false, is_in, is_not_false, is_not_null, is_not_true,
        is_null, is_true, join, label, left_join, like, lt, lte, mul, ne, not, not_between,
        not_ilike, not_in, not_like, nulls_first, nulls_last, or, order_by, placeholder,
        placeholder_tuple, quote, rem, right_join, schema_table, sub, subquery, table, table_ref,
        tuple, verbatim,
    };
    pub use crate::ast::{
        Expr, FromItem, JoinClause, JoinKind, Labeled, Node, Nulls, OpKind, OrderByItem,
        SelectStmt, SortOrder, TableRef,
    };
    pub use crate::compiler::{Compiler, PlaceholderRegistry};
    pub use crate::dialect::{Dialect, MySql, Postgres};
    pub use crate::error::{SelqError, SelqResult};
}
