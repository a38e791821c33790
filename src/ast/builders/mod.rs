//! Ergonomic constructors for AST nodes.

mod clauses;
mod exprs;
mod ops;

pub use clauses::{
    asc, desc, full_join, group_by, join, left_join, nulls_first, nulls_last, order_by,
    right_join, subquery, table_ref,
};
pub use exprs::{
    case_when, col, column, func, func0, int, label, placeholder, placeholder_tuple, quote,
    schema_table, table, tuple, verbatim, CaseBuilder, FuncBuilder,
};
pub use ops::{
    add, and, between, div, dot, eq, gt, gte, ilike, is_false, is_in, is_not_false, is_not_null,
    is_not_true, is_null, is_true, like, lt, lte, mul, ne, not, not_between, not_ilike, not_in,
    not_like, or, rem, sub,
};
