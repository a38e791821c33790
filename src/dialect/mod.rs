//! Per-SQL-flavor policy: identifier quoting, placeholder rendering, and
//! operator precedence/associativity tables.

mod mysql;
mod postgres;

pub use mysql::MySql;
pub use postgres::Postgres;

use crate::ast::{Associativity, Nulls, OpKind, SortOrder};

/// Dialect-dependent behavior consulted during compilation. Dialects are
/// read-only and freely shareable across compilers.
pub trait Dialect: Send + Sync {
    /// A quoted identifier safe to embed verbatim.
    fn quote_identifier(&self, name: &str) -> String;

    /// The textual placeholder for a 0-based position.
    fn make_placeholder(&self, name: &str, position: usize) -> String;

    /// Precedence of an operator kind; higher binds tighter. `None` when
    /// the dialect has no entry.
    fn precedence(&self, op: OpKind) -> Option<u32>;

    /// Associativity of an operator kind. `None` when the dialect has no
    /// entry.
    fn associativity(&self, op: OpKind) -> Option<Associativity>;

    /// Whether the given nulls placement is already what the dialect does
    /// for the direction; default placements are not spelled out. The
    /// default body encodes Postgres semantics: ascending sorts put nulls
    /// last, descending sorts put them first.
    fn nulls_ordering_is_default(&self, order: SortOrder, nulls: Nulls) -> bool {
        match (order, nulls) {
            (_, Nulls::Default) => true,
            (SortOrder::Asc, Nulls::First) => false,
            (SortOrder::Asc, Nulls::Last) => true,
            (SortOrder::Desc, Nulls::First) => true,
            (SortOrder::Desc, Nulls::Last) => false,
        }
    }
}
