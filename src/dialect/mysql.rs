//! MySQL dialect.

use crate::ast::{Associativity, Nulls, OpKind, SortOrder};
use crate::dialect::Dialect;

/// MySQL 8 flavor: backtick quoting, positional `?` placeholders. MySQL
/// has no `ILIKE` and no `NULLS FIRST/LAST` syntax; the former fails
/// compilation, the latter is never emitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, name: &str) -> String {
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push('`');
        for c in name.chars() {
            if c == '`' {
                quoted.push_str("``");
            } else {
                quoted.push(c);
            }
        }
        quoted.push('`');
        quoted
    }

    fn make_placeholder(&self, _name: &str, _position: usize) -> String {
        "?".to_string()
    }

    fn precedence(&self, op: OpKind) -> Option<u32> {
        use OpKind::*;
        match op {
            Or => Some(1),
            And => Some(2),
            Not => Some(3),
            Between | NotBetween => Some(4),
            Lt | Gt | Eq | Lte | Gte | NotEq | IsNull | IsNotNull | IsTrue | IsNotTrue
            | IsFalse | IsNotFalse | In | NotIn | Like | NotLike => Some(5),
            Add | Sub => Some(6),
            Mul | Div | Rem => Some(7),
            ILike | NotILike | Dot => None,
        }
    }

    fn associativity(&self, op: OpKind) -> Option<Associativity> {
        use OpKind::*;
        match op {
            IsNull | IsNotNull | IsTrue | IsNotTrue | IsFalse | IsNotFalse | Or | And | Add
            | Sub | Mul | Div | Rem => Some(Associativity::Left),
            Not => Some(Associativity::Right),
            Lt | Gt | Eq | Lte | Gte | NotEq | Between | NotBetween | In | NotIn | Like
            | NotLike => Some(Associativity::NonAssociative),
            ILike | NotILike | Dot => None,
        }
    }

    fn nulls_ordering_is_default(&self, _order: SortOrder, _nulls: Nulls) -> bool {
        true
    }
}
