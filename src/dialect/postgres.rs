//! PostgreSQL dialect.

use crate::ast::{Associativity, OpKind};
use crate::dialect::Dialect;

/// The default dialect: `"..."` identifier quoting with `U&` unicode
/// escapes, `$1`-style placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

fn is_legal_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn unicode_escape(c: char) -> String {
    format!("\\+{:06X}", c as u32)
}

impl Dialect for Postgres {
    fn quote_identifier(&self, name: &str) -> String {
        let mut quoted = String::with_capacity(name.len() + 2);
        let mut need_prefix = false;
        quoted.push('"');
        for c in name.chars() {
            if is_legal_identifier_char(c) {
                quoted.push(c);
            } else {
                need_prefix = true;
                quoted.push_str(&unicode_escape(c));
            }
        }
        quoted.push('"');
        if need_prefix {
            format!("U&{quoted}")
        } else {
            quoted
        }
    }

    fn make_placeholder(&self, _name: &str, position: usize) -> String {
        format!("${}", position + 1)
    }

    fn precedence(&self, op: OpKind) -> Option<u32> {
        use OpKind::*;
        match op {
            Or => Some(1),
            And => Some(2),
            Not => Some(3),
            IsNull | IsNotNull | IsTrue | IsNotTrue | IsFalse | IsNotFalse => Some(4),
            Lt | Gt | Eq | Lte | Gte | NotEq => Some(5),
            Between | NotBetween | In | NotIn | Like | NotLike | ILike | NotILike => Some(6),
            Add | Sub => Some(8),
            Mul | Div | Rem => Some(9),
            Dot => None,
        }
    }

    fn associativity(&self, op: OpKind) -> Option<Associativity> {
        use OpKind::*;
        match op {
            IsNull | IsNotNull | IsTrue | IsNotTrue | IsFalse | IsNotFalse | Or | And | Add
            | Sub | Mul | Div | Rem => Some(Associativity::Left),
            Not => Some(Associativity::Right),
            Lt | Gt | Eq | Lte | Gte | NotEq | Between | NotBetween | In | NotIn | Like
            | NotLike | ILike | NotILike => Some(Associativity::NonAssociative),
            Dot => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier() {
        let p = Postgres;
        let cases = [
            ("a", r#""a""#),
            ("1a", r#""1a""#),
            ("日本語", r#"U&"\+0065E5\+00672C\+008A9E""#),
        ];
        for (input, expected) in cases {
            assert_eq!(p.quote_identifier(input), expected);
        }
    }

    #[test]
    fn test_make_placeholder() {
        assert_eq!(Postgres.make_placeholder("unimportant", 0), "$1");
        assert_eq!(Postgres.make_placeholder("unimportant", 9), "$10");
    }
}
