//! Error types for selq.

use crate::ast::OpKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelqError {
    /// The dialect has no precedence entry for the operator and the
    /// instance carries no override.
    #[error("no precedence for operator {0:?}")]
    NoPrecedence(OpKind),

    /// The dialect has no associativity entry for the operator and the
    /// instance carries no override.
    #[error("no associativity for operator {0:?}")]
    NoAssociativity(OpKind),

    /// A unary operator resolved to non-associative, which has no prefix
    /// or postfix rendering.
    #[error("unary operator {0:?} is non-associative")]
    NonAssociative(OpKind),

    /// An empty sequence where at least one element is required (tuple,
    /// select columns, GROUP BY, ORDER BY, CASE branches, placeholder
    /// tuple length).
    #[error("zero length")]
    ZeroLength,

    /// A bind name that no placeholder in the compiled query refers to.
    #[error("unknown input key: {0}")]
    UnknownInputKey(String),

    /// A placeholder that the supplied bind map does not cover.
    #[error("unbound placeholder: {0}")]
    UnboundPlaceholder(String),
}

/// Result type alias for selq operations.
pub type SelqResult<T> = Result<T, SelqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SelqError::UnknownInputKey("user_id".to_string());
        assert_eq!(err.to_string(), "unknown input key: user_id");
        assert_eq!(SelqError::ZeroLength.to_string(), "zero length");
    }
}
