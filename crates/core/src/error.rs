//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, ValidationError>;

/// Validation failure raised when a field violates its invariant.
///
/// Keep this focused on deterministic domain failures. Both rules are
/// concrete, so the variants carry the offending value rather than a
/// free-form message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The product name was empty or shorter than two characters.
    #[error("name must be at least 2 characters (got {len})")]
    NameTooShort { len: usize },

    /// A negative price was supplied to a price write.
    #[error("price cannot be negative (got {value})")]
    NegativePrice { value: i64 },
}

impl ValidationError {
    pub fn name_too_short(len: usize) -> Self {
        Self::NameTooShort { len }
    }

    pub fn negative_price(value: i64) -> Self {
        Self::NegativePrice { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_rule() {
        let err = ValidationError::name_too_short(1);
        assert_eq!(err.to_string(), "name must be at least 2 characters (got 1)");

        let err = ValidationError::negative_price(-5);
        assert_eq!(err.to_string(), "price cannot be negative (got -5)");
    }

    #[test]
    fn reasons_are_distinguishable() {
        assert_ne!(
            ValidationError::name_too_short(0),
            ValidationError::negative_price(0)
        );
    }
}
