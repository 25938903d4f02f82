//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic stock-keeping failures. Filesystem and
/// serialization concerns belong to the persistence layer. Conditions that
/// are recovered in place (a removal of an unknown item, say) are modelled as
/// outcomes, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. an empty item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A quantity could not be applied to the stored amount.
    #[error("quantity overflow: {0}")]
    QuantityOverflow(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::QuantityOverflow(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            DomainError::validation("item name cannot be empty").to_string(),
            "validation failed: item name cannot be empty"
        );
        assert_eq!(
            DomainError::overflow("adding 1 to 'apple'").to_string(),
            "quantity overflow: adding 1 to 'apple'"
        );
    }
}
