//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only two kinds exist: the caller passed something the catalog refuses, or a
/// query that must produce at least one product produced none. Transport
/// mapping (status codes, JSON bodies) belongs to the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input was rejected (blank name, duplicate id, rating out of range,
    /// invalid window bounds). The operation had no effect.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A lookup that signals emptiness as a failure found nothing.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Human-readable detail without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::NotFound(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = DomainError::invalid_argument("rating must be between 1 and 10");
        assert_eq!(err.to_string(), "invalid argument: rating must be between 1 and 10");

        let err = DomainError::not_found("no product with id 9");
        assert_eq!(err.to_string(), "not found: no product with id 9");
    }

    #[test]
    fn message_strips_kind() {
        let err = DomainError::not_found("nothing here");
        assert_eq!(err.message(), "nothing here");
    }
}
