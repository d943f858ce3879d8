//! The error taxonomy every service operation reports through.
//!
//! Expected failures never panic across the service boundary; they come
//! back as `CoreError` values whose display strings are part of the
//! observable contract and are asserted on in tests.

/// Outcome of every fallible service operation.
pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Malformed or empty required input. Caller error, never retried.
    #[error("{0}")]
    InvalidInput(String),

    /// A required DTO field was absent.
    #[error("{0}")]
    MissingData(String),

    /// The referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The caller is not the owning or permitted actor.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The operation violates a uniqueness or state-transition invariant.
    #[error("{0}")]
    Conflict(String),

    /// Opaque failure surfaced verbatim from the persistence collaborator.
    #[error("{0}")]
    Repository(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_display_carries_prefix() {
        let err = CoreError::Unauthorized("You do not own this crate".to_string());
        assert_eq!(err.to_string(), "Unauthorized: You do not own this crate");
    }

    #[test]
    fn repository_message_passes_through_verbatim() {
        let err = CoreError::Repository("Database error: connection reset".to_string());
        assert_eq!(err.to_string(), "Database error: connection reset");
    }

    #[test]
    fn invalid_input_display_is_bare() {
        let err = CoreError::InvalidInput("Rating must be between 1 and 5".to_string());
        assert_eq!(err.to_string(), "Rating must be between 1 and 5");
    }
}
