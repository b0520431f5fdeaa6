//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Every fallible ledger operation reports one of these variants; nothing
/// in the core panics on bad input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Creation input rejected (non-positive value, blank description, total
    /// out of range)
    #[error("Validation error: {0}")]
    Validation(String),

    /// No account matches the given id or token
    #[error("Not found: {0}")]
    NotFound(String),

    /// Token is neither an integer nor a UUID
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Attempted to move an account from paid back to unpaid
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a malformed token error
    pub fn malformed_token(token: impl Into<String>) -> Self {
        Self::MalformedToken(token.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_category() {
        assert_eq!(
            Error::validation("Value must be positive.").to_string(),
            "Validation error: Value must be positive."
        );
        assert_eq!(
            Error::not_found("7").to_string(),
            "Not found: 7"
        );
        assert_eq!(
            Error::malformed_token("abc").to_string(),
            "Malformed token: abc"
        );
    }

    #[test]
    fn test_invalid_state_is_distinct_variant() {
        let err = Error::invalid_state("Account already paid!");
        assert!(matches!(err, Error::InvalidStateTransition(_)));
    }
}
