//! # Domain Errors
//!
//! Error types raised by domain rules.
//!
//! # Examples
//!
//! ```
//! use price_resolver::domain::errors::DomainError;
//!
//! let err = DomainError::NoPriceAvailable;
//! assert!(err.is_no_price_available());
//! ```

use thiserror::Error;

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The resolution engine was handed no candidates.
    #[error("no prices available for selection")]
    NoPriceAvailable,

    /// A validity window whose start is after its end.
    #[error("invalid validity window: {0}")]
    InvalidValidityWindow(String),

    /// A timestamp that could not be read.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A currency code that is not a three-letter alphabetic code.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// An identifier that is not strictly positive.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl DomainError {
    /// Creates an invalid validity window error.
    #[must_use]
    pub fn invalid_window(message: impl Into<String>) -> Self {
        Self::InvalidValidityWindow(message.into())
    }

    /// Creates an invalid timestamp error.
    #[must_use]
    pub fn invalid_timestamp(message: impl Into<String>) -> Self {
        Self::InvalidTimestamp(message.into())
    }

    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(message: impl Into<String>) -> Self {
        Self::InvalidCurrency(message.into())
    }

    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        Self::InvalidIdentifier(message.into())
    }

    /// Returns true if the engine had nothing to select from.
    #[must_use]
    pub fn is_no_price_available(&self) -> bool {
        matches!(self, Self::NoPriceAvailable)
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_price_available_display() {
        let err = DomainError::NoPriceAvailable;
        assert_eq!(err.to_string(), "no prices available for selection");
        assert!(err.is_no_price_available());
    }

    #[test]
    fn invalid_window_carries_message() {
        let err = DomainError::invalid_window("start after end");
        assert!(err.to_string().contains("start after end"));
        assert!(!err.is_no_price_available());
    }

    #[test]
    fn invalid_currency_carries_code() {
        let err = DomainError::invalid_currency("E1");
        assert!(err.to_string().contains("E1"));
    }
}
