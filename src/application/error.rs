//! # Application Errors
//!
//! Errors surfaced to callers of the query service.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── PriceNotFound           - nothing applies to the query
//! ├── Store(RepositoryError)  - store failure, passed through unchanged
//! ├── Domain(DomainError)     - any other business rule violation
//! └── Validation(String)      - rejected input
//! ```
//!
//! Notifier failures never appear here; the service absorbs them.
//!
//! # Examples
//!
//! ```
//! use price_resolver::application::error::ApplicationError;
//! use price_resolver::domain::value_objects::{BrandId, ProductId, Timestamp};
//!
//! let at = Timestamp::from_ymd_hms(2020, 6, 14, 10, 0, 0).unwrap();
//! let err = ApplicationError::price_not_found(BrandId::new(1), ProductId::new(35455), Some(at));
//! assert!(err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{BrandId, ProductId, Timestamp};
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No record applies to the query.
    #[error("price not found for brand {brand_id}, product {product_id}{}", format_instant(*.at))]
    PriceNotFound {
        /// Queried brand.
        brand_id: BrandId,
        /// Queried product.
        product_id: ProductId,
        /// Queried instant, when there was one.
        at: Option<Timestamp>,
    },

    /// The store failed; the original error is kept intact.
    #[error(transparent)]
    Store(#[from] RepositoryError),

    /// Domain rule violation other than "nothing to select".
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),
}

fn format_instant(at: Option<Timestamp>) -> String {
    at.map(|t| format!(" at {t}")).unwrap_or_default()
}

impl ApplicationError {
    /// Creates a price not found error.
    #[must_use]
    pub fn price_not_found(brand_id: BrandId, product_id: ProductId, at: Option<Timestamp>) -> Self {
        Self::PriceNotFound {
            brand_id,
            product_id,
            at,
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this is a price not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PriceNotFound { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(DomainError::InvalidIdentifier(_)))
    }

    /// Returns true if the store could not be reached.
    #[must_use]
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_unavailable())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn price_not_found_mentions_query() {
        let at = Timestamp::from_ymd_hms(2020, 6, 14, 10, 0, 0).unwrap();
        let err = ApplicationError::price_not_found(BrandId::new(1), ProductId::new(35455), Some(at));
        let msg = err.to_string();
        assert!(msg.contains("brand 1"));
        assert!(msg.contains("product 35455"));
        assert!(msg.contains("2020-06-14 10:00:00"));
        assert!(err.is_not_found());
    }

    #[test]
    fn price_not_found_without_instant() {
        let err = ApplicationError::price_not_found(BrandId::new(2), ProductId::new(7), None);
        assert_eq!(err.to_string(), "price not found for brand 2, product 7");
    }

    #[test]
    fn store_error_is_transparent() {
        let err: ApplicationError = RepositoryError::connection("refused").into();
        assert_eq!(err.to_string(), "Connection error: refused");
        assert!(err.is_store_unavailable());
        assert!(!err.is_not_found());
    }

    #[test]
    fn invalid_identifier_counts_as_validation() {
        let err: ApplicationError = DomainError::invalid_identifier("brandId").into();
        assert!(err.is_validation());
        assert!(ApplicationError::validation("bad date").is_validation());
    }
}
