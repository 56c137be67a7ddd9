//! # Price Store Port
//!
//! Persistence abstraction consumed by the query service.
//!
//! The store owns the lifecycle of price records; the core only reads. An
//! implementation answers three questions:
//!
//! - [`PriceStore::find_best_match`]: the single winning record at an instant,
//!   resolved store-side
//! - [`PriceStore::find_all_applicable`]: every record whose inclusive window
//!   contains the instant
//! - [`PriceStore::find_all`]: everything, unfiltered
//!
//! # Examples
//!
//! ```ignore
//! use price_resolver::infrastructure::persistence::PriceStore;
//!
//! async fn count_applicable(store: &impl PriceStore, brand: BrandId, product: ProductId, at: Timestamp) {
//!     let applicable = store.find_all_applicable(brand, product, at).await?;
//!     println!("{} overlapping prices", applicable.len());
//! }
//! ```

use crate::domain::entities::PriceRecord;
use crate::domain::value_objects::{BrandId, ProductId, Timestamp};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),

    /// A stored row could not be turned into a record.
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a corrupt record error.
    #[must_use]
    pub fn corrupt_record(msg: impl Into<String>) -> Self {
        Self::CorruptRecord(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if the store could not be reached.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result type for store operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read-only source of price records.
#[async_trait]
pub trait PriceStore: Send + Sync + fmt::Debug {
    /// Returns the winning record for `(brand, product)` at `instant`.
    ///
    /// Implementations filter with inclusive bounds and rank with
    /// [`resolution_order`](crate::domain::services::resolution_order).
    /// Returns `None` when nothing applies.
    async fn find_best_match(
        &self,
        brand_id: BrandId,
        product_id: ProductId,
        instant: Timestamp,
    ) -> RepositoryResult<Option<PriceRecord>>;

    /// Returns every record for `(brand, product)` with
    /// `start_date <= instant <= end_date`, in storage order.
    async fn find_all_applicable(
        &self,
        brand_id: BrandId,
        product_id: ProductId,
        instant: Timestamp,
    ) -> RepositoryResult<Vec<PriceRecord>>;

    /// Returns every record the store holds, unfiltered.
    async fn find_all(&self) -> RepositoryResult<Vec<PriceRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_is_unavailable() {
        let err = RepositoryError::connection("pool timed out");
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("pool timed out"));
    }

    #[test]
    fn query_error_is_not_unavailable() {
        let err = RepositoryError::query("syntax error");
        assert!(!err.is_unavailable());
        assert!(err.to_string().starts_with("Query error"));
    }

    #[test]
    fn corrupt_record_display() {
        let err = RepositoryError::corrupt_record("start after end");
        assert!(err.to_string().contains("Corrupt record"));
    }
}
