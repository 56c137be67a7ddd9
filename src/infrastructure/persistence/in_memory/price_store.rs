//! # In-Memory Price Store
//!
//! In-memory implementation of [`PriceStore`].
//!
//! Backs the default server configuration and the test suite. Records are
//! kept in insertion order, which is the "storage order" reported by
//! [`PriceStore::find_all_applicable`] and [`PriceStore::find_all`].

use crate::domain::entities::PriceRecord;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::services::resolution_order;
use crate::domain::value_objects::{BrandId, Currency, PriceListId, ProductId, Timestamp};
use crate::infrastructure::persistence::traits::{PriceStore, RepositoryResult};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`PriceStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceStore {
    storage: Arc<RwLock<Vec<PriceRecord>>>,
}

impl InMemoryPriceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records`.
    #[must_use]
    pub fn with_records(records: Vec<PriceRecord>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(records)),
        }
    }

    /// Creates a store seeded with [`reference_prices`].
    ///
    /// # Errors
    ///
    /// Propagates a `DomainError` if the seed data is malformed.
    pub fn with_reference_prices() -> DomainResult<Self> {
        Ok(Self::with_records(reference_prices()?))
    }

    /// Appends a record.
    pub async fn insert(&self, record: PriceRecord) {
        self.storage.write().await.push(record);
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every record.
    pub async fn clear(&self) {
        self.storage.write().await.clear();
    }
}

#[async_trait]
impl PriceStore for InMemoryPriceStore {
    async fn find_best_match(
        &self,
        brand_id: BrandId,
        product_id: ProductId,
        instant: Timestamp,
    ) -> RepositoryResult<Option<PriceRecord>> {
        let storage = self.storage.read().await;
        // Reverse so that `max_by` keeps the first of a full tie, like the engine.
        Ok(storage
            .iter()
            .rev()
            .filter(|r| r.is_for(brand_id, product_id) && r.applies_at(instant))
            .max_by(|a, b| resolution_order(a, b))
            .cloned())
    }

    async fn find_all_applicable(
        &self,
        brand_id: BrandId,
        product_id: ProductId,
        instant: Timestamp,
    ) -> RepositoryResult<Vec<PriceRecord>> {
        let storage = self.storage.read().await;
        Ok(storage
            .iter()
            .filter(|r| r.is_for(brand_id, product_id) && r.applies_at(instant))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<PriceRecord>> {
        Ok(self.storage.read().await.clone())
    }
}

/// The canonical price list for brand 1, product 35455.
///
/// | list | window                                  | priority | price |
/// |------|-----------------------------------------|----------|-------|
/// | 1    | 2020-06-14 00:00:00 – 2020-12-31 23:59:59 | 0      | 35.50 |
/// | 2    | 2020-06-14 15:00:00 – 2020-06-14 18:30:00 | 1      | 25.45 |
/// | 3    | 2020-06-15 00:00:00 – 2020-06-15 11:00:00 | 1      | 30.50 |
/// | 4    | 2020-06-15 16:00:00 – 2020-12-31 23:59:59 | 1      | 38.95 |
///
/// # Errors
///
/// Returns a `DomainError` only if the table above is edited into an
/// inconsistent state.
pub fn reference_prices() -> DomainResult<Vec<PriceRecord>> {
    const ROWS: [(i32, &str, &str, i32, i64); 4] = [
        (1, "2020-06-14 00:00:00", "2020-12-31 23:59:59", 0, 3550),
        (2, "2020-06-14 15:00:00", "2020-06-14 18:30:00", 1, 2545),
        (3, "2020-06-15 00:00:00", "2020-06-15 11:00:00", 1, 3050),
        (4, "2020-06-15 16:00:00", "2020-12-31 23:59:59", 1, 3895),
    ];

    ROWS.iter()
        .map(|&(list, start, end, priority, cents)| {
            PriceRecord::new(
                BrandId::new(1),
                ProductId::new(35455),
                PriceListId::new(list),
                parse_seed_timestamp(start)?,
                parse_seed_timestamp(end)?,
                priority,
                Decimal::new(cents, 2),
                Currency::new("EUR"),
            )
        })
        .collect()
}

fn parse_seed_timestamp(raw: &str) -> DomainResult<Timestamp> {
    Timestamp::parse_canonical(raw)
        .map_err(|e| DomainError::invalid_timestamp(format!("{raw}: {e}")))
}
