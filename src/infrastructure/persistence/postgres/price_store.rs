//! # PostgreSQL Price Store
//!
//! PostgreSQL implementation of [`PriceStore`] using sqlx.
//!
//! Reads the `prices` table:
//!
//! | column       | type        |
//! |--------------|-------------|
//! | `brand_id`   | `INTEGER`   |
//! | `start_date` | `TIMESTAMP` |
//! | `end_date`   | `TIMESTAMP` |
//! | `price_list` | `INTEGER`   |
//! | `product_id` | `BIGINT`    |
//! | `priority`   | `INTEGER`   |
//! | `price`      | `NUMERIC`   |
//! | `curr`       | `VARCHAR`   |
//!
//! Best-match resolution happens in SQL with the same ordering as
//! [`resolution_order`](crate::domain::services::resolution_order).

use crate::domain::entities::PriceRecord;
use crate::domain::value_objects::{BrandId, Currency, PriceListId, ProductId, Timestamp};
use crate::infrastructure::persistence::traits::{PriceStore, RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

const SELECT_COLUMNS: &str =
    "SELECT brand_id, start_date, end_date, price_list, product_id, priority, price, curr FROM prices";

/// PostgreSQL implementation of [`PriceStore`].
///
/// # Examples
///
/// ```ignore
/// use sqlx::PgPool;
/// use price_resolver::infrastructure::persistence::postgres::PostgresPriceStore;
///
/// let pool = PgPool::connect("postgres://...").await?;
/// let store = PostgresPriceStore::new(pool);
/// ```
#[derive(Debug, Clone)]
pub struct PostgresPriceStore {
    pool: PgPool,
}

impl PostgresPriceStore {
    /// Creates a store over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the pool cannot be created.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> RepositoryResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(database_url)
            .await
            .map_err(|e| RepositoryError::connection(e.to_string()))?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PriceStore for PostgresPriceStore {
    async fn find_best_match(
        &self,
        brand_id: BrandId,
        product_id: ProductId,
        instant: Timestamp,
    ) -> RepositoryResult<Option<PriceRecord>> {
        let sql = format!(
            "{SELECT_COLUMNS} \
             WHERE brand_id = $1 AND product_id = $2 \
               AND start_date <= $3 AND end_date >= $3 \
             ORDER BY priority DESC, start_date DESC, price_list DESC \
             LIMIT 1"
        );

        let row: Option<PriceRow> = sqlx::query_as(&sql)
            .bind(brand_id.get())
            .bind(product_id.get())
            .bind(instant.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(PriceRow::try_into_record).transpose()
    }

    async fn find_all_applicable(
        &self,
        brand_id: BrandId,
        product_id: ProductId,
        instant: Timestamp,
    ) -> RepositoryResult<Vec<PriceRecord>> {
        let sql = format!(
            "{SELECT_COLUMNS} \
             WHERE brand_id = $1 AND product_id = $2 \
               AND start_date <= $3 AND end_date >= $3"
        );

        let rows: Vec<PriceRow> = sqlx::query_as(&sql)
            .bind(brand_id.get())
            .bind(product_id.get())
            .bind(instant.get())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(PriceRow::try_into_record).collect()
    }

    async fn find_all(&self) -> RepositoryResult<Vec<PriceRecord>> {
        let rows: Vec<PriceRow> = sqlx::query_as(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(PriceRow::try_into_record).collect()
    }
}

fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match error {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::connection(error.to_string())
        }
        other => RepositoryError::query(other.to_string()),
    }
}

/// Row type for price queries.
#[derive(Debug, Clone, sqlx::FromRow)]
struct PriceRow {
    brand_id: i32,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
    price_list: i32,
    product_id: i64,
    priority: i32,
    price: Decimal,
    curr: String,
}

impl PriceRow {
    /// Converts the row into a PriceRecord.
    fn try_into_record(self) -> RepositoryResult<PriceRecord> {
        PriceRecord::new(
            BrandId::new(self.brand_id),
            ProductId::new(self.product_id),
            PriceListId::new(self.price_list),
            Timestamp::new(self.start_date),
            Timestamp::new(self.end_date),
            self.priority,
            self.price,
            Currency::new(&self.curr),
        )
        .map_err(|e| RepositoryError::corrupt_record(e.to_string()))
    }
}
