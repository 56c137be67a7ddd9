//! # Price Query Service
//!
//! Answers "what price applies" questions against a [`PriceStore`] and emits
//! a "price retrieved" notification for every record it hands back.
//!
//! Notification is best-effort. Publishes run in spawned tasks, each bounded
//! by [`QueryServiceConfig::publish_timeout`], so a hung or panicking
//! publisher delays the caller by at most one timeout. Failures are logged
//! and dropped, never surfaced to the caller. Store failures, on the other
//! hand, propagate unchanged.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::PriceRecord;
use crate::domain::errors::DomainError;
use crate::domain::services::select_best;
use crate::domain::value_objects::{BrandId, ProductId, Timestamp};
use crate::infrastructure::messaging::{PriceEventPublisher, PublishError};
use crate::infrastructure::persistence::PriceStore;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, instrument, warn};

/// Configuration for the query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryServiceConfig {
    /// Upper bound on each notification; the caller never waits longer than
    /// this for the notifier.
    pub publish_timeout: Duration,
}

impl Default for QueryServiceConfig {
    fn default() -> Self {
        Self {
            publish_timeout: Duration::from_millis(2000),
        }
    }
}

impl QueryServiceConfig {
    /// Creates a configuration with the given publish timeout.
    #[must_use]
    pub fn with_publish_timeout(publish_timeout: Duration) -> Self {
        Self { publish_timeout }
    }
}

/// Price lookups plus best-effort notification.
///
/// Cheap to clone; collaborators are shared.
#[derive(Clone)]
pub struct PriceQueryService {
    store: Arc<dyn PriceStore>,
    publisher: Arc<dyn PriceEventPublisher>,
    config: QueryServiceConfig,
}

impl PriceQueryService {
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(store: Arc<dyn PriceStore>, publisher: Arc<dyn PriceEventPublisher>) -> Self {
        Self::with_config(store, publisher, QueryServiceConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub fn with_config(
        store: Arc<dyn PriceStore>,
        publisher: Arc<dyn PriceEventPublisher>,
        config: QueryServiceConfig,
    ) -> Self {
        Self {
            store,
            publisher,
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &QueryServiceConfig {
        &self.config
    }

    /// Resolves the price for `(brand_id, product_id)` at `at`, letting the
    /// store pick the best match.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::PriceNotFound` if the store has no match
    /// - `ApplicationError::Store` if the store fails
    #[instrument(
        name = "get_final_price",
        skip_all,
        fields(brand_id = %brand_id, product_id = %product_id, at = %at)
    )]
    pub async fn get_final_price(
        &self,
        at: Timestamp,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> ApplicationResult<PriceRecord> {
        let record = self
            .store
            .find_best_match(brand_id, product_id, at)
            .await?
            .ok_or_else(|| ApplicationError::price_not_found(brand_id, product_id, Some(at)))?;

        debug!(price_list = %record.price_list_id(), "best match resolved by store");
        self.notify(&record).await;
        Ok(record)
    }

    /// Resolves the price for `(brand_id, product_id)` at `at` by fetching
    /// every candidate and selecting in-process.
    ///
    /// Candidates the store returns outside the window, or for another
    /// brand or product, are discarded before selection.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::PriceNotFound` if nothing applies
    /// - `ApplicationError::Store` if the store fails
    #[instrument(
        name = "get_final_price_with_convention",
        skip_all,
        fields(brand_id = %brand_id, product_id = %product_id, at = %at)
    )]
    pub async fn get_final_price_with_convention(
        &self,
        at: Timestamp,
        product_id: ProductId,
        brand_id: BrandId,
    ) -> ApplicationResult<PriceRecord> {
        let candidates = self
            .store
            .find_all_applicable(brand_id, product_id, at)
            .await?;

        let fetched = candidates.len();
        let applicable: Vec<PriceRecord> = candidates
            .into_iter()
            .filter(|r| r.is_for(brand_id, product_id) && r.applies_at(at))
            .collect();
        if applicable.len() < fetched {
            warn!(
                discarded = fetched - applicable.len(),
                "store returned candidates that do not apply"
            );
        }

        let record = select_best(&applicable).map_err(|e| match e {
            DomainError::NoPriceAvailable => {
                ApplicationError::price_not_found(brand_id, product_id, Some(at))
            }
            other => ApplicationError::Domain(other),
        })?;

        debug!(
            candidates = applicable.len(),
            price_list = %record.price_list_id(),
            "highest priority candidate selected"
        );
        self.notify(&record).await;
        Ok(record)
    }

    /// Returns every record the store holds, in store order, notifying once
    /// per record. Notifications run concurrently.
    ///
    /// # Errors
    ///
    /// `ApplicationError::Store` if the store fails.
    #[instrument(name = "list_all_prices", skip_all)]
    pub async fn list_all_prices(&self) -> ApplicationResult<Vec<PriceRecord>> {
        let records = self.store.find_all().await?;
        debug!(count = records.len(), "listing all prices");

        self.notify_all(&records).await;
        Ok(records)
    }

    async fn notify(&self, record: &PriceRecord) {
        self.notify_all(std::slice::from_ref(record)).await;
    }

    /// Publishes one event per record, concurrently.
    ///
    /// Each publish runs in its own task under `publish_timeout`, so the
    /// caller waits at most one timeout regardless of how many records there
    /// are. Errors, timeouts and panics in the publisher are logged only.
    async fn notify_all(&self, records: &[PriceRecord]) {
        let limit = self.config.publish_timeout;
        let timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
        let publisher_name = self.publisher.name();
        let mut handles = Vec::with_capacity(records.len());

        for record in records {
            let publisher = Arc::clone(&self.publisher);
            let record = record.clone();

            let handle = tokio::spawn(async move {
                let outcome = timeout(limit, publisher.publish_price_retrieved(&record))
                    .await
                    .unwrap_or_else(|_| Err(PublishError::timeout(timeout_ms)));
                (record.price_list_id(), outcome)
            });

            handles.push(handle);
        }

        for handle in handles {
            match handle.await {
                Ok((price_list, Ok(()))) => debug!(
                    publisher = publisher_name,
                    price_list = %price_list,
                    "price event published"
                ),
                Ok((price_list, Err(error))) => warn!(
                    publisher = publisher_name,
                    price_list = %price_list,
                    %error,
                    "price event dropped"
                ),
                Err(join_error) => error!(
                    publisher = publisher_name,
                    error = %join_error,
                    "price event publisher task failed"
                ),
            }
        }
    }
}

impl fmt::Debug for PriceQueryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceQueryService")
            .field("store", &self.store)
            .field("publisher", &self.publisher.name())
            .field("config", &self.config)
            .finish()
    }
}
