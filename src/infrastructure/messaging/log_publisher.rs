//! # Log Publisher
//!
//! Publishers that never leave the process: one writes each event as a
//! structured log line, the other drops it.

use crate::domain::entities::PriceRecord;
use crate::domain::events::{DomainEvent, PriceRetrieved};
use crate::infrastructure::messaging::traits::{
    PriceEventPublisher, PublishError, PublishResult,
};
use async_trait::async_trait;
use tracing::info;

/// Writes each event as JSON to the `price_events` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPriceEventPublisher;

impl LogPriceEventPublisher {
    /// Creates the publisher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PriceEventPublisher for LogPriceEventPublisher {
    async fn publish_price_retrieved(&self, record: &PriceRecord) -> PublishResult<()> {
        let event = PriceRetrieved::from_record(record);
        let payload = serde_json::to_string(&event)
            .map_err(|e| PublishError::serialization(e.to_string()))?;

        info!(
            target: "price_events",
            event_id = %event.event_id(),
            key = %event.partition_key(),
            event_type = %event.event_type(),
            payload = %payload,
            "price event published"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}

/// Discards every event. Used when notifications are disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPriceEventPublisher;

#[async_trait]
impl PriceEventPublisher for NoopPriceEventPublisher {
    async fn publish_price_retrieved(&self, _record: &PriceRecord) -> PublishResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
