//! # NATS Publisher
//!
//! Publishes price events to a NATS subject. Enabled with the `nats` feature.
//!
//! Each message carries the JSON-encoded [`PriceRetrieved`] payload, the
//! partition key in a `Price-Key` header and the event id in `Nats-Msg-Id`
//! so JetStream consumers can de-duplicate. The publish returns once the
//! message is handed to the client; no delivery acknowledgement is awaited.

use crate::domain::entities::PriceRecord;
use crate::domain::events::{DomainEvent, PriceRetrieved};
use crate::infrastructure::messaging::traits::{
    PriceEventPublisher, PublishError, PublishResult,
};
use async_trait::async_trait;
use tracing::debug;

/// NATS-backed [`PriceEventPublisher`].
#[derive(Debug, Clone)]
pub struct NatsPriceEventPublisher {
    client: async_nats::Client,
    subject: String,
}

impl NatsPriceEventPublisher {
    /// Wraps a connected client.
    #[must_use]
    pub fn new(client: async_nats::Client, subject: impl Into<String>) -> Self {
        Self {
            client,
            subject: subject.into(),
        }
    }

    /// Connects to `url` and publishes on `subject`.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::Transport` if the connection fails.
    pub async fn connect(url: &str, subject: impl Into<String>) -> PublishResult<Self> {
        let client = async_nats::connect(url)
            .await
            .map_err(|e| PublishError::transport(e.to_string()))?;
        Ok(Self::new(client, subject))
    }

    /// Subject events are published on.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

#[async_trait]
impl PriceEventPublisher for NatsPriceEventPublisher {
    async fn publish_price_retrieved(&self, record: &PriceRecord) -> PublishResult<()> {
        let event = PriceRetrieved::from_record(record);
        let payload =
            serde_json::to_vec(&event).map_err(|e| PublishError::serialization(e.to_string()))?;

        let mut headers = async_nats::HeaderMap::new();
        headers.insert("Nats-Msg-Id", event.event_id().to_string().as_str());
        headers.insert("Price-Key", event.partition_key().as_str());

        self.client
            .publish_with_headers(self.subject.clone(), headers, payload.into())
            .await
            .map_err(|e| PublishError::transport(e.to_string()))?;

        debug!(subject = %self.subject, key = %event.partition_key(), "price event sent");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "nats"
    }
}
