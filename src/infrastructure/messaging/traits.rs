//! # Price Event Publisher Port
//!
//! Sink for "price retrieved" notifications.
//!
//! Publishing is best-effort: callers log a failure and carry on. Adapters
//! should still report failures truthfully so they show up in the logs.

use crate::domain::entities::PriceRecord;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for publish operations.
#[derive(Debug, Clone, Error)]
pub enum PublishError {
    /// The event could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The transport rejected or dropped the event.
    #[error("transport error: {0}")]
    Transport(String),

    /// The publish did not complete in time.
    #[error("publish timed out after {timeout_ms}ms")]
    Timeout {
        /// Limit that was exceeded.
        timeout_ms: u64,
    },
}

impl PublishError {
    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(timeout_ms: u64) -> Self {
        Self::Timeout { timeout_ms }
    }
}

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Publishes an event for each price handed back to a caller.
#[async_trait]
pub trait PriceEventPublisher: Send + Sync + fmt::Debug {
    /// Publishes a "price retrieved" event for `record`.
    async fn publish_price_retrieved(&self, record: &PriceRecord) -> PublishResult<()>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
