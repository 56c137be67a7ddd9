//! # Domain Event Trait
//!
//! Base trait for events emitted by the pricing core.

use crate::domain::value_objects::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Kind of pricing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// A price was resolved and returned to a caller.
    PriceRetrieved,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PriceRetrieved => write!(f, "PRICE_RETRIEVED"),
        }
    }
}

/// Trait for all domain events.
///
/// Events are immutable records of something that happened; publishers only
/// need the identity, kind and a partition key to route them.
pub trait DomainEvent: Send + Sync + fmt::Debug {
    /// Unique identifier for this event.
    fn event_id(&self) -> Uuid;

    /// When this event occurred.
    fn occurred_at(&self) -> Timestamp;

    /// Kind of event.
    fn event_type(&self) -> EventType;

    /// Key used by ordered transports to partition events.
    fn partition_key(&self) -> String;
}
