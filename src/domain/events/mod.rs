//! # Domain Events
//!
//! Events emitted after pricing decisions, for downstream consumers.
//!
//! - [`PriceRetrieved`]: a price was resolved and returned

pub mod domain_event;
pub mod price_events;

pub use domain_event::{DomainEvent, EventType};
pub use price_events::PriceRetrieved;
