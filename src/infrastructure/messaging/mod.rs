//! # Messaging
//!
//! Notifier port and its adapters.
//!
//! - [`PriceEventPublisher`]: the port the query service calls
//! - [`LogPriceEventPublisher`]: structured log sink (default)
//! - [`NoopPriceEventPublisher`]: drops events
//! - `NatsPriceEventPublisher`: NATS subject, behind the `nats` feature

pub mod log_publisher;
#[cfg(feature = "nats")]
pub mod nats;
pub mod traits;

pub use log_publisher::{LogPriceEventPublisher, NoopPriceEventPublisher};
#[cfg(feature = "nats")]
pub use nats::NatsPriceEventPublisher;
pub use traits::{PriceEventPublisher, PublishError, PublishResult};
