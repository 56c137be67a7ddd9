//! # In-Memory Store
//!
//! In-memory implementation for tests and the default server profile.
//!
//! Uses `Arc<RwLock<Vec<_>>>` for thread-safe access.

pub mod price_store;

pub use price_store::{InMemoryPriceStore, reference_prices};
