//! # Persistence Layer
//!
//! Price store port and its adapters.
//!
//! ## Port
//!
//! - [`PriceStore`]: read-only access to price records
//!
//! ## Implementations
//!
//! - `in_memory`: in-memory store, seeded with the reference price list
//! - `postgres`: PostgreSQL store over the `prices` table

pub mod in_memory;
pub mod postgres;
pub mod traits;

pub use traits::{PriceStore, RepositoryError, RepositoryResult};
