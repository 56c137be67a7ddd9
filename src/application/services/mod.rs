//! # Application Services
//!
//! - [`PriceQueryService`]: price lookups with best-effort notification

pub mod price_query;

pub use price_query::{PriceQueryService, QueryServiceConfig};
