//! # Application Layer
//!
//! Use cases over the domain: resolve a price, list prices, notify.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{PriceQueryService, QueryServiceConfig};
