//! # Price Resolver
//!
//! Resolves the price that applies to a product of a brand at a given
//! instant, out of a set of time-bounded, prioritized price lists.
//!
//! # Architecture
//!
//! - [`domain`]: price records, validity windows and the resolution engine
//! - [`application`]: the query service (lookup plus best-effort notification)
//! - [`infrastructure`]: stores, event publishers, configuration, telemetry
//! - [`api`]: the REST surface
//!
//! # Resolution rule
//!
//! Among the records of a brand and product whose inclusive window contains
//! the instant, the highest `priority` wins. Ties go to the latest start
//! date, then the highest price list id, then the first record read.
//!
//! # Example
//!
//! ```
//! use price_resolver::application::PriceQueryService;
//! use price_resolver::domain::value_objects::{BrandId, ProductId, Timestamp};
//! use price_resolver::infrastructure::messaging::NoopPriceEventPublisher;
//! use price_resolver::infrastructure::persistence::in_memory::InMemoryPriceStore;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let store = InMemoryPriceStore::with_reference_prices().unwrap();
//! let service = PriceQueryService::new(Arc::new(store), Arc::new(NoopPriceEventPublisher));
//!
//! let at = Timestamp::from_ymd_hms(2020, 6, 14, 16, 0, 0).unwrap();
//! let price = service
//!     .get_final_price(at, ProductId::new(35455), BrandId::new(1))
//!     .await
//!     .unwrap();
//! assert_eq!(price.display_price(), "25.45 EUR");
//! # });
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
