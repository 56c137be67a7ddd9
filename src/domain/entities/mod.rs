//! # Domain Entities
//!
//! ## Entities
//!
//! - [`PriceRecord`]: time-bounded price-list entry

pub mod price_record;

pub use price_record::{PriceRecord, PriceRecordBuilder};
