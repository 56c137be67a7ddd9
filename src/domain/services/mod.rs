//! # Domain Services
//!
//! Domain logic that doesn't naturally belong to a single entity.
//!
//! ## Services
//!
//! - [`price_resolution`]: highest-priority selection among applicable prices

pub mod price_resolution;

pub use price_resolution::{resolution_order, select_best, select_highest_priority};
