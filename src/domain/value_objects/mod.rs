//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`BrandId`], [`ProductId`], [`PriceListId`]: integer identifiers
//!
//! ## Time
//!
//! - [`Timestamp`]: zone-less price-list instant
//! - [`ValidityWindow`]: inclusive `[start, end]` range
//!
//! ## Money
//!
//! - [`Money`]: exact decimal amount with a [`Currency`]

pub mod ids;
pub mod money;
pub mod timestamp;
pub mod validity_window;

pub use ids::{BrandId, PriceListId, ProductId};
pub use money::{Currency, Money};
pub use timestamp::Timestamp;
pub use validity_window::ValidityWindow;
