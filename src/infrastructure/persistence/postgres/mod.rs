//! # PostgreSQL Store
//!
//! sqlx-backed implementation of the price store port.

pub mod price_store;

pub use price_store::PostgresPriceStore;
