//! # Domain Layer
//!
//! Price records, the resolution rule and pricing events. Nothing in here
//! performs I/O.

pub mod entities;
pub mod errors;
pub mod events;
pub mod services;
pub mod value_objects;
