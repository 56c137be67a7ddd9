//! # Infrastructure Layer
//!
//! Adapters for the ports the application layer consumes, plus process
//! concerns (configuration and telemetry).

pub mod config;
pub mod messaging;
pub mod persistence;
pub mod telemetry;
