//! # API Layer
//!
//! Transport adapters. Only REST is provided.

pub mod rest;
