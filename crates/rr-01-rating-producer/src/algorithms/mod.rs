//! # Algorithms Module
//!
//! Batch planning for the Rating Producer.

pub mod batch;

pub use batch::{build_batch_payloads, split_fee, FeeSplit};
