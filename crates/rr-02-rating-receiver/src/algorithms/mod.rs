//! # Algorithms Module
//!
//! Score to LTV tier mapping.

pub mod tiering;

pub use tiering::{effective_ltv, score_to_ltv, RiskBand};
