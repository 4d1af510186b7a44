//! # Domain Module
//!
//! Core domain types for the Rating Producer.

pub mod entities;
pub mod errors;
pub mod invariants;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
