//! # Domain Module
//!
//! Core domain types for the Rating Receiver.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod ledger;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use invariants::*;
pub use ledger::ProcessedLedger;
pub use value_objects::*;
