//! # Integration Tests
//!
//! Producer and receiver wired through the in-memory transport.

mod adversarial;
mod delivery;
