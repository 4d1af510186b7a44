//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for the Rating Producer.

mod in_memory_transport;

pub use in_memory_transport::{Envelope, InMemoryTransport};
