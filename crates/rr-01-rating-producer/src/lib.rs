//! # RR-01 Rating Producer
//!
//! Publishes risk ratings to remote trust domains through a transport.
//!
//! **Subsystem ID:** 1
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Gate sends on an owner-managed rater set
//! - Route each destination domain to a single recipient
//! - Build rating payloads and dispatch them with the caller's fee
//! - Split a batch fee evenly across entries
//!
//! ## Guarantees
//!
//! | Rule | Description |
//! |------|-------------|
//! | Score range | Scores above 100 never leave the producer |
//! | Batch atomicity | Shape, score and route are checked before the first dispatch |
//! | Explicit routing | An unset route is a rejection, never a silent no-op |
//! | Shared timestamp | All batch entries carry one capture of `now` |
//!
//! ## Module Structure
//!
//! ```text
//! rr-01-rating-producer/
//! ├── domain/          # DispatchReceipt, snapshot, errors, invariants
//! ├── algorithms/      # Fee split, batch payload building
//! ├── ports/           # RatingProducerApi (inbound), Transport (outbound)
//! ├── adapters/        # InMemoryTransport
//! ├── application/     # RatingProducerService
//! ├── events.rs        # ProducerEvent audit events
//! └── config.rs        # ProducerConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;

// Re-exports
pub use adapters::{Envelope, InMemoryTransport};
pub use algorithms::{build_batch_payloads, split_fee, FeeSplit};
pub use application::RatingProducerService;
pub use config::ProducerConfig;
pub use domain::{
    invariant_batch_shape, invariant_route_configured, invariant_score_in_range, BatchReceipt,
    DispatchReceipt, ProducerError, ProducerSnapshot,
};
pub use events::ProducerEvent;
pub use ports::{RatingProducerApi, Transport, TransportError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
