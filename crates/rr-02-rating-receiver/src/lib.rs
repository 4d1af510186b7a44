//! # RR-02 Rating Receiver
//!
//! Ingests risk ratings from remote trust domains and serves LTV tiers.
//!
//! **Subsystem ID:** 2
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Accept messages only from the registered transport endpoint
//! - Accept payloads only from the trusted sender of each origin domain
//! - Deduplicate deliveries through a fingerprint ledger
//! - Reject stale ratings at ingestion and expire them at read time
//! - Map scores to LTV tiers deterministically
//!
//! ## Ingress Pipeline
//!
//! | Step | Check | On failure |
//! |------|-------|------------|
//! | 0 | caller is the transport endpoint | `UnauthorizedTransport`, nothing written |
//! | 1 | sender is the origin's trust anchor | `UnauthorizedSender`, nothing written |
//! | 2 | payload decodes | `MalformedPayload`, nothing written |
//! | 3 | fingerprint unseen | `Replay` rejection, nothing written |
//! | 4 | score <= 100 | `InvalidScore` rejection, fingerprint consumed |
//! | 5 | age <= freshness window | `Stale` rejection, fingerprint consumed |
//! | 6 | - | rating stored, fingerprint consumed |
//!
//! A fingerprint consumed at step 4 or 5 can never be accepted later.
//!
//! ## Module Structure
//!
//! ```text
//! rr-02-rating-receiver/
//! ├── domain/          # Rating, Delivery, ProcessedLedger, errors, invariants
//! ├── algorithms/      # Score to tier mapping
//! ├── ports/           # RatingReceiverApi (inbound), clock/audit (outbound)
//! ├── application/     # RatingReceiverService
//! ├── events.rs        # ReceiverEvent audit events
//! └── config.rs        # ReceiverConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;

// Re-exports
pub use algorithms::{effective_ltv, score_to_ltv, RiskBand};
pub use application::RatingReceiverService;
pub use config::ReceiverConfig;
pub use domain::{
    invariant_not_future, invariant_tier_in_range, invariant_trusted_sender, is_stale, Delivery,
    DeliveryStatus, ProcessedLedger, Rating, RatingView, ReceiverError, ReceiverSnapshot,
    Rejection, DEFAULT_FRESHNESS_WINDOW_SECS, DEFAULT_TIER,
};
pub use events::ReceiverEvent;
pub use ports::RatingReceiverApi;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
