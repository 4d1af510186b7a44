//! # Shared Types Crate
//!
//! Types both sides of the rating relay must agree on.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the payload layout and the message
//!   fingerprint are defined once, here.
//! - **Guarded Mutation**: registries can only be mutated with an
//!   [`AdminCapability`], which only [`Ownership::authorize`] can mint.
//! - **Injected Effects**: time and audit output go through ports
//!   ([`TimeSource`], [`AuditSink`]) so services stay deterministic in tests.

pub mod access;
pub mod audit;
pub mod errors;
pub mod payload;
pub mod primitives;
pub mod time;

pub use access::{AdminCapability, GuardedRegistry, GuardedSet, Ownership};
pub use audit::{AuditSink, InMemoryAuditLog, TracingAuditSink};
pub use errors::*;
pub use payload::{RatingPayload, PAYLOAD_LEN};
pub use primitives::*;
pub use time::{ManualClock, SystemTimeSource, TimeSource};
