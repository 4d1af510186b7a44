//! # Risk Relay Test Suite
//!
//! End-to-end flows across both ends of the relay.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Relay harness: producer -> InMemoryTransport -> receiver
//! └── integration/
//!     ├── flows.rs      # Happy paths, batches, tiering scenario
//!     ├── delivery.rs   # Duplicate, reordered and delayed delivery
//!     └── adversarial.rs# Spoofed origins, senders and transports
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rr-tests
//! RUST_LOG=debug cargo test -p rr-tests integration::delivery:: -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p rr-tests
//! ```

pub mod integration;
