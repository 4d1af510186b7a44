//! # Outbound Ports
//!
//! The receiver depends on a clock and an audit sink only. Both ports are
//! shared with the producer and live in `shared-types`.

pub use shared_types::{AuditSink, TimeSource};
