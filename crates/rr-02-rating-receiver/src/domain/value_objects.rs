//! # Domain Value Objects
//!
//! Terminal outcomes of an inbound delivery.

use serde::{Deserialize, Serialize};

/// Why a committed delivery was not stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Fingerprint already in the ledger.
    Replay,
    /// Score above 100. Fingerprint consumed.
    InvalidScore {
        /// Offending score
        score: u8,
    },
    /// Older than the freshness window on arrival. Fingerprint consumed.
    Stale {
        /// Seconds between source timestamp and arrival
        age: u64,
        /// Window in force at arrival
        window: u64,
    },
}

impl Rejection {
    /// Whether this rejection consumed the fingerprint.
    pub fn consumed_fingerprint(&self) -> bool {
        !matches!(self, Rejection::Replay)
    }
}

/// Terminal state of one delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// Rating stored.
    Accepted,
    /// Delivery committed without storing a rating.
    Rejected(Rejection),
}
