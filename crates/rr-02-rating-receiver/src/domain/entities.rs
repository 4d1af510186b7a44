//! # Domain Entities
//!
//! Stored ratings, delivery outcomes and the durable receiver snapshot.

use super::errors::ReceiverError;
use super::ledger::ProcessedLedger;
use super::value_objects::{DeliveryStatus, Rejection};
use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainId, GuardedRegistry, Ownership, Timestamp, Word};
use std::collections::HashMap;

/// Default freshness window: 24 hours.
pub const DEFAULT_FRESHNESS_WINDOW_SECS: u64 = 24 * 3600;

/// Default (fallback) LTV tier in percent.
pub const DEFAULT_TIER: u8 = 40;

/// Latest accepted rating for a subject. No history is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Score in `0..=100`.
    pub score: u8,
    /// Producer clock when the rating was built.
    pub source_timestamp: Timestamp,
    /// Receiver clock when the rating was accepted.
    pub received_at: Timestamp,
}

/// Read model returned by `borrower_rating`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingView {
    /// Stored score, or 0.
    pub score: u8,
    /// Stored source timestamp, or 0.
    pub source_timestamp: Timestamp,
    /// Stored arrival time, or 0.
    pub received_at: Timestamp,
    /// A rating exists and is inside the freshness window now.
    pub is_valid: bool,
}

/// Result of a committed `handle` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Message fingerprint.
    pub fingerprint: Word,
    /// Origin domain.
    pub origin: DomainId,
    /// Subject named in the payload.
    pub subject: Address,
    /// Terminal state.
    pub status: DeliveryStatus,
}

impl Delivery {
    /// True if the rating was stored.
    pub fn is_accepted(&self) -> bool {
        self.status == DeliveryStatus::Accepted
    }

    /// Rejection reason, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self.status {
            DeliveryStatus::Accepted => None,
            DeliveryStatus::Rejected(reason) => Some(reason),
        }
    }
}

/// Durable receiver state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReceiverSnapshot {
    /// Owner of the receiver.
    pub ownership: Ownership,
    /// Identity allowed to call `handle`.
    pub transport_endpoint: Option<Address>,
    /// Origin domain to trusted sender.
    pub trusted_senders: GuardedRegistry<DomainId, Word>,
    /// Consumed fingerprints.
    pub ledger: ProcessedLedger,
    /// Latest rating per subject.
    pub ratings: HashMap<Address, Rating>,
    /// Maximum accepted age in seconds.
    pub freshness_window_secs: u64,
    /// Fallback LTV tier.
    pub default_tier: u8,
}

impl ReceiverSnapshot {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, ReceiverError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn decode(bytes: &[u8]) -> Result<Self, ReceiverError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
