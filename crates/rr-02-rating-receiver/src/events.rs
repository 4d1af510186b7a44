//! Audit events emitted by the Rating Receiver.

use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainId, Timestamp, Word};

/// Receiver audit event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceiverEvent {
    /// Rating stored for a subject.
    RatingAccepted {
        /// Origin domain
        origin: DomainId,
        /// Rated borrower
        subject: Address,
        /// Stored score
        score: u8,
        /// Producer clock at build time
        source_timestamp: Timestamp,
        /// Receiver clock on acceptance
        received_at: Timestamp,
        /// Message fingerprint
        fingerprint: Word,
    },
    /// Delivery already seen.
    ReplayRejected {
        /// Origin domain
        origin: DomainId,
        /// Subject named in the payload
        subject: Address,
        /// Message fingerprint
        fingerprint: Word,
    },
    /// Score above 100.
    InvalidScoreRejected {
        /// Origin domain
        origin: DomainId,
        /// Subject named in the payload
        subject: Address,
        /// Offending score
        score: u8,
        /// Message fingerprint
        fingerprint: Word,
    },
    /// Rating older than the freshness window on arrival.
    StaleRatingRejected {
        /// Origin domain
        origin: DomainId,
        /// Subject named in the payload
        subject: Address,
        /// Age in seconds
        age: u64,
        /// Window in force
        window: u64,
        /// Message fingerprint
        fingerprint: Word,
    },
    /// Trust anchor changed. A zero sender means it was cleared.
    AuthorizedSenderSet {
        /// Origin domain
        origin: DomainId,
        /// New trusted sender
        sender: Word,
    },
    /// Transport endpoint changed.
    TransportEndpointSet {
        /// New endpoint, `None` when unset
        endpoint: Option<Address>,
    },
    /// Freshness window changed.
    FreshnessWindowSet {
        /// Previous window
        previous: u64,
        /// New window
        new: u64,
    },
    /// Fallback tier changed.
    DefaultTierSet {
        /// Previous tier
        previous: u8,
        /// New tier
        new: u8,
    },
    /// Owner changed.
    OwnershipTransferred {
        /// Previous owner
        previous: Address,
        /// New owner
        new: Address,
    },
}
