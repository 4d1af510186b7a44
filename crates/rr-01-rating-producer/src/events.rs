//! Audit events emitted by the Rating Producer.

use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainId, Timestamp, Word, U256};

/// Producer audit event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProducerEvent {
    /// Identity joined the rater set.
    RaterAuthorized {
        /// New rater
        rater: Address,
    },
    /// Identity left the rater set.
    RaterRevoked {
        /// Removed rater
        rater: Address,
    },
    /// Route changed. A zero recipient means the route was cleared.
    DestinationRecipientSet {
        /// Destination domain
        domain: DomainId,
        /// New recipient
        recipient: Word,
    },
    /// One rating handed to the transport.
    RatingSent {
        /// Destination domain
        destination: DomainId,
        /// Rated borrower
        subject: Address,
        /// Score sent
        score: u8,
        /// Producer clock at build time
        source_timestamp: Timestamp,
        /// Transport message id
        message_id: Word,
        /// Fee forwarded with this message
        fee: U256,
    },
    /// A whole batch was handed to the transport.
    RatingBatchSent {
        /// Destination domain
        destination: DomainId,
        /// Number of entries
        count: usize,
        /// Fee forwarded with each entry
        fee_per_entry: U256,
        /// Fee not forwarded to any entry
        unallocated_fee: U256,
    },
    /// Owner changed.
    OwnershipTransferred {
        /// Previous owner
        previous: Address,
        /// New owner
        new: Address,
    },
}
