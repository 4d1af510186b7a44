//! # Domain Entities
//!
//! Dispatch receipts and the durable producer snapshot.

use super::errors::ProducerError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, DomainId, GuardedRegistry, GuardedSet, Ownership, Timestamp, Word, U256};

/// Record of one rating handed to the transport.
///
/// The message id is for correlation only. It says nothing about delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReceipt {
    /// Transport-assigned message id.
    pub message_id: Word,
    /// Destination domain.
    pub destination: DomainId,
    /// Recipient the message was routed to.
    pub recipient: Word,
    /// Rated borrower.
    pub subject: Address,
    /// Score sent.
    pub score: u8,
    /// Producer clock captured when the payload was built.
    pub source_timestamp: Timestamp,
    /// Fee forwarded to the transport for this message.
    pub fee: U256,
}

/// Outcome of a batch send.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReceipt {
    /// One receipt per entry, in input order.
    pub receipts: Vec<DispatchReceipt>,
    /// Fee forwarded with each entry.
    pub fee_per_entry: U256,
    /// Part of the attached fee not forwarded to any entry.
    pub unallocated_fee: U256,
}

impl BatchReceipt {
    /// Number of dispatched entries.
    pub fn len(&self) -> usize {
        self.receipts.len()
    }

    /// True for a batch with no entries.
    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// Transport message ids, in input order.
    pub fn message_ids(&self) -> Vec<Word> {
        self.receipts.iter().map(|r| r.message_id).collect()
    }
}

/// Durable producer state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProducerSnapshot {
    /// Owner of the producer.
    pub ownership: Ownership,
    /// Identities allowed to send.
    pub raters: GuardedSet<Address>,
    /// Destination domain to recipient.
    pub routes: GuardedRegistry<DomainId, Word>,
    /// Ratings dispatched so far.
    pub total_ratings_sent: u64,
}

impl ProducerSnapshot {
    /// Encode with bincode.
    pub fn encode(&self) -> Result<Vec<u8>, ProducerError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProducerError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
