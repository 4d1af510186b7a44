//! # Domain Errors
//!
//! Call-level failures for the Rating Receiver. Every variant means the call
//! changed nothing. Committed rejections (replay, bad score, stale) are not
//! errors; see [`super::Rejection`].

use shared_types::{AccessError, Address, DomainId, PayloadError, Timestamp, Word, U256};
use thiserror::Error;

/// Rating receiver error types.
#[derive(Debug, Error)]
pub enum ReceiverError {
    /// Administrative call from someone other than the owner.
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AccessError),

    /// `handle` invoked by something other than the transport endpoint.
    #[error("Unauthorized transport caller {caller:?}")]
    UnauthorizedTransport {
        /// Rejected caller
        caller: Address,
    },

    /// Sender is not the trust anchor for the origin domain.
    #[error("Unauthorized sender {sender:?} for origin {origin} (trusted: {expected:?})")]
    UnauthorizedSender {
        /// Origin domain
        origin: DomainId,
        /// Sender claimed by the transport
        sender: Word,
        /// Trust anchor for the origin, if any
        expected: Option<Word>,
    },

    /// Payload failed to decode.
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] PayloadError),

    /// Source timestamp is ahead of the receiver clock.
    #[error("Source timestamp {source_timestamp} is ahead of now ({now})")]
    FutureTimestamp {
        /// Timestamp carried by the payload
        source_timestamp: U256,
        /// Receiver clock
        now: Timestamp,
    },

    /// Tier above 100.
    #[error("Invalid tier: {tier} > 100")]
    InvalidTier {
        /// Offending tier
        tier: u8,
    },

    /// Snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for ReceiverError {
    fn from(e: bincode::Error) -> Self {
        ReceiverError::Snapshot(e.to_string())
    }
}
