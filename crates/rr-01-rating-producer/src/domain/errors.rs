//! # Domain Errors
//!
//! Error types for the Rating Producer.

use crate::ports::TransportError;
use shared_types::{AccessError, Address, DomainId};
use thiserror::Error;

/// Rating producer error types.
#[derive(Debug, Error)]
pub enum ProducerError {
    /// Administrative call from someone other than the owner.
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AccessError),

    /// Send attempted by an identity outside the rater set.
    #[error("Caller {caller:?} is not an authorized rater")]
    NotRater {
        /// Rejected caller
        caller: Address,
    },

    /// Score above 100.
    #[error("Invalid score: {score} > 100")]
    InvalidScore {
        /// Offending score
        score: u8,
    },

    /// No recipient set for the destination domain.
    #[error("Route not configured for domain {domain}")]
    RouteNotConfigured {
        /// Destination domain
        domain: DomainId,
    },

    /// Batch arrays differ in length.
    #[error("Array mismatch: {subjects} subjects vs {scores} scores")]
    ArrayMismatch {
        /// Number of subjects
        subjects: usize,
        /// Number of scores
        scores: usize,
    },

    /// Batch has no entries.
    #[error("Empty batch")]
    EmptyBatch,

    /// Transport refused a dispatch or quote.
    ///
    /// The only batch failure that is not all-or-nothing: entries handed to
    /// the transport before the fault stay dispatched and counted in
    /// `total_ratings_sent`, and `dispatched` reports how many.
    #[error("Transport failed after {dispatched} dispatches: {source}")]
    Transport {
        /// Messages already handed to the transport in this call
        dispatched: usize,
        /// Underlying transport error
        source: TransportError,
    },

    /// Snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for ProducerError {
    fn from(e: bincode::Error) -> Self {
        ProducerError::Snapshot(e.to_string())
    }
}
