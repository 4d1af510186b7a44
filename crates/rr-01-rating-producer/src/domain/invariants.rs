//! # Domain Invariants
//!
//! Checks that must pass before anything is handed to the transport.

use super::errors::ProducerError;
use shared_types::{is_valid_score, Address, DomainId, Word};

/// Invariant: score within `0..=100`.
pub fn invariant_score_in_range(score: u8) -> Result<(), ProducerError> {
    if !is_valid_score(score) {
        return Err(ProducerError::InvalidScore { score });
    }
    Ok(())
}

/// Invariant: batch arrays pair up and are non-empty.
///
/// Length mismatch is reported before emptiness.
pub fn invariant_batch_shape(subjects: &[Address], scores: &[u8]) -> Result<(), ProducerError> {
    if subjects.len() != scores.len() {
        return Err(ProducerError::ArrayMismatch {
            subjects: subjects.len(),
            scores: scores.len(),
        });
    }
    if subjects.is_empty() {
        return Err(ProducerError::EmptyBatch);
    }
    Ok(())
}

/// Invariant: destination has a non-zero recipient.
pub fn invariant_route_configured(
    domain: DomainId,
    recipient: Option<&Word>,
) -> Result<Word, ProducerError> {
    match recipient {
        Some(recipient) if !recipient.is_zero() => Ok(*recipient),
        _ => Err(ProducerError::RouteNotConfigured { domain }),
    }
}
