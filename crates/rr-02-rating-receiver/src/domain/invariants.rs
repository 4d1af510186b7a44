//! # Domain Invariants
//!
//! Ingress checks and the freshness rule shared by ingestion and reads.

use super::errors::ReceiverError;
use shared_types::{DomainId, Timestamp, Word, MAX_TIER, U256};

/// Invariant: the sender is the trust anchor for its origin.
///
/// An unset anchor trusts nobody.
pub fn invariant_trusted_sender(
    origin: DomainId,
    anchor: Option<&Word>,
    sender: Word,
) -> Result<(), ReceiverError> {
    match anchor {
        Some(expected) if *expected == sender => Ok(()),
        _ => Err(ReceiverError::UnauthorizedSender {
            origin,
            sender,
            expected: anchor.copied(),
        }),
    }
}

/// Invariant: the source timestamp is not ahead of the receiver clock.
///
/// Returns the timestamp narrowed to seconds.
pub fn invariant_not_future(source_timestamp: U256, now: Timestamp) -> Result<Timestamp, ReceiverError> {
    if source_timestamp > U256::from(now) {
        return Err(ReceiverError::FutureTimestamp {
            source_timestamp,
            now,
        });
    }
    Ok(source_timestamp.low_u64())
}

/// Invariant: tier within `0..=100`.
pub fn invariant_tier_in_range(tier: u8) -> Result<(), ReceiverError> {
    if tier > MAX_TIER {
        return Err(ReceiverError::InvalidTier { tier });
    }
    Ok(())
}

/// Age strictly beyond the window is stale. Equal to the window is fresh.
pub fn is_stale(source_timestamp: Timestamp, now: Timestamp, window_secs: u64) -> bool {
    now.saturating_sub(source_timestamp) > window_secs
}
