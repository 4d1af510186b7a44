//! # Batch Planning
//!
//! Fee splitting and payload construction for batch sends.

use shared_types::{Address, RatingPayload, Timestamp, U256};

/// Even split of a batch fee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    /// Fee forwarded with each entry.
    pub per_entry: U256,
    /// Left over after integer division. Not forwarded to any entry.
    pub remainder: U256,
}

/// Split `total` evenly across `entries` by integer division.
///
/// The remainder is reported, not distributed. Zero entries yields a zero
/// share and the whole fee as remainder.
pub fn split_fee(total: U256, entries: usize) -> FeeSplit {
    if entries == 0 {
        return FeeSplit {
            per_entry: U256::zero(),
            remainder: total,
        };
    }
    let n = U256::from(entries as u64);
    FeeSplit {
        per_entry: total / n,
        remainder: total % n,
    }
}

/// Pair subjects with scores under one shared timestamp.
///
/// Callers check the shape first; extra elements on either side are ignored.
pub fn build_batch_payloads(
    subjects: &[Address],
    scores: &[u8],
    now: Timestamp,
) -> Vec<RatingPayload> {
    subjects
        .iter()
        .zip(scores)
        .map(|(subject, score)| RatingPayload::new(*subject, *score, now))
        .collect()
}
