//! # LTV Tiering
//!
//! Maps a fresh score to a loan-to-value tier.
//!
//! | Score | Band | LTV |
//! |-------|------|-----|
//! | 80..=100 | Prime | 75% |
//! | 50..=79 | Standard | 60% |
//! | 0..=49 | Subprime | 40% |
//!
//! A subject with no rating, or a stale one, gets the configured default tier.

use crate::domain::{is_stale, Rating};
use serde::{Deserialize, Serialize};
use shared_types::Timestamp;

/// Lower bound of the prime band.
pub const PRIME_THRESHOLD: u8 = 80;

/// Lower bound of the standard band.
pub const STANDARD_THRESHOLD: u8 = 50;

/// Risk band derived from a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    /// Score 80 or above.
    Prime,
    /// Score 50 to 79.
    Standard,
    /// Score below 50.
    Subprime,
}

impl RiskBand {
    /// Classify a score.
    pub fn from_score(score: u8) -> Self {
        if score >= PRIME_THRESHOLD {
            RiskBand::Prime
        } else if score >= STANDARD_THRESHOLD {
            RiskBand::Standard
        } else {
            RiskBand::Subprime
        }
    }

    /// LTV tier in percent.
    pub fn ltv_percent(&self) -> u8 {
        match self {
            RiskBand::Prime => 75,
            RiskBand::Standard => 60,
            RiskBand::Subprime => 40,
        }
    }
}

/// LTV tier for a fresh score.
pub fn score_to_ltv(score: u8) -> u8 {
    RiskBand::from_score(score).ltv_percent()
}

/// LTV tier for a subject at `now`, falling back to `default_tier`.
pub fn effective_ltv(
    rating: Option<&Rating>,
    now: Timestamp,
    window_secs: u64,
    default_tier: u8,
) -> u8 {
    match rating {
        Some(r) if !is_stale(r.source_timestamp, now, window_secs) => score_to_ltv(r.score),
        _ => default_tier,
    }
}
