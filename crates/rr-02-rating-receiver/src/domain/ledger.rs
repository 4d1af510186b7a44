//! # Processed Ledger
//!
//! Fingerprints of every delivery that reached the score/freshness checks.
//!
//! Grows monotonically. There is no eviction: a fingerprint, once recorded,
//! blocks that exact message from this origin forever.

use serde::{Deserialize, Serialize};
use shared_types::Word;
use std::collections::HashSet;

/// Set of consumed message fingerprints.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProcessedLedger {
    fingerprints: HashSet<Word>,
}

impl ProcessedLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a fingerprint was consumed.
    pub fn contains(&self, fingerprint: &Word) -> bool {
        self.fingerprints.contains(fingerprint)
    }

    /// Consume a fingerprint. Returns `false` if it was already present.
    pub fn record(&mut self, fingerprint: Word) -> bool {
        self.fingerprints.insert(fingerprint)
    }

    /// Number of consumed fingerprints.
    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    /// True when nothing was consumed yet.
    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}
