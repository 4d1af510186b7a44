//! # Rating Payload Codec
//!
//! Wire layout of a rating message and its fingerprint.
//!
//! ## Layout
//!
//! Three big-endian 32-byte words:
//!
//! ```text
//! [0..32)   12 zero bytes | subject (20)
//! [32..64)  31 zero bytes | score (1)
//! [64..96)  source timestamp (u256)
//! ```
//!
//! Decoding is strict: wrong length or non-zero padding is rejected.

use crate::errors::PayloadError;
use crate::primitives::{Address, DomainId, Word, H160, H256, U256};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// Encoded payload length in bytes.
pub const PAYLOAD_LEN: usize = 96;

const WORD: usize = 32;

/// Decoded rating message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingPayload {
    /// Borrower the rating is about.
    pub subject: Address,
    /// Raw score. Not range-checked by the codec.
    pub score: u8,
    /// Producer clock at build time.
    pub source_timestamp: U256,
}

impl RatingPayload {
    /// Build a payload from a producer-side `u64` timestamp.
    pub fn new(subject: Address, score: u8, source_timestamp: u64) -> Self {
        Self {
            subject,
            score,
            source_timestamp: U256::from(source_timestamp),
        }
    }

    /// Encode into the three-word layout.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![0u8; PAYLOAD_LEN];
        buf[12..WORD].copy_from_slice(self.subject.as_bytes());
        buf[2 * WORD - 1] = self.score;
        self.source_timestamp.to_big_endian(&mut buf[2 * WORD..]);
        buf
    }

    /// Decode from the three-word layout.
    pub fn decode(bytes: &[u8]) -> Result<Self, PayloadError> {
        if bytes.len() != PAYLOAD_LEN {
            return Err(PayloadError::InvalidLength {
                expected: PAYLOAD_LEN,
                got: bytes.len(),
            });
        }
        if bytes[..12].iter().any(|b| *b != 0) {
            return Err(PayloadError::DirtyPadding { word: 0 });
        }
        if bytes[WORD..2 * WORD - 1].iter().any(|b| *b != 0) {
            return Err(PayloadError::DirtyPadding { word: 1 });
        }

        Ok(Self {
            subject: H160::from_slice(&bytes[12..WORD]),
            score: bytes[2 * WORD - 1],
            source_timestamp: U256::from_big_endian(&bytes[2 * WORD..]),
        })
    }

    /// Digest identifying this message as delivered from `origin`.
    ///
    /// Keccak-256 over `subject | score | timestamp (32, BE) | origin (4, BE)`.
    pub fn fingerprint(&self, origin: DomainId) -> Word {
        let mut ts = [0u8; WORD];
        self.source_timestamp.to_big_endian(&mut ts);

        let mut hasher = Keccak256::new();
        hasher.update(self.subject.as_bytes());
        hasher.update([self.score]);
        hasher.update(ts);
        hasher.update(origin.to_be_bytes());
        H256::from_slice(&hasher.finalize())
    }
}
