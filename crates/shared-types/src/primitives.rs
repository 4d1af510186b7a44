//! # Primitives
//!
//! Identity, word and score types used on both sides of the relay.

pub use primitive_types::{H160, H256, U256};

/// 20-byte account identity (raters, owners, subjects, endpoints).
pub type Address = H160;

/// 32-byte word. Sender ids and recipients travel as words on the wire.
pub type Word = H256;

/// Numeric id of a source or destination trust domain.
pub type DomainId = u32;

/// Seconds since the Unix epoch.
pub type Timestamp = u64;

/// Highest valid risk score.
pub const MAX_SCORE: u8 = 100;

/// Highest valid LTV percentage.
pub const MAX_TIER: u8 = 100;

/// Left-pad a 20-byte identity into a 32-byte word.
pub fn address_to_word(address: Address) -> Word {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_bytes());
    H256(word)
}

/// Take the low 20 bytes of a word as an identity.
pub fn word_to_address(word: Word) -> Address {
    H160::from_slice(&word.as_bytes()[12..])
}

/// Check a score is within `0..=MAX_SCORE`.
pub fn is_valid_score(score: u8) -> bool {
    score <= MAX_SCORE
}
