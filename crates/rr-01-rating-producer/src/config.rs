//! # Producer Configuration

use serde::{Deserialize, Serialize};
use shared_types::{AccessError, Address};

/// Rating producer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerConfig {
    /// Deploying administrator. Owns the routing table and the rater set,
    /// and is a rater from construction.
    pub owner: Address,
}

impl ProducerConfig {
    /// Create a config owned by `owner`.
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self {
            owner: Address::repeat_byte(0xA1),
        }
    }

    /// Reject a zero owner.
    pub fn validate(&self) -> Result<(), AccessError> {
        if self.owner.is_zero() {
            return Err(AccessError::ZeroOwner);
        }
        Ok(())
    }
}
