//! # Receiver Configuration

use crate::domain::{
    invariant_tier_in_range, ReceiverError, DEFAULT_FRESHNESS_WINDOW_SECS, DEFAULT_TIER,
};
use serde::{Deserialize, Serialize};
use shared_types::{AccessError, Address};

/// Rating receiver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverConfig {
    /// Deploying administrator.
    pub owner: Address,
    /// Identity allowed to call `handle`. `None` rejects every delivery.
    #[serde(default)]
    pub transport_endpoint: Option<Address>,
    /// Maximum rating age in seconds (default: 24 hours).
    #[serde(default = "default_freshness_window")]
    pub freshness_window_secs: u64,
    /// Tier for subjects without a fresh rating (default: 40).
    #[serde(default = "default_tier")]
    pub default_tier: u8,
}

fn default_freshness_window() -> u64 {
    DEFAULT_FRESHNESS_WINDOW_SECS
}

fn default_tier() -> u8 {
    DEFAULT_TIER
}

impl ReceiverConfig {
    /// Create a config owned by `owner` with default policy.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            transport_endpoint: None,
            freshness_window_secs: DEFAULT_FRESHNESS_WINDOW_SECS,
            default_tier: DEFAULT_TIER,
        }
    }

    /// Create a config for testing.
    pub fn for_testing() -> Self {
        Self {
            transport_endpoint: Some(Address::repeat_byte(0xC3)),
            ..Self::new(Address::repeat_byte(0xA2))
        }
    }

    /// Set the transport endpoint.
    pub fn with_transport_endpoint(mut self, endpoint: Address) -> Self {
        self.transport_endpoint = Some(endpoint);
        self
    }

    /// Reject a zero owner or a tier above 100.
    pub fn validate(&self) -> Result<(), ReceiverError> {
        if self.owner.is_zero() {
            return Err(AccessError::ZeroOwner.into());
        }
        invariant_tier_in_range(self.default_tier)
    }
}
