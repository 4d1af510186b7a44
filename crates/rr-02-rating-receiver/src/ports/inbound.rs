//! # Inbound Ports
//!
//! API trait defining what the Rating Receiver can do.

use crate::domain::{Delivery, ReceiverError, RatingView};
use shared_types::{Address, DomainId, Word};

/// Rating receiver API - inbound port.
pub trait RatingReceiverApi {
    /// Ingest one delivery from the transport.
    ///
    /// `Ok` means the delivery was committed, either accepted or rejected
    /// (replay, bad score, stale). `Err` means nothing changed.
    fn handle(
        &mut self,
        caller: Address,
        origin: DomainId,
        sender: Word,
        payload: &[u8],
    ) -> Result<Delivery, ReceiverError>;

    /// LTV tier for `subject` now.
    fn borrower_ltv(&self, subject: Address) -> u8;

    /// Stored rating for `subject` with its current validity.
    fn borrower_rating(&self, subject: Address) -> RatingView;

    /// Set the trust anchor for `origin`. Owner only. Zero clears it.
    fn set_authorized_sender(
        &mut self,
        caller: Address,
        origin: DomainId,
        sender: Word,
    ) -> Result<(), ReceiverError>;

    /// Trust anchor for `origin`, if set.
    fn authorized_sender(&self, origin: DomainId) -> Option<Word>;

    /// Set the identity allowed to call `handle`. Owner only. Zero unsets it.
    fn set_transport_endpoint(
        &mut self,
        caller: Address,
        endpoint: Address,
    ) -> Result<(), ReceiverError>;

    /// Current transport endpoint.
    fn transport_endpoint(&self) -> Option<Address>;

    /// Change the freshness window. Owner only.
    fn set_freshness_window(&mut self, caller: Address, secs: u64) -> Result<(), ReceiverError>;

    /// Change the fallback tier. Owner only; must be `<= 100`.
    fn set_default_tier(&mut self, caller: Address, tier: u8) -> Result<(), ReceiverError>;

    /// Hand the receiver to a new owner. Owner only.
    fn transfer_ownership(&mut self, caller: Address, new_owner: Address)
        -> Result<(), ReceiverError>;

    /// Check whether a fingerprint was consumed.
    fn is_processed(&self, fingerprint: &Word) -> bool;

    /// Number of consumed fingerprints.
    fn processed_count(&self) -> usize;

    /// Current owner.
    fn owner(&self) -> Address;

    /// Freshness window in seconds.
    fn freshness_window(&self) -> u64;

    /// Fallback tier.
    fn default_tier(&self) -> u8;
}
