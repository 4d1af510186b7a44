//! # Inbound Ports
//!
//! API trait defining what the Rating Producer can do.
//!
//! Every mutating call takes `&mut self`: the host serializes calls, so no
//! call observes another's partial effects.

use crate::domain::{BatchReceipt, DispatchReceipt, ProducerError};
use shared_types::{Address, DomainId, Word, U256};

/// Rating producer API - inbound port.
pub trait RatingProducerApi {
    /// Add `rater` to the rater set. Owner only, idempotent.
    fn authorize_rater(&mut self, caller: Address, rater: Address) -> Result<(), ProducerError>;

    /// Remove `rater` from the rater set. Owner only, idempotent.
    fn revoke_rater(&mut self, caller: Address, rater: Address) -> Result<(), ProducerError>;

    /// Route `domain` to `recipient`. Owner only. A zero recipient clears the route.
    fn set_destination_recipient(
        &mut self,
        caller: Address,
        domain: DomainId,
        recipient: Word,
    ) -> Result<(), ProducerError>;

    /// Hand the producer to a new owner. Owner only.
    fn transfer_ownership(&mut self, caller: Address, new_owner: Address)
        -> Result<(), ProducerError>;

    /// Send one rating, forwarding `fee` verbatim.
    fn send_rating(
        &mut self,
        caller: Address,
        domain: DomainId,
        subject: Address,
        score: u8,
        fee: U256,
    ) -> Result<DispatchReceipt, ProducerError>;

    /// Send one rating per `(subject, score)` pair, splitting `fee` evenly.
    fn send_rating_batch(
        &mut self,
        caller: Address,
        domain: DomainId,
        subjects: &[Address],
        scores: &[u8],
        fee: U256,
    ) -> Result<BatchReceipt, ProducerError>;

    /// Transport fee quote for the equivalent single payload.
    fn quote_gas_payment(
        &self,
        domain: DomainId,
        subject: Address,
        score: u8,
    ) -> Result<U256, ProducerError>;

    /// Sum of per-entry quotes for the equivalent batch.
    fn quote_gas_payment_batch(
        &self,
        domain: DomainId,
        subjects: &[Address],
        scores: &[u8],
    ) -> Result<U256, ProducerError>;

    /// Recipient routed for `domain`; zero when unset.
    fn destination_recipient(&self, domain: DomainId) -> Word;

    /// Check rater membership.
    fn is_rater(&self, id: Address) -> bool;

    /// Current owner.
    fn owner(&self) -> Address;

    /// Ratings dispatched so far.
    fn total_ratings_sent(&self) -> u64;
}
