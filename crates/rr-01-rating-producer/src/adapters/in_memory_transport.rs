//! In-Memory Transport Adapter
//!
//! Implements the `Transport` port by queueing envelopes in memory.
//! Tests and simulations drain the outbox and deliver envelopes to a
//! receiver in whatever order (and as many times) they like.

use crate::ports::outbound::{Transport, TransportError};
use parking_lot::Mutex;
use sha3::{Digest, Keccak256};
use shared_types::{DomainId, Word, H256, U256};
use std::collections::HashSet;
use tracing::debug;

/// A dispatched message as the transport sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// Transport-assigned id.
    pub message_id: Word,
    /// Domain the message was sent from.
    pub origin: DomainId,
    /// Sender identity attached by the transport.
    pub sender: Word,
    /// Destination domain.
    pub destination: DomainId,
    /// Recipient on the destination domain.
    pub recipient: Word,
    /// Opaque payload.
    pub payload: Vec<u8>,
    /// Fee paid with the dispatch.
    pub fee_paid: U256,
}

#[derive(Debug, Default)]
struct TransportState {
    nonce: u32,
    outbox: Vec<Envelope>,
    remaining_before_fault: Option<usize>,
}

/// In-memory transport.
///
/// Quotes `base_fee + fee_per_byte * payload.len()`. Payment is only
/// enforced when `require_payment` is set.
pub struct InMemoryTransport {
    local_domain: DomainId,
    sender: Word,
    base_fee: U256,
    fee_per_byte: U256,
    require_payment: bool,
    unsupported: HashSet<DomainId>,
    state: Mutex<TransportState>,
}

impl InMemoryTransport {
    /// Create a transport on `local_domain` that stamps `sender` on every envelope.
    pub fn new(local_domain: DomainId, sender: Word) -> Self {
        Self {
            local_domain,
            sender,
            base_fee: U256::zero(),
            fee_per_byte: U256::zero(),
            require_payment: false,
            unsupported: HashSet::new(),
            state: Mutex::new(TransportState::default()),
        }
    }

    /// Set the fee schedule.
    pub fn with_fees(mut self, base_fee: U256, fee_per_byte: U256) -> Self {
        self.base_fee = base_fee;
        self.fee_per_byte = fee_per_byte;
        self
    }

    /// Reject dispatches paying less than the quote.
    pub fn require_payment(mut self, require: bool) -> Self {
        self.require_payment = require;
        self
    }

    /// Refuse quotes and dispatches to `domain`.
    pub fn with_unsupported_domain(mut self, domain: DomainId) -> Self {
        self.unsupported.insert(domain);
        self
    }

    /// Accept `n` more dispatches, then fail every later one.
    pub fn fail_after(&self, n: usize) {
        self.state.lock().remaining_before_fault = Some(n);
    }

    /// Domain this transport dispatches from.
    pub fn local_domain(&self) -> DomainId {
        self.local_domain
    }

    /// Copy of the queued envelopes, oldest first.
    pub fn outbox(&self) -> Vec<Envelope> {
        self.state.lock().outbox.clone()
    }

    /// Take all queued envelopes.
    pub fn drain(&self) -> Vec<Envelope> {
        std::mem::take(&mut self.state.lock().outbox)
    }

    /// Number of dispatches accepted so far.
    pub fn dispatched_count(&self) -> u32 {
        self.state.lock().nonce
    }

    fn check_domain(&self, destination: DomainId) -> Result<(), TransportError> {
        if self.unsupported.contains(&destination) {
            return Err(TransportError::UnsupportedDomain(destination));
        }
        Ok(())
    }

    fn quote(&self, payload: &[u8]) -> U256 {
        self.base_fee
            .saturating_add(self.fee_per_byte.saturating_mul(U256::from(payload.len() as u64)))
    }
}

/// Message id: Keccak-256 over nonce, route and payload.
fn message_id(
    nonce: u32,
    origin: DomainId,
    sender: &Word,
    destination: DomainId,
    recipient: &Word,
    payload: &[u8],
) -> Word {
    let mut hasher = Keccak256::new();
    hasher.update(nonce.to_be_bytes());
    hasher.update(origin.to_be_bytes());
    hasher.update(sender.as_bytes());
    hasher.update(destination.to_be_bytes());
    hasher.update(recipient.as_bytes());
    hasher.update(payload);
    H256::from_slice(&hasher.finalize())
}

impl Transport for InMemoryTransport {
    fn dispatch(
        &self,
        destination: DomainId,
        recipient: Word,
        payload: &[u8],
        fee: U256,
    ) -> Result<Word, TransportError> {
        self.check_domain(destination)?;

        if self.require_payment {
            let required = self.quote(payload);
            if fee < required {
                return Err(TransportError::InsufficientFee {
                    paid: fee,
                    required,
                });
            }
        }

        let mut state = self.state.lock();
        if let Some(remaining) = state.remaining_before_fault.as_mut() {
            if *remaining == 0 {
                return Err(TransportError::Unavailable("injected fault".to_string()));
            }
            *remaining -= 1;
        }

        let id = message_id(
            state.nonce,
            self.local_domain,
            &self.sender,
            destination,
            &recipient,
            payload,
        );
        state.nonce += 1;
        state.outbox.push(Envelope {
            message_id: id,
            origin: self.local_domain,
            sender: self.sender,
            destination,
            recipient,
            payload: payload.to_vec(),
            fee_paid: fee,
        });

        debug!(
            "[rr-01] Transport queued message {:02x}{:02x}... to domain {}",
            id[0], id[1], destination
        );
        Ok(id)
    }

    fn quote_dispatch(
        &self,
        destination: DomainId,
        _recipient: Word,
        payload: &[u8],
    ) -> Result<U256, TransportError> {
        self.check_domain(destination)?;
        Ok(self.quote(payload))
    }
}
