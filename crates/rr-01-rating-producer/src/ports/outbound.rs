//! # Outbound Ports
//!
//! The message transport the producer dispatches through.

use shared_types::{DomainId, Word, U256};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Attached fee below the transport's quote.
    #[error("Insufficient fee: paid {paid}, required {required}")]
    InsufficientFee {
        /// Fee attached to the dispatch
        paid: U256,
        /// Fee the transport quoted
        required: U256,
    },

    /// Transport cannot reach the destination domain.
    #[error("Unsupported destination domain {0}")]
    UnsupportedDomain(DomainId),

    /// Transport is not accepting messages.
    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}

/// Message transport - outbound port.
///
/// Delivery is at-least-once and unordered. The returned message id is for
/// correlation only.
pub trait Transport: Send + Sync {
    /// Hand a payload to the transport, paying `fee`.
    fn dispatch(
        &self,
        destination: DomainId,
        recipient: Word,
        payload: &[u8],
        fee: U256,
    ) -> Result<Word, TransportError>;

    /// Fee the transport would charge for the same dispatch. Read-only.
    fn quote_dispatch(
        &self,
        destination: DomainId,
        recipient: Word,
        payload: &[u8],
    ) -> Result<U256, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn dispatch(
        &self,
        destination: DomainId,
        recipient: Word,
        payload: &[u8],
        fee: U256,
    ) -> Result<Word, TransportError> {
        (**self).dispatch(destination, recipient, payload, fee)
    }

    fn quote_dispatch(
        &self,
        destination: DomainId,
        recipient: Word,
        payload: &[u8],
    ) -> Result<U256, TransportError> {
        (**self).quote_dispatch(destination, recipient, payload)
    }
}
