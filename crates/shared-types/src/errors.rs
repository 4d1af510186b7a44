//! # Error Types
//!
//! Errors shared by the producer and the receiver.

use crate::primitives::Address;
use thiserror::Error;

/// Access-control failures raised by [`crate::Ownership`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Caller is not the component owner.
    #[error("Caller {caller:?} is not the owner {owner:?}")]
    NotOwner { caller: Address, owner: Address },

    /// Ownership cannot be handed to the zero identity.
    #[error("New owner is the zero address")]
    ZeroOwner,
}

/// Rating payload decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// Payload is not exactly three words long.
    #[error("Invalid payload length: expected {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    /// Non-zero bytes in the padding of a narrow field.
    #[error("Dirty padding in word {word}")]
    DirtyPadding { word: usize },
}
