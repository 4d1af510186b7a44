//! # Access Control
//!
//! Single-owner gating for administrative state.
//!
//! ## Design
//!
//! Each component owns exactly one [`Ownership`]. Mutating operations start
//! with a guard clause:
//!
//! ```rust,ignore
//! let cap = self.ownership.authorize(caller)?;
//! self.routes.insert(&cap, domain, recipient);
//! ```
//!
//! [`GuardedRegistry`] and [`GuardedSet`] only accept mutations that present
//! an [`AdminCapability`]. The capability has a private field, so the only
//! way to obtain one is a successful [`Ownership::authorize`] call.

use crate::errors::AccessError;
use crate::primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Proof that the caller passed the owner check.
#[derive(Debug)]
pub struct AdminCapability {
    _sealed: (),
}

/// Single-owner access-control object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    owner: Address,
}

impl Ownership {
    /// Create with the deploying administrator as owner.
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    /// Current owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Check `caller` is the owner and mint a capability.
    pub fn authorize(&self, caller: Address) -> Result<AdminCapability, AccessError> {
        if caller != self.owner {
            return Err(AccessError::NotOwner {
                caller,
                owner: self.owner,
            });
        }
        Ok(AdminCapability { _sealed: () })
    }

    /// Hand ownership to `new_owner`. Returns the previous owner.
    pub fn transfer(&mut self, caller: Address, new_owner: Address) -> Result<Address, AccessError> {
        self.authorize(caller)?;
        if new_owner.is_zero() {
            return Err(AccessError::ZeroOwner);
        }
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }
}

/// Key-value store whose writes require an [`AdminCapability`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash, V: Serialize",
    deserialize = "K: Deserialize<'de> + Eq + Hash, V: Deserialize<'de>"
))]
pub struct GuardedRegistry<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> GuardedRegistry<K, V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up a key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite. Returns the previous value.
    pub fn insert(&mut self, _cap: &AdminCapability, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Remove a key. Returns the removed value.
    pub fn remove(&mut self, _cap: &AdminCapability, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash, V> Default for GuardedRegistry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Membership set whose writes require an [`AdminCapability`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Eq + Hash",
    deserialize = "T: Deserialize<'de> + Eq + Hash"
))]
pub struct GuardedSet<T> {
    members: HashSet<T>,
}

impl<T: Eq + Hash> GuardedSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
        }
    }

    /// Check membership.
    pub fn contains(&self, member: &T) -> bool {
        self.members.contains(member)
    }

    /// Add a member. Returns `true` if it was not already present.
    pub fn insert(&mut self, _cap: &AdminCapability, member: T) -> bool {
        self.members.insert(member)
    }

    /// Remove a member. Returns `true` if it was present.
    pub fn remove(&mut self, _cap: &AdminCapability, member: &T) -> bool {
        self.members.remove(member)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when the set is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T: Eq + Hash> Default for GuardedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
