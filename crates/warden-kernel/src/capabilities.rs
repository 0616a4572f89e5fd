// Capability table: who may authorize what
//
// Keys are (actor, target, selector) triples; the value is a plain allowed
// flag. Absence and an explicit `false` are indistinguishable to lookups, so
// revocation writes `false` rather than deleting. The table itself enforces
// nothing about callers: the owning wallet is its only writer and performs
// the master gate before every mutation.
use std::collections::HashMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::identity::{Identity, Selector};

/// Key of one capability grant: one actor, one target, one method.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct CapabilityKey {
    pub actor: Identity,
    pub target: Identity,
    pub selector: Selector,
}

impl CapabilityKey {
    #[must_use]
    pub fn new(actor: Identity, target: Identity, selector: Selector) -> Self {
        Self {
            actor,
            target,
            selector,
        }
    }
}

/// Deny-by-default capability table.
#[derive(Clone, Default, Debug)]
pub struct CapabilityTable {
    entries: HashMap<CapabilityKey, bool>,
}

impl CapabilityTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the flag for a key. Idempotent: writing the same value
    /// twice is observably a no-op.
    pub fn set(&mut self, key: CapabilityKey, allowed: bool) {
        self.entries.insert(key, allowed);
    }

    /// Pure lookup; `false` for any key never written.
    #[must_use]
    pub fn is_allowed(&self, actor: Identity, target: Identity, selector: Selector) -> bool {
        self.entries
            .get(&CapabilityKey::new(actor, target, selector))
            .copied()
            .unwrap_or(false)
    }
}
