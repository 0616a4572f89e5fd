// In-memory host chain: a native ledger, a contract registry, and
// clone-based checkpointing
//
// The chain is the reference implementation of the engine's `Environment`
// contract. Checkpointing clones the whole state; rollback swaps the clone
// back in, so a rolled-back batch leaves state byte-identical. Contracts may
// call other contracts through `Chain::call`; a contract cannot call itself
// while it is already executing (the slot is vacated for the duration).
use std::collections::HashMap;

use tracing::{debug, trace};
use warden_kernel::{keccak256, CallFailure, Environment, Identity, OutboundCall, IDENTITY_LEN};

use crate::contracts::Contract;

#[derive(Clone, Default, Debug)]
struct ChainState {
    ledger: HashMap<Identity, u64>,
    contracts: HashMap<Identity, Contract>,
}

/// An in-memory execution host.
#[derive(Default, Debug)]
pub struct Chain {
    state: ChainState,
    saved: Vec<ChainState>,
    next_identity: u64,
}

impl Chain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh deterministic identity.
    pub fn new_identity(&mut self) -> Identity {
        self.next_identity += 1;
        let mut seed = b"warden.test.identity".to_vec();
        seed.extend_from_slice(&self.next_identity.to_be_bytes());
        let digest = keccak256(&seed);
        let mut bytes = [0u8; IDENTITY_LEN];
        bytes.copy_from_slice(&digest[32 - IDENTITY_LEN..]);
        Identity::new(bytes)
    }

    /// Install a contract at a fresh identity and return that identity.
    pub fn deploy(&mut self, contract: Contract) -> Identity {
        let id = self.new_identity();
        self.state.contracts.insert(id, contract);
        debug!(contract = %id, "contract deployed");
        id
    }

    /// Native balance held by an identity on this chain.
    #[must_use]
    pub fn balance(&self, id: Identity) -> u64 {
        self.state.ledger.get(&id).copied().unwrap_or(0)
    }

    /// Credit native value to an identity.
    pub fn credit(&mut self, id: Identity, amount: u64) {
        *self.state.ledger.entry(id).or_default() += amount;
    }

    /// Deliver a call: move `value` to the target, then hand a non-empty
    /// payload to the contract installed there. Contracts use this same
    /// entry point for nested calls.
    pub fn call(
        &mut self,
        sender: Identity,
        target: Identity,
        value: u64,
        payload: &[u8],
    ) -> Result<(), CallFailure> {
        if value > 0 {
            self.credit(target, value);
        }
        if payload.is_empty() {
            trace!(%sender, %target, value, "plain transfer");
            return Ok(());
        }

        let mut contract = self
            .state
            .contracts
            .remove(&target)
            .ok_or_else(|| CallFailure::new("no contract at target"))?;
        let result = contract.call(self, target, sender, value, payload);
        self.state.contracts.insert(target, contract);
        trace!(%sender, %target, value, ok = result.is_ok(), "contract call");
        result
    }

    pub fn token(&self, id: Identity) -> Option<&crate::contracts::TokenContract> {
        match self.state.contracts.get(&id) {
            Some(Contract::Token(token)) => Some(token),
            _ => None,
        }
    }

    pub fn bonding(&self, id: Identity) -> Option<&crate::contracts::BondingManager> {
        match self.state.contracts.get(&id) {
            Some(Contract::Bonding(bonding)) => Some(bonding),
            _ => None,
        }
    }

    pub fn registry(&self, id: Identity) -> Option<&crate::contracts::ServiceRegistry> {
        match self.state.contracts.get(&id) {
            Some(Contract::Registry(registry)) => Some(registry),
            _ => None,
        }
    }
}

impl Environment for Chain {
    fn dispatch(&mut self, call: OutboundCall) -> Result<(), CallFailure> {
        self.call(call.caller, call.target, call.value, &call.payload)
    }

    fn checkpoint(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn rollback(&mut self) {
        if let Some(saved) = self.saved.pop() {
            self.state = saved;
        }
    }

    fn commit(&mut self) {
        self.saved.pop();
    }
}
