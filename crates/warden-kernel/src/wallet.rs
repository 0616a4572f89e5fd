// Wallet account state: master, balance, and the permission surface
use tracing::{debug, info};

use crate::capabilities::{CapabilityKey, CapabilityTable};
use crate::environment::Environment;
use crate::errors::WalletError;
use crate::executor;
use crate::identity::{Identity, Selector};

/// A custodial account executing signature-authorized calls on behalf of a
/// master identity.
///
/// The master is set exactly once at construction and is the sole root of
/// trust: it is implicitly authorized for every call and is the only caller
/// that can change the capability table. Everything else an account holds
/// (its native balance and its grants) changes only through [`deposit`],
/// the master-gated permission mutators, and [`execute`].
///
/// Signatures are durable authorizations: nothing in the signed message
/// expires or sequences a request, so a signature over a request shape
/// authorizes that exact shape every time it is submitted. Idempotency is
/// the signer's concern.
///
/// [`deposit`]: Wallet::deposit
/// [`execute`]: Wallet::execute
#[derive(Clone, Debug)]
pub struct Wallet {
    master: Identity,
    balance: u64,
    capabilities: CapabilityTable,
}

impl Wallet {
    /// Create an account owned by `master`.
    ///
    /// Fails with [`WalletError::InvalidMaster`] for the null identity;
    /// there is no way to change the master afterwards.
    pub fn new(master: Identity) -> Result<Self, WalletError> {
        if master.is_null() {
            return Err(WalletError::InvalidMaster);
        }
        info!(master = %master, "wallet created");
        Ok(Self {
            master,
            balance: 0,
            capabilities: CapabilityTable::new(),
        })
    }

    #[must_use]
    pub fn master(&self) -> Identity {
        self.master
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Credit inbound native value. Deliberately unauthorized: anyone may
    /// fund the account.
    pub fn deposit(&mut self, amount: u64) -> Result<(), WalletError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(WalletError::BalanceOverflow)?;
        debug!(amount, balance = self.balance, "deposit received");
        Ok(())
    }

    /// Grant `actor` the right to authorize calls to exactly one method on
    /// exactly one target. Master only.
    pub fn approve_actor_method(
        &mut self,
        caller: Identity,
        actor: Identity,
        target: Identity,
        selector: Selector,
    ) -> Result<(), WalletError> {
        self.set_capability(caller, actor, target, selector, true)
    }

    /// Revoke a grant by writing an explicit deny. Master only.
    pub fn remove_actor_method(
        &mut self,
        caller: Identity,
        actor: Identity,
        target: Identity,
        selector: Selector,
    ) -> Result<(), WalletError> {
        self.set_capability(caller, actor, target, selector, false)
    }

    fn set_capability(
        &mut self,
        caller: Identity,
        actor: Identity,
        target: Identity,
        selector: Selector,
        allowed: bool,
    ) -> Result<(), WalletError> {
        if caller != self.master {
            return Err(WalletError::Unauthorized);
        }
        self.capabilities
            .set(CapabilityKey::new(actor, target, selector), allowed);
        info!(%actor, %target, %selector, allowed, "capability updated");
        Ok(())
    }

    /// Whether `actor` holds a grant for `(target, selector)`.
    #[must_use]
    pub fn actors(&self, actor: Identity, target: Identity, selector: Selector) -> bool {
        self.capabilities.is_allowed(actor, target, selector)
    }

    /// The authorization decision: the master may issue any call; an actor
    /// only a call whose exact (target, selector) pair it was granted.
    #[must_use]
    pub fn is_authorized(&self, signer: Identity, target: Identity, selector: Selector) -> bool {
        signer == self.master || self.capabilities.is_allowed(signer, target, selector)
    }

    /// Execute a batch of signed call requests as one atomic unit.
    ///
    /// `account` is this wallet's own identity in the host environment; the
    /// four arrays are one call request per index. Either every call takes
    /// effect in submitted order, or none does; see [`executor`] for the
    /// exact per-entry pipeline.
    pub fn execute<E: Environment + ?Sized>(
        &mut self,
        env: &mut E,
        account: Identity,
        targets: &[Identity],
        values: &[u64],
        payloads: &[Vec<u8>],
        signatures: &[Vec<u8>],
    ) -> Result<(), WalletError> {
        executor::execute(self, env, account, targets, values, payloads, signatures)
    }

    pub(crate) fn debit(&mut self, value: u64) -> Option<u64> {
        self.balance = self.balance.checked_sub(value)?;
        Some(self.balance)
    }

    pub(crate) fn restore_balance(&mut self, balance: u64) {
        self.balance = balance;
    }
}
