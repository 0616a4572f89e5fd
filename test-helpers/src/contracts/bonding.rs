// Staking/bonding ledger that pulls its stake from a token contract
use std::collections::{HashMap, HashSet};

use borsh::BorshSerialize;
use warden_kernel::{CallFailure, Identity, SELECTOR_LEN};

use super::{decode_args, TokenContract};
use crate::chain::Chain;

/// Bonding manager: stakers bond tokens to a delegate, then register as
/// workers. Bonding pulls tokens from the staker via the token contract's
/// allowance mechanism, so a bond call only succeeds after an approve.
#[derive(Clone, Debug)]
pub struct BondingManager {
    token: Identity,
    stakes: HashMap<Identity, u64>,
    bonds: HashMap<(Identity, Identity), u64>,
    workers: HashSet<Identity>,
}

impl BondingManager {
    /// `bond(delegate, amount)`
    pub const BOND: [u8; SELECTOR_LEN] = *b"bond";
    /// `register()`
    pub const REGISTER: [u8; SELECTOR_LEN] = *b"regi";

    #[must_use]
    pub fn new(token: Identity) -> Self {
        Self {
            token,
            stakes: HashMap::new(),
            bonds: HashMap::new(),
            workers: HashSet::new(),
        }
    }

    #[must_use]
    pub fn stake_of(&self, staker: Identity) -> u64 {
        self.stakes.get(&staker).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn bond_of(&self, staker: Identity, delegate: Identity) -> u64 {
        self.bonds.get(&(staker, delegate)).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_worker(&self, id: Identity) -> bool {
        self.workers.contains(&id)
    }

    pub(crate) fn call(
        &mut self,
        chain: &mut Chain,
        this: Identity,
        sender: Identity,
        selector: [u8; SELECTOR_LEN],
        args: &[u8],
    ) -> Result<(), CallFailure> {
        if selector == Self::BOND {
            let (delegate, amount): (Identity, u64) = decode_args(args)?;

            // Pull the stake from the sender into this contract.
            let encoded = (sender, this, amount)
                .try_to_vec()
                .map_err(|_| CallFailure::new("argument encoding failed"))?;
            let mut payload = TokenContract::TRANSFER_FROM.to_vec();
            payload.extend_from_slice(&encoded);
            chain.call(this, self.token, 0, &payload)?;

            *self.stakes.entry(sender).or_default() += amount;
            *self.bonds.entry((sender, delegate)).or_default() += amount;
            Ok(())
        } else if selector == Self::REGISTER {
            if !args.is_empty() {
                return Err(CallFailure::new("malformed call arguments"));
            }
            if self.stake_of(sender) == 0 {
                return Err(CallFailure::new("no stake bonded"));
            }
            self.workers.insert(sender);
            Ok(())
        } else {
            Err(CallFailure::new("unknown bonding method"))
        }
    }
}
