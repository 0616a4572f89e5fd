// Mintable fungible token with allowance semantics
use std::collections::HashMap;

use warden_kernel::{CallFailure, Identity, SELECTOR_LEN};

use super::decode_args;

/// A minimal fungible token: balances, allowances, permissionless mint.
#[derive(Clone, Debug)]
pub struct TokenContract {
    name: String,
    symbol: String,
    balances: HashMap<Identity, u64>,
    allowances: HashMap<(Identity, Identity), u64>,
}

impl TokenContract {
    /// `mint(to, amount)`
    pub const MINT: [u8; SELECTOR_LEN] = [0x40, 0xc1, 0x0f, 0x19];
    /// `transfer(to, amount)`
    pub const TRANSFER: [u8; SELECTOR_LEN] = [0xa9, 0x05, 0x9c, 0xbb];
    /// `approve(spender, amount)`
    pub const APPROVE: [u8; SELECTOR_LEN] = [0x09, 0x5e, 0xa7, 0xb3];
    /// `transfer_from(from, to, amount)`
    pub const TRANSFER_FROM: [u8; SELECTOR_LEN] = [0x23, 0xb8, 0x72, 0xdd];

    #[must_use]
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub fn balance_of(&self, id: Identity) -> u64 {
        self.balances.get(&id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn allowance(&self, owner: Identity, spender: Identity) -> u64 {
        self.allowances.get(&(owner, spender)).copied().unwrap_or(0)
    }

    pub(crate) fn call(
        &mut self,
        sender: Identity,
        selector: [u8; SELECTOR_LEN],
        args: &[u8],
    ) -> Result<(), CallFailure> {
        if selector == Self::MINT {
            let (to, amount): (Identity, u64) = decode_args(args)?;
            *self.balances.entry(to).or_default() += amount;
            Ok(())
        } else if selector == Self::TRANSFER {
            let (to, amount): (Identity, u64) = decode_args(args)?;
            self.move_balance(sender, to, amount)
        } else if selector == Self::APPROVE {
            let (spender, amount): (Identity, u64) = decode_args(args)?;
            self.allowances.insert((sender, spender), amount);
            Ok(())
        } else if selector == Self::TRANSFER_FROM {
            let (from, to, amount): (Identity, Identity, u64) = decode_args(args)?;
            let allowance = self.allowance(from, sender);
            if allowance < amount {
                return Err(CallFailure::new("insufficient allowance"));
            }
            self.move_balance(from, to, amount)?;
            self.allowances.insert((from, sender), allowance - amount);
            Ok(())
        } else {
            Err(CallFailure::new("unknown token method"))
        }
    }

    fn move_balance(
        &mut self,
        from: Identity,
        to: Identity,
        amount: u64,
    ) -> Result<(), CallFailure> {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            return Err(CallFailure::new("insufficient token balance"));
        }
        self.balances.insert(from, from_balance - amount);
        *self.balances.entry(to).or_default() += amount;
        Ok(())
    }
}
