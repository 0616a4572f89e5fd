// Mock collaborator contracts
//
// These stand in for the opaque targets the engine calls: a fungible token,
// a staking/bonding ledger, and a service URI registry. Each decodes its
// payload as a 4-byte selector followed by Borsh-encoded arguments and
// reports failure through `CallFailure` like any other target.
use borsh::BorshDeserialize;
use warden_kernel::{CallFailure, Identity, SELECTOR_LEN};

use crate::chain::Chain;

pub mod bonding;
pub mod registry;
pub mod token;

pub use bonding::BondingManager;
pub use registry::ServiceRegistry;
pub use token::TokenContract;

/// A deployed contract instance.
#[derive(Clone, Debug)]
pub enum Contract {
    Token(TokenContract),
    Bonding(BondingManager),
    Registry(ServiceRegistry),
}

impl Contract {
    pub(crate) fn call(
        &mut self,
        chain: &mut Chain,
        this: Identity,
        sender: Identity,
        _value: u64,
        payload: &[u8],
    ) -> Result<(), CallFailure> {
        let (selector, args) = split_payload(payload)?;
        match self {
            Self::Token(token) => token.call(sender, selector, args),
            Self::Bonding(bonding) => bonding.call(chain, this, sender, selector, args),
            Self::Registry(registry) => registry.call(sender, selector, args),
        }
    }
}

fn split_payload(payload: &[u8]) -> Result<([u8; SELECTOR_LEN], &[u8]), CallFailure> {
    if payload.len() < SELECTOR_LEN {
        return Err(CallFailure::new("payload too short"));
    }
    let mut selector = [0u8; SELECTOR_LEN];
    selector.copy_from_slice(&payload[..SELECTOR_LEN]);
    Ok((selector, &payload[SELECTOR_LEN..]))
}

pub(crate) fn decode_args<T: BorshDeserialize>(args: &[u8]) -> Result<T, CallFailure> {
    T::try_from_slice(args).map_err(|_| CallFailure::new("malformed call arguments"))
}
