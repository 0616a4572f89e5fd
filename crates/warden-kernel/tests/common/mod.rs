// Shared fixture for the integration suites
use warden_kernel::{Identity, Wallet};
use warden_sdk::ActorKey;
use warden_test_helpers::Chain;

pub struct Fixture {
    pub chain: Chain,
    pub wallet: Wallet,
    pub account: Identity,
    pub master: ActorKey,
}

/// A wallet installed on a fresh chain, owned by a deterministic master key.
pub fn fixture() -> Fixture {
    warden_test_helpers::init_tracing();
    let mut chain = Chain::new();
    let master = key(1);
    let wallet = Wallet::new(master.identity()).unwrap();
    let account = chain.new_identity();
    Fixture {
        chain,
        wallet,
        account,
        master,
    }
}

/// Deterministic actor key from a nonzero seed byte.
pub fn key(seed: u8) -> ActorKey {
    let mut bytes = [0u8; 32];
    bytes[31] = seed;
    ActorKey::from_bytes(&bytes).unwrap()
}
