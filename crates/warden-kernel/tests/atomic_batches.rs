// Atomic multi-call batches: everything commits, or nothing does
use warden_kernel::{Identity, WalletError};
use warden_sdk::{encode_call, BatchBuilder, SignedBatch};
use warden_test_helpers::{BondingManager, Contract, ServiceRegistry, TokenContract};

mod common;
use common::{fixture, key, Fixture};

struct Deployed {
    token: Identity,
    bonding: Identity,
    registry: Identity,
}

fn deploy_all(f: &mut Fixture) -> Deployed {
    let token = f
        .chain
        .deploy(Contract::Token(TokenContract::new("TestToken", "TEST")));
    let bonding = f.chain.deploy(Contract::Bonding(BondingManager::new(token)));
    let registry = f.chain.deploy(Contract::Registry(ServiceRegistry::new()));

    let minter = f.chain.new_identity();
    let payload = encode_call(TokenContract::MINT, &(f.account, 1000u64)).unwrap();
    f.chain.call(minter, token, 0, &payload).unwrap();

    Deployed {
        token,
        bonding,
        registry,
    }
}

fn approve_and_bond(f: &Fixture, d: &Deployed) -> BatchBuilder {
    let approve = encode_call(TokenContract::APPROVE, &(d.bonding, 500u64)).unwrap();
    let bond = encode_call(BondingManager::BOND, &(f.account, 500u64)).unwrap();
    BatchBuilder::new()
        .call(&f.master, d.token, 0, approve)
        .unwrap()
        .call(&f.master, d.bonding, 0, bond)
        .unwrap()
}

fn full_onboarding(f: &Fixture, d: &Deployed) -> BatchBuilder {
    let register = BondingManager::REGISTER.to_vec();
    let set_uri = encode_call(ServiceRegistry::SET_URI, &"hello world".to_string()).unwrap();
    approve_and_bond(f, d)
        .call(&f.master, d.bonding, 0, register)
        .unwrap()
        .call(&f.master, d.registry, 0, set_uri)
        .unwrap()
}

#[test]
fn approve_and_bond_execute_atomically() {
    let mut f = fixture();
    let d = deploy_all(&mut f);

    let batch = approve_and_bond(&f, &d).build();
    batch.submit(&mut f.wallet, &mut f.chain, f.account).unwrap();

    let bonding = f.chain.bonding(d.bonding).unwrap();
    assert_eq!(bonding.stake_of(f.account), 500);
    assert_eq!(bonding.bond_of(f.account, f.account), 500);
    let token = f.chain.token(d.token).unwrap();
    assert_eq!(token.balance_of(d.bonding), 500);
    assert_eq!(token.balance_of(f.account), 500);
}

#[test]
fn bonding_and_registering_execute_atomically() {
    let mut f = fixture();
    let d = deploy_all(&mut f);

    let batch = full_onboarding(&f, &d).build();
    batch.submit(&mut f.wallet, &mut f.chain, f.account).unwrap();

    let bonding = f.chain.bonding(d.bonding).unwrap();
    assert_eq!(bonding.bond_of(f.account, f.account), 500);
    assert!(bonding.is_worker(f.account));
    assert_eq!(
        f.chain.registry(d.registry).unwrap().service_uri(f.account),
        Some("hello world")
    );
}

#[test]
fn one_bad_signature_reverts_the_whole_batch() {
    let mut f = fixture();
    let d = deploy_all(&mut f);

    // Same four calls, but the last one signed by an identity with no grant.
    let stranger = key(2);
    let batch = full_onboarding(&f, &d).sign_entry_with(3, &stranger).build();
    let err = batch
        .submit(&mut f.wallet, &mut f.chain, f.account)
        .unwrap_err();
    assert_eq!(err, WalletError::Unauthorized);

    let bonding = f.chain.bonding(d.bonding).unwrap();
    assert_eq!(bonding.stake_of(f.account), 0);
    assert_eq!(bonding.bond_of(f.account, f.account), 0);
    assert!(!bonding.is_worker(f.account));
    assert_eq!(
        f.chain.registry(d.registry).unwrap().service_uri(f.account),
        None
    );
    let token = f.chain.token(d.token).unwrap();
    assert_eq!(token.balance_of(f.account), 1000);
    assert_eq!(token.balance_of(d.bonding), 0);
    assert_eq!(token.allowance(f.account, d.bonding), 0);
}

#[test]
fn failing_subcall_reverts_earlier_subcalls() {
    let mut f = fixture();
    let d = deploy_all(&mut f);

    // First transfer succeeds on its own; the second overdraws and fails,
    // which must take the first one down with it.
    let receiver = f.chain.new_identity();
    let first = encode_call(TokenContract::TRANSFER, &(receiver, 900u64)).unwrap();
    let second = encode_call(TokenContract::TRANSFER, &(receiver, 200u64)).unwrap();
    let batch = BatchBuilder::new()
        .call(&f.master, d.token, 0, first)
        .unwrap()
        .call(&f.master, d.token, 0, second)
        .unwrap()
        .build();

    let err = batch
        .submit(&mut f.wallet, &mut f.chain, f.account)
        .unwrap_err();
    assert!(matches!(err, WalletError::SubcallFailed { index: 1, .. }));

    let token = f.chain.token(d.token).unwrap();
    assert_eq!(token.balance_of(f.account), 1000);
    assert_eq!(token.balance_of(receiver), 0);
}

#[test]
fn empty_batch_rejected() {
    let mut f = fixture();
    let batch = SignedBatch::default();
    let err = batch
        .submit(&mut f.wallet, &mut f.chain, f.account)
        .unwrap_err();
    assert_eq!(err, WalletError::LengthMismatch);
}
