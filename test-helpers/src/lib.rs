//! In-memory host chain and mock contracts for exercising the warden
//! engine end to end: a native ledger, clone-based checkpointing, and the
//! three collaborator contracts the engine is typically pointed at (token,
//! bonding ledger, service registry).

pub mod chain;
pub mod contracts;

pub use chain::Chain;
pub use contracts::{BondingManager, Contract, ServiceRegistry, TokenContract};

/// Install a tracing subscriber honoring `RUST_LOG`, once per process.
/// Harmless to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
