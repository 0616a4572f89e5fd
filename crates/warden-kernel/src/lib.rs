//! Warden kernel: signature-authorized custodial account engine.
//!
//! A [`Wallet`] holds native value on behalf of a master identity and
//! executes outbound calls that were authorized offline: submitters hand the
//! engine call tuples plus ECDSA signatures, the engine recovers who signed
//! each one, checks that identity against the master and the capability
//! table, and runs the whole batch as a single all-or-nothing unit against a
//! host-provided [`Environment`].
//!
//! The engine is synchronous and single-owner; the host serializes batches,
//! and the borrow checker enforces that nothing interleaves with one.

// ================================
// Module Declarations
// ================================

pub mod capabilities; // Capability table keyed by (actor, target, selector)
pub mod environment; // Uniform call abstraction toward the host
pub mod errors; // Error surface
pub mod executor; // Atomic batch execution
pub mod identity; // Identity and selector primitives
pub mod message; // Canonical message hashing
pub mod signature; // Signer recovery
pub mod validation; // Structural batch limits
pub mod wallet; // Account state and permission surface

// ================================
// Public API Re-exports
// ================================

pub use capabilities::{CapabilityKey, CapabilityTable};
pub use environment::{CallFailure, Environment, OutboundCall};
pub use errors::WalletError;
pub use identity::{Identity, Selector, IDENTITY_LEN, SELECTOR_LEN};
pub use message::{message_hash, CallRequest};
pub use signature::{identity_from_key, keccak256, recover, SIGNATURE_LEN};
pub use validation::{MAX_BATCH_CALLS, MAX_PAYLOAD_BYTES};
pub use wallet::Wallet;

pub type Result<T> = std::result::Result<T, WalletError>;
