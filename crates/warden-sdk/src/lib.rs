//! Warden SDK: the off-engine half of the wallet protocol.
//!
//! Signing happens outside the engine: this crate generates actor keys,
//! derives their identities, signs canonical message hashes, and assembles
//! the four parallel arrays a batch submission consists of.

pub mod batch;
pub mod error;
pub mod payload;
pub mod signer;

pub use batch::{BatchBuilder, SignedBatch};
pub use error::SdkError;
pub use payload::encode_call;
pub use signer::ActorKey;

// Re-export the kernel types client code touches constantly.
pub use warden_kernel::{CallRequest, Identity, Selector, Wallet};

pub type Result<T> = std::result::Result<T, SdkError>;
