// Error surface for the wallet engine
//
// Every failure is fatal to the current operation only: it unwinds the whole
// batch or mutator call, leaves prior state untouched, and is reported
// synchronously to the submitter. There is no partial-success outcome; a
// batch that fails at entry k is observably identical to one that failed at
// entry 0.
use thiserror::Error;

/// Failures surfaced by wallet construction, permission mutation, and batch
/// execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The master identity supplied at construction was the null identity.
    #[error("master identity must not be null")]
    InvalidMaster,

    /// The caller or recovered signer is not entitled to the operation.
    #[error("unauthorized")]
    Unauthorized,

    /// The four batch arrays differ in length, or the batch is empty.
    #[error("batch arrays must have equal nonzero length")]
    LengthMismatch,

    /// A signature could not be parsed: wrong length, invalid recovery
    /// parameter, out-of-range scalar, or non-canonical high-S encoding.
    #[error("malformed signature")]
    InvalidSignatureFormat,

    /// A target rejected its call or the call could not be delivered.
    #[error("sub-call {index} failed: {reason}")]
    SubcallFailed { index: usize, reason: String },

    /// The batch exceeds the maximum number of calls.
    #[error("batch exceeds maximum call count")]
    BatchTooLarge,

    /// A payload exceeds the maximum size.
    #[error("payload exceeds maximum size")]
    PayloadTooLarge,

    /// A non-empty payload shorter than a full selector names no method.
    #[error("payload too short to name a method")]
    InvalidPayload,

    /// A deposit would overflow the account balance.
    #[error("deposit overflows account balance")]
    BalanceOverflow,
}
