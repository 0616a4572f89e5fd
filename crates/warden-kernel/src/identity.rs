// Identity and selector primitives shared across the engine
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::WalletError;

/// Width of an identity in bytes.
pub const IDENTITY_LEN: usize = 20;

/// Width of a method selector in bytes.
pub const SELECTOR_LEN: usize = 4;

/// Opaque address-like value naming an actor or contract.
///
/// Two identities are equal only when byte-equal. The all-zero value is the
/// null identity and is rejected wherever a real identity is required.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub struct Identity([u8; IDENTITY_LEN]);

impl Identity {
    /// The null identity. Never a valid actor, master, or target.
    pub const NULL: Self = Self([0u8; IDENTITY_LEN]);

    #[must_use]
    pub const fn new(bytes: [u8; IDENTITY_LEN]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; IDENTITY_LEN] {
        &self.0
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; IDENTITY_LEN]
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; IDENTITY_LEN]> for Identity {
    fn from(bytes: [u8; IDENTITY_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({self})")
    }
}

/// Names the operation a call payload invokes on its target.
///
/// A non-empty payload starts with a 4-byte method selector. The empty
/// payload is a plain value transfer and maps to the reserved `Transfer`
/// sentinel, which no 4-byte payload prefix can collide with.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
pub enum Selector {
    /// Plain value transfer with no call data.
    Transfer,
    /// Method call identified by the first four payload bytes.
    Method([u8; SELECTOR_LEN]),
}

impl Selector {
    /// Derive the selector a payload invokes.
    ///
    /// Empty payloads are plain transfers. A non-empty payload shorter than
    /// a full selector names no method and is rejected.
    pub fn from_payload(payload: &[u8]) -> Result<Self, WalletError> {
        if payload.is_empty() {
            return Ok(Self::Transfer);
        }
        if payload.len() < SELECTOR_LEN {
            return Err(WalletError::InvalidPayload);
        }
        let mut bytes = [0u8; SELECTOR_LEN];
        bytes.copy_from_slice(&payload[..SELECTOR_LEN]);
        Ok(Self::Method(bytes))
    }

    #[must_use]
    pub const fn method(bytes: [u8; SELECTOR_LEN]) -> Self {
        Self::Method(bytes)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transfer => write!(f, "transfer"),
            Self::Method(bytes) => write!(f, "0x{}", hex::encode(bytes)),
        }
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector({self})")
    }
}
