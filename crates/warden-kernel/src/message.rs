// Canonical message hashing for call requests
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::errors::WalletError;
use crate::identity::{Identity, Selector, IDENTITY_LEN};
use crate::signature::keccak256;

/// One proposed outbound call: the exact tuple a signature must cover.
///
/// Requests are ephemeral and carry no identity of their own; the
/// authorizing identity is recovered from the accompanying signature.
#[derive(Clone, PartialEq, Eq, Debug, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct CallRequest {
    pub target: Identity,
    pub value: u64,
    pub payload: Vec<u8>,
}

impl CallRequest {
    #[must_use]
    pub fn new(target: Identity, value: u64, payload: Vec<u8>) -> Self {
        Self {
            target,
            value,
            payload,
        }
    }

    /// The canonical hash a signature over this request must cover.
    #[must_use]
    pub fn message_hash(&self) -> [u8; 32] {
        message_hash(&self.target, self.value, &self.payload)
    }

    /// The selector this request's payload invokes on the target.
    pub fn selector(&self) -> Result<Selector, WalletError> {
        Selector::from_payload(&self.payload)
    }
}

/// Canonical message hash of a call tuple:
/// `keccak256(target ‖ value_be ‖ payload)`.
///
/// Both fixed-width fields precede the single variable-length field, so the
/// encoding is unambiguous: any change to target, value, or payload changes
/// the hash and invalidates a previously produced signature.
#[must_use]
pub fn message_hash(target: &Identity, value: u64, payload: &[u8]) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(IDENTITY_LEN + 8 + payload.len());
    preimage.extend_from_slice(target.as_bytes());
    preimage.extend_from_slice(&value.to_be_bytes());
    preimage.extend_from_slice(payload);
    keccak256(&preimage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(seed: u8) -> Identity {
        Identity::new([seed; 20])
    }

    #[test]
    fn hash_is_deterministic() {
        let request = CallRequest::new(target(1), 100, vec![1, 2, 3, 4]);
        assert_eq!(request.message_hash(), request.message_hash());
    }

    #[test]
    fn hash_binds_every_field() {
        let base = CallRequest::new(target(1), 100, vec![1, 2, 3, 4]);
        let other_target = CallRequest::new(target(2), 100, vec![1, 2, 3, 4]);
        let other_value = CallRequest::new(target(1), 101, vec![1, 2, 3, 4]);
        let other_payload = CallRequest::new(target(1), 100, vec![1, 2, 3, 5]);

        assert_ne!(base.message_hash(), other_target.message_hash());
        assert_ne!(base.message_hash(), other_value.message_hash());
        assert_ne!(base.message_hash(), other_payload.message_hash());
    }

    #[test]
    fn field_boundaries_are_fixed() {
        // A byte cannot migrate between the value and the payload.
        let a = message_hash(&target(1), 1, &[0]);
        let b = message_hash(&target(1), 256, &[]);
        assert_ne!(a, b);
    }

    #[test]
    fn empty_payload_request_selects_transfer() {
        let request = CallRequest::new(target(1), 5, Vec::new());
        assert_eq!(request.selector().unwrap(), Selector::Transfer);
    }
}
