// Signature verification: recovering the authorizing identity
//
// Call requests carry no identity field. The authorizing identity is derived
// by recovering the secp256k1 public key from a 65-byte `r ‖ s ‖ v` signature
// over the canonical message hash, then hashing that key down to an address.
// Recovery is a pure function: the same (hash, signature) pair always yields
// the same identity, and anything malformed is rejected outright rather than
// recovered to an unintended identity. High-S encodings are rejected, never
// normalized, so a signature has exactly one accepted form.
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::elliptic_curve::scalar::IsHigh;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};

use crate::errors::WalletError;
use crate::identity::{Identity, IDENTITY_LEN};

/// Width of an encoded signature: 32-byte `r`, 32-byte `s`, 1-byte `v`.
pub const SIGNATURE_LEN: usize = 65;

/// Keccak-256 of `data`.
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Derive the 20-byte identity of a secp256k1 public key: the low 20 bytes
/// of the Keccak-256 hash of the uncompressed point without its SEC1 prefix.
#[must_use]
pub fn identity_from_key(key: &VerifyingKey) -> Identity {
    let point = key.to_encoded_point(false);
    let digest = keccak256(&point.as_bytes()[1..]);
    let mut bytes = [0u8; IDENTITY_LEN];
    bytes.copy_from_slice(&digest[32 - IDENTITY_LEN..]);
    Identity::new(bytes)
}

/// Recover the identity that signed `hash`.
///
/// The recovery parameter `v` is accepted as `0`/`1` or the legacy `27`/`28`.
/// Everything else (wrong length, other `v` values, zero or out-of-range
/// scalars, high-S encodings, or a point that does not recover) fails with
/// [`WalletError::InvalidSignatureFormat`].
pub fn recover(hash: &[u8; 32], signature: &[u8]) -> Result<Identity, WalletError> {
    if signature.len() != SIGNATURE_LEN {
        return Err(WalletError::InvalidSignatureFormat);
    }

    let v = signature[SIGNATURE_LEN - 1];
    let recovery_byte = match v {
        0 | 1 => v,
        27 | 28 => v - 27,
        _ => return Err(WalletError::InvalidSignatureFormat),
    };
    let recovery_id =
        RecoveryId::from_byte(recovery_byte).ok_or(WalletError::InvalidSignatureFormat)?;

    let parsed = Signature::from_slice(&signature[..SIGNATURE_LEN - 1])
        .map_err(|_| WalletError::InvalidSignatureFormat)?;

    // Reject the malleable twin: only low-S encodings are canonical.
    if bool::from(parsed.s().is_high()) {
        return Err(WalletError::InvalidSignatureFormat);
    }

    let key = VerifyingKey::recover_from_prehash(hash, &parsed, recovery_id)
        .map_err(|_| WalletError::InvalidSignatureFormat)?;
    Ok(identity_from_key(&key))
}
