//! Offline signing of call requests.
//!
//! The engine never sees a key: it consumes signature bytes and recovers the
//! signer. This module is the other half of that contract: it produces the
//! 65-byte `r ‖ s ‖ v` signatures the engine accepts, over the same
//! canonical message hash, with the same identity derivation.

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use warden_kernel::{identity_from_key, message_hash, CallRequest, Identity, SIGNATURE_LEN};

use crate::error::SdkError;

/// A secp256k1 signing key and the identity it authorizes as.
pub struct ActorKey {
    signing_key: SigningKey,
}

impl ActorKey {
    /// Generate a fresh key from the operating system RNG.
    #[must_use]
    pub fn random() -> Self {
        Self {
            signing_key: SigningKey::random(&mut OsRng),
        }
    }

    /// Load a key from its 32-byte scalar encoding.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SdkError> {
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|err| SdkError::InvalidKeyMaterial(err.to_string()))?;
        Ok(Self { signing_key })
    }

    /// The 32-byte scalar encoding of this key.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }

    /// The identity this key signs as.
    #[must_use]
    pub fn identity(&self) -> Identity {
        identity_from_key(self.signing_key.verifying_key())
    }

    /// Sign one call tuple. The result is the exact signature bytes the
    /// engine expects next to that tuple in a batch.
    pub fn sign_call(
        &self,
        target: Identity,
        value: u64,
        payload: &[u8],
    ) -> Result<Vec<u8>, SdkError> {
        let hash = message_hash(&target, value, payload);
        let (sig, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(&hash)
            .map_err(|err| SdkError::Signing(err.to_string()))?;

        let mut out = Vec::with_capacity(SIGNATURE_LEN);
        out.extend_from_slice(&sig.to_bytes());
        out.push(recovery_id.to_byte());
        Ok(out)
    }

    /// Sign a [`CallRequest`].
    pub fn sign_request(&self, request: &CallRequest) -> Result<Vec<u8>, SdkError> {
        self.sign_call(request.target, request.value, &request.payload)
    }
}
