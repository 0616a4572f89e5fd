//! Batch construction: accumulate signed call requests and hand the engine
//! its four parallel arrays.

use warden_kernel::{Environment, Identity, Wallet};

use crate::error::SdkError;
use crate::signer::ActorKey;

/// The four parallel arrays one `execute` invocation consumes.
#[derive(Clone, Debug, Default)]
pub struct SignedBatch {
    pub targets: Vec<Identity>,
    pub values: Vec<u64>,
    pub payloads: Vec<Vec<u8>>,
    pub signatures: Vec<Vec<u8>>,
}

impl SignedBatch {
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Submit this batch to a wallet. Pure convenience over
    /// [`Wallet::execute`].
    pub fn submit<E: Environment + ?Sized>(
        &self,
        wallet: &mut Wallet,
        env: &mut E,
        account: Identity,
    ) -> warden_kernel::Result<()> {
        wallet.execute(
            env,
            account,
            &self.targets,
            &self.values,
            &self.payloads,
            &self.signatures,
        )
    }
}

/// Builder accumulating `(target, value, payload)` entries, each signed by
/// the key passed alongside it.
#[derive(Default)]
pub struct BatchBuilder {
    batch: SignedBatch,
}

impl BatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one signed call.
    pub fn call(
        mut self,
        key: &ActorKey,
        target: Identity,
        value: u64,
        payload: Vec<u8>,
    ) -> Result<Self, SdkError> {
        let signature = key.sign_call(target, value, &payload)?;
        self.batch.targets.push(target);
        self.batch.values.push(value);
        self.batch.payloads.push(payload);
        self.batch.signatures.push(signature);
        Ok(self)
    }

    /// Append one signed plain value transfer (empty payload).
    pub fn transfer(self, key: &ActorKey, target: Identity, value: u64) -> Result<Self, SdkError> {
        self.call(key, target, value, Vec::new())
    }

    /// Replace the signature at `index`, leaving the call tuple untouched.
    /// Useful for exercising rejection paths.
    #[must_use]
    pub fn sign_entry_with(mut self, index: usize, key: &ActorKey) -> Self {
        if let (Some(slot), Some(&target)) = (
            self.batch.signatures.get_mut(index),
            self.batch.targets.get(index),
        ) {
            let value = self.batch.values[index];
            let payload = &self.batch.payloads[index];
            if let Ok(signature) = key.sign_call(target, value, payload) {
                *slot = signature;
            }
        }
        self
    }

    #[must_use]
    pub fn build(self) -> SignedBatch {
        self.batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_kernel::{message_hash, recover};

    fn fixed_key(seed: u8) -> ActorKey {
        let mut bytes = [0u8; 32];
        bytes[31] = seed;
        ActorKey::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn builder_keeps_arrays_parallel() {
        let key = fixed_key(1);
        let a = Identity::new([1u8; 20]);
        let b = Identity::new([2u8; 20]);

        let batch = BatchBuilder::new()
            .transfer(&key, a, 10)
            .unwrap()
            .call(&key, b, 0, vec![1, 2, 3, 4])
            .unwrap()
            .build();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.targets, vec![a, b]);
        assert_eq!(batch.values, vec![10, 0]);
        assert_eq!(batch.payloads[0], Vec::<u8>::new());
        assert_eq!(batch.payloads[1], vec![1, 2, 3, 4]);
        assert_eq!(batch.signatures.len(), 2);
    }

    #[test]
    fn each_entry_recovers_to_its_signer() {
        let master = fixed_key(1);
        let actor = fixed_key(2);
        let target = Identity::new([3u8; 20]);

        let batch = BatchBuilder::new()
            .transfer(&master, target, 5)
            .unwrap()
            .call(&actor, target, 0, vec![9, 9, 9, 9])
            .unwrap()
            .build();

        let hash0 = message_hash(&batch.targets[0], batch.values[0], &batch.payloads[0]);
        let hash1 = message_hash(&batch.targets[1], batch.values[1], &batch.payloads[1]);
        assert_eq!(recover(&hash0, &batch.signatures[0]).unwrap(), master.identity());
        assert_eq!(recover(&hash1, &batch.signatures[1]).unwrap(), actor.identity());
    }

    #[test]
    fn resigning_one_entry_changes_only_that_signer() {
        let master = fixed_key(1);
        let stranger = fixed_key(2);
        let target = Identity::new([3u8; 20]);

        let batch = BatchBuilder::new()
            .transfer(&master, target, 1)
            .unwrap()
            .transfer(&master, target, 2)
            .unwrap()
            .sign_entry_with(1, &stranger)
            .build();

        let hash0 = message_hash(&batch.targets[0], batch.values[0], &batch.payloads[0]);
        let hash1 = message_hash(&batch.targets[1], batch.values[1], &batch.payloads[1]);
        assert_eq!(recover(&hash0, &batch.signatures[0]).unwrap(), master.identity());
        assert_eq!(
            recover(&hash1, &batch.signatures[1]).unwrap(),
            stranger.identity()
        );
    }
}
