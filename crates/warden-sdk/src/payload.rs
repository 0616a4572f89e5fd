//! Call payload encoding: a 4-byte method selector followed by
//! Borsh-encoded arguments.

use borsh::BorshSerialize;
use warden_kernel::SELECTOR_LEN;

use crate::error::SdkError;

/// Encode a method call payload for a target that takes Borsh arguments.
pub fn encode_call<T: BorshSerialize>(
    selector: [u8; SELECTOR_LEN],
    args: &T,
) -> Result<Vec<u8>, SdkError> {
    let mut payload = selector.to_vec();
    let encoded = args
        .try_to_vec()
        .map_err(|err| SdkError::Encoding(err.to_string()))?;
    payload.extend_from_slice(&encoded);
    Ok(payload)
}
