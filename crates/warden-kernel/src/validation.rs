// Structural validation of submitted batches
//
// Batches arrive from untrusted submitters and are validated before any
// signature work: size limits bound the work spent on unauthenticated input,
// and payload well-formedness is settled once here so the per-entry loop can
// derive selectors without surprises.
use crate::errors::WalletError;
use crate::identity::{Selector, SELECTOR_LEN};

/// Maximum number of calls in one batch.
pub const MAX_BATCH_CALLS: usize = 64;

/// Maximum size of one call payload in bytes.
pub const MAX_PAYLOAD_BYTES: usize = 10 * 1024;

/// Validate one payload: bounded size, and either empty (plain transfer) or
/// at least a full selector.
pub fn validate_payload(payload: &[u8]) -> Result<(), WalletError> {
    if payload.len() > MAX_PAYLOAD_BYTES {
        return Err(WalletError::PayloadTooLarge);
    }
    Selector::from_payload(payload).map(|_| ())
}

/// Validate the shape of a whole batch. Length agreement across the four
/// arrays is checked by the executor before this runs.
pub fn validate_batch(payloads: &[Vec<u8>]) -> Result<(), WalletError> {
    if payloads.len() > MAX_BATCH_CALLS {
        return Err(WalletError::BatchTooLarge);
    }
    for payload in payloads {
        validate_payload(payload)?;
    }
    Ok(())
}
