// Batch execution engine: verify, then commit or discard everything
//
// A batch is four parallel arrays, one signed call request per index. Each
// entry is processed in submitted order through the same pipeline: canonical
// hash, signer recovery, authorization, dispatch. The first failure of any
// kind aborts the whole batch, and the checkpoint/rollback bracket plus the
// balance snapshot guarantee that an aborted batch leaves no observable
// state change: a batch failing at entry k is indistinguishable from one
// failing at entry 0.
use tracing::{debug, info, warn};

use crate::environment::{Environment, OutboundCall};
use crate::errors::WalletError;
use crate::identity::{Identity, Selector};
use crate::message;
use crate::signature;
use crate::validation;
use crate::wallet::Wallet;

/// Execute a batch of signed call requests against `env` atomically.
///
/// On success every call has taken effect in submitted order, as one
/// indivisible step from any external observer's perspective. On any error
/// no call has taken effect and the wallet balance is unchanged.
pub fn execute<E: Environment + ?Sized>(
    wallet: &mut Wallet,
    env: &mut E,
    account: Identity,
    targets: &[Identity],
    values: &[u64],
    payloads: &[Vec<u8>],
    signatures: &[Vec<u8>],
) -> Result<(), WalletError> {
    let n = targets.len();
    if n == 0 || values.len() != n || payloads.len() != n || signatures.len() != n {
        return Err(WalletError::LengthMismatch);
    }
    validation::validate_batch(payloads)?;

    let balance_before = wallet.balance();
    env.checkpoint();
    match run(wallet, env, account, targets, values, payloads, signatures) {
        Ok(()) => {
            env.commit();
            info!(calls = n, "batch committed");
            Ok(())
        }
        Err(err) => {
            env.rollback();
            wallet.restore_balance(balance_before);
            warn!(calls = n, error = %err, "batch rolled back");
            Err(err)
        }
    }
}

fn run<E: Environment + ?Sized>(
    wallet: &mut Wallet,
    env: &mut E,
    account: Identity,
    targets: &[Identity],
    values: &[u64],
    payloads: &[Vec<u8>],
    signatures: &[Vec<u8>],
) -> Result<(), WalletError> {
    for (index, target) in targets.iter().copied().enumerate() {
        let value = values[index];
        let payload = &payloads[index];

        let hash = message::message_hash(&target, value, payload);
        let signer = signature::recover(&hash, &signatures[index])?;
        let selector = Selector::from_payload(payload)?;

        if !wallet.is_authorized(signer, target, selector) {
            debug!(index, %signer, %target, %selector, "authorization denied");
            return Err(WalletError::Unauthorized);
        }

        wallet.debit(value).ok_or_else(|| WalletError::SubcallFailed {
            index,
            reason: "insufficient account balance".to_string(),
        })?;

        env.dispatch(OutboundCall {
            caller: account,
            target,
            value,
            payload: payload.clone(),
        })
        .map_err(|failure| WalletError::SubcallFailed {
            index,
            reason: failure.reason().to_string(),
        })?;

        debug!(index, %signer, %target, %selector, value, "sub-call executed");
    }
    Ok(())
}
