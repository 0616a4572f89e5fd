// Uniform call abstraction between the engine and its host
//
// Targets are opaque: the engine hands the host an identity, a value, and a
// payload, and learns only success or failure. The host must make `dispatch`
// effects revertible between `checkpoint` and `commit`/`rollback`; the engine
// brackets every batch with exactly one checkpoint and exactly one of the
// other two.
use std::fmt;

use crate::identity::Identity;

/// One outbound call as delivered to the host.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OutboundCall {
    /// The account the call originates from.
    pub caller: Identity,
    /// The opaque target being invoked.
    pub target: Identity,
    /// Native value moved to the target alongside the call.
    pub value: u64,
    /// Raw call data; empty for a plain value transfer.
    pub payload: Vec<u8>,
}

/// Why a dispatched call did not take effect: the target's own logic
/// rejected it, or the call could not be delivered at all. The engine does
/// not distinguish the two.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CallFailure {
    reason: String,
}

impl CallFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for CallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Host-provided transactional call surface.
#[cfg_attr(test, mockall::automock)]
pub trait Environment {
    /// Deliver one call: move `call.value` to the target and hand it the
    /// payload. Must either fully apply or fully not apply.
    fn dispatch(&mut self, call: OutboundCall) -> Result<(), CallFailure>;

    /// Begin a revertible span of dispatches.
    fn checkpoint(&mut self);

    /// Discard every dispatch effect since the matching checkpoint.
    fn rollback(&mut self);

    /// Make every dispatch effect since the matching checkpoint permanent.
    fn commit(&mut self);
}
