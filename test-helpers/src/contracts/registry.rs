// Per-identity service URI registry
use std::collections::HashMap;

use warden_kernel::{CallFailure, Identity, SELECTOR_LEN};

use super::decode_args;

#[derive(Clone, Default, Debug)]
pub struct ServiceRegistry {
    uris: HashMap<Identity, String>,
}

impl ServiceRegistry {
    /// `set_service_uri(uri)`
    pub const SET_URI: [u8; SELECTOR_LEN] = *b"suri";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn service_uri(&self, id: Identity) -> Option<&str> {
        self.uris.get(&id).map(String::as_str)
    }

    pub(crate) fn call(
        &mut self,
        sender: Identity,
        selector: [u8; SELECTOR_LEN],
        args: &[u8],
    ) -> Result<(), CallFailure> {
        if selector == Self::SET_URI {
            let uri: String = decode_args(args)?;
            self.uris.insert(sender, uri);
            Ok(())
        } else {
            Err(CallFailure::new("unknown registry method"))
        }
    }
}
