use crate::prelude::*;

use std::sync::Arc;

/// A configured validator and the client used to talk to it. Built once at
/// start-up.
#[derive(Clone, Getters, derive_more::Debug)]
#[debug("ValidatorEndpoint({})", address)]
pub struct ValidatorEndpoint {
    #[getset(get = "pub")]
    address: String,

    #[getset(get = "pub")]
    client: Arc<dyn ValidatorClient>,
}

impl ValidatorEndpoint {
    pub fn new(address: impl Into<String>, client: Arc<dyn ValidatorClient>) -> Self {
        Self {
            address: address.into(),
            client,
        }
    }

    /// Whether this endpoint is the machine we run on. An empty host
    /// identifier matches nothing.
    pub fn is_local_host(&self, host_validator: &str) -> bool {
        is_local_host(&self.address, host_validator)
    }
}

pub fn is_local_host(address: &str, host_validator: &str) -> bool {
    !host_validator.is_empty() && address.contains(host_validator)
}
