use crate::prelude::*;

use std::time::Duration;

pub const DEFAULT_LIVENESS_BACKOFF: Duration = Duration::from_secs(30);
pub const DEFAULT_AMOUNT_PER_TRANSACTION: Amount = 1;

/// Everything a run needs, resolved before the run starts and read-only
/// afterwards.
#[derive(Debug, Clone, Getters, Builder)]
pub struct RunConfig {
    /// Host names of the validators, as configured.
    #[getset(get = "pub")]
    validators: Vec<String>,

    /// Identifies this machine among `validators`.
    #[getset(get = "pub")]
    #[builder(into)]
    host_validator: String,

    #[getset(get = "pub")]
    pacing: Pacing,

    #[getset(get = "pub")]
    amount_of_transactions: usize,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_AMOUNT_PER_TRANSACTION)]
    amount_per_transaction: Amount,

    #[getset(get = "pub")]
    key_material: KeyMaterial,

    #[getset(get = "pub")]
    genesis: Genesis,

    #[getset(get = "pub")]
    #[builder(default = DEFAULT_LIVENESS_BACKOFF)]
    liveness_backoff: Duration,

    /// Seeds validator and destination draws, for reproducible runs.
    #[getset(get = "pub")]
    seed: Option<u64>,
}

impl RunConfig {
    pub fn own_address(&self) -> &Address {
        self.key_material.address()
    }

    /// Checks that do not need the network. Everything reported here is
    /// fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Pacing::FixedRate {
            transactions_per_second: 0,
        } = self.pacing
        {
            return Err(ConfigError::TransactionsPerSecondIsZero);
        }
        if self.validators.len() < MIN_VALIDATORS {
            return Err(ConfigError::InsufficientValidators {
                configured: self.validators.len(),
            });
        }
        Ok(())
    }
}
