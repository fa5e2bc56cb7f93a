use crate::prelude::*;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

impl Selector {
    /// Fails fast when either candidate pool is empty after excluding the
    /// local host and `own_address`, which would otherwise leave every draw
    /// retrying forever.
    pub fn new(
        validators: &[ValidatorEndpoint],
        host_validator: &str,
        genesis: &Genesis,
        own_address: &Address,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(
            validators,
            host_validator,
            genesis,
            own_address,
            ChaCha8Rng::from_entropy(),
        )
    }

    pub fn with_rng(
        validators: &[ValidatorEndpoint],
        host_validator: &str,
        genesis: &Genesis,
        own_address: &Address,
        rng: ChaCha8Rng,
    ) -> Result<Self, ConfigError> {
        let validator_candidates = validators
            .iter()
            .filter(|v| !v.is_local_host(host_validator))
            .cloned()
            .collect::<Vec<_>>();
        if validator_candidates.is_empty() {
            return Err(ConfigError::NoValidatorCandidates {
                host: host_validator.to_owned(),
            });
        }

        let accounts = genesis.addresses().cloned().collect::<Vec<_>>();
        if !accounts.iter().any(|a| a != own_address) {
            return Err(ConfigError::NoDestinationCandidates {
                own_address: own_address.clone(),
            });
        }

        debug!(
            "Selector ready with {} validator candidates and {} genesis accounts",
            validator_candidates.len(),
            accounts.len()
        );
        Ok(Self {
            validator_candidates,
            accounts,
            rng,
        })
    }

    pub fn pick_validator(&mut self) -> ValidatorEndpoint {
        let index = self.rng.gen_range(0..self.validator_candidates.len());
        let validator = self.validator_candidates[index].clone();
        info!("Picked random validator as client: {}", validator.address());
        validator
    }

    pub fn pick_destination(&mut self, exclude: &Address) -> Result<Address, SelectionError> {
        let candidates = self
            .accounts
            .iter()
            .filter(|a| *a != exclude)
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            return Err(SelectionError::Exhausted {
                excluded: exclude.to_string(),
            });
        }
        let index = self.rng.gen_range(0..candidates.len());
        let destination = candidates[index].clone();
        info!("Selected random destination-address: {destination}");
        Ok(destination)
    }
}
