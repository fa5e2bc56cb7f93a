use std::sync::Arc;

use crate::prelude::*;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

impl Transacter {
    /// Wires a run together from `config`, opening one client per validator
    /// through `connect`. Everything that can be checked without the
    /// network is checked here and is fatal.
    pub fn bootstrap<F>(config: RunConfig, connect: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<Arc<dyn ValidatorClient>, ConfigError>,
    {
        config.validate()?;

        let validators = config
            .validators()
            .iter()
            .map(|address| {
                connect(address.as_str()).map(|client| ValidatorEndpoint::new(address.clone(), client))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let selector = Selector::with_rng(
            &validators,
            config.host_validator(),
            config.genesis(),
            config.own_address(),
            rng,
        )?;

        let issuer = Issuer::new(config.key_material().clone(), config.pacing().submit_mode());
        let gate = LivenessGate::new(config.host_validator().clone(), *config.liveness_backoff());

        info!(
            "Bootstrapped transacter: {} validators, {} transactions, {:?}",
            validators.len(),
            config.amount_of_transactions(),
            config.pacing()
        );

        Ok(Self {
            validators,
            gate,
            selector,
            issuer,
            pacing: *config.pacing(),
            amount_of_transactions: *config.amount_of_transactions(),
            amount_per_transaction: *config.amount_per_transaction(),
            own_address: config.own_address().clone(),
            phase: RunPhase::Init,
            phase_history: vec![RunPhase::Init],
        })
    }
}
