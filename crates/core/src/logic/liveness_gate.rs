use crate::prelude::*;

use futures::future::join_all;
use std::time::Duration;

/// A cluster needs at least this many validators to be worth loading.
pub const MIN_VALIDATORS: usize = 2;

/// Start-up barrier: every configured validator must answer its probe in
/// the same attempt before any transaction is sent.
///
/// Retries forever on failure, `backoff` apart. The attempt counter is the
/// only state and exists for reporting.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct LivenessGate {
    #[getset(get = "pub")]
    host_validator: String,

    #[getset(get_copy = "pub")]
    backoff: Duration,

    #[getset(get_copy = "pub")]
    attempts: u64,
}

impl LivenessGate {
    pub fn new(host_validator: impl Into<String>, backoff: Duration) -> Self {
        Self {
            host_validator: host_validator.into(),
            backoff,
            attempts: 0,
        }
    }

    /// Resolves once all validators are up. Only returns an error for
    /// configuration problems, which no amount of waiting fixes.
    pub async fn await_quorum(&mut self, validators: &[ValidatorEndpoint]) -> Result<(), Error> {
        loop {
            match self.check_once(validators).await {
                Ok(()) => return Ok(()),
                Err(Error::Liveness(e)) => self.back_off(&e).await,
                Err(fatal) => return Err(fatal),
            }
        }
    }

    /// Logs the failed attempt and sleeps `backoff` before the next one.
    pub async fn back_off(&self, failure: &LivenessError) {
        error!("[ERROR]: {failure}");
        info!(
            "Waiting {} seconds until retry (attempt {} failed).",
            self.backoff.as_secs(),
            self.attempts
        );
        tokio::time::sleep(self.backoff).await;
        info!("Retrying..");
    }

    /// A single attempt over the whole validator set, no retry.
    pub async fn check_once(&mut self, validators: &[ValidatorEndpoint]) -> Result<(), Error> {
        if validators.len() < MIN_VALIDATORS {
            return Err(ConfigError::InsufficientValidators {
                configured: validators.len(),
            }
            .into());
        }
        self.attempts += 1;
        info!("Verifying if validators are up.");

        let probes = validators
            .iter()
            .map(|validator| self.probe(validator));
        let unreachable = join_all(probes)
            .await
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        if unreachable.is_empty() {
            info!("Validators are up.");
            Ok(())
        } else {
            Err(LivenessError::ValidatorsNotUp { unreachable }.into())
        }
    }

    /// `Some(address)` if the validator did not answer. The local host is
    /// up by definition and never probed.
    async fn probe(&self, validator: &ValidatorEndpoint) -> Option<String> {
        if validator.is_local_host(&self.host_validator) {
            debug!("Validator {} is the local host, not probing", validator.address());
            return None;
        }
        match validator.client().probe_liveness().await {
            Ok(()) => {
                info!("[UP] Validator: {} is up.", validator.address());
                None
            }
            Err(e) => {
                warn!("[NOTUP] Validator {} is not up: {e}", validator.address());
                Some(validator.address().clone())
            }
        }
    }
}
