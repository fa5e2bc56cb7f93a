use crate::prelude::*;

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Config error {0}")]
    Config(#[from] ConfigError),

    #[error("Liveness error {0}")]
    Liveness(#[from] LivenessError),

    #[error("A run cannot move from {from} to {to}")]
    PhaseOutOfOrder { from: RunPhase, to: RunPhase },
}

/// Fatal misconfiguration, detected before any transaction is sent.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The required amount of 2 validators for a cluster has not been met, got: {configured}")]
    InsufficientValidators { configured: usize },

    #[error("Every configured validator matches the local host `{host}`, no validator to send to")]
    NoValidatorCandidates { host: String },

    #[error("Genesis holds no account other than own address `{own_address}`")]
    NoDestinationCandidates { own_address: Address },

    #[error("Validator address `{address}` does not form a valid RPC url: {underlying}")]
    ValidatorAddressInvalid { address: String, underlying: String },

    #[error("Transactions per second cannot be zero")]
    TransactionsPerSecondIsZero,

    #[error("Unable to read genesis file {path:?}: {underlying}")]
    GenesisUnreadable { path: PathBuf, underlying: String },

    #[error("Unable to parse genesis file {path:?}: {underlying}")]
    GenesisMalformed { path: PathBuf, underlying: String },

    #[error("Unable to read key file {path:?}: {underlying}")]
    KeyFileUnreadable { path: PathBuf, underlying: String },

    #[error("Unable to parse key file {path:?}: {underlying}")]
    KeyFileMalformed { path: PathBuf, underlying: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LivenessError {
    #[error("Validators are not up yet: {}", unreachable.join(", "))]
    ValidatorsNotUp { unreachable: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SendPhase {
    #[display("sign")]
    Sign,
    #[display("broadcast")]
    Broadcast,
    #[display("hold")]
    Hold,
}

/// A single transaction failed; the run carries on with the next one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to {phase} transaction: {underlying}")]
pub struct SendError {
    pub phase: SendPhase,
    pub underlying: String,
}

impl SendError {
    pub fn new(phase: SendPhase, underlying: impl ToDebugString) -> Self {
        Self {
            phase,
            underlying: underlying.to_debug_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("No candidate left after excluding `{excluded}`")]
    Exhausted { excluded: String },
}

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Failed to reach {url}: {underlying}")]
    Transport { url: String, underlying: String },

    #[error("RPC call `{method}` returned error {code}: {message}")]
    Remote {
        method: String,
        code: i64,
        message: String,
    },

    #[error("RPC call `{method}` returned neither result nor error")]
    MissingResult { method: String },

    #[error("Failed to decode response of `{method}`: {underlying}")]
    Decode { method: String, underlying: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_error_names_phase() {
        let err = SendError::new(SendPhase::Broadcast, "connection refused");
        assert_eq!(err.phase, SendPhase::Broadcast);
        assert!(err.to_string().starts_with("Failed to broadcast transaction"));
    }

    #[test]
    fn liveness_error_lists_unreachable_validators() {
        let err = LivenessError::ValidatorsNotUp {
            unreachable: vec!["validator-1".to_owned(), "validator-2".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "Validators are not up yet: validator-1, validator-2"
        );
    }
}
