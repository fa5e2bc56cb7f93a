use crate::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum InvalidCliArgs {
    #[error("TPS cannot be zero")]
    TpsCannotBeZero,

    #[error("Unable to determine the local host name, pass --host-validator: {underlying}")]
    HostnameUnavailable { underlying: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid CLI arguments: {0}")]
    InvalidCliArgs(#[from] InvalidCliArgs),

    #[error("{0}")]
    CoreError(#[from] Error),
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::CoreError(error.into())
    }
}
