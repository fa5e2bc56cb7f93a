use crate::prelude::*;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub const BINARY_NAME: &str = "transacter";
pub const DEFAULT_CONFIGURATION_PATH: &str = "./configuration/transacter/configuration.json";
pub const DEFAULT_GENESIS_PATH: &str = "./configuration/account/genesis.json";
pub const DEFAULT_PRIV_VALIDATOR_PATH: &str = "./configuration/account/priv_validator.json";
pub const DEFAULT_TRANSACTIONS_PER_SECOND: u32 = 100;
pub const DEFAULT_AMOUNT_OF_TRANSACTIONS: usize = 400;

/// Transaction load generator for a permissioned validator cluster.
///
/// Waits until every configured validator answers, then sends transfers to
/// random genesis accounts through random validators, either at a fixed
/// rate or one confirmed transaction at a time.
#[derive(Debug, Parser)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wait for the validators, then send the configured transactions.
    Run(RunArgs),
    /// Probe every validator once and exit non-zero if any is down.
    CheckValidators(ClusterArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum PacingMode {
    /// Fire-and-forget at `--transactions-per-second`
    FixedRate,
    /// Wait for each transaction to be included before the next
    SequentialConfirm,
}

/// Where the cluster is and who we are in it.
#[derive(Debug, Clone, Args)]
pub struct ClusterArgs {
    /// Validator host names, as a JSON array or comma-separated list.
    /// Falls back to `validators` in the configuration file.
    #[arg(long, env = "VALIDATORS")]
    pub validators: Option<ValidatorHosts>,

    /// Identifies the local validator among `--validators`, defaults to the
    /// host name of this machine.
    #[arg(long, env = "HOST_VALIDATOR")]
    pub host_validator: Option<String>,

    /// Port of each validator's RPC endpoint.
    #[arg(long, default_value_t = DEFAULT_RPC_PORT)]
    pub rpc_port: u16,

    /// JSON configuration file, consulted for values not given as flags or
    /// environment variables.
    #[arg(long, default_value = DEFAULT_CONFIGURATION_PATH)]
    pub configuration: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub cluster: ClusterArgs,

    /// Target rate in fixed-rate mode [default: 100]
    #[arg(long, env = "TRANSACTIONS_PER_SECOND")]
    pub transactions_per_second: Option<u32>,

    /// Total number of transactions to send [default: 400]
    #[arg(long, env = "AMOUNT_OF_TRANSACTIONS")]
    pub amount_of_transactions: Option<usize>,

    #[arg(long, value_enum, default_value_t = PacingMode::FixedRate)]
    pub mode: PacingMode,

    /// Amount transferred by each transaction.
    #[arg(long, default_value_t = DEFAULT_AMOUNT_PER_TRANSACTION)]
    pub amount: Amount,

    /// Genesis snapshot holding the destination accounts.
    #[arg(long, default_value = DEFAULT_GENESIS_PATH)]
    pub genesis: PathBuf,

    /// Key file with own address and key pair.
    #[arg(long, default_value = DEFAULT_PRIV_VALIDATOR_PATH)]
    pub priv_validator: PathBuf,

    /// Seconds to wait between liveness attempts.
    #[arg(long, default_value_t = DEFAULT_LIVENESS_BACKOFF.as_secs())]
    pub liveness_backoff_secs: u64,

    /// Seed for validator and destination draws, for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn run_defaults() {
        let args = CliArgs::try_parse_from([BINARY_NAME, "run", "--validators", "v0,v1"]).unwrap();
        let Command::Run(run) = args.command else {
            panic!("expected run");
        };
        assert_eq!(run.mode, PacingMode::FixedRate);
        assert_eq!(run.amount, 1);
        assert_eq!(run.liveness_backoff_secs, 30);
        assert_eq!(run.cluster.rpc_port, 1337);
        assert_eq!(
            run.cluster.validators.map(Vec::from),
            Some(vec!["v0".to_owned(), "v1".to_owned()])
        );
        assert_eq!(run.genesis, PathBuf::from(DEFAULT_GENESIS_PATH));
    }

    #[test]
    fn sequential_mode_flag() {
        let args = CliArgs::try_parse_from([
            BINARY_NAME,
            "run",
            "--mode",
            "sequential-confirm",
            "--amount-of-transactions",
            "5",
        ])
        .unwrap();
        let Command::Run(run) = args.command else {
            panic!("expected run");
        };
        assert_eq!(run.mode, PacingMode::SequentialConfirm);
        assert_eq!(run.amount_of_transactions, Some(5));
    }
}
