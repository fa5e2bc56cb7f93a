use crate::prelude::*;

use std::time::Duration;

/// The cluster as seen from this machine, after merging flags, environment
/// and configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCluster {
    pub validators: Vec<String>,
    pub host_validator: String,
    pub rpc_port: u16,
}

fn local_host_name() -> Result<String, InvalidCliArgs> {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .map_err(|e| InvalidCliArgs::HostnameUnavailable {
            underlying: e.to_string(),
        })
}

/// Each value comes from the first source that has it: flag or environment
/// variable, then configuration file, then default.
pub fn resolve_cluster(
    args: &ClusterArgs,
    file: &ConfigurationFile,
) -> Result<ResolvedCluster, InvalidCliArgs> {
    let validators = args
        .validators
        .clone()
        .map(Vec::from)
        .or_else(|| file.validators.clone())
        .unwrap_or_default();
    let host_validator = match &args.host_validator {
        Some(host) => host.clone(),
        None => local_host_name()?,
    };
    debug!("Local host identifier: {host_validator}");
    Ok(ResolvedCluster {
        validators,
        host_validator,
        rpc_port: args.rpc_port,
    })
}

pub fn resolve_pacing(
    mode: PacingMode,
    transactions_per_second: Option<u32>,
    file: &ConfigurationFile,
) -> Result<Pacing, InvalidCliArgs> {
    match mode {
        PacingMode::SequentialConfirm => Ok(Pacing::SequentialConfirm),
        PacingMode::FixedRate => {
            let transactions_per_second = transactions_per_second
                .or(file.transactions_per_second)
                .unwrap_or(DEFAULT_TRANSACTIONS_PER_SECOND);
            if transactions_per_second == 0 {
                return Err(InvalidCliArgs::TpsCannotBeZero);
            }
            Ok(Pacing::FixedRate {
                transactions_per_second,
            })
        }
    }
}

/// Reads the configuration, key and genesis files and assembles the run.
/// Key and genesis problems are fatal.
pub fn resolve_run_config(args: RunArgs) -> Result<(RunConfig, ResolvedCluster), CliError> {
    let file = ConfigurationFile::load_or_default(&args.cluster.configuration);
    let cluster = resolve_cluster(&args.cluster, &file)?;
    let pacing = resolve_pacing(args.mode, args.transactions_per_second, &file)?;
    let amount_of_transactions = args
        .amount_of_transactions
        .or(file.amount_of_transactions)
        .unwrap_or(DEFAULT_AMOUNT_OF_TRANSACTIONS);

    let key_material = load_key_material(&args.priv_validator)?;
    let genesis = load_genesis(&args.genesis)?;

    let config = RunConfig::builder()
        .validators(cluster.validators.clone())
        .host_validator(cluster.host_validator.clone())
        .pacing(pacing)
        .amount_of_transactions(amount_of_transactions)
        .amount_per_transaction(args.amount)
        .key_material(key_material)
        .genesis(genesis)
        .liveness_backoff(Duration::from_secs(args.liveness_backoff_secs))
        .maybe_seed(args.seed)
        .build();
    Ok((config, cluster))
}
