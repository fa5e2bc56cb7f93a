use crate::prelude::*;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn connect(host: &str, rpc_port: u16) -> Result<Arc<dyn ValidatorClient>, ConfigError> {
    let client = JsonRpcClient::for_host(host, rpc_port)?;
    debug!("Validator {host} reachable at {}", client.url());
    Ok(Arc::new(client))
}

async fn run_transacter(args: RunArgs) -> Result<(), CliError> {
    let (config, cluster) = resolve_run_config(args)?;
    let mut transacter = Transacter::bootstrap(config, |host| connect(host, cluster.rpc_port))?;
    let report = transacter.run().await?;
    info!("Sent {} transactions ({report})", report.dispatched);
    Ok(())
}

async fn check_validators(args: ClusterArgs) -> Result<(), CliError> {
    let file = ConfigurationFile::load_or_default(&args.configuration);
    let cluster = resolve_cluster(&args, &file)?;
    let validators = cluster
        .validators
        .iter()
        .map(|host| connect(host, cluster.rpc_port).map(|c| ValidatorEndpoint::new(host.clone(), c)))
        .collect::<Result<Vec<_>, _>>()?;
    // A single attempt, so the backoff is never used.
    let mut gate = LivenessGate::new(cluster.host_validator, Duration::ZERO);
    gate.check_once(&validators).await?;
    Ok(())
}

async fn run_subcommand(command: Command) -> Result<(), CliError> {
    match command {
        Command::Run(args) => run_transacter(args).await,
        Command::CheckValidators(args) => check_validators(args).await,
    }
}

pub async fn run(cli_args: CliArgs) -> ExitCode {
    match run_subcommand(cli_args.command).await {
        Ok(_) => {
            info!("{} ran successfully", BINARY_NAME);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error running {}: {}", BINARY_NAME, e);
            ExitCode::FAILURE
        }
    }
}
