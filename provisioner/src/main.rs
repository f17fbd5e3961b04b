mod artifacts;
mod deployer;
mod migration;
mod steps;

use alloy::primitives::Address;
use clap::Parser;
use common::{BridgeDeploymentConfig, DeploymentConstants, EthereumInputs, NetworkKind};
use log::info;

use crate::artifacts::{BridgeOutputs, TokenOutputs};
use crate::deployer::ContractDeployer;
use crate::migration::MigrationOutcome;

pub(crate) const PROVISIONER: &str = "PROVISIONER";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// deploys the mock FET ERC20 token and sweeps its initial supply
    /// to the configured admin wallet. reuses the token pinned in the
    /// inputs file instead of deploying when one is set.
    ///
    /// prerequisite for the following steps:
    ///
    /// - `deploy_bridge`
    #[arg(long)]
    deploy_token: bool,

    /// runs the bridge contract deployment as described in
    /// `provisioner/src/steps/deploy_bridge.rs`.
    ///
    /// depends on the following steps:
    ///
    /// - `deploy_token`
    ///
    /// prerequisite for the following steps:
    ///
    /// - `setup_roles`
    #[arg(long)]
    deploy_bridge: bool,

    /// grants the bridge access-control roles to the configured wallets
    /// and hands the admin role over to the admin wallet.
    ///
    /// depends on the following steps:
    ///
    /// - `deploy_bridge`
    #[arg(long)]
    setup_roles: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let inputs = steps::read_setup_inputs()?;
    let network = inputs.network.parse::<NetworkKind>()?;
    let constants = DeploymentConstants::initial();

    // one-shot setup never touches anything beyond development chains
    if !network.is_development() {
        info!(
            target: PROVISIONER,
            "{} is not a development network, nothing to provision", inputs.network
        );
        return Ok(());
    }

    let deployer = deployer::connect(&inputs.rpc_url, inputs.contracts_dir.clone()).await?;

    // if no flags were specified we do the full provisioning run
    let run_all = !cli.deploy_token && !cli.deploy_bridge && !cli.setup_roles;

    if run_all {
        if let MigrationOutcome::Provisioned { token, bridge } =
            migration::run(&deployer, network, &inputs, &constants).await?
        {
            artifacts::write_token_artifacts(TokenOutputs { token })?;
            artifacts::write_bridge_artifacts(BridgeOutputs { bridge })?;
            steps::write_setup_artifacts(deployment_config(&deployer, &inputs, token, bridge))?;
        }
        return Ok(());
    }

    // individual steps exchange state through the artifacts directory
    if cli.deploy_token {
        let token = match inputs.token_address {
            Some(address) => {
                info!(target: PROVISIONER, "reusing already-deployed token at {address}");
                address
            }
            None => steps::deploy_token(&deployer, &constants.token, inputs.wallets.admin).await?,
        };
        artifacts::write_token_artifacts(TokenOutputs { token })?;
    }

    if cli.deploy_bridge {
        let token = artifacts::read_token_artifacts()?.token;
        let bridge = steps::deploy_bridge(&deployer, token, &constants.bridge).await?;
        artifacts::write_bridge_artifacts(BridgeOutputs { bridge })?;
    }

    if cli.setup_roles {
        let token = artifacts::read_token_artifacts()?.token;
        let bridge = artifacts::read_bridge_artifacts()?.bridge;
        steps::setup_roles(&deployer, bridge, &constants.roles, &inputs.wallets).await?;
        steps::write_setup_artifacts(deployment_config(&deployer, &inputs, token, bridge))?;
    }

    Ok(())
}

fn deployment_config<D: ContractDeployer>(
    deployer: &D,
    inputs: &EthereumInputs,
    token: Address,
    bridge: Address,
) -> BridgeDeploymentConfig {
    BridgeDeploymentConfig {
        network: inputs.network.clone(),
        rpc_url: inputs.rpc_url.clone(),
        token,
        bridge,
        deployer: deployer.sender(),
    }
}
