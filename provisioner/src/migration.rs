//! The one-shot provisioning pipeline.

use alloy::primitives::Address;
use common::{DeploymentConstants, EthereumInputs, NetworkKind};
use log::info;

use crate::deployer::ContractDeployer;
use crate::steps;
use crate::PROVISIONER;

/// Terminal states of a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The gate did not pass; no transaction left the process.
    Skipped,
    Provisioned { token: Address, bridge: Address },
}

/// Runs the full pipeline: token reuse-or-deploy, one bridge deployment,
/// role setup.
///
/// Anything other than a development network short-circuits to
/// [`MigrationOutcome::Skipped`] without touching the chain.
pub async fn run<D: ContractDeployer>(
    deployer: &D,
    network: NetworkKind,
    inputs: &EthereumInputs,
    constants: &DeploymentConstants,
) -> anyhow::Result<MigrationOutcome> {
    if !network.is_development() {
        info!(
            target: PROVISIONER,
            "{network} is not a development network, nothing to provision"
        );
        return Ok(MigrationOutcome::Skipped);
    }

    let token = match inputs.token_address {
        Some(address) => {
            info!(target: PROVISIONER, "reusing already-deployed token at {address}");
            address
        }
        None => steps::deploy_token(deployer, &constants.token, inputs.wallets.admin).await?,
    };

    let bridge = steps::deploy_bridge(deployer, token, &constants.bridge).await?;

    steps::setup_roles(deployer, bridge, &constants.roles, &inputs.wallets).await?;

    Ok(MigrationOutcome::Provisioned { token, bridge })
}
