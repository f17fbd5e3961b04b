use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use common::constants::TokenMetadata;
use log::info;

use crate::deployer::ContractDeployer;

const TOKEN_DEPLOYMENT: &str = "TOKEN_DEPLOYMENT";

const TOKEN_CONTRACT: &str = "FetERC20Mock";

/// Deploys the mock FET token and moves its entire initial supply to the
/// bridge admin wallet when one is configured.
pub async fn deploy_token<D: ContractDeployer>(
    deployer: &D,
    token: &TokenMetadata,
    admin: Option<Address>,
) -> anyhow::Result<Address> {
    info!(target: TOKEN_DEPLOYMENT, "deploying {} ({})...", token.name, token.symbol);

    let args = [
        DynSolValue::String(token.name.to_string()),
        DynSolValue::String(token.symbol.to_string()),
        DynSolValue::Uint(token.initial_supply, 256),
        DynSolValue::Uint(U256::from(token.decimals), 8),
    ];
    let address = deployer.deploy(TOKEN_CONTRACT, &args).await?;
    info!(target: TOKEN_DEPLOYMENT, "{TOKEN_CONTRACT} instantiated: {address}");

    if let Some(admin) = admin {
        let supply = deployer.token_balance(address, deployer.sender()).await?;
        deployer.transfer_token(address, admin, supply).await?;
        info!(
            target: TOKEN_DEPLOYMENT,
            "transferred {supply} canonical FET from {} to admin wallet {admin}",
            deployer.sender()
        );
    }

    Ok(address)
}
