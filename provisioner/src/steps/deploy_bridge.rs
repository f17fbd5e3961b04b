use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, U256},
};
use common::constants::BridgeInitParams;
use log::info;

use crate::deployer::ContractDeployer;

const BRIDGE_DEPLOYMENT: &str = "BRIDGE_DEPLOYMENT";

const BRIDGE_CONTRACT: &str = "Bridge";

/// Issues the single bridge deployment.
///
/// Constructor argument order is fixed by the contract: token, cap,
/// upper swap limit, lower swap limit, swap fee, paused-since block,
/// deletion protection period.
pub async fn deploy_bridge<D: ContractDeployer>(
    deployer: &D,
    token: Address,
    params: &BridgeInitParams,
) -> anyhow::Result<Address> {
    info!(target: BRIDGE_DEPLOYMENT, "deploying {BRIDGE_CONTRACT} against token {token}...");

    let args = [
        DynSolValue::Address(token),
        DynSolValue::Uint(params.cap, 256),
        DynSolValue::Uint(params.upper_swap_limit, 256),
        DynSolValue::Uint(params.lower_swap_limit, 256),
        DynSolValue::Uint(params.swap_fee, 256),
        DynSolValue::Uint(params.paused_since_block, 256),
        DynSolValue::Uint(U256::from(params.deletion_protection_period), 256),
    ];
    let address = deployer.deploy(BRIDGE_CONTRACT, &args).await?;

    info!(target: BRIDGE_DEPLOYMENT, "{BRIDGE_CONTRACT} instantiated: {address}");
    Ok(address)
}

#[cfg(test)]
mod tests {
    use common::constants::{canonical_multiplier, TOKEN_DECIMALS};

    use super::*;
    use crate::deployer::testing::RecordingDeployer;

    #[tokio::test]
    async fn passes_the_seven_constructor_args_in_order() {
        let deployer = RecordingDeployer::new();
        let params = BridgeInitParams::initial(canonical_multiplier(TOKEN_DECIMALS));
        let token = Address::repeat_byte(0x42);

        deploy_bridge(&deployer, token, &params).await.unwrap();

        let deployed = deployer.deployed();
        assert_eq!(deployed.len(), 1);

        let (contract, args) = &deployed[0];
        assert_eq!(contract, "Bridge");
        assert_eq!(
            args,
            &vec![
                DynSolValue::Address(token),
                DynSolValue::Uint(params.cap, 256),
                DynSolValue::Uint(params.upper_swap_limit, 256),
                DynSolValue::Uint(params.lower_swap_limit, 256),
                DynSolValue::Uint(params.swap_fee, 256),
                DynSolValue::Uint(U256::MAX, 256),
                DynSolValue::Uint(U256::from(10u64), 256),
            ]
        );
    }
}
