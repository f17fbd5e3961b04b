use alloy::primitives::Address;
use common::{constants::BridgeRoles, RoleWallets};
use log::info;

use crate::deployer::ContractDeployer;

const ROLE_SETUP: &str = "ROLE_SETUP";

/// Grants the bridge roles to their configured wallets and hands the
/// admin role over.
///
/// The deployer account renounces its own admin role once admin
/// ownership moves to a different wallet.
pub async fn setup_roles<D: ContractDeployer>(
    deployer: &D,
    bridge: Address,
    roles: &BridgeRoles,
    wallets: &RoleWallets,
) -> anyhow::Result<()> {
    info!(target: ROLE_SETUP, "setting up bridge roles...");

    let assignments = [
        ("delegate", roles.delegate, wallets.delegate),
        ("relayer", roles.relayer, wallets.relayer),
        ("monitor", roles.monitor, wallets.monitor),
        ("approver", roles.approver, wallets.approver),
    ];
    for (label, role, wallet) in assignments {
        if let Some(account) = wallet {
            deployer.grant_role(bridge, role, account).await?;
            info!(target: ROLE_SETUP, "granted {label} role to {account}");
        }
    }

    if let Some(admin) = wallets.admin {
        deployer.grant_role(bridge, roles.default_admin, admin).await?;
        info!(target: ROLE_SETUP, "granted admin role to {admin}");

        if admin != deployer.sender() {
            deployer
                .renounce_role(bridge, roles.default_admin, deployer.sender())
                .await?;
            info!(target: ROLE_SETUP, "deployer {} renounced the admin role", deployer.sender());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deployer::testing::{DeployerCall, RecordingDeployer};

    #[tokio::test]
    async fn grants_only_configured_wallets() {
        let deployer = RecordingDeployer::new();
        let roles = BridgeRoles::derive();
        let bridge = Address::repeat_byte(0x01);
        let relayer = Address::repeat_byte(0xBB);

        let wallets = RoleWallets {
            relayer: Some(relayer),
            ..Default::default()
        };
        setup_roles(&deployer, bridge, &roles, &wallets).await.unwrap();

        assert_eq!(
            deployer.calls(),
            vec![DeployerCall::GrantRole {
                contract: bridge,
                role: roles.relayer,
                account: relayer,
            }]
        );
    }

    #[tokio::test]
    async fn admin_handover_renounces_the_deployer() {
        let deployer = RecordingDeployer::new();
        let roles = BridgeRoles::derive();
        let bridge = Address::repeat_byte(0x01);
        let admin = Address::repeat_byte(0xAA);

        let wallets = RoleWallets {
            admin: Some(admin),
            ..Default::default()
        };
        setup_roles(&deployer, bridge, &roles, &wallets).await.unwrap();

        assert_eq!(
            deployer.calls(),
            vec![
                DeployerCall::GrantRole {
                    contract: bridge,
                    role: roles.default_admin,
                    account: admin,
                },
                DeployerCall::RenounceRole {
                    contract: bridge,
                    role: roles.default_admin,
                    account: deployer.sender(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn self_administration_keeps_the_admin_role() {
        let deployer = RecordingDeployer::new();
        let roles = BridgeRoles::derive();
        let bridge = Address::repeat_byte(0x01);

        let wallets = RoleWallets {
            admin: Some(deployer.sender()),
            ..Default::default()
        };
        setup_roles(&deployer, bridge, &roles, &wallets).await.unwrap();

        assert!(!deployer
            .calls()
            .iter()
            .any(|call| matches!(call, DeployerCall::RenounceRole { .. })));
    }

    #[tokio::test]
    async fn no_wallets_means_no_calls() {
        let deployer = RecordingDeployer::new();

        setup_roles(
            &deployer,
            Address::repeat_byte(0x01),
            &BridgeRoles::derive(),
            &RoleWallets::default(),
        )
        .await
        .unwrap();

        assert!(deployer.calls().is_empty());
    }
}
