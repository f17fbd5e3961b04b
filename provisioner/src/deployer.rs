//! Seam between the migration steps and the chain.
//!
//! Steps only ever see [`ContractDeployer`]; the alloy-backed
//! [`EvmDeployer`] is the single implementation wired up by `main`.

use std::fs;
use std::path::PathBuf;

use alloy::{
    dyn_abi::DynSolValue,
    network::TransactionBuilder,
    primitives::{Address, Bytes, B256, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    sol,
};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use log::info;
use serde::Deserialize;
use url::Url;

const DEPLOYER: &str = "DEPLOYER";

sol! {
    #[sol(rpc)]
    interface IAccessControl {
        function grantRole(bytes32 role, address account) external;
        function renounceRole(bytes32 role, address account) external;
    }

    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// Capabilities the migration steps need from the deployment backend.
///
/// Failures surface unchanged from the underlying node; steps never
/// retry a deployment.
#[async_trait]
pub trait ContractDeployer {
    /// Account the deployment transactions are sent from.
    fn sender(&self) -> Address;

    /// Deploys the named contract with ordered constructor arguments and
    /// returns its on-chain address.
    async fn deploy(&self, contract: &str, args: &[DynSolValue]) -> anyhow::Result<Address>;

    async fn grant_role(&self, contract: Address, role: B256, account: Address)
        -> anyhow::Result<()>;

    async fn renounce_role(
        &self,
        contract: Address,
        role: B256,
        account: Address,
    ) -> anyhow::Result<()>;

    async fn token_balance(&self, token: Address, holder: Address) -> anyhow::Result<U256>;

    async fn transfer_token(&self, token: Address, to: Address, amount: U256)
        -> anyhow::Result<()>;
}

/// Compiled contract artifact as emitted by the solidity toolchain.
#[derive(Debug, Deserialize)]
struct ContractArtifact {
    bytecode: String,
}

/// Deploys through a development node over HTTP.
///
/// Signing stays with the node: every transaction carries a `from` of the
/// node's first unlocked account and goes out as `eth_sendTransaction`.
pub struct EvmDeployer<P> {
    provider: P,
    sender: Address,
    contracts_dir: PathBuf,
}

pub async fn connect(
    rpc_url: &str,
    contracts_dir: PathBuf,
) -> anyhow::Result<EvmDeployer<impl Provider + Clone>> {
    let url = rpc_url
        .parse::<Url>()
        .with_context(|| format!("invalid rpc url: {rpc_url}"))?;
    let provider = ProviderBuilder::new().on_http(url);

    let accounts = provider.get_accounts().await?;
    let sender = accounts
        .first()
        .copied()
        .ok_or_else(|| anyhow!("node at {rpc_url} exposes no unlocked accounts"))?;
    info!(target: DEPLOYER, "deploying from node account {sender}");

    Ok(EvmDeployer {
        provider,
        sender,
        contracts_dir,
    })
}

impl<P> EvmDeployer<P> {
    fn load_bytecode(&self, contract: &str) -> anyhow::Result<Vec<u8>> {
        let path = self.contracts_dir.join(format!("{contract}.json"));
        let raw = fs::read_to_string(&path).with_context(|| {
            format!(
                "missing compiled artifact for {contract} at {}",
                path.display()
            )
        })?;
        let artifact: ContractArtifact = serde_json::from_str(&raw)
            .with_context(|| format!("malformed compiled artifact at {}", path.display()))?;
        let bytecode = hex::decode(artifact.bytecode.trim_start_matches("0x"))
            .with_context(|| format!("artifact for {contract} holds non-hex bytecode"))?;
        Ok(bytecode)
    }
}

#[async_trait]
impl<P: Provider + Clone + Send + Sync + 'static> ContractDeployer for EvmDeployer<P> {
    fn sender(&self) -> Address {
        self.sender
    }

    async fn deploy(&self, contract: &str, args: &[DynSolValue]) -> anyhow::Result<Address> {
        let mut code = self.load_bytecode(contract)?;
        if !args.is_empty() {
            code.extend(DynSolValue::Tuple(args.to_vec()).abi_encode_params());
        }

        let tx = TransactionRequest::default()
            .with_from(self.sender)
            .with_deploy_code(Bytes::from(code));

        let receipt = self
            .provider
            .send_transaction(tx)
            .await?
            .get_receipt()
            .await?;
        let address = receipt
            .contract_address
            .ok_or_else(|| anyhow!("deployment receipt for {contract} carries no contract address"))?;

        info!(target: DEPLOYER, "{contract} deployed at {address}");
        Ok(address)
    }

    async fn grant_role(
        &self,
        contract: Address,
        role: B256,
        account: Address,
    ) -> anyhow::Result<()> {
        let access = IAccessControl::new(contract, self.provider.clone());
        access
            .grantRole(role, account)
            .from(self.sender)
            .send()
            .await?
            .get_receipt()
            .await?;
        Ok(())
    }

    async fn renounce_role(
        &self,
        contract: Address,
        role: B256,
        account: Address,
    ) -> anyhow::Result<()> {
        let access = IAccessControl::new(contract, self.provider.clone());
        access
            .renounceRole(role, account)
            .from(self.sender)
            .send()
            .await?
            .get_receipt()
            .await?;
        Ok(())
    }

    async fn token_balance(&self, token: Address, holder: Address) -> anyhow::Result<U256> {
        let token = IERC20::new(token, self.provider.clone());
        Ok(token.balanceOf(holder).call().await?._0)
    }

    async fn transfer_token(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> anyhow::Result<()> {
        let token = IERC20::new(token, self.provider.clone());
        token
            .transfer(to, amount)
            .from(self.sender)
            .send()
            .await?
            .get_receipt()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use alloy::primitives::keccak256;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum DeployerCall {
        Deploy {
            contract: String,
            args: Vec<DynSolValue>,
        },
        GrantRole {
            contract: Address,
            role: B256,
            account: Address,
        },
        RenounceRole {
            contract: Address,
            role: B256,
            account: Address,
        },
        TransferToken {
            token: Address,
            to: Address,
            amount: U256,
        },
    }

    /// Records every capability invocation. Deployments return an address
    /// derived from the contract name so callers can assert wiring.
    pub(crate) struct RecordingDeployer {
        pub sender: Address,
        pub balance: U256,
        pub calls: Mutex<Vec<DeployerCall>>,
    }

    impl RecordingDeployer {
        pub fn new() -> Self {
            Self {
                sender: Address::repeat_byte(0xEE),
                balance: U256::from(1_000u64),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<DeployerCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn deployed(&self) -> Vec<(String, Vec<DynSolValue>)> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    DeployerCall::Deploy { contract, args } => Some((contract, args)),
                    _ => None,
                })
                .collect()
        }

        pub fn address_for(contract: &str) -> Address {
            Address::from_word(keccak256(contract.as_bytes()))
        }
    }

    #[async_trait]
    impl ContractDeployer for RecordingDeployer {
        fn sender(&self) -> Address {
            self.sender
        }

        async fn deploy(&self, contract: &str, args: &[DynSolValue]) -> anyhow::Result<Address> {
            self.calls.lock().unwrap().push(DeployerCall::Deploy {
                contract: contract.to_string(),
                args: args.to_vec(),
            });
            Ok(Self::address_for(contract))
        }

        async fn grant_role(
            &self,
            contract: Address,
            role: B256,
            account: Address,
        ) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push(DeployerCall::GrantRole {
                contract,
                role,
                account,
            });
            Ok(())
        }

        async fn renounce_role(
            &self,
            contract: Address,
            role: B256,
            account: Address,
        ) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push(DeployerCall::RenounceRole {
                contract,
                role,
                account,
            });
            Ok(())
        }

        async fn token_balance(&self, _token: Address, _holder: Address) -> anyhow::Result<U256> {
            Ok(self.balance)
        }

        async fn transfer_token(
            &self,
            token: Address,
            to: Address,
            amount: U256,
        ) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push(DeployerCall::TransferToken {
                token,
                to,
                amount,
            });
            Ok(())
        }
    }
}
