//! Schemas for the provisioner inputs file and the recorded deployment
//! outputs.

use std::path::PathBuf;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Per-environment inputs, read from `inputs/ethereum_inputs.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EthereumInputs {
    /// Name of the chain this run targets, e.g. "development" or
    /// "mainnet". Classified into a [`crate::NetworkKind`] at startup.
    pub network: String,
    pub rpc_url: String,
    /// Directory holding the compiled contract artifacts (`<Name>.json`).
    pub contracts_dir: PathBuf,
    /// Reuse an already-deployed token instead of deploying the mock.
    pub token_address: Option<Address>,
    #[serde(default)]
    pub wallets: RoleWallets,
}

/// Wallets the bridge roles get granted to. Every entry is optional, an
/// absent wallet simply keeps the role unassigned.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleWallets {
    pub admin: Option<Address>,
    pub delegate: Option<Address>,
    pub relayer: Option<Address>,
    pub monitor: Option<Address>,
    pub approver: Option<Address>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeDeploymentConfig {
    // node info
    pub network: String,
    pub rpc_url: String,

    // contracts
    pub token: Address,
    pub bridge: Address,

    // account the deployment transactions were sent from
    pub deployer: Address,
}
