use std::fs;

use alloy::primitives::Address;
use anyhow::anyhow;
use common::artifacts_dir;
use log::info;
use serde::{Deserialize, Serialize};

use crate::PROVISIONER;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenOutputs {
    pub token: Address,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BridgeOutputs {
    pub bridge: Address,
}

pub(crate) fn write_token_artifacts(outputs: TokenOutputs) -> anyhow::Result<()> {
    fs::create_dir_all(artifacts_dir())?;
    let path = artifacts_dir().join("token_outputs.toml");
    info!(target: PROVISIONER, "writing token deployment artifacts to {}", path.display());
    fs::write(path, toml::to_string(&outputs)?)?;
    Ok(())
}

pub(crate) fn read_token_artifacts() -> anyhow::Result<TokenOutputs> {
    let path = artifacts_dir().join("token_outputs.toml");
    let content = fs::read_to_string(path).map_err(|_| {
        anyhow!("token deployment artifacts not found. run --deploy-token step first.")
    })?;
    toml::from_str(&content).map_err(|e| anyhow!("failed to reconstruct token outputs: {e}"))
}

pub(crate) fn write_bridge_artifacts(outputs: BridgeOutputs) -> anyhow::Result<()> {
    fs::create_dir_all(artifacts_dir())?;
    let path = artifacts_dir().join("bridge_outputs.toml");
    info!(target: PROVISIONER, "writing bridge deployment artifacts to {}", path.display());
    fs::write(path, toml::to_string(&outputs)?)?;
    Ok(())
}

pub(crate) fn read_bridge_artifacts() -> anyhow::Result<BridgeOutputs> {
    let path = artifacts_dir().join("bridge_outputs.toml");
    let content = fs::read_to_string(path).map_err(|_| {
        anyhow!("bridge deployment artifacts not found. run --deploy-bridge step first.")
    })?;
    toml::from_str(&content).map_err(|e| anyhow!("failed to reconstruct bridge outputs: {e}"))
}
