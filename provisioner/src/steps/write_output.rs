use std::fs;

use common::{artifacts_dir, BridgeDeploymentConfig};
use log::info;

const WRITE_OUTPUTS: &str = "WRITE_OUTPUTS";

pub fn write_setup_artifacts(cfg: BridgeDeploymentConfig) -> anyhow::Result<()> {
    info!(target: WRITE_OUTPUTS, "writing outputs...");

    let cfg_toml = toml::to_string(&cfg)?;

    fs::create_dir_all(artifacts_dir())?;
    let target_path = artifacts_dir().join("bridge_deployment_config.toml");
    info!(target: WRITE_OUTPUTS, "writing bridge_deployment_config.toml to: {target_path:?}");

    fs::write(target_path, cfg_toml)?;

    Ok(())
}
