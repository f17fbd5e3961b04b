use std::{env, fs, path::PathBuf};

use anyhow::Context;
use common::{inputs_dir, EthereumInputs};
use log::info;

const READ_INPUTS: &str = "READ_INPUTS";

/// Overrides the default `inputs/ethereum_inputs.toml` location.
pub const INPUTS_PATH_ENV: &str = "ETH_DEPLOYMENT_INPUTS_PATH";

pub fn read_setup_inputs() -> anyhow::Result<EthereumInputs> {
    let path = match env::var(INPUTS_PATH_ENV) {
        Ok(overridden) => PathBuf::from(overridden),
        Err(_) => inputs_dir().join("ethereum_inputs.toml"),
    };
    info!(target: READ_INPUTS, "reading inputs from {}...", path.display());

    let parameters = fs::read_to_string(&path)
        .with_context(|| format!("inputs file not found at {}", path.display()))?;

    let inputs: EthereumInputs = toml::from_str(&parameters)?;

    info!(target: READ_INPUTS, "ethereum inputs from step: {inputs:?}");

    Ok(inputs)
}
