use std::path::{Path, PathBuf};

pub mod constants;
pub mod manifest;
pub mod network;

pub use constants::DeploymentConstants;
pub use manifest::{BridgeDeploymentConfig, EthereumInputs, RoleWallets};
pub use network::NetworkKind;

pub const INPUTS_DIR: &str = "inputs";

pub fn workspace_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("failed to cd to workspace root dir")
        .to_path_buf()
}

pub fn artifacts_dir() -> PathBuf {
    workspace_dir().join("artifacts")
}

pub fn inputs_dir() -> PathBuf {
    workspace_dir().join(INPUTS_DIR)
}
