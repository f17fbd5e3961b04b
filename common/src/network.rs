//! Typed classification of the configured deployment network.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};

/// Network classes relevant to provisioning.
///
/// Resolved once at startup from the configured network name; every
/// downstream decision consumes the typed value instead of re-matching
/// on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    Development,
    Staging,
    Mainnet,
}

impl NetworkKind {
    /// One-shot setup scripts only ever run against development chains.
    pub fn is_development(&self) -> bool {
        matches!(self, NetworkKind::Development)
    }
}

impl FromStr for NetworkKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" | "local" | "ganache" => Ok(NetworkKind::Development),
            "staging" | "testnet" | "sepolia" => Ok(NetworkKind::Staging),
            "mainnet" | "production" => Ok(NetworkKind::Mainnet),
            _ => Err(anyhow!(
                "unknown network name: {}. Must be one of 'development', 'staging' or 'mainnet'",
                s
            )),
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NetworkKind::Development => "development",
            NetworkKind::Staging => "staging",
            NetworkKind::Mainnet => "mainnet",
        };
        f.write_str(name)
    }
}
