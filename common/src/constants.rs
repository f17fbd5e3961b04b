//! Deployment-time constants for the FET token bridge.
//!
//! Everything here is produced once at process start by
//! [`DeploymentConstants::initial`] and handed to the migration steps
//! explicitly; nothing is read from global state afterwards.

use alloy_primitives::{keccak256, B256, U256};

pub const TOKEN_NAME: &str = "Fetch.AI";
pub const TOKEN_SYMBOL: &str = "FET";
pub const TOKEN_DECIMALS: u8 = 18;

/// Number of blocks a swap stays protected from deletion. Plain block
/// count, never scaled by the multiplier.
pub const INITIAL_DELETION_PROTECTION_PERIOD: u64 = 10;

/// 10^decimals, converts a human-readable [FET] quantity into the
/// [CanonicalFET] unit.
pub fn canonical_multiplier(decimals: u8) -> U256 {
    U256::from(10).pow(U256::from(decimals))
}

/// Derives an access-control role identifier from its role name.
pub fn role_id(name: &str) -> B256 {
    keccak256(name.as_bytes())
}

/// ERC20 metadata of the mock FET token.
#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub name: &'static str,
    pub symbol: &'static str,
    /// Already expressed in canonical units, the token constructor does
    /// not scale it again.
    pub initial_supply: U256,
    pub decimals: u8,
    pub multiplier: U256,
}

impl TokenMetadata {
    pub fn fet() -> Self {
        let multiplier = canonical_multiplier(TOKEN_DECIMALS);
        Self {
            name: TOKEN_NAME,
            symbol: TOKEN_SYMBOL,
            initial_supply: U256::from(1_152_997_575u64) * multiplier,
            decimals: TOKEN_DECIMALS,
            multiplier,
        }
    }
}

/// Constructor parameters the bridge contract starts from.
#[derive(Debug, Clone)]
pub struct BridgeInitParams {
    pub cap: U256,
    pub upper_swap_limit: U256,
    pub lower_swap_limit: U256,
    /// Flat fee per swap, 1 [FET].
    pub swap_fee: U256,
    /// ~uint256(0) sentinel: pausing not yet activated.
    pub paused_since_block: U256,
    pub deletion_protection_period: u64,
}

impl BridgeInitParams {
    pub fn initial(multiplier: U256) -> Self {
        let params = Self {
            cap: U256::from(1_000_000u64) * multiplier,
            upper_swap_limit: U256::from(100u64) * multiplier,
            lower_swap_limit: U256::from(10u64) * multiplier,
            swap_fee: multiplier,
            paused_since_block: U256::MAX,
            deletion_protection_period: INITIAL_DELETION_PROTECTION_PERIOD,
        };
        debug_assert!(params.upper_swap_limit > params.lower_swap_limit);
        debug_assert!(params.lower_swap_limit > U256::ZERO);
        params
    }
}

/// Access-control role identifiers of the bridge contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeRoles {
    /// AccessControl's zero-valued default admin role.
    pub default_admin: B256,
    pub delegate: B256,
    pub relayer: B256,
    pub monitor: B256,
    pub approver: B256,
}

impl BridgeRoles {
    pub fn derive() -> Self {
        Self {
            default_admin: B256::ZERO,
            delegate: role_id("DELEGATE_ROLE"),
            relayer: role_id("RELAYER_ROLE"),
            monitor: role_id("MONITOR_ROLE"),
            approver: role_id("APPROVER_ROLE"),
        }
    }
}

/// Everything the migration needs, computed in one place.
#[derive(Debug, Clone)]
pub struct DeploymentConstants {
    pub token: TokenMetadata,
    pub bridge: BridgeInitParams,
    pub roles: BridgeRoles,
}

impl DeploymentConstants {
    pub fn initial() -> Self {
        let token = TokenMetadata::fet();
        let bridge = BridgeInitParams::initial(token.multiplier);
        Self {
            token,
            bridge,
            roles: BridgeRoles::derive(),
        }
    }
}
