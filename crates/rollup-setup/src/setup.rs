use std::str::FromStr;

use alloy_dyn_abi::TypedData;
use alloy_primitives::Address;
use tracing::info;

use crate::error::SetupError;
use crate::verify::{str_field, u64_field};

/// The running node configuration a verified setup message is merged into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    pub rollup_interval: u64,
    pub min_rollup_size: u64,
    pub rollup_max_interval: u64,
    pub min_gc_offset: u64,
    pub network_id: u64,
    pub chain_id: u64,
    pub contract_addr: String,
    pub evm_node_url: String,
    pub ar_node_url: String,
}

/// Ensures the recovered signer is the configured admin.
pub fn require_admin(recovered: &Address, admin_addr: &str) -> Result<(), SetupError> {
    let admin = Address::from_str(admin_addr).map_err(|e| SetupError::InvalidField {
        name: "adminAddr",
        reason: format!("{e}"),
    })?;
    if admin != *recovered {
        return Err(SetupError::Unauthorized {
            expected: admin.to_string(),
            actual: recovered.to_string(),
        });
    }
    Ok(())
}

/// Merges a verified setup message into the current configuration.
///
/// Fields absent from the message keep their current values. `network` is
/// the exception: it defaults to `"0"` when absent and must parse as a u64.
pub fn apply_setup(data: &TypedData, current: &SystemConfig) -> Result<SystemConfig, SetupError> {
    let network_id = str_field(data, "network", "0")
        .parse::<u64>()
        .map_err(|e| SetupError::InvalidField {
            name: "network",
            reason: format!("{e}"),
        })?;
    let next = SystemConfig {
        rollup_interval: u64_field(data, "rollupInterval", current.rollup_interval),
        min_rollup_size: u64_field(data, "minRollupSize", current.min_rollup_size),
        rollup_max_interval: u64_field(data, "rollupMaxInterval", current.rollup_max_interval),
        min_gc_offset: u64_field(data, "minGcOffset", current.min_gc_offset),
        network_id,
        chain_id: u64_field(data, "chainId", current.chain_id),
        contract_addr: str_field(data, "contractAddress", current.contract_addr.as_str())
            .to_string(),
        evm_node_url: str_field(data, "evmNodeRpc", current.evm_node_url.as_str()).to_string(),
        ar_node_url: str_field(data, "arNodeUrl", current.ar_node_url.as_str()).to_string(),
    };
    info!(
        rollup_interval = next.rollup_interval,
        min_rollup_size = next.min_rollup_size,
        network_id = next.network_id,
        evm_node_url = next.evm_node_url.as_str(),
        ar_node_url = next.ar_node_url.as_str(),
        "apply setup"
    );
    Ok(next)
}
