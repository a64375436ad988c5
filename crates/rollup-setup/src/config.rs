use serde::{Deserialize, Serialize};

/// The node configuration carried inside a signed setup message.
///
/// Every field is a string on the wire, numeric values included — the
/// signing wallet renders the message to the operator field by field, and
/// strings keep that rendering exact. JSON names are camelCase; declaration
/// order here is the order the `Message` type declares its fields in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupConfig {
    pub rollup_interval: String,
    pub min_rollup_size: String,
    pub network: String,
    pub chain_id: String,
    pub contract_address: String,
    pub rollup_max_interval: String,
    pub evm_node_rpc: String,
    pub ar_node_url: String,
    pub min_gc_offset: String,
}
