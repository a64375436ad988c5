use alloy_dyn_abi::TypedData;
use alloy_primitives::B256;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::SetupConfig;

/// A single field declaration inside a typed-data type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeField {
    pub name: String,
    pub r#type: String,
}

/// The `types` section of the envelope: an empty domain type plus the
/// `Message` schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupTypes {
    #[serde(rename = "EIP712Domain")]
    pub eip712_domain: Vec<TypeField>,
    #[serde(rename = "Message")]
    pub message: Vec<TypeField>,
}

/// Setup messages carry no domain separation fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyDomain {}

/// JSON names of the `Message` fields, in declaration order.
///
/// This order is part of the wire contract: it fixes both the type
/// declaration list and the EIP-712 struct hash.
pub const MESSAGE_FIELDS: [&str; 9] = [
    "rollupInterval",
    "minRollupSize",
    "network",
    "chainId",
    "contractAddress",
    "rollupMaxInterval",
    "evmNodeRpc",
    "arNodeUrl",
    "minGcOffset",
];

/// The typed-data envelope a setup signature covers.
///
/// Serialization key order follows struct field order, so the payload bytes
/// a node verifies are exactly `serde_json::to_string` of this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupTypedData {
    pub types: SetupTypes,
    pub domain: EmptyDomain,
    #[serde(rename = "primaryType")]
    pub primary_type: String,
    pub message: SetupConfig,
}

impl SetupTypedData {
    /// Builds the envelope for a configuration record. The message is a
    /// field-by-field copy of `config`; the input is left untouched.
    pub fn new(config: &SetupConfig) -> Self {
        let message_fields = MESSAGE_FIELDS
            .iter()
            .map(|name| TypeField {
                name: (*name).to_string(),
                r#type: "string".to_string(),
            })
            .collect();
        Self {
            types: SetupTypes {
                eip712_domain: Vec::new(),
                message: message_fields,
            },
            domain: EmptyDomain {},
            primary_type: "Message".to_string(),
            message: config.clone(),
        }
    }

    /// Canonical JSON serialization, UTF-8 encoded.
    ///
    /// These are the bytes a signature over this envelope is checked
    /// against; two envelopes over field-wise equal records produce
    /// byte-identical payloads.
    pub fn to_payload(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_string(self).context("serializing setup envelope")?;
        Ok(json.into_bytes())
    }

    /// EIP-712 signing hash of the envelope (empty domain separator).
    ///
    /// Local signers sign this digest; `recover_setup` recomputes it from
    /// the payload bytes.
    pub fn signing_hash(&self) -> Result<B256> {
        let value = serde_json::to_value(self).context("serializing setup envelope")?;
        let data: TypedData =
            serde_json::from_value(value).context("converting setup envelope to typed data")?;
        data.eip712_signing_hash()
            .map_err(|e| anyhow::anyhow!("hashing setup envelope: {e}"))
    }
}
