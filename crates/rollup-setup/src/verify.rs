use alloy_dyn_abi::TypedData;
use alloy_primitives::{Address, Signature};

use crate::error::SetupError;

/// Parses signed payload bytes and recovers the signer address.
///
/// `payload` must be the JSON typed-data envelope produced by `sign_setup`;
/// `signature` is the 0x-prefixed 65-byte hex form wallets return. The
/// parsed typed data is returned alongside the address so callers can read
/// the message fields.
pub fn recover_setup(payload: &[u8], signature: &str) -> Result<(Address, TypedData), SetupError> {
    let data: TypedData =
        serde_json::from_slice(payload).map_err(|e| SetupError::BadPayload(format!("{e}")))?;
    let digest = data
        .eip712_signing_hash()
        .map_err(|e| SetupError::BadPayload(format!("{e}")))?;
    let sig_bytes = hex::decode(signature.trim_start_matches("0x"))
        .map_err(|e| SetupError::InvalidSignature(format!("{e}")))?;
    let signature = Signature::try_from(&sig_bytes[..])
        .map_err(|e| SetupError::InvalidSignature(format!("{e}")))?;
    let address = signature
        .recover_address_from_prehash(&digest)
        .map_err(|e| SetupError::Recovery(format!("{e}")))?;
    Ok((address, data))
}

/// Reads a string field of the message, falling back to `default_val` when
/// the field is absent or not a string.
pub fn str_field<'a>(data: &'a TypedData, name: &str, default_val: &'a str) -> &'a str {
    match data.message.get(name) {
        Some(v) => v.as_str().unwrap_or(default_val),
        None => default_val,
    }
}

/// Reads a stringified u64 field of the message, falling back to
/// `default_val` when the field is absent, not a string, or unparseable.
pub fn u64_field(data: &TypedData, name: &str, default_val: u64) -> u64 {
    match data.message.get(name).and_then(|v| v.as_str()) {
        Some(s) => s.parse::<u64>().unwrap_or(default_val),
        None => default_val,
    }
}
