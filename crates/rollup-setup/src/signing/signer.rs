use async_trait::async_trait;

use crate::envelope::SetupTypedData;

/// Capability for signing a setup typed-data envelope.
///
/// One operation, asynchronous — account backends (browser wallets, KMS,
/// remote signers) sign over I/O. Implementations own their key material;
/// the returned signature string is handed back to the caller untouched.
#[async_trait]
pub trait SetupSigner: Send + Sync {
    /// Sign the envelope. Local signers return 0x-prefixed hex of the
    /// 65-byte `r || s || v` form; a custom signer may return whatever its
    /// paired verifier understands.
    async fn sign_typed_data(&self, typed_data: &SetupTypedData) -> anyhow::Result<String>;
}
