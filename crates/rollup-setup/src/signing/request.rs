use anyhow::Result;

use super::signer::SetupSigner;
use crate::config::SetupConfig;
use crate::envelope::SetupTypedData;

/// A signature paired with the exact bytes it covers.
///
/// The node verifies `signature` against `payload` as-is, so the two always
/// travel together; neither is returned without the other.
pub struct SignedSetup {
    /// Signature exactly as the signer returned it.
    pub signature: String,
    /// UTF-8 bytes of the canonical JSON serialization of the envelope.
    pub payload: Vec<u8>,
}

/// Builds the typed-data envelope for `config`, obtains a signature over it
/// from `signer`, and returns the signature with the serialized payload.
///
/// Signer failures propagate to the caller untouched; no retry, no logging,
/// no other side effects. The input record is not mutated.
pub async fn sign_setup<S>(signer: &S, config: &SetupConfig) -> Result<SignedSetup>
where
    S: SetupSigner + ?Sized,
{
    let envelope = SetupTypedData::new(config);
    let signature = signer.sign_typed_data(&envelope).await?;
    let payload = envelope.to_payload()?;
    Ok(SignedSetup { signature, payload })
}
