use alloy_primitives::Address;
use anyhow::Result;
use async_trait::async_trait;
use k256::ecdsa::{RecoveryId, SigningKey, signature::hazmat::PrehashSigner};
use sha2::{Digest, Sha256};

use super::signer::SetupSigner;
use crate::envelope::SetupTypedData;

/// ECDSA signer on the secp256k1 curve producing Ethereum-compatible
/// recoverable signatures over the envelope's EIP-712 signing hash.
///
/// The recovery byte (`v`, 27 or 28) lets the verifier recover the signer's
/// address from the signature without the public key.
pub struct Secp256k1Signer {
    signing_key: SigningKey,
}

impl Secp256k1Signer {
    /// The SHA-256 hash of the seed becomes the 32-byte private key.
    pub fn from_seed(seed: &str) -> Result<Self> {
        let hash = Sha256::digest(seed.as_bytes());
        let signing_key = SigningKey::from_bytes((&hash).into())
            .map_err(|e| anyhow::anyhow!("invalid seed: {e}"))?;
        Ok(Self { signing_key })
    }

    /// Ethereum address of the signing key.
    pub fn address(&self) -> Address {
        Address::from_public_key(self.signing_key.verifying_key())
    }
}

#[async_trait]
impl SetupSigner for Secp256k1Signer {
    async fn sign_typed_data(&self, typed_data: &SetupTypedData) -> Result<String> {
        let digest = typed_data.signing_hash()?;
        let (signature, recovery_id): (k256::ecdsa::Signature, RecoveryId) = self
            .signing_key
            .sign_prehash(digest.as_slice())
            .map_err(|e| anyhow::anyhow!("secp256k1 sign_prehash failed: {e}"))?;

        // 65-byte signature: 32 bytes r + 32 bytes s + 1 byte v (27/28)
        let mut sig_bytes = signature.to_bytes().to_vec();
        sig_bytes.push(recovery_id.to_byte() + 27);
        Ok(format!("0x{}", hex::encode(sig_bytes)))
    }
}
