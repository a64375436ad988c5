mod request;
mod secp256k1;
mod signer;

pub use request::{SignedSetup, sign_setup};
pub use secp256k1::Secp256k1Signer;
pub use signer::SetupSigner;
