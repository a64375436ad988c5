pub mod config;
pub mod envelope;
pub mod error;
pub mod setup;
pub mod signing;
pub mod verify;

pub use config::SetupConfig;
pub use envelope::{MESSAGE_FIELDS, SetupTypedData};
pub use error::SetupError;
pub use setup::{SystemConfig, apply_setup, require_admin};
pub use signing::{Secp256k1Signer, SetupSigner, SignedSetup, sign_setup};
pub use verify::{recover_setup, str_field, u64_field};
