use thiserror::Error;

/// Errors raised while consuming a signed setup payload.
///
/// The signing side has no error taxonomy of its own — signer failures
/// propagate to the caller untouched.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("bad setup payload: {0}")]
    BadPayload(String),
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("fail to recover signer address: {0}")]
    Recovery(String),
    #[error("setup not signed by admin {expected}, got {actual}")]
    Unauthorized { expected: String, actual: String },
    #[error("invalid field {name}: {reason}")]
    InvalidField { name: &'static str, reason: String },
}
