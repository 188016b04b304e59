use thiserror::Error;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CryptoError {
    #[error("Invalid curve point: {0}")]
    InvalidPoint(String),

    #[error("Invalid scalar encoding")]
    InvalidScalar,

    #[error("Invalid signature length: expected 64, got {0}")]
    InvalidSignatureLength(usize),

    #[error("Invalid key length: expected 32, got {0}")]
    InvalidKeyLength(usize),

    #[error("At least one participant is required")]
    NoParticipants,
}
