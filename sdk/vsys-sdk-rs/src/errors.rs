//! Error types for the SDK.

use thiserror::Error;
use vsys_crypto::CryptoError;
use vsys_types::{CodecError, ModelError};

/// SDK result type.
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK errors.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Non-success response from the node
    #[error("Node error: HTTP {status}: {body}")]
    Node { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Wallet error
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Invalid domain value
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Binary codec failure
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Signing failure
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Connection(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}
