use thiserror::Error;

/// Errors raised while constructing or validating domain values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid base58 string: {0}")]
    InvalidBase58(String),

    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid address version: expected 5, got {0}")]
    InvalidAddressVersion(u8),

    #[error("Address checksum mismatch")]
    InvalidChecksum,

    #[error("Unknown chain id byte: {0:#04x}")]
    UnknownChainId(u8),

    #[error("Address is for chain '{actual}', expected '{expected}'")]
    WrongChain { expected: char, actual: char },

    #[error("Amount {amount} x unit {unit} leaves a sub-unit remainder")]
    NonIntegralAmount { amount: f64, unit: u64 },

    #[error("Amount out of range for a 64-bit raw value")]
    AmountOutOfRange,

    #[error("Token unit must be positive")]
    ZeroUnit,

    #[error("Fee {actual} below minimum {min}")]
    FeeBelowMinimum { min: u64, actual: u64 },

    #[error("Timestamp {0} is neither zero nor at least one millisecond")]
    InvalidTimestamp(u64),

    #[error("Character {0:?} is not representable in latin-1")]
    NonLatin1Char(char),
}

/// Errors raised by the wire codecs (data entries, contract metadata,
/// transaction preimages).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    #[error("Unknown data entry tag: {0}")]
    UnknownDataEntryTag(u8),

    #[error("Unknown db entry tag: {0}")]
    UnknownDbEntryTag(u8),

    #[error("Unexpected end of input: needed {needed} more bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("{0} trailing bytes after decoding")]
    TrailingBytes(usize),

    #[error("Field of {0} bytes exceeds the u16 length prefix")]
    LengthOverflow(usize),

    #[error("Version 1 contract metadata must not carry a state map")]
    UnexpectedStateMap,

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl From<ModelError> for CodecError {
    fn from(e: ModelError) -> Self {
        CodecError::InvalidValue(e.to_string())
    }
}
