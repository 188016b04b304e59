//! Fixed-size values carried as base58 strings on the wire.
//!
//! Each type stores the decoded bytes and validates the decoded length
//! eagerly; Display/FromStr round-trip through base58.

use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

fn decode_fixed<const N: usize>(s: &str) -> Result<[u8; N], ModelError> {
    let v = bs58::decode(s)
        .into_vec()
        .map_err(|e| ModelError::InvalidBase58(e.to_string()))?;
    v.try_into().map_err(|v: Vec<u8>| ModelError::InvalidLength {
        expected: N,
        actual: v.len(),
    })
}

/// Curve25519 public key (32 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PubKey([u8; 32]);

impl PubKey {
    pub const LEN: usize = 32;

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, ModelError> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| ModelError::InvalidLength {
                expected: Self::LEN,
                actual: slice.len(),
            })
    }
}

impl FromStr for PubKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PubKey({})", self)
    }
}

/// Curve25519 private key (32 bytes). Display intentionally prints the full
/// base58 form; callers own the decision to log it or not.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriKey([u8; 32]);

impl PriKey {
    pub const LEN: usize = 32;

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, ModelError> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| ModelError::InvalidLength {
                expected: Self::LEN,
                actual: slice.len(),
            })
    }
}

impl FromStr for PriKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for PriKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for PriKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PriKey(..)")
    }
}

/// Contract id (26 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CtrtId([u8; 26]);

impl CtrtId {
    pub const LEN: usize = 26;

    pub const fn from_bytes(bytes: [u8; 26]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 26] {
        &self.0
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, ModelError> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| ModelError::InvalidLength {
                expected: Self::LEN,
                actual: slice.len(),
            })
    }
}

impl FromStr for CtrtId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for CtrtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for CtrtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CtrtId({})", self)
    }
}

/// Token id (30 bytes): a contract id plus a 4-byte token index.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId([u8; 30]);

impl TokenId {
    pub const LEN: usize = 30;

    pub const fn from_bytes(bytes: [u8; 30]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 30] {
        &self.0
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, ModelError> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| ModelError::InvalidLength {
                expected: Self::LEN,
                actual: slice.len(),
            })
    }
}

impl FromStr for TokenId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_fixed(s).map(Self)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self)
    }
}
