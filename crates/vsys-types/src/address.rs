use crate::b58::PubKey;
use crate::error::ModelError;
use crate::hash::hash_chain;
use std::fmt;
use std::str::FromStr;

/// Chain identifier, one byte on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChainId {
    Mainnet = b'M',
    Testnet = b'T',
}

impl ChainId {
    pub const fn byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(b: u8) -> Result<Self, ModelError> {
        match b {
            b'M' => Ok(ChainId::Mainnet),
            b'T' => Ok(ChainId::Testnet),
            other => Err(ModelError::UnknownChainId(other)),
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.byte() as char)
    }
}

/// 26-byte account address.
///
/// Layout: version byte (always 5) || chain-id byte || first 20 bytes of
/// `keccak256(blake2b256(public_key))` || 4-byte checksum, where the checksum
/// is the first 4 bytes of the same chained hash over the preceding 22 bytes.
/// Version, chain id and checksum are validated on construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Addr([u8; 26]);

impl Addr {
    pub const LEN: usize = 26;
    pub const VERSION: u8 = 5;
    const CHECKSUM_LEN: usize = 4;

    /// Validate and wrap raw address bytes.
    pub fn from_bytes(bytes: [u8; 26]) -> Result<Self, ModelError> {
        if bytes[0] != Self::VERSION {
            return Err(ModelError::InvalidAddressVersion(bytes[0]));
        }
        ChainId::from_byte(bytes[1])?;
        let expected = &hash_chain(&bytes[..22])[..Self::CHECKSUM_LEN];
        if &bytes[22..] != expected {
            return Err(ModelError::InvalidChecksum);
        }
        Ok(Self(bytes))
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, ModelError> {
        let bytes: [u8; 26] = slice.try_into().map_err(|_| ModelError::InvalidLength {
            expected: Self::LEN,
            actual: slice.len(),
        })?;
        Self::from_bytes(bytes)
    }

    /// Derive the address a public key mints on the given chain.
    pub fn from_public_key(chain: ChainId, public_key: &PubKey) -> Self {
        let mut bytes = [0u8; 26];
        bytes[0] = Self::VERSION;
        bytes[1] = chain.byte();
        bytes[2..22].copy_from_slice(&hash_chain(public_key.as_bytes())[..20]);
        let cks = hash_chain(&bytes[..22]);
        bytes[22..].copy_from_slice(&cks[..Self::CHECKSUM_LEN]);
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 26] {
        &self.0
    }

    /// The chain this address was minted for.
    pub fn chain_id(&self) -> ChainId {
        // Validated at construction.
        match self.0[1] {
            b'M' => ChainId::Mainnet,
            _ => ChainId::Testnet,
        }
    }

    /// Guard against cross-chain use: errors unless the address belongs to
    /// `chain`. Run before signing anything that names a counterparty.
    pub fn must_on(&self, chain: ChainId) -> Result<(), ModelError> {
        if self.chain_id() != chain {
            return Err(ModelError::WrongChain {
                expected: chain.byte() as char,
                actual: self.chain_id().byte() as char,
            });
        }
        Ok(())
    }

    pub fn b58_str(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl FromStr for Addr {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let v = bs58::decode(s)
            .into_vec()
            .map_err(|e| ModelError::InvalidBase58(e.to_string()))?;
        Self::from_slice(&v)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.b58_str())
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addr({})", self.b58_str())
    }
}

impl AsRef<[u8]> for Addr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_addr() -> Addr {
        Addr::from_public_key(ChainId::Testnet, &PubKey::from_bytes([9u8; 32]))
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(test_addr(), test_addr());
        let other = Addr::from_public_key(ChainId::Testnet, &PubKey::from_bytes([10u8; 32]));
        assert_ne!(test_addr(), other);
    }

    #[test]
    fn test_derived_address_validates() {
        let addr = test_addr();
        assert_eq!(Addr::from_bytes(*addr.as_bytes()).unwrap(), addr);
        assert_eq!(addr.chain_id(), ChainId::Testnet);
    }

    #[test]
    fn test_b58_roundtrip() {
        let addr = test_addr();
        let parsed: Addr = addr.to_string().parse().unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let mut bytes = *test_addr().as_bytes();
        bytes[25] ^= 0x01;
        assert_eq!(Addr::from_bytes(bytes), Err(ModelError::InvalidChecksum));
    }

    #[test]
    fn test_corrupted_body_rejected() {
        // Flipping a digest byte invalidates the checksum.
        let mut bytes = *test_addr().as_bytes();
        bytes[10] ^= 0x40;
        assert_eq!(Addr::from_bytes(bytes), Err(ModelError::InvalidChecksum));
    }

    #[test]
    fn test_wrong_version_rejected() {
        let mut bytes = *test_addr().as_bytes();
        bytes[0] = 1;
        assert!(matches!(
            Addr::from_bytes(bytes),
            Err(ModelError::InvalidAddressVersion(1))
        ));
    }

    #[test]
    fn test_unknown_chain_byte_rejected() {
        let mut bytes = *test_addr().as_bytes();
        bytes[1] = b'Z';
        // Recompute the checksum so only the chain byte is at fault.
        let cks = hash_chain(&bytes[..22]);
        bytes[22..].copy_from_slice(&cks[..4]);
        assert!(matches!(
            Addr::from_bytes(bytes),
            Err(ModelError::UnknownChainId(b'Z'))
        ));
    }

    #[test]
    fn test_must_on() {
        let addr = test_addr();
        assert!(addr.must_on(ChainId::Testnet).is_ok());
        assert!(matches!(
            addr.must_on(ChainId::Mainnet),
            Err(ModelError::WrongChain {
                expected: 'M',
                actual: 'T'
            })
        ));
    }
}
