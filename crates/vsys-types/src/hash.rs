//! One-shot digest helpers used by address and key derivation.

use blake2::digest::consts::U32;
use blake2::Blake2b;
use sha2::Sha256;
use sha3::{Digest, Keccak256};

type Blake2b256 = Blake2b<U32>;

/// Blake2b with a 256-bit output.
#[must_use]
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    let mut h = Blake2b256::new();
    h.update(data);
    h.finalize().into()
}

/// Keccak-256 (the pre-NIST variant, as used on chain).
#[must_use]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut h = Keccak256::new();
    h.update(data);
    h.finalize().into()
}

/// SHA-256.
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(data);
    h.finalize().into()
}

/// The chained hash `keccak256(blake2b256(data))` used for address digests
/// and account seed derivation.
#[must_use]
pub fn hash_chain(data: &[u8]) -> [u8; 32] {
    keccak256(&blake2b256(data))
}
