//! Curve25519 signatures over Montgomery-form public keys.
//!
//! The scheme is Schnorr-style with a randomized nonce: because the public
//! key is a Montgomery u-coordinate and carries no sign, the sign bit of the
//! Edwards-form key is folded into the top bit of the signature's scalar
//! half. Verification recovers the Edwards point from the u-coordinate plus
//! that carried bit.

use crate::error::CryptoError;
use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::montgomery::MontgomeryPoint;
use curve25519_dalek::scalar::Scalar;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha512};
use vsys_types::{PriKey, PubKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 32-byte domain prefix: the given first byte followed by 0xFF fill.
pub(crate) const fn domain_prefix(first: u8) -> [u8; 32] {
    let mut p = [0xff_u8; 32];
    p[0] = first;
    p
}

/// Prefix for nonce derivation.
pub(crate) const NONCE_PREFIX: [u8; 32] = domain_prefix(0xfe);

/// SHA-512 over the concatenated parts, reduced mod the group order.
pub(crate) fn hash_to_scalar(parts: &[&[u8]]) -> Scalar {
    let mut h = Sha512::new();
    for p in parts {
        h.update(p);
    }
    let wide: [u8; 64] = h.finalize().into();
    Scalar::from_bytes_mod_order_wide(&wide)
}

/// Private scalar from a 32-byte seed: X25519 clamping, then reduction into
/// the scalar ring. The basepoint has the full group order, so reduction
/// does not change any derived point.
pub(crate) fn clamped_scalar(seed: &[u8; 32]) -> Scalar {
    let mut b = *seed;
    b[0] &= 248;
    b[31] &= 127;
    b[31] |= 64;
    let s = Scalar::from_bytes_mod_order(b);
    b.zeroize();
    s
}

/// Encode `s` little-endian with the sign bit of the compressed Edwards key
/// folded into the top bit. `s < 2^253`, so the bit is free.
pub(crate) fn transfer_sign(s: &Scalar, compressed_a: &[u8; 32]) -> [u8; 32] {
    let mut b = s.to_bytes();
    b[31] |= compressed_a[31] & 0x80;
    b
}

/// Signing keypair over a 32-byte seed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    seed: [u8; 32],
}

impl KeyPair {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self { seed }
    }

    /// Generate from the OS entropy source.
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Self { seed }
    }

    pub(crate) fn seed_bytes(&self) -> &[u8; 32] {
        &self.seed
    }

    pub(crate) fn scalar(&self) -> Scalar {
        clamped_scalar(&self.seed)
    }

    /// Public key: the Montgomery u-coordinate of `a * G` (32 bytes).
    pub fn public_key(&self) -> [u8; 32] {
        (self.scalar() * ED25519_BASEPOINT_POINT)
            .to_montgomery()
            .to_bytes()
    }

    /// Public key wrapped in the chain model type.
    pub fn pub_key(&self) -> PubKey {
        PubKey::from_bytes(self.public_key())
    }

    /// Private key (seed) wrapped in the chain model type.
    pub fn pri_key(&self) -> PriKey {
        PriKey::from_bytes(self.seed)
    }

    /// Sign with a fresh random 64-byte nonce seed. Two calls over the same
    /// message produce different, individually valid signatures.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        let mut rand64 = [0u8; 64];
        OsRng.fill_bytes(&mut rand64);
        self.sign_with_rand(message, &rand64)
    }

    /// Sign with caller-supplied nonce material. Deterministic for fixed
    /// inputs; also the primitive the multi-party protocol must agree with
    /// in its one-participant base case.
    pub fn sign_with_rand(&self, message: &[u8], rand64: &[u8; 64]) -> [u8; 64] {
        let a = self.scalar();
        let a_comp = (a * ED25519_BASEPOINT_POINT).compress();

        let r = hash_to_scalar(&[&NONCE_PREFIX, &self.seed, message, rand64]);
        let r_comp = (r * ED25519_BASEPOINT_POINT).compress();

        let h = hash_to_scalar(&[r_comp.as_bytes(), a_comp.as_bytes(), message]);
        let s = r + h * a;

        let mut sig = [0u8; 64];
        sig[..32].copy_from_slice(r_comp.as_bytes());
        sig[32..].copy_from_slice(&transfer_sign(&s, a_comp.as_bytes()));
        sig
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyPair({})", hex::encode(self.public_key()))
    }
}

/// Verify a signature against a Montgomery-form public key.
///
/// # Errors
///
/// Errors when the public key does not decode to a curve point; a
/// well-formed-but-wrong signature returns `Ok(false)`.
pub fn verify(public_key: &[u8; 32], message: &[u8], signature: &[u8; 64]) -> Result<bool, CryptoError> {
    let sign_bit = (signature[63] & 0x80) >> 7;
    let a = MontgomeryPoint(*public_key)
        .to_edwards(sign_bit)
        .ok_or_else(|| CryptoError::InvalidPoint("public key is not on the curve".into()))?;

    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&signature[32..]);
    s_bytes[31] &= 0x7f;
    let s = match Option::<Scalar>::from(Scalar::from_canonical_bytes(s_bytes)) {
        Some(s) => s,
        None => return Ok(false),
    };

    let h = hash_to_scalar(&[&signature[..32], a.compress().as_bytes(), message]);
    let recovered = (s * ED25519_BASEPOINT_POINT) - (h * a);
    Ok(recovered.compress().as_bytes() == &signature[..32])
}
