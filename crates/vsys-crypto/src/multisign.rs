//! Multi-party signature aggregation.
//!
//! N participants jointly produce one 64-byte signature that the ordinary
//! [`verify`](crate::curve25519::verify) accepts under an aggregate public
//! key. Per session, every participant must receive the same 64-byte shared
//! random value and the same ordered list of participant points; that
//! coordination happens out of band and is assumed here, not managed.
//!
//! Protocol outline:
//! 1. each participant publishes `A_i = a_i * G` (compressed);
//! 2. weighting `x_i = H(prefix || A_i || A_1 || .. || A_N)`, or exactly 1
//!    for a lone participant;
//! 3. nonce commitment `R_i = r_i * G` with
//!    `r_i = H(prefix || priv_i || msg || shared_rand)`;
//! 4. `unionA = sum(x_i * A_i)`, `unionR = sum(R_i)`;
//! 5. challenge `h = H(unionR || unionA || msg)`, sub-signature
//!    `s_i = r_i + h * x_i * a_i`;
//! 6. signature `unionR || sum(s_i)` with unionA's sign bit folded in.

use crate::curve25519::{domain_prefix, hash_to_scalar, transfer_sign, KeyPair, NONCE_PREFIX};
use crate::error::CryptoError;
use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;

/// Prefix for participant weighting hashes.
pub(crate) const WEIGHT_PREFIX: [u8; 32] = domain_prefix(0xfd);

fn decompress(bytes: &[u8; 32]) -> Result<EdwardsPoint, CryptoError> {
    CompressedEdwardsY(*bytes)
        .decompress()
        .ok_or_else(|| CryptoError::InvalidPoint(hex::encode(bytes)))
}

/// Weighting scalar for `point` within the ordered participant list.
/// Defined as exactly 1 for a single participant; that base case is what
/// makes the one-party protocol collapse to the plain signer.
fn weight_for(point: &[u8; 32], all_points: &[[u8; 32]]) -> Scalar {
    if all_points.len() == 1 {
        return Scalar::ONE;
    }
    let mut parts: Vec<&[u8]> = Vec::with_capacity(all_points.len() + 2);
    parts.push(&WEIGHT_PREFIX);
    parts.push(point);
    for p in all_points {
        parts.push(p);
    }
    hash_to_scalar(&parts)
}

fn challenge(union_r: &[u8; 32], union_a: &[u8; 32], message: &[u8]) -> Scalar {
    hash_to_scalar(&[union_r, union_a, message])
}

/// One participant's view of a signing session.
#[derive(Clone, Debug)]
pub struct MultiSigner {
    key: KeyPair,
}

impl MultiSigner {
    pub fn new(key: KeyPair) -> Self {
        Self { key }
    }

    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::new(KeyPair::from_seed(seed))
    }

    /// Compressed public point `A_i`, shared with every other participant.
    pub fn point(&self) -> [u8; 32] {
        (self.key.scalar() * ED25519_BASEPOINT_POINT)
            .compress()
            .to_bytes()
    }

    fn nonce_scalar(&self, message: &[u8], shared_rand: &[u8; 64]) -> Scalar {
        hash_to_scalar(&[&NONCE_PREFIX, self.key.seed_bytes(), message, shared_rand])
    }

    /// Nonce commitment `R_i`, published to the coordinator.
    pub fn nonce_point(&self, message: &[u8], shared_rand: &[u8; 64]) -> [u8; 32] {
        (self.nonce_scalar(message, shared_rand) * ED25519_BASEPOINT_POINT)
            .compress()
            .to_bytes()
    }

    /// Sub-signature `s_i = r_i + h * x_i * a_i` over the session's full
    /// public material.
    pub fn sub_signature(
        &self,
        message: &[u8],
        shared_rand: &[u8; 64],
        all_points: &[[u8; 32]],
        nonce_points: &[[u8; 32]],
    ) -> Result<[u8; 32], CryptoError> {
        let union_a = aggregate_weighted_points(all_points)?;
        let union_r = aggregate_nonce_points(nonce_points)?;
        let h = challenge(&union_r, &union_a, message);
        let x = weight_for(&self.point(), all_points);
        let r = self.nonce_scalar(message, shared_rand);
        Ok((r + h * x * self.key.scalar()).to_bytes())
    }

    /// `x_i * a_i * G`: this participant's share of the aggregate public
    /// key.
    pub fn bp_point(&self, all_points: &[[u8; 32]]) -> [u8; 32] {
        let x = weight_for(&self.point(), all_points);
        (x * self.key.scalar() * ED25519_BASEPOINT_POINT)
            .compress()
            .to_bytes()
    }
}

/// `unionA`: the x-weighted sum of all participant points, compressed.
pub fn aggregate_weighted_points(all_points: &[[u8; 32]]) -> Result<[u8; 32], CryptoError> {
    if all_points.is_empty() {
        return Err(CryptoError::NoParticipants);
    }
    let mut union = EdwardsPoint::identity();
    for p in all_points {
        union += weight_for(p, all_points) * decompress(p)?;
    }
    Ok(union.compress().to_bytes())
}

/// `unionR`: the sum of all nonce commitments, compressed.
pub fn aggregate_nonce_points(nonce_points: &[[u8; 32]]) -> Result<[u8; 32], CryptoError> {
    if nonce_points.is_empty() {
        return Err(CryptoError::NoParticipants);
    }
    let mut union = EdwardsPoint::identity();
    for p in nonce_points {
        union += decompress(p)?;
    }
    Ok(union.compress().to_bytes())
}

/// Coordinator step: sum the sub-signatures and encode the final signature
/// as `unionR || s` with unionA's sign bit folded into the scalar half.
pub fn aggregate_signature(
    union_r: &[u8; 32],
    union_a: &[u8; 32],
    sub_sigs: &[[u8; 32]],
) -> Result<[u8; 64], CryptoError> {
    if sub_sigs.is_empty() {
        return Err(CryptoError::NoParticipants);
    }
    let mut s = Scalar::ZERO;
    for sub in sub_sigs {
        let scalar =
            Option::<Scalar>::from(Scalar::from_canonical_bytes(*sub)).ok_or(CryptoError::InvalidScalar)?;
        s += scalar;
    }
    let mut sig = [0u8; 64];
    sig[..32].copy_from_slice(union_r);
    sig[32..].copy_from_slice(&transfer_sign(&s, union_a));
    Ok(sig)
}

/// Aggregate public key: the sum of all participants' bp points, mapped to
/// the Montgomery u-coordinate the ordinary verifier consumes.
pub fn aggregate_public_key(bp_points: &[[u8; 32]]) -> Result<[u8; 32], CryptoError> {
    if bp_points.is_empty() {
        return Err(CryptoError::NoParticipants);
    }
    let mut union = EdwardsPoint::identity();
    for p in bp_points {
        union += decompress(p)?;
    }
    Ok(union.to_montgomery().to_bytes())
}
