//! VSYS Crypto - Curve25519 signing primitives for the VSYS blockchain.
//!
//! This crate provides:
//! - Curve25519 keypairs over Montgomery-form public keys
//! - Deterministic and randomized message signing plus verification
//! - Multi-party signature aggregation under one aggregate public key

pub mod curve25519;
pub mod multisign;
pub mod error;

pub use curve25519::{KeyPair, verify};
pub use multisign::{
    MultiSigner, aggregate_nonce_points, aggregate_public_key,
    aggregate_signature, aggregate_weighted_points,
};
pub use error::CryptoError;
