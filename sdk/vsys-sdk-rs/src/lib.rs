//! VSYS Rust SDK
//!
//! High-level SDK for interacting with a VSYS node.
//!
//! # Example
//! ```rust,ignore
//! use vsys_sdk::{ChainId, NodeClient, Seed};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = NodeClient::new("http://veldidina.vos.systems:9928").unwrap();
//!     let seed = Seed::new("your fifteen word seed phrase ...").unwrap();
//!     let acnt = seed.account(ChainId::Testnet, 0);
//!     let balance = client.balance(&acnt.addr()).await.unwrap();
//!     println!("balance: {}", balance.balance);
//! }
//! ```

pub mod client;
pub mod errors;
pub mod wallet;

pub use client::{decode_data_stack, BalanceResp, CtrtDataResp, NodeClient};
pub use errors::{Result, SdkError};
pub use wallet::{Account, Seed};

/// Re-export the domain models and signer for convenience
pub use vsys_crypto::{KeyPair, MultiSigner};
pub use vsys_types::{
    Addr, ChainId, CtrtId, CtrtMeta, DataEntry, DataStack, PriKey, PubKey, TokenId, Vsys,
    VsysTimestamp,
};
