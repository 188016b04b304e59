//! VSYS Types - Core type definitions and wire codecs for the V Systems blockchain.
//!
//! This crate provides the building blocks shared by every client-side
//! operation:
//! - Fixed-width big-endian packing helpers
//! - Validated domain values (addresses, base58 keys/ids, timestamps, amounts, fees)
//! - The tagged data-entry codec used for contract arguments and state
//! - The contract metadata codec for compiled contract descriptors
//! - Byte-exact transaction preimage builders and their broadcast payloads

pub mod address;
pub mod amount;
pub mod bytes;
pub mod b58;
pub mod ctrt_meta;
pub mod data_entry;
pub mod error;
pub mod fee;
pub mod hash;
pub mod packer;
pub mod timestamp;
pub mod tx;

mod reader;

#[cfg(feature = "serde")]
mod serialization;

pub use address::{Addr, ChainId};
pub use amount::{Token, Vsys};
pub use b58::{CtrtId, PriKey, PubKey, TokenId};
pub use bytes::{Bytes, Str};
pub use ctrt_meta::CtrtMeta;
pub use data_entry::{DataEntry, DataStack};
pub use error::{CodecError, ModelError};
pub use fee::{
    DbPutFee, ExecCtrtFee, LeasingCancelFee, LeasingFee, PaymentFee, RegCtrtFee, FEE_SCALE,
};
pub use timestamp::VsysTimestamp;
pub use tx::{
    DbData, DbPutTxReq, ExecCtrtTxReq, LeaseCancelTxReq, LeaseTxReq, PaymentTxReq, RegCtrtTxReq,
    TxType,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Addr, Bytes, ChainId, CodecError, CtrtId, CtrtMeta, DataEntry, DataStack, ModelError,
        PriKey, PubKey, Str, Token, TokenId, TxType, Vsys, VsysTimestamp,
    };
}
