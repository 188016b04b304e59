//! Transaction preimage builders.
//!
//! Each request struct produces `data_to_sign()`, the exact bytes that get
//! signed and, hashed node-side, become the transaction id. Field order and
//! widths are consensus-critical; the position of timestamp/fee/fee-scale
//! deliberately differs between kinds and must not be normalized.
//!
//! Each request also projects a broadcast payload: the already-signed request
//! reshaped into the node's JSON submission schema. That projection is pure
//! reformatting.

mod ctrt;
mod db_put;
mod lease;
mod payment;

pub use ctrt::{ExecCtrtPayload, ExecCtrtTxReq, RegCtrtPayload, RegCtrtTxReq};
pub use db_put::{DbData, DbPutPayload, DbPutTxReq};
pub use lease::{LeaseCancelPayload, LeaseCancelTxReq, LeasePayload, LeaseTxReq};
pub use payment::{PaymentPayload, PaymentTxReq};

/// Transaction type tag, the first preimage byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TxType {
    Payment = 2,
    Lease = 3,
    LeaseCancel = 4,
    RegCtrt = 8,
    ExecCtrt = 9,
    DbPut = 10,
}

impl TxType {
    pub const fn tag(self) -> u8 {
        self as u8
    }
}
