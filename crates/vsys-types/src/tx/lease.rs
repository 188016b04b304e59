use crate::address::Addr;
use crate::amount::Vsys;
use crate::b58::PubKey;
use crate::bytes::Bytes;
use crate::error::CodecError;
use crate::fee::{LeasingCancelFee, LeasingFee, FEE_SCALE};
use crate::packer::{pack_u16, pack_u64, pack_u8};
use crate::timestamp::VsysTimestamp;
use crate::tx::TxType;

/// Lease transaction request: delegate coins to a supernode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaseTxReq {
    pub supernode_addr: Addr,
    pub amount: Vsys,
    pub timestamp: VsysTimestamp,
    pub fee: LeasingFee,
}

impl LeaseTxReq {
    /// Preimage: 0x03 ++ supernode(26) ++ amount(8) ++ fee(8) ++
    /// feeScale(2) ++ ts(8). Note the fee block sits before the timestamp
    /// here, unlike payment.
    pub fn data_to_sign(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(1 + 26 + 8 + 8 + 2 + 8);
        out.extend_from_slice(&pack_u8(TxType::Lease.tag()));
        out.extend_from_slice(self.supernode_addr.as_bytes());
        out.extend_from_slice(&pack_u64(self.amount.raw()));
        out.extend_from_slice(&pack_u64(self.fee.raw()));
        out.extend_from_slice(&pack_u16(FEE_SCALE));
        out.extend_from_slice(&pack_u64(self.timestamp.as_nanos()));
        Ok(out)
    }

    pub fn broadcast_payload(&self, sender: &PubKey, signature: &[u8]) -> LeasePayload {
        LeasePayload {
            sender_public_key: sender.to_string(),
            recipient: self.supernode_addr.b58_str(),
            amount: self.amount.raw(),
            fee: self.fee.raw(),
            fee_scale: FEE_SCALE,
            timestamp: self.timestamp.as_nanos(),
            signature: bs58::encode(signature).into_string(),
        }
    }
}

/// JSON body for `POST /leasing/broadcast/lease`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LeasePayload {
    pub sender_public_key: String,
    pub recipient: String,
    pub amount: u64,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
    pub signature: String,
}

/// Lease-cancel transaction request; names the lease transaction to cancel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaseCancelTxReq {
    /// Base58-decoded id of the lease transaction being cancelled.
    pub leasing_tx_id: Bytes,
    pub timestamp: VsysTimestamp,
    pub fee: LeasingCancelFee,
}

impl LeaseCancelTxReq {
    /// Preimage: 0x04 ++ fee(8) ++ feeScale(2) ++ ts(8) ++ leaseTxId.
    pub fn data_to_sign(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(1 + 8 + 2 + 8 + self.leasing_tx_id.len());
        out.extend_from_slice(&pack_u8(TxType::LeaseCancel.tag()));
        out.extend_from_slice(&pack_u64(self.fee.raw()));
        out.extend_from_slice(&pack_u16(FEE_SCALE));
        out.extend_from_slice(&pack_u64(self.timestamp.as_nanos()));
        out.extend_from_slice(self.leasing_tx_id.as_slice());
        Ok(out)
    }

    pub fn broadcast_payload(&self, sender: &PubKey, signature: &[u8]) -> LeaseCancelPayload {
        LeaseCancelPayload {
            sender_public_key: sender.to_string(),
            tx_id: self.leasing_tx_id.b58_str(),
            fee: self.fee.raw(),
            fee_scale: FEE_SCALE,
            timestamp: self.timestamp.as_nanos(),
            signature: bs58::encode(signature).into_string(),
        }
    }
}

/// JSON body for `POST /leasing/broadcast/cancel`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LeaseCancelPayload {
    pub sender_public_key: String,
    pub tx_id: String,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
    pub signature: String,
}
