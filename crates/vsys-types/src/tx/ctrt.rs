use crate::b58::{CtrtId, PubKey};
use crate::bytes::Str;
use crate::ctrt_meta::CtrtMeta;
use crate::data_entry::DataStack;
use crate::error::CodecError;
use crate::fee::{ExecCtrtFee, RegCtrtFee, FEE_SCALE};
use crate::packer::{pack_u16, pack_u64};
use crate::reader::put_len_prefixed;
use crate::timestamp::VsysTimestamp;
use crate::tx::TxType;

/// Register-contract transaction request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegCtrtTxReq {
    pub ctrt_meta: CtrtMeta,
    pub init_data: DataStack,
    pub description: Str,
    pub timestamp: VsysTimestamp,
    pub fee: RegCtrtFee,
}

impl RegCtrtTxReq {
    /// Preimage: 0x08 ++ len(meta)(2) ++ meta ++ len(initData)(2) ++
    /// initData ++ len(description)(2) ++ description ++ fee(8) ++
    /// feeScale(2) ++ ts(8).
    pub fn data_to_sign(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = vec![TxType::RegCtrt.tag()];
        put_len_prefixed(&mut out, &self.ctrt_meta.serialize()?)?;
        put_len_prefixed(&mut out, &self.init_data.serialize()?)?;
        put_len_prefixed(&mut out, &self.description.latin1_bytes())?;
        out.extend_from_slice(&pack_u64(self.fee.raw()));
        out.extend_from_slice(&pack_u16(FEE_SCALE));
        out.extend_from_slice(&pack_u64(self.timestamp.as_nanos()));
        Ok(out)
    }

    pub fn broadcast_payload(
        &self,
        sender: &PubKey,
        signature: &[u8],
    ) -> Result<RegCtrtPayload, CodecError> {
        Ok(RegCtrtPayload {
            sender_public_key: sender.to_string(),
            contract: self.ctrt_meta.b58_str()?,
            init_data: bs58::encode(self.init_data.serialize()?).into_string(),
            description: self.description.as_str().to_owned(),
            fee: self.fee.raw(),
            fee_scale: FEE_SCALE,
            timestamp: self.timestamp.as_nanos(),
            signature: bs58::encode(signature).into_string(),
        })
    }
}

/// JSON body for `POST /contract/broadcast/register`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RegCtrtPayload {
    pub sender_public_key: String,
    pub contract: String,
    pub init_data: String,
    pub description: String,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
    pub signature: String,
}

/// Execute-contract-function transaction request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecCtrtTxReq {
    pub ctrt_id: CtrtId,
    pub func_idx: u16,
    pub func_data: DataStack,
    pub attachment: Str,
    pub timestamp: VsysTimestamp,
    pub fee: ExecCtrtFee,
}

impl ExecCtrtTxReq {
    /// Preimage: 0x09 ++ ctrtId(26) ++ funcIdx(2) ++ len(funcData)(2) ++
    /// funcData ++ len(attachment)(2) ++ attachment ++ fee(8) ++
    /// feeScale(2) ++ ts(8).
    pub fn data_to_sign(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = vec![TxType::ExecCtrt.tag()];
        out.extend_from_slice(self.ctrt_id.as_bytes());
        out.extend_from_slice(&pack_u16(self.func_idx));
        put_len_prefixed(&mut out, &self.func_data.serialize()?)?;
        put_len_prefixed(&mut out, &self.attachment.latin1_bytes())?;
        out.extend_from_slice(&pack_u64(self.fee.raw()));
        out.extend_from_slice(&pack_u16(FEE_SCALE));
        out.extend_from_slice(&pack_u64(self.timestamp.as_nanos()));
        Ok(out)
    }

    pub fn broadcast_payload(
        &self,
        sender: &PubKey,
        signature: &[u8],
    ) -> Result<ExecCtrtPayload, CodecError> {
        Ok(ExecCtrtPayload {
            sender_public_key: sender.to_string(),
            contract_id: self.ctrt_id.to_string(),
            function_index: self.func_idx,
            function_data: bs58::encode(self.func_data.serialize()?).into_string(),
            attachment: self.attachment.b58_str(),
            fee: self.fee.raw(),
            fee_scale: FEE_SCALE,
            timestamp: self.timestamp.as_nanos(),
            signature: bs58::encode(signature).into_string(),
        })
    }
}

/// JSON body for `POST /contract/broadcast/execute`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ExecCtrtPayload {
    pub sender_public_key: String,
    pub contract_id: String,
    pub function_index: u16,
    pub function_data: String,
    pub attachment: String,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_entry::DataEntry;

    fn sample_meta() -> CtrtMeta {
        CtrtMeta {
            lang_code: *b"vdds",
            lang_ver: 1,
            triggers: vec![vec![1]],
            descriptors: vec![vec![2]],
            state_vars: vec![vec![3]],
            state_map: Vec::new(),
            textual: vec![b"init".to_vec()],
        }
    }

    #[test]
    fn test_reg_ctrt_preimage_layout() {
        let req = RegCtrtTxReq {
            ctrt_meta: sample_meta(),
            init_data: DataStack::new(vec![DataEntry::Amount(100)]),
            description: Str::new("token").unwrap(),
            timestamp: VsysTimestamp::from_unix_ms(1_700_000_000_000).unwrap(),
            fee: RegCtrtFee::default(),
        };
        let bytes = req.data_to_sign().unwrap();
        assert_eq!(bytes[0], 8);

        let meta = req.ctrt_meta.serialize().unwrap();
        let stack = req.init_data.serialize().unwrap();
        // Walk the expected sections.
        let mut off = 1;
        assert_eq!(&bytes[off..off + 2], &(meta.len() as u16).to_be_bytes());
        off += 2 + meta.len();
        assert_eq!(&bytes[off..off + 2], &(stack.len() as u16).to_be_bytes());
        off += 2 + stack.len();
        assert_eq!(&bytes[off..off + 2], &[0, 5]);
        off += 2 + 5;
        assert_eq!(&bytes[off..off + 8], &10_000_000_000u64.to_be_bytes());
        off += 8;
        assert_eq!(&bytes[off..off + 2], &[0, 100]);
        off += 2;
        assert_eq!(bytes.len(), off + 8);
    }

    #[test]
    fn test_exec_ctrt_preimage_layout() {
        let req = ExecCtrtTxReq {
            ctrt_id: CtrtId::from_bytes([6u8; 26]),
            func_idx: 3,
            func_data: DataStack::new(vec![DataEntry::Int32(1)]),
            attachment: Str::new("").unwrap(),
            timestamp: VsysTimestamp::from_unix_ms(1_700_000_000_000).unwrap(),
            fee: ExecCtrtFee::default(),
        };
        let bytes = req.data_to_sign().unwrap();
        assert_eq!(bytes[0], 9);
        assert_eq!(&bytes[1..27], &[6u8; 26]);
        assert_eq!(&bytes[27..29], &[0, 3]);
        // funcData: len 7 (count 2 + tag 1 + u32 4).
        assert_eq!(&bytes[29..31], &[0, 7]);
        // Empty attachment still costs its length prefix.
        assert_eq!(&bytes[38..40], &[0, 0]);
        assert_eq!(&bytes[40..48], &30_000_000u64.to_be_bytes());
        assert_eq!(&bytes[48..50], &[0, 100]);
        assert_eq!(bytes.len(), 58);
    }

    #[test]
    fn test_payload_shapes() {
        let req = ExecCtrtTxReq {
            ctrt_id: CtrtId::from_bytes([6u8; 26]),
            func_idx: 0,
            func_data: DataStack::default(),
            attachment: Str::new("x").unwrap(),
            timestamp: VsysTimestamp::from_unix_ms(1).unwrap(),
            fee: ExecCtrtFee::default(),
        };
        let p = req
            .broadcast_payload(&PubKey::from_bytes([5u8; 32]), &[1u8; 64])
            .unwrap();
        assert_eq!(p.function_index, 0);

        #[cfg(feature = "serde")]
        {
            let json = serde_json::to_value(&p).unwrap();
            assert!(json.get("contractId").is_some());
            assert!(json.get("functionIndex").is_some());
            assert!(json.get("functionData").is_some());
        }
    }
}
