use crate::address::Addr;
use crate::amount::Vsys;
use crate::b58::PubKey;
use crate::bytes::Str;
use crate::error::CodecError;
use crate::fee::{PaymentFee, FEE_SCALE};
use crate::packer::{pack_u16, pack_u64, pack_u8};
use crate::reader::put_len_prefixed;
use crate::timestamp::VsysTimestamp;
use crate::tx::TxType;

/// Payment transaction request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentTxReq {
    pub recipient: Addr,
    pub amount: Vsys,
    pub timestamp: VsysTimestamp,
    pub attachment: Str,
    pub fee: PaymentFee,
}

impl PaymentTxReq {
    /// Preimage: 0x02 ++ ts(8) ++ amount(8) ++ fee(8) ++ feeScale(2) ++
    /// recipient(26) ++ len(attachment)(2) ++ attachment.
    pub fn data_to_sign(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(1 + 8 + 8 + 8 + 2 + 26 + 2 + self.attachment.latin1_bytes().len());
        out.extend_from_slice(&pack_u8(TxType::Payment.tag()));
        out.extend_from_slice(&pack_u64(self.timestamp.as_nanos()));
        out.extend_from_slice(&pack_u64(self.amount.raw()));
        out.extend_from_slice(&pack_u64(self.fee.raw()));
        out.extend_from_slice(&pack_u16(FEE_SCALE));
        out.extend_from_slice(self.recipient.as_bytes());
        put_len_prefixed(&mut out, &self.attachment.latin1_bytes())?;
        Ok(out)
    }

    /// Reshape into the node's submission schema.
    pub fn broadcast_payload(&self, sender: &PubKey, signature: &[u8]) -> PaymentPayload {
        PaymentPayload {
            sender_public_key: sender.to_string(),
            recipient: self.recipient.b58_str(),
            amount: self.amount.raw(),
            fee: self.fee.raw(),
            fee_scale: FEE_SCALE,
            timestamp: self.timestamp.as_nanos(),
            attachment: self.attachment.b58_str(),
            signature: bs58::encode(signature).into_string(),
        }
    }
}

/// JSON body for `POST /vsys/broadcast/payment`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PaymentPayload {
    pub sender_public_key: String,
    pub recipient: String,
    pub amount: u64,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
    pub attachment: String,
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::ChainId;

    fn fixed_req() -> PaymentTxReq {
        let recipient = Addr::from_public_key(ChainId::Testnet, &PubKey::from_bytes([1u8; 32]));
        PaymentTxReq {
            recipient,
            amount: Vsys::from_raw(12_345_678_900),
            timestamp: VsysTimestamp::from_unix_ms(1_654_043_244_000).unwrap(),
            attachment: Str::new("hi").unwrap(),
            fee: PaymentFee::default(),
        }
    }

    #[test]
    fn test_golden_preimage_bytes() {
        // Independently assembled expected layout.
        let req = fixed_req();
        let mut expected = vec![2u8];
        expected.extend_from_slice(&(1_654_043_244_000u64 * 1_000_000).to_be_bytes());
        expected.extend_from_slice(&12_345_678_900u64.to_be_bytes());
        expected.extend_from_slice(&10_000_000u64.to_be_bytes());
        expected.extend_from_slice(&[0, 100]);
        expected.extend_from_slice(req.recipient.as_bytes());
        expected.extend_from_slice(&[0, 2, b'h', b'i']);
        assert_eq!(req.data_to_sign().unwrap(), expected);
        assert_eq!(expected.len(), 1 + 8 + 8 + 8 + 2 + 26 + 2 + 2);
    }

    #[test]
    fn test_payload_shape() {
        let req = fixed_req();
        let payload = req.broadcast_payload(&PubKey::from_bytes([5u8; 32]), &[7u8; 64]);
        assert_eq!(payload.fee_scale, 100);
        assert_eq!(payload.amount, 12_345_678_900);
        assert_eq!(payload.recipient, req.recipient.b58_str());

        #[cfg(feature = "serde")]
        {
            let json = serde_json::to_value(&payload).unwrap();
            assert!(json.get("senderPublicKey").is_some());
            assert!(json.get("feeScale").is_some());
            assert!(json["amount"].is_u64());
            assert!(json["attachment"].is_string());
        }
    }
}
