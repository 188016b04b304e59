use crate::b58::PubKey;
use crate::bytes::{Bytes, Str};
use crate::error::CodecError;
use crate::fee::{DbPutFee, FEE_SCALE};
use crate::packer::{pack_u16, pack_u64};
use crate::reader::{put_len_prefixed, Reader};
use crate::timestamp::VsysTimestamp;
use crate::tx::TxType;

/// Typed value stored by a db-put transaction.
///
/// One data type exists on chain today; the tag byte keeps further types
/// representable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DbData {
    ByteArray(Bytes),
}

impl DbData {
    pub fn tag(&self) -> u8 {
        match self {
            DbData::ByteArray(_) => 1,
        }
    }

    /// Node-facing name of the data type.
    pub fn type_name(&self) -> &'static str {
        match self {
            DbData::ByteArray(_) => "ByteArray",
        }
    }

    fn content(&self) -> &[u8] {
        match self {
            DbData::ByteArray(b) => b.as_slice(),
        }
    }

    /// `u16 len(tag + content) ++ tag ++ content`.
    pub fn serialize(&self) -> Result<Vec<u8>, CodecError> {
        let mut blob = vec![self.tag()];
        blob.extend_from_slice(self.content());
        let mut out = Vec::with_capacity(2 + blob.len());
        put_len_prefixed(&mut out, &blob)?;
        Ok(out)
    }

    /// Exact inverse of [`serialize`](Self::serialize); the whole input must
    /// be consumed.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut reader = Reader::new(bytes);
        let blob = reader.take_len_prefixed()?;
        reader.finish()?;
        let (&tag, content) = blob.split_first().ok_or(CodecError::UnexpectedEof {
            needed: 1,
            remaining: 0,
        })?;
        match tag {
            1 => Ok(DbData::ByteArray(Bytes::new(content.to_vec()))),
            other => Err(CodecError::UnknownDbEntryTag(other)),
        }
    }
}

/// Db-put transaction request: stores a client-chosen key/value pair on
/// chain against the submitting account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbPutTxReq {
    pub key: Str,
    pub data: DbData,
    pub timestamp: VsysTimestamp,
    pub fee: DbPutFee,
}

impl DbPutTxReq {
    /// Preimage: 0x0A ++ len(key)(2) ++ key ++ len(tag + data)(2) ++ tag(1)
    /// ++ data ++ fee(8) ++ feeScale(2) ++ ts(8).
    pub fn data_to_sign(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = vec![TxType::DbPut.tag()];
        put_len_prefixed(&mut out, &self.key.latin1_bytes())?;
        out.extend_from_slice(&self.data.serialize()?);
        out.extend_from_slice(&pack_u64(self.fee.raw()));
        out.extend_from_slice(&pack_u16(FEE_SCALE));
        out.extend_from_slice(&pack_u64(self.timestamp.as_nanos()));
        Ok(out)
    }

    pub fn broadcast_payload(&self, sender: &PubKey, signature: &[u8]) -> DbPutPayload {
        let DbData::ByteArray(content) = &self.data;
        DbPutPayload {
            sender_public_key: sender.to_string(),
            db_key: self.key.as_str().to_owned(),
            data_type: self.data.type_name().to_owned(),
            data: content.b58_str(),
            fee: self.fee.raw(),
            fee_scale: FEE_SCALE,
            timestamp: self.timestamp.as_nanos(),
            signature: bs58::encode(signature).into_string(),
        }
    }
}

/// JSON body for `POST /database/broadcast/put`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DbPutPayload {
    pub sender_public_key: String,
    pub db_key: String,
    pub data_type: String,
    pub data: String,
    pub fee: u64,
    pub fee_scale: u16,
    pub timestamp: u64,
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_put_preimage_layout() {
        let req = DbPutTxReq {
            key: Str::new("note").unwrap(),
            data: DbData::ByteArray(Bytes::new(vec![0x01, 0x02, 0x03])),
            timestamp: VsysTimestamp::from_unix_ms(1_700_000_000_000).unwrap(),
            fee: DbPutFee::default(),
        };
        let bytes = req.data_to_sign().unwrap();
        assert_eq!(bytes[0], 10);
        assert_eq!(&bytes[1..3], &[0, 4]);
        assert_eq!(&bytes[3..7], b"note");
        // Value blob: length covers the tag byte plus the content.
        assert_eq!(&bytes[7..9], &[0, 4]);
        assert_eq!(bytes[9], 1);
        assert_eq!(&bytes[10..13], &[1, 2, 3]);
        assert_eq!(&bytes[13..21], &100_000_000u64.to_be_bytes());
        assert_eq!(&bytes[21..23], &[0, 100]);
        assert_eq!(bytes.len(), 31);
    }

    #[test]
    fn test_db_data_roundtrip() {
        let data = DbData::ByteArray(Bytes::new(vec![0xde, 0xad, 0xbe, 0xef]));
        let bytes = data.serialize().unwrap();
        assert_eq!(DbData::deserialize(&bytes).unwrap(), data);
    }

    #[test]
    fn test_db_data_rejects_unknown_tag() {
        // Length 2, tag 7, one content byte.
        assert!(matches!(
            DbData::deserialize(&[0, 2, 7, 0xaa]),
            Err(CodecError::UnknownDbEntryTag(7))
        ));
    }

    #[test]
    fn test_db_data_rejects_malformed_blobs() {
        // Empty blob: no tag byte to read.
        assert!(matches!(
            DbData::deserialize(&[0, 0]),
            Err(CodecError::UnexpectedEof { .. })
        ));
        // Length prefix overshoots the input.
        assert!(matches!(
            DbData::deserialize(&[0, 5, 1]),
            Err(CodecError::UnexpectedEof { .. })
        ));
        // Byte past the declared length.
        assert!(matches!(
            DbData::deserialize(&[0, 1, 1, 0xff]),
            Err(CodecError::TrailingBytes(1))
        ));
    }

    #[test]
    fn test_db_put_payload() {
        let req = DbPutTxReq {
            key: Str::new("k").unwrap(),
            data: DbData::ByteArray(Bytes::new(vec![9])),
            timestamp: VsysTimestamp::from_unix_ms(1).unwrap(),
            fee: DbPutFee::default(),
        };
        let p = req.broadcast_payload(&PubKey::from_bytes([5u8; 32]), &[1u8; 64]);
        assert_eq!(p.data_type, "ByteArray");
        assert_eq!(p.db_key, "k");

        #[cfg(feature = "serde")]
        {
            let json = serde_json::to_value(&p).unwrap();
            assert!(json.get("dbKey").is_some());
            assert!(json.get("dataType").is_some());
        }
    }
}
