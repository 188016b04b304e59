//! Tagged, self-describing wire encoding for contract function arguments and
//! contract state values.
//!
//! Every entry serializes as a 1-byte tag, then for variable-length kinds a
//! 2-byte big-endian length, then the payload. Fixed-width kinds omit the
//! length; the tag implies it.

use crate::address::Addr;
use crate::b58::{CtrtId, PubKey, TokenId};
use crate::bytes::Str;
use crate::error::CodecError;
use crate::packer::{pack_bool, pack_u32, pack_u64};
use crate::reader::{put_len_prefixed, Reader};
use crate::timestamp::VsysTimestamp;

/// A single typed value in the data-entry encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataEntry {
    PubKey(PubKey),
    Addr(Addr),
    Amount(u64),
    Int32(u32),
    Str(Str),
    CtrtAcnt(CtrtId),
    Acnt(Addr),
    TokenId(TokenId),
    Timestamp(VsysTimestamp),
    Bool(bool),
    Bytes(Vec<u8>),
    Balance(u64),
}

impl DataEntry {
    /// Wire tag byte.
    pub fn tag(&self) -> u8 {
        match self {
            DataEntry::PubKey(_) => 1,
            DataEntry::Addr(_) => 2,
            DataEntry::Amount(_) => 3,
            DataEntry::Int32(_) => 4,
            DataEntry::Str(_) => 5,
            DataEntry::CtrtAcnt(_) => 6,
            DataEntry::Acnt(_) => 7,
            DataEntry::TokenId(_) => 8,
            DataEntry::Timestamp(_) => 9,
            DataEntry::Bool(_) => 10,
            DataEntry::Bytes(_) => 11,
            DataEntry::Balance(_) => 12,
        }
    }

    /// `tag ++ [u16 len] ++ payload`.
    pub fn serialize(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = vec![self.tag()];
        match self {
            DataEntry::PubKey(pk) => out.extend_from_slice(pk.as_bytes()),
            DataEntry::Addr(a) | DataEntry::Acnt(a) => out.extend_from_slice(a.as_bytes()),
            DataEntry::Amount(v) | DataEntry::Balance(v) => out.extend_from_slice(&pack_u64(*v)),
            DataEntry::Int32(v) => out.extend_from_slice(&pack_u32(*v)),
            DataEntry::Str(s) => put_len_prefixed(&mut out, &s.latin1_bytes())?,
            DataEntry::CtrtAcnt(id) => out.extend_from_slice(id.as_bytes()),
            DataEntry::TokenId(id) => out.extend_from_slice(id.as_bytes()),
            DataEntry::Timestamp(ts) => out.extend_from_slice(&pack_u64(ts.as_nanos())),
            DataEntry::Bool(b) => out.extend_from_slice(&pack_bool(*b)),
            DataEntry::Bytes(b) => put_len_prefixed(&mut out, b)?,
        }
        Ok(out)
    }

    /// Decode exactly one entry at the reader position, dispatching on the
    /// tag. Unknown tags fail loudly.
    fn decode(r: &mut Reader<'_>) -> Result<Self, CodecError> {
        let tag = r.take_u8()?;
        let entry = match tag {
            1 => DataEntry::PubKey(PubKey::from_slice(r.take(PubKey::LEN)?)?),
            2 => DataEntry::Addr(Addr::from_slice(r.take(Addr::LEN)?)?),
            3 => DataEntry::Amount(r.take_u64()?),
            4 => DataEntry::Int32(r.take_u32()?),
            5 => DataEntry::Str(Str::from_latin1_bytes(r.take_len_prefixed()?)),
            6 => DataEntry::CtrtAcnt(CtrtId::from_slice(r.take(CtrtId::LEN)?)?),
            7 => DataEntry::Acnt(Addr::from_slice(r.take(Addr::LEN)?)?),
            8 => DataEntry::TokenId(TokenId::from_slice(r.take(TokenId::LEN)?)?),
            9 => DataEntry::Timestamp(
                VsysTimestamp::new(r.take_u64()?).map_err(|e| CodecError::InvalidValue(e.to_string()))?,
            ),
            10 => DataEntry::Bool(r.take_u8()? != 0),
            11 => DataEntry::Bytes(r.take_len_prefixed()?.to_vec()),
            12 => DataEntry::Balance(r.take_u64()?),
            other => return Err(CodecError::UnknownDataEntryTag(other)),
        };
        Ok(entry)
    }
}

/// Ordered sequence of data entries; `u16 count ++ entries` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DataStack(pub Vec<DataEntry>);

impl DataStack {
    pub fn new(entries: Vec<DataEntry>) -> Self {
        Self(entries)
    }

    pub fn serialize(&self) -> Result<Vec<u8>, CodecError> {
        let count =
            u16::try_from(self.0.len()).map_err(|_| CodecError::LengthOverflow(self.0.len()))?;
        let mut out = count.to_be_bytes().to_vec();
        for entry in &self.0 {
            out.extend_from_slice(&entry.serialize()?);
        }
        Ok(out)
    }

    /// Exact left inverse of [`serialize`](Self::serialize); trailing bytes
    /// are an error.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut r = Reader::new(bytes);
        let count = r.take_u16()?;
        let mut entries = Vec::with_capacity(count as usize);
        for _ in 0..count {
            entries.push(DataEntry::decode(&mut r)?);
        }
        r.finish()?;
        Ok(Self(entries))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
