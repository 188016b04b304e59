//! Compiled contract metadata codec.
//!
//! Layout: 4 ASCII language-code bytes, 4-byte big-endian language version,
//! then length-prefixed lists of triggers, descriptors, state variables and,
//! only when the version is above 1, state maps, followed by the textual
//! descriptor items with no outer length prefix. The base58 form of these
//! bytes is the canonical "compiled contract" representation embedded in
//! register-contract transactions.

use crate::error::{CodecError, ModelError};
use crate::packer::pack_u32;
use crate::reader::{put_len_prefixed, Reader};
use std::fmt;

/// Compiled contract descriptor.
#[derive(Clone, PartialEq, Eq)]
pub struct CtrtMeta {
    pub lang_code: [u8; 4],
    pub lang_ver: u32,
    pub triggers: Vec<Vec<u8>>,
    pub descriptors: Vec<Vec<u8>>,
    pub state_vars: Vec<Vec<u8>>,
    /// Only serialized when `lang_ver > 1`; version 1 emits zero bytes here,
    /// not an empty list.
    pub state_map: Vec<Vec<u8>>,
    pub textual: Vec<Vec<u8>>,
}

fn serialize_items(out: &mut Vec<u8>, items: &[Vec<u8>]) -> Result<(), CodecError> {
    for item in items {
        put_len_prefixed(out, item)?;
    }
    Ok(())
}

fn serialize_list(out: &mut Vec<u8>, items: &[Vec<u8>]) -> Result<(), CodecError> {
    let mut body = Vec::new();
    serialize_items(&mut body, items)?;
    put_len_prefixed(out, &body)
}

fn deserialize_items(bytes: &[u8]) -> Result<Vec<Vec<u8>>, CodecError> {
    let mut r = Reader::new(bytes);
    let mut items = Vec::new();
    while !r.is_done() {
        items.push(r.take_len_prefixed()?.to_vec());
    }
    Ok(items)
}

impl CtrtMeta {
    pub fn serialize(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.lang_code);
        out.extend_from_slice(&pack_u32(self.lang_ver));
        serialize_list(&mut out, &self.triggers)?;
        serialize_list(&mut out, &self.descriptors)?;
        serialize_list(&mut out, &self.state_vars)?;
        if self.lang_ver > 1 {
            serialize_list(&mut out, &self.state_map)?;
        } else if !self.state_map.is_empty() {
            return Err(CodecError::UnexpectedStateMap);
        }
        serialize_items(&mut out, &self.textual)?;
        Ok(out)
    }

    /// Exact inverse of [`serialize`](Self::serialize), including the
    /// version gate on the state-map section.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut r = Reader::new(bytes);
        let mut lang_code = [0u8; 4];
        lang_code.copy_from_slice(r.take(4)?);
        let lang_ver = r.take_u32()?;
        let triggers = deserialize_items(r.take_len_prefixed()?)?;
        let descriptors = deserialize_items(r.take_len_prefixed()?)?;
        let state_vars = deserialize_items(r.take_len_prefixed()?)?;
        let state_map = if lang_ver > 1 {
            deserialize_items(r.take_len_prefixed()?)?
        } else {
            Vec::new()
        };
        // The textual section runs to the end of the buffer.
        let textual = deserialize_items(r.take(r.remaining())?)?;
        Ok(Self {
            lang_code,
            lang_ver,
            triggers,
            descriptors,
            state_vars,
            state_map,
            textual,
        })
    }

    /// Parse the canonical base58 string form.
    pub fn from_b58_str(s: &str) -> Result<Self, CodecError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| ModelError::InvalidBase58(e.to_string()))?;
        Self::deserialize(&bytes)
    }

    /// Canonical base58 string form.
    pub fn b58_str(&self) -> Result<String, CodecError> {
        Ok(bs58::encode(self.serialize()?).into_string())
    }
}

impl fmt::Debug for CtrtMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CtrtMeta")
            .field("lang_code", &String::from_utf8_lossy(&self.lang_code))
            .field("lang_ver", &self.lang_ver)
            .field("triggers", &self.triggers.len())
            .field("descriptors", &self.descriptors.len())
            .field("state_vars", &self.state_vars.len())
            .field("state_map", &self.state_map.len())
            .field("textual", &self.textual.len())
            .finish()
    }
}
