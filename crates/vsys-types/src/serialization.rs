//! Serde implementations for vsys-types.
//!
//! All base58-backed values serialize through their canonical string form.

use crate::{Addr, CtrtId, PubKey, TokenId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

macro_rules! b58_string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.to_string().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$ty>::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

b58_string_serde!(Addr);
b58_string_serde!(PubKey);
b58_string_serde!(CtrtId);
b58_string_serde!(TokenId);
