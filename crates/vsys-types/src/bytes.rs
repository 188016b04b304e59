use crate::error::ModelError;
use std::fmt;

/// Arbitrary binary payload with a base58 string view.
///
/// Used for attachments, db-put values and other opaque wire fields.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    /// Parse from a base58 string.
    pub fn from_b58_str(s: &str) -> Result<Self, ModelError> {
        let data = bs58::decode(s)
            .into_vec()
            .map_err(|e| ModelError::InvalidBase58(e.to_string()))?;
        Ok(Self(data))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Base58 string view.
    pub fn b58_str(&self) -> String {
        bs58::encode(&self.0).into_string()
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.b58_str())
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes({})", self.b58_str())
    }
}

/// Text whose wire form is one byte per character (latin-1).
///
/// Construction rejects characters above U+00FF, so every retained value has
/// an exact byte representation.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Str(String);

impl Str {
    pub fn new(s: impl Into<String>) -> Result<Self, ModelError> {
        let s = s.into();
        if let Some(c) = s.chars().find(|&c| c as u32 > 0xff) {
            return Err(ModelError::NonLatin1Char(c));
        }
        Ok(Self(s))
    }

    /// Rebuild from wire bytes; every byte maps to one character.
    pub fn from_latin1_bytes(bytes: &[u8]) -> Self {
        Self(bytes.iter().map(|&b| b as char).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wire encoding: one byte per character.
    pub fn latin1_bytes(&self) -> Vec<u8> {
        self.0.chars().map(|c| c as u8).collect()
    }

    /// Base58 view of the wire bytes, as the node renders text fields.
    pub fn b58_str(&self) -> String {
        bs58::encode(self.latin1_bytes()).into_string()
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Str({:?})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_b58_roundtrip() {
        let b = Bytes::new(vec![0, 1, 2, 255]);
        let s = b.b58_str();
        assert_eq!(Bytes::from_b58_str(&s).unwrap(), b);
    }

    #[test]
    fn test_bytes_rejects_bad_alphabet() {
        // '0', 'O', 'I' and 'l' are outside the base58 alphabet.
        assert!(Bytes::from_b58_str("0OIl").is_err());
    }

    #[test]
    fn test_str_latin1_roundtrip() {
        let s = Str::new("hey there\u{e9}").unwrap();
        let bytes = s.latin1_bytes();
        assert_eq!(bytes.len(), s.as_str().chars().count());
        assert_eq!(Str::from_latin1_bytes(&bytes), s);
    }

    #[test]
    fn test_str_rejects_wide_chars() {
        assert!(matches!(
            Str::new("snowman \u{2603}"),
            Err(ModelError::NonLatin1Char('\u{2603}'))
        ));
    }
}
