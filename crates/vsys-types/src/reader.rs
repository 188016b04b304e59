//! Cursor over a byte slice for exact-inverse decoding.

use crate::error::CodecError;
use crate::packer::{unpack_u16, unpack_u32, unpack_u64};

pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_done(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Error unless every byte was consumed.
    pub fn finish(self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }

    pub fn take(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        if self.remaining() < n {
            return Err(CodecError::UnexpectedEof {
                needed: n - self.remaining(),
                remaining: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    pub fn take_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.take(1)?[0])
    }

    pub fn take_u16(&mut self) -> Result<u16, CodecError> {
        let b = self.take(2)?;
        Ok(unpack_u16(&[b[0], b[1]]))
    }

    pub fn take_u32(&mut self) -> Result<u32, CodecError> {
        let b = self.take(4)?;
        Ok(unpack_u32(&[b[0], b[1], b[2], b[3]]))
    }

    pub fn take_u64(&mut self) -> Result<u64, CodecError> {
        let b = self.take(8)?;
        Ok(unpack_u64(&[b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
    }

    /// A u16 length prefix followed by that many bytes.
    pub fn take_len_prefixed(&mut self) -> Result<&'a [u8], CodecError> {
        let len = self.take_u16()? as usize;
        self.take(len)
    }
}

/// Append a u16 length prefix followed by the bytes.
pub(crate) fn put_len_prefixed(out: &mut Vec<u8>, bytes: &[u8]) -> Result<(), CodecError> {
    let len = u16::try_from(bytes.len()).map_err(|_| CodecError::LengthOverflow(bytes.len()))?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_walks_the_buffer() {
        let mut r = Reader::new(&[0x01, 0x00, 0x02, 0xaa, 0xbb]);
        assert_eq!(r.take_u8().unwrap(), 1);
        assert_eq!(r.take_len_prefixed().unwrap(), &[0xaa, 0xbb]);
        assert!(r.is_done());
        r.finish().unwrap();
    }

    #[test]
    fn test_truncation_errors() {
        let mut r = Reader::new(&[0x00, 0x05, 0xaa]);
        assert!(matches!(
            r.take_len_prefixed(),
            Err(CodecError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_trailing_bytes_error() {
        let mut r = Reader::new(&[1, 2, 3]);
        r.take_u8().unwrap();
        assert_eq!(r.finish(), Err(CodecError::TrailingBytes(2)));
    }

    #[test]
    fn test_put_len_prefixed_overflow() {
        let mut out = Vec::new();
        let big = vec![0u8; usize::from(u16::MAX) + 1];
        assert!(matches!(
            put_len_prefixed(&mut out, &big),
            Err(CodecError::LengthOverflow(_))
        ));
    }
}
