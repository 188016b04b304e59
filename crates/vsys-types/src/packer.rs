//! Fixed-width big-endian packing helpers.
//!
//! The wire format uses network byte order everywhere; exact-width arrays on
//! both sides keep truncation unrepresentable.

#[inline]
#[must_use]
pub const fn pack_u8(x: u8) -> [u8; 1] {
    [x]
}

#[inline]
#[must_use]
pub const fn pack_u16(x: u16) -> [u8; 2] {
    x.to_be_bytes()
}

#[inline]
#[must_use]
pub const fn pack_u32(x: u32) -> [u8; 4] {
    x.to_be_bytes()
}

#[inline]
#[must_use]
pub const fn pack_u64(x: u64) -> [u8; 8] {
    x.to_be_bytes()
}

/// True packs to 1, false to 0.
#[inline]
#[must_use]
pub const fn pack_bool(x: bool) -> [u8; 1] {
    [x as u8]
}

#[inline]
#[must_use]
pub const fn unpack_u8(b: &[u8; 1]) -> u8 {
    b[0]
}

#[inline]
#[must_use]
pub const fn unpack_u16(b: &[u8; 2]) -> u16 {
    u16::from_be_bytes(*b)
}

#[inline]
#[must_use]
pub const fn unpack_u32(b: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*b)
}

#[inline]
#[must_use]
pub const fn unpack_u64(b: &[u8; 8]) -> u64 {
    u64::from_be_bytes(*b)
}

/// Any nonzero byte unpacks to true.
#[inline]
#[must_use]
pub const fn unpack_bool(b: &[u8; 1]) -> bool {
    b[0] != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u16_roundtrip() {
        assert_eq!(pack_u16(0x1234), [0x12, 0x34]);
        assert_eq!(unpack_u16(&[0x12, 0x34]), 0x1234);
    }

    #[test]
    fn test_u32_roundtrip() {
        assert_eq!(pack_u32(0xdead_beef), [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(unpack_u32(&pack_u32(u32::MAX)), u32::MAX);
    }

    #[test]
    fn test_u64_full_range() {
        // Amounts routinely exceed 2^53; the full u64 range must survive.
        for v in [0u64, 1, 1 << 53, u64::MAX - 1, u64::MAX] {
            assert_eq!(unpack_u64(&pack_u64(v)), v);
        }
    }

    #[test]
    fn test_bool() {
        assert_eq!(pack_bool(true), [1]);
        assert_eq!(pack_bool(false), [0]);
        assert!(unpack_bool(&[1]));
        assert!(unpack_bool(&[0xff]));
        assert!(!unpack_bool(&[0]));
    }
}
