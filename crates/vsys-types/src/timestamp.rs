use crate::error::ModelError;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Nanosecond-scaled UNIX timestamp.
///
/// The chain carries timestamps as millisecond time scaled by 10^6. A valid
/// value is either exactly zero or at least one full millisecond.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VsysTimestamp(u64);

impl VsysTimestamp {
    /// Nanoseconds per millisecond, the on-chain scale factor.
    pub const SCALE: u64 = 1_000_000;

    pub fn new(nanos: u64) -> Result<Self, ModelError> {
        if nanos != 0 && nanos < Self::SCALE {
            return Err(ModelError::InvalidTimestamp(nanos));
        }
        Ok(Self(nanos))
    }

    pub fn from_unix_ms(millis: u64) -> Result<Self, ModelError> {
        let nanos = millis
            .checked_mul(Self::SCALE)
            .ok_or(ModelError::InvalidTimestamp(millis))?;
        Ok(Self(nanos))
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        // Within u64 range until the year 586524.
        Self(millis * Self::SCALE)
    }

    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    pub const fn unix_ms(&self) -> u64 {
        self.0 / Self::SCALE
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for VsysTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for VsysTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VsysTimestamp({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_valid() {
        let ts = VsysTimestamp::new(0).unwrap();
        assert!(ts.is_zero());
        assert_eq!(ts.unix_ms(), 0);
    }

    #[test]
    fn test_sub_millisecond_rejected() {
        assert!(VsysTimestamp::new(1).is_err());
        assert!(VsysTimestamp::new(VsysTimestamp::SCALE - 1).is_err());
        assert!(VsysTimestamp::new(VsysTimestamp::SCALE).is_ok());
    }

    #[test]
    fn test_from_unix_ms() {
        let ts = VsysTimestamp::from_unix_ms(1_609_459_200_000).unwrap();
        assert_eq!(ts.as_nanos(), 1_609_459_200_000 * VsysTimestamp::SCALE);
        assert_eq!(ts.unix_ms(), 1_609_459_200_000);
    }

    #[test]
    fn test_from_unix_ms_overflow() {
        assert!(VsysTimestamp::from_unix_ms(u64::MAX).is_err());
    }

    #[test]
    fn test_now_is_scaled() {
        let ts = VsysTimestamp::now();
        assert!(ts.as_nanos() >= VsysTimestamp::SCALE);
        assert_eq!(ts.as_nanos() % VsysTimestamp::SCALE, 0);
    }
}
