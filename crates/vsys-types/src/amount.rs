use crate::error::ModelError;
use std::fmt;

/// Absolute tolerance when checking that a natural amount times its unit is
/// an integer. Wide enough to absorb f64 representation error (4.56 * 100
/// computes to 455.999...94), far too narrow to let a real sub-unit
/// remainder through.
const INTEGRALITY_EPS: f64 = 1e-9;

fn raw_for_amount(amount: f64, unit: u64) -> Result<u64, ModelError> {
    if unit == 0 {
        return Err(ModelError::ZeroUnit);
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(ModelError::AmountOutOfRange);
    }
    let product = amount * unit as f64;
    // `u64::MAX as f64` rounds up to exactly 2^64, which is itself one past
    // the representable range, so the gate must be inclusive.
    if product >= u64::MAX as f64 {
        return Err(ModelError::AmountOutOfRange);
    }
    let raw = product.round();
    if (product - raw).abs() > INTEGRALITY_EPS {
        return Err(ModelError::NonIntegralAmount { amount, unit });
    }
    Ok(raw as u64)
}

/// Token amount: a raw integer count of minimal units plus the token's unit
/// (how many minimal units make one natural token).
///
/// The natural-amount constructor rejects amounts finer than 1/unit instead
/// of rounding; a silently truncated transfer would pay the wrong amount.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    raw: u64,
    unit: u64,
}

impl Token {
    /// Wrap a raw on-chain integer amount.
    pub fn from_raw(raw: u64, unit: u64) -> Result<Self, ModelError> {
        if unit == 0 {
            return Err(ModelError::ZeroUnit);
        }
        Ok(Self { raw, unit })
    }

    /// The sole constructor for user-supplied natural amounts.
    pub fn for_amount(amount: f64, unit: u64) -> Result<Self, ModelError> {
        Ok(Self {
            raw: raw_for_amount(amount, unit)?,
            unit,
        })
    }

    pub const fn raw(&self) -> u64 {
        self.raw
    }

    pub const fn unit(&self) -> u64 {
        self.unit
    }

    /// Natural amount: raw / unit.
    pub fn amount(&self) -> f64 {
        self.raw as f64 / self.unit as f64
    }

    /// One natural token.
    pub fn one(unit: u64) -> Result<Self, ModelError> {
        Self::from_raw(unit, unit)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({} / {})", self.raw, self.unit)
    }
}

/// VSYS coin amount. The chain coin has a fixed unit of 10^8.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Vsys(u64);

impl Vsys {
    /// Minimal units per natural VSYS coin.
    pub const UNIT: u64 = 100_000_000;

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Construct from a natural coin amount; rejects sub-unit remainders.
    pub fn for_amount(amount: f64) -> Result<Self, ModelError> {
        Ok(Self(raw_for_amount(amount, Self::UNIT)?))
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }

    pub fn amount(&self) -> f64 {
        self.0 as f64 / Self::UNIT as f64
    }
}

impl fmt::Display for Vsys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} VSYS", self.amount())
    }
}

impl fmt::Debug for Vsys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vsys({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_amount_exact() {
        let t = Token::for_amount(1.5, 100).unwrap();
        assert_eq!(t.raw(), 150);
        assert_eq!(t.amount(), 1.5);
    }

    #[test]
    fn test_for_amount_sub_unit_rejected() {
        // 1.234 * 100 = 123.4: finer than the declared granularity.
        assert!(matches!(
            Token::for_amount(1.234, 100),
            Err(ModelError::NonIntegralAmount { .. })
        ));
        assert!(Token::for_amount(0.1, 1).is_err());
    }

    #[test]
    fn test_for_amount_fp_noise_tolerated() {
        // 4.56 * 100 is 455.99999999999994 in f64; still an exact amount.
        let t = Token::for_amount(4.56, 100).unwrap();
        assert_eq!(t.raw(), 456);
    }

    #[test]
    fn test_negative_and_nonfinite_rejected() {
        assert!(Token::for_amount(-1.0, 100).is_err());
        assert!(Token::for_amount(f64::NAN, 100).is_err());
        assert!(Token::for_amount(f64::INFINITY, 100).is_err());
    }

    #[test]
    fn test_for_amount_u64_boundary_rejected() {
        // 2^64 / 100 times 100 multiplies back to exactly 2^64 in f64, one
        // past u64::MAX; a half-open gate would saturate it to u64::MAX.
        let amount = 18_446_744_073_709_551_616.0 / 100.0;
        assert!(matches!(
            Token::for_amount(amount, 100),
            Err(ModelError::AmountOutOfRange)
        ));
        assert!(Vsys::for_amount(u64::MAX as f64).is_err());
        // Products strictly below 2^64 still pass.
        let t = Token::for_amount(9_223_372_036_854_775_808.0, 1).unwrap();
        assert_eq!(t.raw(), 1u64 << 63);
    }

    #[test]
    fn test_zero_unit_rejected() {
        assert!(matches!(Token::from_raw(1, 0), Err(ModelError::ZeroUnit)));
        assert!(Token::for_amount(1.0, 0).is_err());
    }

    #[test]
    fn test_raw_roundtrip() {
        for raw in [0u64, 1, 150, 1_000_000_007] {
            let t = Token::from_raw(raw, 1000).unwrap();
            assert_eq!(t.amount(), raw as f64 / 1000.0);
        }
    }

    #[test]
    fn test_vsys_unit() {
        let v = Vsys::for_amount(3.0).unwrap();
        assert_eq!(v.raw(), 300_000_000);
        assert!(Vsys::for_amount(0.000000001).is_err());
        assert_eq!(Vsys::for_amount(0.00000001).unwrap().raw(), 1);
    }
}
