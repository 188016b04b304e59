//! Transaction fees with per-kind minimum floors.
//!
//! Every preimage carries the raw fee next to the constant fee scale.

use crate::error::ModelError;

/// Fixed fee scale included in every transaction preimage.
pub const FEE_SCALE: u16 = 100;

macro_rules! fee_model {
    ($(#[$meta:meta])* $name:ident, $min:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name(u64);

        impl $name {
            /// Minimum accepted fee in minimal VSYS units.
            pub const MIN: u64 = $min;

            pub fn new(raw: u64) -> Result<Self, ModelError> {
                if raw < Self::MIN {
                    return Err(ModelError::FeeBelowMinimum {
                        min: Self::MIN,
                        actual: raw,
                    });
                }
                Ok(Self(raw))
            }

            pub const fn raw(&self) -> u64 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }
    };
}

fee_model!(
    /// Fee for payment transactions (floor 0.1 VSYS).
    PaymentFee,
    10_000_000
);
fee_model!(
    /// Fee for lease transactions (floor 0.1 VSYS).
    LeasingFee,
    10_000_000
);
fee_model!(
    /// Fee for lease-cancel transactions (floor 0.1 VSYS).
    LeasingCancelFee,
    10_000_000
);
fee_model!(
    /// Fee for registering a contract (floor 100 VSYS).
    RegCtrtFee,
    10_000_000_000
);
fee_model!(
    /// Fee for executing a contract function (floor 0.3 VSYS).
    ExecCtrtFee,
    30_000_000
);
fee_model!(
    /// Fee for db-put transactions (floor 1 VSYS).
    DbPutFee,
    100_000_000
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_sit_on_the_floor() {
        assert_eq!(PaymentFee::default().raw(), PaymentFee::MIN);
        assert_eq!(RegCtrtFee::default().raw(), 10_000_000_000);
        assert_eq!(ExecCtrtFee::default().raw(), 30_000_000);
        assert_eq!(DbPutFee::default().raw(), 100_000_000);
    }

    #[test]
    fn test_below_floor_rejected() {
        assert!(matches!(
            PaymentFee::new(PaymentFee::MIN - 1),
            Err(ModelError::FeeBelowMinimum { .. })
        ));
        assert!(RegCtrtFee::new(9_999_999_999).is_err());
        assert!(ExecCtrtFee::new(0).is_err());
        assert!(LeasingFee::new(1).is_err());
        assert!(LeasingCancelFee::new(9_999_999).is_err());
    }

    #[test]
    fn test_above_floor_accepted() {
        assert_eq!(PaymentFee::new(20_000_000).unwrap().raw(), 20_000_000);
        assert_eq!(DbPutFee::new(DbPutFee::MIN).unwrap().raw(), DbPutFee::MIN);
    }
}
