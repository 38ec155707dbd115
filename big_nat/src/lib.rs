//! Big Nat \
//! This crate provides:
//! - [`BigNat`]: arbitrary-precision non-negative integers kept as decimal digits.
//!   `add` and `multiply` grow without bound; `pow` and `factorial` are checked
//!   against a [`DigitLimit`] and fail with [`BigNatError::CapacityExceeded`].
//!
//! Signed values, fractions and other radices are not supported. There is no
//! subtraction or division.

mod big_nat;
mod big_nat_cache;
mod big_nat_constants;
mod error;
mod guarded;
mod limits;

pub use crate::big_nat::BigNat;
pub use crate::big_nat_constants::DEFAULT_MAX_DIGITS;
pub use crate::error::{BigNatError, GuardedOp, LimitCheck};
pub use crate::limits::DigitLimit;

#[cfg(test)]
mod tests {
    use crate::{BigNat, DigitLimit};

    #[test]
    fn it_works() {
        let a: BigNat = "10000000000000".into();
        let b: BigNat = "900000000000".into();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!(a.incremented().to_string(), "10000000000001");
        assert_eq!(b.decremented().to_string(), "899999999999");
        assert!(a > b);
    }

    #[test]
    fn scenarios() {
        assert_eq!(BigNat::from(123u32).add(&BigNat::from(877u32)).to_string(), "1000");
        assert_eq!(BigNat::from(999u32).incremented().to_string(), "1000");
        assert_eq!(BigNat::from(1000u32).decremented().to_string(), "999");
        assert_eq!(BigNat::from(12u32).multiply(&BigNat::from(12u32)).to_string(), "144");
        assert_eq!(BigNat::from(5u32).factorial().unwrap().to_string(), "120");
        assert_eq!(BigNat::from("0").decremented().to_string(), "0");
    }

    #[test]
    fn independent_copies() {
        let a = BigNat::from(199u32);
        let mut b = a.clone();
        b.inc();
        b.multiply_in_place(&BigNat::from(3u8));
        assert_eq!(a.to_string(), "199");
        assert_eq!(b.to_string(), "600");
    }

    #[test]
    fn limits_coexist() {
        let two = BigNat::from(2u8);
        let exponent = BigNat::from(20u8);
        let tight = DigitLimit::new(10);
        let loose = DigitLimit::new(20);
        assert!(two.pow_bounded(&exponent, tight).is_err());
        assert_eq!(two.pow_bounded(&exponent, loose).unwrap().to_string(), "1048576");
    }
}
