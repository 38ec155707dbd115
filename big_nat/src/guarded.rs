//! `pow` and `factorial`, the two operations that bound their result size.
//!
//! Both are deliberately naive: `pow` spends one multiplication per unit of
//! the exponent and `factorial` one per unit of the receiver. The
//! [`DigitLimit`] is what keeps a request like `9999!` or `2^1000000` from
//! running away with CPU and memory.

use tracing::{debug, warn};

use crate::error::{BigNatError, GuardedOp, LimitCheck};
use crate::{BigNat, DigitLimit};

impl BigNat {
    /// `self ^ exponent` under the default [`DigitLimit`].
    pub fn pow(&self, exponent: &BigNat) -> Result<BigNat, BigNatError> {
        self.pow_bounded(exponent, DigitLimit::default())
    }

    /// `self ^ exponent`, failing with [`BigNatError::CapacityExceeded`] when the
    /// result is estimated, or measured, to need more than `limit` digits.
    ///
    /// A zero base yields zero for every exponent, `0 ^ 0` included.
    pub fn pow_bounded(&self, exponent: &BigNat, limit: DigitLimit) -> Result<BigNat, BigNatError> {
        if self.is_zero() {
            return Ok(BigNat::zero());
        }

        debug!(
            base_digits = self.num_digits(),
            exponent_digits = exponent.num_digits(),
            %limit,
            "pow"
        );

        // fast reject; lossy for huge exponents, the loop check is authoritative
        let estimate = exponent.to_f64() * self.num_digits() as f64;
        if limit.is_exceeded_by_estimate(estimate) {
            return Err(capacity_exceeded(GuardedOp::Pow, LimitCheck::Estimate, limit, estimate as usize));
        }

        let mut exp = exponent.clone();
        let mut result = BigNat::one();
        while !exp.is_zero() {
            result.multiply_in_place(self);
            if limit.is_exceeded_by(result.num_digits()) {
                return Err(capacity_exceeded(GuardedOp::Pow, LimitCheck::Measured, limit, result.num_digits()));
            }
            exp.dec();
        }

        Ok(result)
    }

    /// `self!` under the default [`DigitLimit`].
    pub fn factorial(&self) -> Result<BigNat, BigNatError> {
        self.factorial_bounded(DigitLimit::default())
    }

    /// `self!`, multiplying `self, self - 1, ..., 1` into an accumulator and
    /// failing at the first step whose product has more than `limit` digits.
    /// `0!` is one.
    pub fn factorial_bounded(&self, limit: DigitLimit) -> Result<BigNat, BigNatError> {
        debug!(digits = self.num_digits(), %limit, "factorial");

        let mut counter = self.clone();
        let mut result = BigNat::one();
        while !counter.is_zero() {
            result.multiply_in_place(&counter);
            if limit.is_exceeded_by(result.num_digits()) {
                return Err(capacity_exceeded(GuardedOp::Factorial, LimitCheck::Measured, limit, result.num_digits()));
            }
            counter.dec();
        }

        Ok(result)
    }
}

fn capacity_exceeded(operation: GuardedOp, check: LimitCheck, limit: DigitLimit, digits: usize) -> BigNatError {
    warn!(%operation, ?check, digits, %limit, "guarded operation rejected");
    BigNatError::CapacityExceeded { operation, check, limit: limit.get(), digits }
}

#[test]
fn test_pow() {
    let two = BigNat::from(2u8);
    assert_eq!(two.pow(&BigNat::from(10u8)).unwrap().to_string(), "1024");
    assert_eq!(two.pow(&BigNat::zero()).unwrap().to_string(), "1");
    assert_eq!(BigNat::from(7u8).pow(&BigNat::one()).unwrap().to_string(), "7");
    assert_eq!(
        BigNat::from(12u8).pow(&BigNat::from(20u8)).unwrap().to_string(),
        "3833759992447475122176"
    );
    assert_eq!(BigNat::from(10u8).pow(&BigNat::from(3u8)).unwrap().to_string(), "1000");
}

#[test]
fn test_pow_zero_base() {
    assert!(BigNat::zero().pow(&BigNat::from(5u8)).unwrap().is_zero());
    assert!(BigNat::zero().pow(&BigNat::zero()).unwrap().is_zero());
    // never estimated, so a huge exponent is fine
    let huge = BigNat::from("9".repeat(400));
    assert!(BigNat::zero().pow_bounded(&huge, DigitLimit::new(1)).unwrap().is_zero());
}

#[test]
fn test_pow_leaves_operands() {
    let base = BigNat::from(3u8);
    let exponent = BigNat::from(4u8);
    assert_eq!(base.pow(&exponent).unwrap().to_string(), "81");
    assert_eq!(base.to_string(), "3");
    assert_eq!(exponent.to_string(), "4");
}

#[test]
fn test_pow_estimate_boundary() {
    let two = BigNat::from(2u8);
    let limit = DigitLimit::new(100);
    // estimate = exponent * 1
    let at = two.pow_bounded(&BigNat::from(100u8), limit).unwrap();
    assert_eq!(at.to_string(), "1267650600228229401496703205376");

    let err = two.pow_bounded(&BigNat::from(101u8), limit).unwrap_err();
    assert_eq!(
        err,
        BigNatError::CapacityExceeded {
            operation: GuardedOp::Pow,
            check: LimitCheck::Estimate,
            limit: 100,
            digits: 101,
        }
    );

    // two-digit base: estimate = exponent * 2
    let base = BigNat::from(99u8);
    assert_eq!(base.pow_bounded(&BigNat::from(50u8), limit).unwrap().num_digits(), 100);
    assert!(base.pow_bounded(&BigNat::from(51u8), limit).unwrap_err().is_capacity_exceeded());
}

#[test]
fn test_pow_default_limit_boundary() {
    let two = BigNat::from(2u8);
    let ok = two.pow(&BigNat::from(10_000u32)).unwrap();
    assert_eq!(ok.num_digits(), 3011);
    let err = two.pow(&BigNat::from(10_001u32)).unwrap_err();
    assert!(matches!(
        err,
        BigNatError::CapacityExceeded { operation: GuardedOp::Pow, check: LimitCheck::Estimate, limit: 10_000, .. }
    ));
}

#[test]
fn test_pow_huge_exponent_rejected_upfront() {
    let base = BigNat::from(2u8);
    let exponent = BigNat::from(format!("1{}", "0".repeat(500)));
    let err = base.pow(&exponent).unwrap_err();
    assert!(matches!(err, BigNatError::CapacityExceeded { check: LimitCheck::Estimate, .. }));
}

#[test]
fn test_factorial() {
    assert_eq!(BigNat::from(5u8).factorial().unwrap().to_string(), "120");
    assert_eq!(BigNat::zero().factorial().unwrap().to_string(), "1");
    assert_eq!(BigNat::one().factorial().unwrap().to_string(), "1");
    assert_eq!(
        BigNat::from(25u8).factorial().unwrap().to_string(),
        "15511210043330985984000000"
    );
    let n = BigNat::from(10u8);
    assert_eq!(n.factorial().unwrap().to_string(), "3628800");
    assert_eq!(n.to_string(), "10");
}

#[test]
fn test_factorial_boundary() {
    // 25! has 26 digits
    let n = BigNat::from(25u8);
    assert_eq!(n.factorial_bounded(DigitLimit::new(26)).unwrap().num_digits(), 26);

    // 25 * 24 * ... * 2 is the first product to reach 26 digits
    let err = n.factorial_bounded(DigitLimit::new(25)).unwrap_err();
    assert_eq!(
        err,
        BigNatError::CapacityExceeded {
            operation: GuardedOp::Factorial,
            check: LimitCheck::Measured,
            limit: 25,
            digits: 26,
        }
    );

    // 10 * 9 * 8 = 720 is the first product with three digits
    let err = BigNat::from(10u8).factorial_bounded(DigitLimit::new(2)).unwrap_err();
    assert_eq!(
        err,
        BigNatError::CapacityExceeded {
            operation: GuardedOp::Factorial,
            check: LimitCheck::Measured,
            limit: 2,
            digits: 3,
        }
    );
}

#[test]
fn test_factorial_default_limit() {
    // 3248! has 9998 digits, 3249! has 10001
    assert_eq!(BigNat::from(3248u32).factorial().unwrap().num_digits(), 9_998);
    assert!(BigNat::from(3249u32).factorial().unwrap_err().is_capacity_exceeded());
}
