//! Property tests for `BigNat` against `num_bigint::BigUint` as the reference.

use std::cmp::Ordering;

use big_nat::{BigNat, BigNatError, DigitLimit};
use num_bigint::BigUint;
use proptest::prelude::*;

fn reference(s: &str) -> BigUint {
    s.parse().unwrap()
}

/// Decimal text with optional leading zeros, up to 80 digits.
fn decimal() -> impl Strategy<Value = String> {
    "[0-9]{1,80}"
}

proptest! {
    #[test]
    fn add_matches_reference(a in decimal(), b in decimal()) {
        let sum = BigNat::from(a.as_str()).add(&BigNat::from(b.as_str()));
        prop_assert_eq!(sum.to_string(), (reference(&a) + reference(&b)).to_string());
    }

    #[test]
    fn add_in_place_matches_add(a in decimal(), b in decimal()) {
        let x = BigNat::from(a.as_str());
        let y = BigNat::from(b.as_str());
        let mut z = x.clone();
        z.add_in_place(&y);
        prop_assert_eq!(z, x.add(&y));
    }

    #[test]
    fn multiply_matches_reference(a in decimal(), b in decimal()) {
        let product = BigNat::from(a.as_str()).multiply(&BigNat::from(b.as_str()));
        prop_assert_eq!(product.to_string(), (reference(&a) * reference(&b)).to_string());
    }

    #[test]
    fn native_matches_reference(a in any::<u64>(), b in any::<u64>()) {
        let product = BigNat::from(a).multiply(&BigNat::from(b));
        prop_assert_eq!(product.to_string(), (a as u128 * b as u128).to_string());
        let sum = BigNat::from(a).add(&BigNat::from(b));
        prop_assert_eq!(sum.to_string(), (a as u128 + b as u128).to_string());
    }

    #[test]
    fn string_round_trip(a in decimal()) {
        let v = BigNat::from(a.as_str());
        prop_assert_eq!(BigNat::from(v.to_string()), v.clone());
        prop_assert_eq!(v.to_string().parse::<BigNat>(), Ok(v));
    }

    #[test]
    fn lenient_parse_drops_non_digits(a in "[-+ ,a-z0-9]{0,40}") {
        let kept: String = a.chars().filter(char::is_ascii_digit).collect();
        let expected = if kept.is_empty() { BigUint::from(0u8) } else { reference(&kept) };
        prop_assert_eq!(BigNat::from(a.as_str()).to_string(), expected.to_string());
    }

    #[test]
    fn strict_parse_rejects_non_digits(a in "[0-9]{0,10}[-+a-z][0-9]{0,10}") {
        let rejected = matches!(a.parse::<BigNat>(), Err(BigNatError::InvalidDigit { .. }));
        prop_assert!(rejected);
    }

    #[test]
    fn normalize_is_idempotent(a in decimal()) {
        let mut v = BigNat::from(a.as_str());
        let before = v.digits().to_vec();
        v.normalize();
        prop_assert_eq!(v.digits(), before.as_slice());
        prop_assert!(v.num_digits() == 1 || v.digits().last() != Some(&0));
    }

    #[test]
    fn comparison_is_total(a in decimal(), b in decimal()) {
        let x = BigNat::from(a.as_str());
        let y = BigNat::from(b.as_str());
        let holds = [x < y, x == y, x > y];
        prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        prop_assert_eq!(x.compare(&y), reference(&a).cmp(&reference(&b)));
        prop_assert_eq!(y.compare(&x), x.compare(&y).reverse());
        prop_assert_eq!(x.compare(&x), Ordering::Equal);
    }

    #[test]
    fn inc_dec_are_inverse(a in decimal()) {
        let v = BigNat::from(a.as_str());
        prop_assert_eq!(v.incremented().decremented(), v.clone());
        if !v.is_zero() {
            prop_assert_eq!(v.decremented().incremented(), v.clone());
        }
        prop_assert_eq!(
            v.incremented().to_string(),
            (reference(&a) + BigUint::from(1u8)).to_string()
        );
    }

    #[test]
    fn pow_matches_reference(base in 0u32..1000, exp in 0u32..40) {
        let result = BigNat::from(base).pow(&BigNat::from(exp)).unwrap();
        let expected = if base == 0 { BigUint::from(0u8) } else { BigUint::from(base).pow(exp) };
        prop_assert_eq!(result.to_string(), expected.to_string());
    }

    #[test]
    fn pow_guard_follows_estimate(exp in 1u32..200, limit in 1usize..200) {
        // a one-digit base makes the estimate exact
        let result = BigNat::from(2u8).pow_bounded(&BigNat::from(exp), DigitLimit::new(limit));
        prop_assert_eq!(result.is_err(), exp as usize > limit);
    }

    #[test]
    fn factorial_guard_follows_result(n in 0u32..120, limit in 1usize..200) {
        let expected: BigUint = (1..=n).map(BigUint::from).product();
        let digits = expected.to_string().len();
        match BigNat::from(n).factorial_bounded(DigitLimit::new(limit)) {
            Ok(v) => {
                prop_assert!(digits <= limit);
                prop_assert_eq!(v.to_string(), expected.to_string());
            }
            Err(err) => {
                prop_assert!(digits > limit);
                prop_assert!(err.is_capacity_exceeded());
            }
        }
    }
}
