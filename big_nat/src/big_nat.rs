//! # BigNat
//! Arbitrary-precision non-negative integers stored as decimal digits.
//! Addition and multiplication are unbounded; only `pow` and `factorial`
//! check their result against a [`DigitLimit`](crate::DigitLimit).
//! # Example
//! ```
//! use big_nat::BigNat;
//!
//! let a = BigNat::from(123u32);
//! let b: BigNat = "877".into();
//! assert_eq!(a.add(&b).to_string(), "1000");
//! assert_eq!(BigNat::from(12u8).multiply(&BigNat::from(12u8)).to_string(), "144");
//! assert_eq!(BigNat::from(5u8).factorial().unwrap().to_string(), "120");
//! ```
//!

use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use crate::big_nat_cache::SMALL_CACHE;
use crate::big_nat_constants::*;
use crate::error::BigNatError;

/// A non-negative integer of any size.
///
/// `digits` holds one decimal digit per element, least-significant first.
/// It is never empty and never has a most-significant zero, except for
/// zero itself which is exactly `[0]`.
#[derive(Debug, Clone)]
pub struct BigNat {
    digits: Vec<u8>,
}

impl Hash for BigNat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits.hash(state);
    }
}

// Construction
impl BigNat {
    /// Builds a value from digits that are already known to be normalized.
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        BigNat { digits }
    }
    /// Builds a value from least-significant-first digits, normalizing them.
    /// Every element must be in `0..=9`.
    pub fn from_digits_le(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|d| *d < RADIX));
        let mut val = BigNat { digits };
        val.normalize();
        val
    }
    pub fn zero() -> Self {
        BigNat { digits: vec![0] }
    }
    pub fn one() -> Self {
        BigNat { digits: vec![1] }
    }
    /// The largest value whose digit count fits `limit`: `limit` nines.
    pub fn max_value(limit: crate::DigitLimit) -> Self {
        BigNat::from_digits_le(vec![RADIX - 1; limit.get()])
    }
    fn value_of(mut val: u128) -> Self {
        if val <= MAX_CONSTANT as u128 {
            return SMALL_CACHE[val as usize].clone();
        }
        let mut digits = Vec::with_capacity(39);
        while val > 0 {
            digits.push((val % RADIX as u128) as u8);
            val /= RADIX as u128;
        }
        BigNat::from_raw(digits)
    }
}

impl Default for BigNat {
    fn default() -> Self {
        BigNat::zero()
    }
}

// Normalization
impl BigNat {
    /// Strips most-significant zeros, collapsing to `[0]` when nothing is left.
    pub fn normalize(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.digits.push(0);
        }
    }
}

// Accessors
impl BigNat {
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }
    /// The digits, least-significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
    /// Horner reconstruction as a float. Lossy past `f64` precision, so only
    /// good for magnitude estimates.
    pub fn to_f64(&self) -> f64 {
        self.digits
            .iter()
            .rev()
            .fold(0_f64, |acc, d| acc * RADIX as f64 + *d as f64)
    }
}

// Printing
impl Display for BigNat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: String = self.digits
            .iter()
            .rev()
            .map(|d| DIGITS[*d as usize])
            .collect();
        f.pad_integral(true, "", &s)
    }
}

// Parsing
impl From<&str> for BigNat {
    /// Lenient parse: keeps ASCII digits, silently drops everything else
    /// (signs included). Text without digits is zero.
    fn from(val: &str) -> Self {
        let digits = val
            .bytes()
            .rev()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        BigNat::from_digits_le(digits)
    }
}

impl From<String> for BigNat {
    fn from(val: String) -> Self {
        BigNat::from(val.as_str())
    }
}

impl FromStr for BigNat {
    type Err = BigNatError;

    /// Strict parse: a non-empty run of ASCII digits, nothing else.
    fn from_str(val: &str) -> Result<Self, Self::Err> {
        if val.is_empty() {
            return Err(BigNatError::Empty);
        }
        let mut digits = Vec::with_capacity(val.len());
        for (position, ch) in val.char_indices().rev() {
            match ch.to_digit(RADIX as u32) {
                Some(d) => digits.push(d as u8),
                None => return Err(BigNatError::InvalidDigit { ch, position }),
            }
        }
        Ok(BigNat::from_digits_le(digits))
    }
}

macro_rules! impl_unsigned_to_big_nat {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigNat {
        fn from(val: $u) -> Self {
            BigNat::value_of(val as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_nat!(u8, u16, u32, usize, u64, u128);

// Comparison
impl BigNat {
    /// Three-way comparison of two normalized values: digit count first,
    /// then digits from the most-significant end.
    pub fn compare(&self, other: &BigNat) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();

        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for pos in (0..self_len).rev() {
            let a = self.digits[pos];
            let b = other.digits[pos];
            if a != b {
                return a.cmp(&b);
            }
        }

        Ordering::Equal
    }
}

impl PartialEq for BigNat {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other).is_eq()
    }
}
impl Eq for BigNat {}

impl PartialOrd for BigNat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigNat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

// Increment / decrement
impl BigNat {
    /// Adds one in place. Never fails; grows by a digit when every digit was 9.
    pub fn inc(&mut self) -> &mut Self {
        let mut i = 0;
        while i < self.digits.len() && self.digits[i] == RADIX - 1 {
            self.digits[i] = 0;
            i += 1;
        }
        if i == self.digits.len() {
            self.digits.push(1);
        } else {
            self.digits[i] += 1;
        }
        self
    }
    /// Subtracts one in place. Zero stays zero.
    pub fn dec(&mut self) -> &mut Self {
        if self.is_zero() {
            return self;
        }
        for d in self.digits.iter_mut() {
            if *d > 0 {
                *d -= 1;
                break;
            }
            *d = RADIX - 1;
        }
        self.normalize();
        self
    }
    pub fn incremented(&self) -> BigNat {
        let mut result = self.clone();
        result.inc();
        result
    }
    pub fn decremented(&self) -> BigNat {
        let mut result = self.clone();
        result.dec();
        result
    }
}

// Addition
impl BigNat {
    /// Positional addition with carry, extending `self` as needed. Unbounded.
    pub fn add_in_place(&mut self, other: &BigNat) -> &mut Self {
        let max_len = self.digits.len().max(other.digits.len());
        let mut carry = 0_u8;
        let mut i = 0;
        while i < max_len || carry != 0 {
            if i == self.digits.len() {
                self.digits.push(0);
            }
            let other_digit = other.digits.get(i).copied().unwrap_or(0);
            let sum = self.digits[i] + other_digit + carry;
            self.digits[i] = sum % RADIX;
            carry = sum / RADIX;
            i += 1;
        }
        self.normalize();
        self
    }
    pub fn add(&self, other: &BigNat) -> BigNat {
        let mut result = self.clone();
        result.add_in_place(other);
        result
    }
}

impl Add for &BigNat {
    type Output = BigNat;

    fn add(self, rhs: Self) -> Self::Output {
        BigNat::add(self, rhs)
    }
}

impl AddAssign<&BigNat> for BigNat {
    fn add_assign(&mut self, rhs: &BigNat) {
        self.add_in_place(rhs);
    }
}

// Multiplication
impl BigNat {
    /// Schoolbook multiplication into a `len(self) + len(other)` buffer. Unbounded.
    pub fn multiply(&self, other: &BigNat) -> BigNat {
        if self.is_zero() || other.is_zero() {
            return BigNat::zero();
        }
        let x = &self.digits;
        let y = &other.digits;
        let radix = RADIX as u32;
        let mut result = vec![0_u8; x.len() + y.len()];

        for (i, &xd) in x.iter().enumerate() {
            let mut carry = 0_u32;
            let mut j = 0;
            // the carry may spill past the end of `y`
            while j < y.len() || carry != 0 {
                let yd = y.get(j).copied().unwrap_or(0) as u32;
                let current = result[i + j] as u32 + xd as u32 * yd + carry;
                result[i + j] = (current % radix) as u8;
                carry = current / radix;
                j += 1;
            }
        }

        BigNat::from_digits_le(result)
    }
    pub fn multiply_in_place(&mut self, other: &BigNat) -> &mut Self {
        self.digits = self.multiply(other).digits;
        self
    }
}

impl Mul for &BigNat {
    type Output = BigNat;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl MulAssign<&BigNat> for BigNat {
    fn mul_assign(&mut self, rhs: &BigNat) {
        self.multiply_in_place(rhs);
    }
}

#[test]
fn test_from() {
    assert_eq!(BigNat::from(0u8).digits(), &[0]);
    assert_eq!(BigNat::from(7u16).digits(), &[7]);
    assert_eq!(BigNat::from(16u32).digits(), &[6, 1]);
    assert_eq!(BigNat::from(17u32).digits(), &[7, 1]);
    assert_eq!(BigNat::from(1000usize).digits(), &[0, 0, 0, 1]);
    assert_eq!(BigNat::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(BigNat::from(u128::MAX).to_string(), u128::MAX.to_string());
}

#[test]
fn test_from_str_lenient() {
    assert_eq!(BigNat::from("12345").to_string(), "12345");
    assert_eq!(BigNat::from("000120").to_string(), "120");
    assert_eq!(BigNat::from("-42").to_string(), "42");
    assert_eq!(BigNat::from("1,000,000").to_string(), "1000000");
    assert_eq!(BigNat::from("  7 8 ").to_string(), "78");
    assert!(BigNat::from("").is_zero());
    assert!(BigNat::from("abc").is_zero());
    assert!(BigNat::from("0000").is_zero());
    assert_eq!(BigNat::from(String::from("99")).to_string(), "99");
}

#[test]
fn test_from_str_strict() {
    assert_eq!("12345".parse::<BigNat>().unwrap().to_string(), "12345");
    assert_eq!("007".parse::<BigNat>().unwrap().to_string(), "7");
    assert_eq!("".parse::<BigNat>(), Err(BigNatError::Empty));
    assert_eq!(
        "-42".parse::<BigNat>(),
        Err(BigNatError::InvalidDigit { ch: '-', position: 0 })
    );
    assert_eq!(
        "12a4".parse::<BigNat>(),
        Err(BigNatError::InvalidDigit { ch: 'a', position: 2 })
    );
}

#[test]
fn test_normalize() {
    let mut a = BigNat::from_digits_le(vec![3, 2, 1, 0, 0]);
    assert_eq!(a.digits(), &[3, 2, 1]);
    a.normalize();
    assert_eq!(a.digits(), &[3, 2, 1]);

    let zero = BigNat::from_digits_le(vec![0, 0, 0]);
    assert_eq!(zero.digits(), &[0]);
    assert_eq!(BigNat::from_digits_le(vec![]).digits(), &[0]);
}

#[test]
fn test_to_string() {
    assert_eq!(BigNat::zero().to_string(), "0");
    assert_eq!(BigNat::one().to_string(), "1");
    let a: BigNat = "12345678909876523784950683472613487560983287654321".into();
    assert_eq!(a.to_string(), "12345678909876523784950683472613487560983287654321");
    assert_eq!(format!("{:>5}", BigNat::from(42u8)), "   42");
}

#[test]
fn test_to_f64() {
    assert_eq!(BigNat::zero().to_f64(), 0.0);
    assert_eq!(BigNat::from(123456789u32).to_f64(), 123456789.0);
    let big = BigNat::from(format!("1{}", "0".repeat(30)));
    assert!((big.to_f64() - 1e30).abs() / 1e30 < 1e-12);
}

#[test]
fn test_max_value() {
    assert_eq!(BigNat::max_value(crate::DigitLimit::new(4)).to_string(), "9999");
    assert!(BigNat::max_value(crate::DigitLimit::new(0)).is_zero());
    assert_eq!(BigNat::max_value(crate::DigitLimit::DEFAULT).num_digits(), 10_000);
}

#[test]
fn test_compare() {
    let a = BigNat::from(100u32);
    let b = BigNat::from(99u32);
    let c = BigNat::from(101u32);
    assert_eq!(a.compare(&b), Ordering::Greater);
    assert_eq!(b.compare(&a), Ordering::Less);
    assert_eq!(a.compare(&c), Ordering::Less);
    assert_eq!(a.compare(&BigNat::from("100")), Ordering::Equal);
    assert!(a.gt(&b) && a.ge(&b) && b.lt(&a) && b.le(&a));
    assert!(a.eq(&BigNat::from("0100")) && a.ne(&c));
    assert_eq!(BigNat::zero(), BigNat::from("0"));
}

#[test]
fn test_inc_dec() {
    assert_eq!(BigNat::from(999u32).incremented().to_string(), "1000");
    assert_eq!(BigNat::from(1000u32).decremented().to_string(), "999");
    assert_eq!(BigNat::from(1299u32).incremented().to_string(), "1300");
    assert_eq!(BigNat::from(10u32).decremented().to_string(), "9");
    assert_eq!(BigNat::from(1u32).decremented().to_string(), "0");
    assert_eq!(BigNat::from("0").decremented().to_string(), "0");

    let mut a = BigNat::from(9u8);
    a.inc().inc();
    assert_eq!(a.to_string(), "11");
    a.dec().dec().dec();
    assert_eq!(a.to_string(), "8");

    let a = BigNat::from(500u32);
    let b = a.incremented();
    assert_eq!(a.to_string(), "500");
    assert_eq!(b.to_string(), "501");
}

#[test]
fn test_add() {
    let a = BigNat::from(123u32);
    let b = BigNat::from(877u32);
    assert_eq!(a.add(&b).to_string(), "1000");
    assert_eq!(a.to_string(), "123");
    assert_eq!((&a + &BigNat::zero()).to_string(), "123");
    assert_eq!(BigNat::from(5u8).add(&BigNat::from("99999")).to_string(), "100004");

    let mut c = BigNat::from("99999999999999999999");
    c += &BigNat::one();
    assert_eq!(c.to_string(), "100000000000000000000");
    c.add_in_place(&c.clone());
    assert_eq!(c.to_string(), "200000000000000000000");
}

#[test]
fn test_multiply() {
    let a = BigNat::from(12u32);
    assert_eq!(a.multiply(&a).to_string(), "144");
    assert_eq!(a.multiply(&BigNat::zero()).to_string(), "0");
    assert_eq!((&BigNat::zero() * &a).to_string(), "0");
    assert_eq!(BigNat::from(99u32).multiply(&BigNat::from(99u32)).to_string(), "9801");
    let a = BigNat::from("123456789123456789");
    let b = BigNat::from("987654321987654321");
    assert_eq!(a.multiply(&b).to_string(), "121932631356500531347203169112635269");

    let mut c = BigNat::from(25u32);
    c *= &BigNat::from(4u32);
    assert_eq!(c.to_string(), "100");
    c.multiply_in_place(&BigNat::from(1000u32));
    assert_eq!(c.to_string(), "100000");
}

#[test]
fn test_unbounded_growth() {
    // (10^n - 1)^2 = 9..9 8 0..0 1 with n - 1 nines and n - 1 zeros
    let n = 20_000;
    let nines = BigNat::from("9".repeat(n));
    let square = nines.multiply(&nines);
    let expected = format!("{}8{}1", "9".repeat(n - 1), "0".repeat(n - 1));
    assert_eq!(square.num_digits(), 2 * n);
    assert_eq!(square.to_string(), expected);

    let m = 50_000;
    let a = BigNat::from("9".repeat(m));
    let sum = a.add(&BigNat::from(format!("1{}", "0".repeat(m - 1))));
    assert_eq!(sum.num_digits(), m + 1);
    assert_eq!(sum.to_string(), format!("10{}", "9".repeat(m - 1)));
}
