use std::fmt::Display;

use crate::big_nat_constants::DEFAULT_MAX_DIGITS;

/// Digit-count ceiling consulted by the guarded operations
/// ([`BigNat::pow_bounded`](crate::BigNat::pow_bounded) and
/// [`BigNat::factorial_bounded`](crate::BigNat::factorial_bounded)).
///
/// Addition and multiplication never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitLimit(usize);

impl DigitLimit {
    pub const DEFAULT: DigitLimit = DigitLimit(DEFAULT_MAX_DIGITS);

    pub const fn new(max_digits: usize) -> Self {
        DigitLimit(max_digits)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    /// `true` when a result with `digits` digits would break the ceiling.
    pub const fn is_exceeded_by(self, digits: usize) -> bool {
        digits > self.0
    }

    /// Same as [`is_exceeded_by`](Self::is_exceeded_by) for the lossy `pow` estimate.
    pub fn is_exceeded_by_estimate(self, estimate: f64) -> bool {
        estimate > self.0 as f64
    }
}

impl Default for DigitLimit {
    fn default() -> Self {
        DigitLimit::DEFAULT
    }
}

impl From<usize> for DigitLimit {
    fn from(max_digits: usize) -> Self {
        DigitLimit::new(max_digits)
    }
}

impl Display for DigitLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} digits", self.0)
    }
}

#[test]
fn test_digit_limit() {
    let limit = DigitLimit::default();
    assert_eq!(limit.get(), 10_000);
    assert!(!limit.is_exceeded_by(10_000));
    assert!(limit.is_exceeded_by(10_001));
    assert!(!limit.is_exceeded_by_estimate(10_000.0));
    assert!(limit.is_exceeded_by_estimate(10_000.5));
    assert_eq!(DigitLimit::from(3).to_string(), "3 digits");
}
