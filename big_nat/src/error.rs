use std::fmt;

use thiserror::Error;

/// The operations that bound their result size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardedOp {
    Pow,
    Factorial,
}

impl fmt::Display for GuardedOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuardedOp::Pow => f.write_str("pow"),
            GuardedOp::Factorial => f.write_str("factorial"),
        }
    }
}

/// Which check rejected a guarded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitCheck {
    /// The upfront `exponent × digits(base)` estimate of `pow`.
    Estimate,
    /// The digit count of the accumulator after a multiplication step.
    Measured,
}

impl fmt::Display for LimitCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitCheck::Estimate => f.write_str("would exceed"),
            LimitCheck::Measured => f.write_str("exceeded"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigNatError {
    /// A guarded operation gave up because its result would not fit the ceiling.
    /// For [`LimitCheck::Estimate`] `digits` is the truncated estimate.
    #[error("{operation} result {check} safe digit limit ({limit} digits): {digits} digits")]
    CapacityExceeded {
        operation: GuardedOp,
        check: LimitCheck,
        limit: usize,
        digits: usize,
    },

    #[error("cannot parse number from empty string")]
    Empty,

    #[error("invalid digit `{ch}` at position {position}")]
    InvalidDigit { ch: char, position: usize },
}

impl BigNatError {
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, BigNatError::CapacityExceeded { .. })
    }
}

#[test]
fn test_error_display() {
    let err = BigNatError::CapacityExceeded {
        operation: GuardedOp::Pow,
        limit: 10,
        digits: 12,
        check: LimitCheck::Estimate,
    };
    assert_eq!(err.to_string(), "pow result would exceed safe digit limit (10 digits): 12 digits");
    assert!(err.is_capacity_exceeded());

    let err = BigNatError::CapacityExceeded {
        operation: GuardedOp::Factorial,
        limit: 10,
        digits: 11,
        check: LimitCheck::Measured,
    };
    assert_eq!(err.to_string(), "factorial result exceeded safe digit limit (10 digits): 11 digits");

    let err = BigNatError::InvalidDigit { ch: '-', position: 0 };
    assert_eq!(err.to_string(), "invalid digit `-` at position 0");
    assert!(!err.is_capacity_exceeded());
}
