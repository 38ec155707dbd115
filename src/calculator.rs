use big_nat::{BigNat, DigitLimit};

use crate::error::CalcError;
use crate::parser::parser::Expression;

/// Evaluates calculator input under one digit ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    limit: DigitLimit,
}

impl Calculator {
    pub fn new(limit: DigitLimit) -> Self {
        Calculator { limit }
    }
    pub fn limit(&self) -> DigitLimit {
        self.limit
    }
    pub fn evaluate(&self, input: &str) -> Result<BigNat, CalcError> {
        Expression::parse(input)?.evaluate(self.limit)
    }
}
