//! Calculator front end for [`big_nat`].
//!
//! Turns calculator text such as `2^100`, `25!` or `(12 + 3) * 4` into a
//! [`BigNat`]. `^` and `!` are checked against the calculator's [`DigitLimit`].
//! `-` and `/` parse but evaluate to [`CalcError::Unsupported`].

mod calculator;
mod error;
mod tokenizer;
mod parser;

pub use crate::calculator::Calculator;
pub use crate::error::CalcError;
pub use crate::parser::ast::Operator;
pub use crate::parser::parser::{Expression, MAX_DEPTH};
pub use big_nat::{BigNat, BigNatError, DigitLimit, DEFAULT_MAX_DIGITS};

#[cfg(test)]
mod tests {
    use crate::{Calculator, Expression, DigitLimit};

    #[test]
    fn it_works() {
        let expr = Expression::parse("1 + 2*3 + 4!").unwrap();
        let result = expr.evaluate(DigitLimit::default()).unwrap();
        assert_eq!(result.to_string(), "31");

        let calculator = Calculator::new(DigitLimit::new(5));
        assert_eq!(calculator.evaluate("99999 + 1").unwrap().to_string(), "100000");
        assert!(calculator.evaluate("2^20").is_err());
    }
}
