use calc_rs::{BigNatError, CalcError, Calculator, DigitLimit, Expression, Operator, MAX_DEPTH};
use proptest::prelude::*;

#[test]
fn evaluates_calculator_input() {
    let calculator = Calculator::default();
    assert_eq!(calculator.evaluate("123+877").unwrap().to_string(), "1000");
    assert_eq!(calculator.evaluate("12*12").unwrap().to_string(), "144");
    assert_eq!(calculator.evaluate("5!").unwrap().to_string(), "120");
    assert_eq!(calculator.evaluate("2^10").unwrap().to_string(), "1024");
    assert_eq!(calculator.evaluate("  007 ").unwrap().to_string(), "7");
    assert_eq!(
        calculator.evaluate("99999999999999999999 * 99999999999999999999").unwrap().to_string(),
        "9999999999999999999800000000000000000001"
    );
    assert_eq!(calculator.evaluate("30!").unwrap().to_string(), "265252859812191058636308480000000");
}

#[test]
fn subtraction_and_division_are_unsupported() {
    let calculator = Calculator::default();
    assert_eq!(
        calculator.evaluate("5-3"),
        Err(CalcError::Unsupported { operation: Operator::Sub })
    );
    assert_eq!(
        calculator.evaluate("6/3"),
        Err(CalcError::Unsupported { operation: Operator::Div })
    );
    assert_eq!(
        calculator.evaluate("-5"),
        Err(CalcError::Unsupported { operation: Operator::Neg })
    );
    assert_eq!(
        calculator.evaluate("1 + 6/0"),
        Err(CalcError::Unsupported { operation: Operator::Div })
    );
}

#[test]
fn guarded_operations_report_capacity() {
    let calculator = Calculator::new(DigitLimit::new(100));
    assert_eq!(calculator.evaluate("2^100").unwrap().num_digits(), 31);
    let err = calculator.evaluate("2^101").unwrap_err();
    assert!(matches!(err, CalcError::Number(BigNatError::CapacityExceeded { limit: 100, .. })));
    assert!(!err.is_syntax_error());

    let err = Calculator::default().evaluate("9999!").unwrap_err();
    assert!(matches!(err, CalcError::Number(ref e) if e.is_capacity_exceeded()));
    assert_eq!(
        err.to_string(),
        "factorial result exceeded safe digit limit (10000 digits): 10003 digits"
    );
}

#[test]
fn addition_and_multiplication_ignore_limit() {
    let calculator = Calculator::new(DigitLimit::new(3));
    assert_eq!(calculator.evaluate("999 * 999 + 1").unwrap().to_string(), "998002");
    assert!(calculator.evaluate("10 ^ 3").is_err());
}

#[test]
fn syntax_errors() {
    let calculator = Calculator::default();
    for input in ["", "1 +", "(1", "1 2", "abc", "1.5", "2^", ")"] {
        let err = calculator.evaluate(input).unwrap_err();
        assert!(err.is_syntax_error(), "{input:?} gave {err:?}");
    }
}

#[test]
fn deep_nesting_is_rejected() {
    let calculator = Calculator::default();
    let too_deep = Err(CalcError::TooDeep { limit: MAX_DEPTH });

    let n = 100_000;
    let nested = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(calculator.evaluate(&nested), too_deep);

    let sum = format!("1{}", "+1".repeat(n - 1));
    assert_eq!(calculator.evaluate(&sum), too_deep);

    let product = format!("2{}", "*1".repeat(n - 1));
    assert_eq!(calculator.evaluate(&product), too_deep);

    assert_eq!(calculator.evaluate(&format!("{}7", "-".repeat(n))), too_deep);
    assert_eq!(calculator.evaluate(&format!("1{}", "!".repeat(n))), too_deep);

    // shallow enough is still fine
    let sum = format!("1{}", "+1".repeat(199));
    assert_eq!(calculator.evaluate(&sum).unwrap().to_string(), "200");
}

#[test]
fn parsed_expression_is_reusable() {
    let expr = Expression::parse("3^4").unwrap();
    assert_eq!(expr.evaluate(DigitLimit::default()).unwrap().to_string(), "81");
    assert!(expr.evaluate(DigitLimit::new(1)).is_err());
}

proptest! {
    #[test]
    fn sum_and_product_match_native(a in any::<u32>(), b in any::<u32>()) {
        let calculator = Calculator::default();
        prop_assert_eq!(
            calculator.evaluate(&format!("{a} + {b}")).unwrap().to_string(),
            (a as u64 + b as u64).to_string()
        );
        prop_assert_eq!(
            calculator.evaluate(&format!("{a}*{b}")).unwrap().to_string(),
            (a as u64 * b as u64).to_string()
        );
    }
}
