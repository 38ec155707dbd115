use std::fmt;

use big_nat::{BigNat, DigitLimit};

use crate::error::CalcError;

pub type ResultType = BigNat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Fac,
    Neg,
}

impl Operator {
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Fac | Operator::Neg)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Add => "addition",
            Operator::Sub => "subtraction",
            Operator::Mul => "multiplication",
            Operator::Div => "division",
            Operator::Pow => "power",
            Operator::Fac => "factorial",
            Operator::Neg => "negation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Opend {
    Num(ResultType),
    Expr(Box<ASTNode>),
}

impl Opend {
    pub fn get(&self, limit: DigitLimit) -> Result<ResultType, CalcError> {
        match self {
            Opend::Num(num) => Ok(num.clone()),
            Opend::Expr(expr) => expr.evaluate(limit),
        }
    }
    /// Operator nodes on the longest path down from here; a number is `0`.
    pub fn depth(&self) -> usize {
        match self {
            Opend::Num(_) => 0,
            Opend::Expr(expr) => expr.depth,
        }
    }
}

/// One operator applied to its operands. Unary operators only use `left_op`.
#[derive(Debug, Clone, PartialEq)]
pub struct ASTNode {
    left_op: Opend,
    right_op: Option<Opend>,
    operator: Operator,
    depth: usize,
}

impl ASTNode {
    pub fn binary(left_op: Opend, right_op: Opend, operator: Operator) -> Self {
        debug_assert!(!operator.is_unary());
        let depth = 1 + left_op.depth().max(right_op.depth());
        ASTNode { left_op, right_op: Some(right_op), operator, depth }
    }
    pub fn unary(operand: Opend, operator: Operator) -> Self {
        debug_assert!(operator.is_unary());
        let depth = 1 + operand.depth();
        ASTNode { left_op: operand, right_op: None, operator, depth }
    }
    pub fn evaluate(&self, limit: DigitLimit) -> Result<ResultType, CalcError> {
        if let Operator::Sub | Operator::Div | Operator::Neg = self.operator {
            return Err(CalcError::Unsupported { operation: self.operator });
        }
        let left = self.left_op.get(limit)?;
        match self.operator {
            Operator::Fac => Ok(left.factorial_bounded(limit)?),
            operator => {
                let right = self.right_op.as_ref().ok_or(CalcError::UnexpectedEnd)?.get(limit)?;
                match operator {
                    Operator::Add => Ok(left.add(&right)),
                    Operator::Mul => Ok(left.multiply(&right)),
                    Operator::Pow => Ok(left.pow_bounded(&right, limit)?),
                    _ => Err(CalcError::Unsupported { operation: operator }),
                }
            }
        }
    }
}

#[test]
fn test_evaluate() {
    // 2 * (1 + 1) + 3!
    let one_plus_one = ASTNode::binary(Opend::Num(1u8.into()), Opend::Num(1u8.into()), Operator::Add);
    let times_two = ASTNode::binary(Opend::Num(2u8.into()), Opend::Expr(Box::new(one_plus_one)), Operator::Mul);
    let three_fac = ASTNode::unary(Opend::Num(3u8.into()), Operator::Fac);
    let final_ast = ASTNode::binary(
        Opend::Expr(Box::new(times_two)),
        Opend::Expr(Box::new(three_fac)),
        Operator::Add,
    );
    assert_eq!(final_ast.evaluate(DigitLimit::default()).unwrap().to_string(), "10");
    assert_eq!(Opend::Expr(Box::new(final_ast)).depth(), 3);
}

#[test]
fn test_evaluate_unsupported() {
    let sub = ASTNode::binary(Opend::Num(5u8.into()), Opend::Num(3u8.into()), Operator::Sub);
    assert_eq!(
        sub.evaluate(DigitLimit::default()),
        Err(CalcError::Unsupported { operation: Operator::Sub })
    );
    let neg = ASTNode::unary(Opend::Num(5u8.into()), Operator::Neg);
    assert_eq!(
        neg.evaluate(DigitLimit::default()),
        Err(CalcError::Unsupported { operation: Operator::Neg })
    );
    assert_eq!(Operator::Div.to_string(), "division");
}
