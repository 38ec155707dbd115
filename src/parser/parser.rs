use std::collections::VecDeque;

use big_nat::DigitLimit;
use tracing::debug;

use crate::error::CalcError;
use crate::tokenizer::{ExprTokenType, Token, EXPR_TOKENIZER};
use super::ast::{ASTNode, Opend, Operator, ResultType};

/// Deepest nesting of parentheses, prefix `-`, `^` and operator chains the
/// parser accepts. Parsing and evaluation both recurse once per level.
pub const MAX_DEPTH: usize = 256;

/// A parsed calculator expression, ready to be evaluated any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    main_expr: Opend,
}

impl Expression {
    pub fn parse(origin: &str) -> Result<Self, CalcError> {
        let tokens = EXPR_TOKENIZER.tokenize(origin)?;
        let main_expr = Parser::new(tokens).parse()?;
        debug!(expression = origin, "parsed");
        Ok(Expression { main_expr })
    }
    pub fn evaluate(&self, limit: DigitLimit) -> Result<ResultType, CalcError> {
        self.main_expr.get(limit)
    }
}

struct Parser {
    tokens: VecDeque<Token<ExprTokenType>>,
    nesting: usize,
}

// Grammar
// E -> num   | (E)   |
//      -E    |
//      E!    |
//      E ^ E |
//      E * E | E / E |
//      E + E | E - E

// Precedence, tightest first
// (), num
// -
// !
// ^            (right-associative)
// * , /
// + , -

// E  -> T E1
// E1 -> + T E1 | - T E1 | #
// T  -> P T1
// T1 -> * P T1 | / P T1 | #
// P  -> F ^ P  | F
// F  -> G F1
// F1 -> ! F1   | #
// G  -> - G    | H
// H  -> (E)    | num

impl Parser {
    fn new(tokens: VecDeque<Token<ExprTokenType>>) -> Self {
        Parser { tokens, nesting: 0 }
    }
    fn descend(&mut self) -> Result<(), CalcError> {
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(CalcError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }
    fn ascend(&mut self) {
        self.nesting -= 1;
    }
    // a left-leaning chain like 1+1+...+1 is as deep as it is long
    fn node(node: ASTNode) -> Result<Opend, CalcError> {
        let opend = Opend::Expr(Box::new(node));
        if opend.depth() > MAX_DEPTH {
            return Err(CalcError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(opend)
    }
    fn get_next_token(&mut self) -> Result<Token<ExprTokenType>, CalcError> {
        self.tokens.pop_front().ok_or(CalcError::UnexpectedEnd)
    }
    fn watch_next_token(&self) -> Option<&Token<ExprTokenType>> {
        self.tokens.front()
    }
    fn next_is(&self, ty: ExprTokenType) -> bool {
        self.watch_next_token().is_some_and(|t| t.ty == ty)
    }
    fn parse(mut self) -> Result<Opend, CalcError> {
        let expr = self.parse_e()?;
        match self.tokens.pop_front() {
            Some(token) => Err(unexpected(token)),
            None => Ok(expr),
        }
    }
    fn parse_e(&mut self) -> Result<Opend, CalcError> {
        let mut left_op = self.parse_t()?;
        while let Some(operator) = self.watch_next_token().and_then(|t| match t.ty {
            ExprTokenType::Add => Some(Operator::Add),
            ExprTokenType::Sub => Some(Operator::Sub),
            _ => None,
        }) {
            let _op = self.get_next_token()?;
            let right_op = self.parse_t()?;
            left_op = Self::node(ASTNode::binary(left_op, right_op, operator))?;
        }
        Ok(left_op)
    }
    fn parse_t(&mut self) -> Result<Opend, CalcError> {
        let mut left_op = self.parse_p()?;
        while let Some(operator) = self.watch_next_token().and_then(|t| match t.ty {
            ExprTokenType::Mul => Some(Operator::Mul),
            ExprTokenType::Div => Some(Operator::Div),
            _ => None,
        }) {
            let _op = self.get_next_token()?;
            let right_op = self.parse_p()?;
            left_op = Self::node(ASTNode::binary(left_op, right_op, operator))?;
        }
        Ok(left_op)
    }
    fn parse_p(&mut self) -> Result<Opend, CalcError> {
        let base = self.parse_f()?;
        if !self.next_is(ExprTokenType::Pow) {
            return Ok(base);
        }
        let _pow = self.get_next_token()?;
        self.descend()?;
        let exponent = self.parse_p()?;
        self.ascend();
        Self::node(ASTNode::binary(base, exponent, Operator::Pow))
    }
    fn parse_f(&mut self) -> Result<Opend, CalcError> {
        let mut operand = self.parse_g()?;
        while self.next_is(ExprTokenType::Fac) {
            let _fac = self.get_next_token()?;
            operand = Self::node(ASTNode::unary(operand, Operator::Fac))?;
        }
        Ok(operand)
    }
    fn parse_g(&mut self) -> Result<Opend, CalcError> {
        if !self.next_is(ExprTokenType::Sub) {
            return self.parse_h();
        }
        let _sub = self.get_next_token()?;
        self.descend()?;
        let operand = self.parse_g()?;
        self.ascend();
        Self::node(ASTNode::unary(operand, Operator::Neg))
    }
    fn parse_h(&mut self) -> Result<Opend, CalcError> {
        let next_token = self.get_next_token()?;
        match next_token.ty {
            ExprTokenType::LeftScope => {
                self.descend()?;
                let expr = self.parse_e()?;
                self.ascend();
                let right_scope = self.get_next_token()?;
                match right_scope.ty {
                    ExprTokenType::RightScope => Ok(expr),
                    _ => Err(unexpected(right_scope)),
                }
            }
            ExprTokenType::Num => Ok(Opend::Num(next_token.val.parse()?)),
            _ => Err(unexpected(next_token)),
        }
    }
}

fn unexpected(token: Token<ExprTokenType>) -> CalcError {
    CalcError::UnexpectedToken { token: token.val, position: token.pos }
}

#[test]
fn test_parse() {
    let expr = Expression::parse("2 + 3 * 4 ^ 2").unwrap();
    assert_eq!(expr.evaluate(DigitLimit::default()).unwrap().to_string(), "50");

    let expr = Expression::parse("(2 + 3) * 4").unwrap();
    assert_eq!(expr.evaluate(DigitLimit::default()).unwrap().to_string(), "20");

    // right-associative: 2^(3^2)
    let expr = Expression::parse("2^3^2").unwrap();
    assert_eq!(expr.evaluate(DigitLimit::default()).unwrap().to_string(), "512");

    // ! binds tighter than ^: 2^(3!)
    let expr = Expression::parse("2^3!").unwrap();
    assert_eq!(expr.evaluate(DigitLimit::default()).unwrap().to_string(), "64");

    let expr = Expression::parse("3!!").unwrap();
    assert_eq!(expr.evaluate(DigitLimit::default()).unwrap().to_string(), "720");

    let expr = Expression::parse("1+2+3+4").unwrap();
    assert_eq!(expr.evaluate(DigitLimit::default()).unwrap().to_string(), "10");
}

#[test]
fn test_parse_shape() {
    let parsed = Expression::parse("1 - 2").unwrap();
    let expected = Opend::Expr(Box::new(ASTNode::binary(
        Opend::Num(1u8.into()),
        Opend::Num(2u8.into()),
        Operator::Sub,
    )));
    assert_eq!(parsed.main_expr, expected);

    let parsed = Expression::parse("-5").unwrap();
    let expected = Opend::Expr(Box::new(ASTNode::unary(Opend::Num(5u8.into()), Operator::Neg)));
    assert_eq!(parsed.main_expr, expected);
}

#[test]
fn test_parse_errors() {
    assert_eq!(Expression::parse(""), Err(CalcError::UnexpectedEnd));
    assert_eq!(Expression::parse("1 +"), Err(CalcError::UnexpectedEnd));
    assert_eq!(Expression::parse("(1 + 2"), Err(CalcError::UnexpectedEnd));
    assert_eq!(
        Expression::parse("1 2"),
        Err(CalcError::UnexpectedToken { token: "2".to_string(), position: 2 })
    );
    assert_eq!(
        Expression::parse("(1 + 2 3)"),
        Err(CalcError::UnexpectedToken { token: "3".to_string(), position: 7 })
    );
    assert_eq!(
        Expression::parse("* 3"),
        Err(CalcError::UnexpectedToken { token: "*".to_string(), position: 0 })
    );
    assert_eq!(
        Expression::parse("!"),
        Err(CalcError::UnexpectedToken { token: "!".to_string(), position: 0 })
    );
}

#[test]
fn test_parse_depth() {
    let too_deep = Err(CalcError::TooDeep { limit: MAX_DEPTH });

    let nested = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
    assert!(Expression::parse(&nested).is_ok());
    let nested = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
    assert_eq!(Expression::parse(&nested), too_deep);

    // n terms build n - 1 nodes
    let chain = format!("1{}", "+1".repeat(MAX_DEPTH));
    let expr = Expression::parse(&chain).unwrap();
    assert_eq!(expr.evaluate(DigitLimit::default()).unwrap().to_string(), (MAX_DEPTH + 1).to_string());
    let chain = format!("1{}", "*1".repeat(MAX_DEPTH + 1));
    assert_eq!(Expression::parse(&chain), too_deep);

    assert_eq!(Expression::parse(&format!("{}5", "-".repeat(MAX_DEPTH + 1))), too_deep);
    assert_eq!(Expression::parse(&format!("1{}", "^1".repeat(MAX_DEPTH + 1))), too_deep);
    assert_eq!(Expression::parse(&format!("3{}", "!".repeat(MAX_DEPTH + 1))), too_deep);
}
