use lazy_static::*;

use super::dfa::*;
use super::nfa::*;
use super::token::ExprTokenType;
use crate::link_nfa;

lazy_static! {
    /// Calculator lexer, compiled on first use and shared read-only afterwards.
    pub static ref EXPR_TOKENIZER: DFA<ExprTokenType> = get_expr_tokenizer();
}

pub fn get_expr_tokenizer() -> DFA<ExprTokenType> {
    let digit = NFA::from_symbol_range('0'..='9');
    let mut num = digit.clone() & digit.closure();
    num.set_state(ExprTokenType::Num);

    let mut add = NFA::from_symbol('+');
    add.set_state(ExprTokenType::Add);

    let mut sub = NFA::from_symbol('-');
    sub.set_state(ExprTokenType::Sub);

    let mut mul = NFA::from_symbol_set("*×");
    mul.set_state(ExprTokenType::Mul);

    let mut div = NFA::from_symbol_set("/÷");
    div.set_state(ExprTokenType::Div);

    let mut pow = NFA::from_symbol('^');
    pow.set_state(ExprTokenType::Pow);

    let mut fac = NFA::from_symbol('!');
    fac.set_state(ExprTokenType::Fac);

    let mut left_scope = NFA::from_symbol('(');
    left_scope.set_state(ExprTokenType::LeftScope);

    let mut right_scope = NFA::from_symbol(')');
    right_scope.set_state(ExprTokenType::RightScope);

    let mut blank = NFA::from_symbol(' ') | NFA::from_symbol('\t');
    blank.set_state(ExprTokenType::Blank);

    let tokenizer_nfa = link_nfa!(num, add, sub, mul, div, pow, fac, left_scope, right_scope, blank);

    DFA::subset_construct(&tokenizer_nfa)
}

#[cfg(test)]
mod test {
    use super::EXPR_TOKENIZER;
    use crate::error::CalcError;
    use crate::tokenizer::token::{ExprTokenType, Token};

    #[test]
    fn test_tokenizer() {
        let tokens = EXPR_TOKENIZER.tokenize("12+ 3*(45 ^2)!").unwrap();
        let types: Vec<ExprTokenType> = tokens.iter().map(|t| t.ty).collect();
        assert_eq!(types, vec![
            ExprTokenType::Num, ExprTokenType::Add, ExprTokenType::Num,
            ExprTokenType::Mul, ExprTokenType::LeftScope, ExprTokenType::Num,
            ExprTokenType::Pow, ExprTokenType::Num, ExprTokenType::RightScope,
            ExprTokenType::Fac,
        ]);
        assert_eq!(tokens[0], Token::new("12".to_string(), ExprTokenType::Num, 0));
        assert_eq!(tokens[2], Token::new("3".to_string(), ExprTokenType::Num, 4));
        assert_eq!(tokens[5], Token::new("45".to_string(), ExprTokenType::Num, 7));
    }

    #[test]
    fn test_tokenizer_symbols() {
        let tokens = EXPR_TOKENIZER.tokenize("\t7 - 2 / 1 × 3 ÷ 4").unwrap();
        let types: Vec<ExprTokenType> = tokens.iter().map(|t| t.ty).collect();
        assert_eq!(types, vec![
            ExprTokenType::Num, ExprTokenType::Sub, ExprTokenType::Num,
            ExprTokenType::Div, ExprTokenType::Num, ExprTokenType::Mul,
            ExprTokenType::Num, ExprTokenType::Div, ExprTokenType::Num,
        ]);
    }

    #[test]
    fn test_tokenizer_errors() {
        assert!(EXPR_TOKENIZER.tokenize("").unwrap().is_empty());
        assert!(EXPR_TOKENIZER.tokenize("   ").unwrap().is_empty());
        assert_eq!(
            EXPR_TOKENIZER.tokenize("1 + x"),
            Err(CalcError::UnexpectedSymbol { symbol: 'x', position: 4 })
        );
        assert_eq!(
            EXPR_TOKENIZER.tokenize("1.5"),
            Err(CalcError::UnexpectedSymbol { symbol: '.', position: 1 })
        );
    }
}
