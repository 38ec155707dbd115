use big_nat::BigNatError;
use thiserror::Error;

use crate::parser::ast::Operator;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("[Syntax Error] unexpected symbol `{symbol}` at position {position}")]
    UnexpectedSymbol { symbol: char, position: usize },

    #[error("[Syntax Error] unexpected token `{token}` at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("[Syntax Error] unexpected end of expression")]
    UnexpectedEnd,

    #[error("[Syntax Error] expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    /// The number type has no such operation, so the calculator refuses it
    /// instead of guessing at signs or rounding.
    #[error("{operation} is not supported")]
    Unsupported { operation: Operator },

    #[error(transparent)]
    Number(#[from] BigNatError),
}

impl CalcError {
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            CalcError::UnexpectedSymbol { .. } | CalcError::UnexpectedToken { .. }
                | CalcError::UnexpectedEnd
                | CalcError::TooDeep { .. }
        )
    }
}
