pub trait TokenType: Copy {
    /// Tokens the lexer recognizes but drops, like blanks.
    fn is_ignored(&self) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExprTokenType {
    Num,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Fac,
    LeftScope,
    RightScope,
    Blank,
}

impl TokenType for ExprTokenType {
    fn is_ignored(&self) -> bool {
        matches!(self, ExprTokenType::Blank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<TokenType> {
    pub val: String,
    pub ty: TokenType,
    /// Char offset of the first symbol in the source text.
    pub pos: usize,
}

impl<TokenType> Token<TokenType> {
    pub fn new(val: String, ty: TokenType, pos: usize) -> Token<TokenType> {
        Token { val, ty, pos }
    }
}
