//! Recursive-descent evaluator over arithmetic tokens.
//!
//! Grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! The only operations reachable are the four arithmetic operators on `f64`.

use super::lexer::Token;
use super::EvalError;

/// Maximum nesting of parentheses and unary signs.
pub const MAX_DEPTH: usize = 256;

/// Parse and evaluate a complete token stream.
pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut parser = Parser::new(tokens);
    let value = parser.expr()?;
    match parser.peek() {
        None => Ok(value),
        Some(Token::RParen) => Err(EvalError::UnbalancedParens),
        Some(token) => Err(EvalError::UnexpectedToken(token.describe())),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value /= self.unary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.nested(|p| p.unary())
            }
            Some(Token::Minus) => {
                self.pos += 1;
                self.nested(|p| p.unary()).map(|v| -v)
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                let value = self.nested(|p| p.expr())?;
                match self.advance() {
                    Some(Token::RParen) => Ok(value),
                    None => Err(EvalError::UnbalancedParens),
                    Some(token) => Err(EvalError::UnexpectedToken(token.describe())),
                }
            }
            Some(Token::RParen) => Err(EvalError::UnbalancedParens),
            Some(token) => Err(EvalError::UnexpectedToken(token.describe())),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn nested<F>(&mut self, inner: F) -> Result<f64, EvalError>
    where
        F: FnOnce(&mut Self) -> Result<f64, EvalError>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::NestingTooDeep);
        }
        self.depth += 1;
        let result = inner(self);
        self.depth -= 1;
        result
    }
}
