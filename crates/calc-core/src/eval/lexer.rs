//! Tokenizer for sanitized arithmetic text.

use super::EvalError;

/// Arithmetic tokens. Nothing else can reach the parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    /// Short text form used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Number(value) => value.to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

/// Split sanitized text into tokens.
///
/// Number literals are a run of digits with at most one `.`; `5.` and `.5`
/// are accepted, a lone `.` is not.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '0'..='9' | '.' => {
                let mut end = start + ch.len_utf8();
                while let Some(&(idx, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        end = idx + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                Token::Number(parse_literal(&input[start..end])?)
            }
            other => return Err(EvalError::UnexpectedToken(other.to_string())),
        };
        tokens.push(token);
    }

    Ok(tokens)
}

fn parse_literal(literal: &str) -> Result<f64, EvalError> {
    let dots = literal.matches('.').count();
    let has_digit = literal.bytes().any(|b| b.is_ascii_digit());
    if dots > 1 || !has_digit {
        return Err(EvalError::InvalidNumber(literal.to_string()));
    }
    literal
        .parse::<f64>()
        .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_expression() {
        let tokens = tokenize("(1.5+2)*3/4-5").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::LParen,
                Token::Number(1.5),
                Token::Plus,
                Token::Number(2.0),
                Token::RParen,
                Token::Star,
                Token::Number(3.0),
                Token::Slash,
                Token::Number(4.0),
                Token::Minus,
                Token::Number(5.0),
            ]
        );
    }

    #[test]
    fn test_partial_decimals() {
        assert_eq!(tokenize("5.").unwrap(), vec![Token::Number(5.0)]);
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
    }

    #[test]
    fn test_leading_zeros_are_decimal() {
        assert_eq!(tokenize("010").unwrap(), vec![Token::Number(10.0)]);
    }

    #[test]
    fn test_invalid_literals() {
        assert_eq!(
            tokenize("1.2.3").unwrap_err(),
            EvalError::InvalidNumber("1.2.3".to_string())
        );
        assert_eq!(
            tokenize(".").unwrap_err(),
            EvalError::InvalidNumber(".".to_string())
        );
    }

    #[test]
    fn test_stray_percent_rejected() {
        assert_eq!(
            tokenize("(5)%").unwrap_err(),
            EvalError::UnexpectedToken("%".to_string())
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
    }
}
