//! Sanitize-then-evaluate pipeline.
//!
//! 1. [`sanitize`]: glyph mapping and character whitelist
//! 2. [`rewrite_percent`]: `<number>%` becomes `(<number>/100)`
//! 3. [`tokenize`] + [`evaluate_tokens`]: arithmetic only, standard precedence
//! 4. non-finite results fail
//! 5. the result is rounded to 12 decimal places
//!
//! There is no path from expression text to anything but `+ - * /` on
//! numbers.

mod lexer;
mod parser;
mod sanitize;

use thiserror::Error;

use crate::numeric::{format_number, round_result};

pub use lexer::{tokenize, Token};
pub use parser::{evaluate_tokens, MAX_DEPTH};
pub use sanitize::{rewrite_percent, sanitize};

/// Display text for any failed evaluation.
pub const ERROR_SENTINEL: &str = "Error";

/// Reasons an expression fails to evaluate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("character {0:?} is not allowed")]
    DisallowedCharacter(char),

    #[error("unexpected token {0:?}")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("invalid number literal {0:?}")]
    InvalidNumber(String),

    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("expression nested too deeply")]
    NestingTooDeep,

    #[error("result is not a finite number")]
    NonFinite,
}

/// Run the full pipeline and return the rounded value.
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let sanitized = sanitize(expression)?;
    let rewritten = rewrite_percent(&sanitized);
    let tokens = tokenize(&rewritten)?;
    let value = evaluate_tokens(&tokens)?;
    if !value.is_finite() {
        return Err(EvalError::NonFinite);
    }
    Ok(round_result(value))
}

/// Evaluate to display text: the formatted number, or [`ERROR_SENTINEL`].
pub fn evaluate_display(expression: &str) -> String {
    match evaluate(expression) {
        Ok(value) => format_number(value),
        Err(err) => {
            tracing::debug!(expression, error = %err, "evaluation failed");
            ERROR_SENTINEL.to_string()
        }
    }
}
