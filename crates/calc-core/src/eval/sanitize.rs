//! Input sanitation ahead of parsing.

use super::EvalError;
use crate::numeric::trailing_number;

/// Map display glyphs to evaluator operators and enforce the whitelist.
///
/// Allowed after mapping: `0-9 + - * / ( ) . %`. ASCII whitespace is
/// dropped; any other character fails the whole expression.
pub fn sanitize(expression: &str) -> Result<String, EvalError> {
    let mut out = String::with_capacity(expression.len());
    for ch in expression.chars() {
        match ch {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%' => out.push(ch),
            c if c.is_ascii_whitespace() => {}
            other => return Err(EvalError::DisallowedCharacter(other)),
        }
    }
    Ok(out)
}

/// Rewrite each `<number>%` as `(<number>/100)`.
///
/// Only a numeric literal directly before the `%` is captured. A `%` with
/// nothing to bind to is kept and rejected later by the lexer.
pub fn rewrite_percent(sanitized: &str) -> String {
    let mut out = String::with_capacity(sanitized.len() + 8);
    for ch in sanitized.chars() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match trailing_number(&out) {
            Some(number) => {
                let start = number.start;
                let wrapped = format!("({}/100)", number.text);
                out.replace_range(start.., &wrapped);
            }
            None => out.push('%'),
        }
    }
    out
}
