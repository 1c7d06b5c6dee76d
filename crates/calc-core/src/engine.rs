//! Expression engine.
//!
//! Owns the expression text and folds key presses into it. Knows nothing
//! about storage or rendering; completed computations are handed out as
//! [`Commit`] values for the caller to record.

use crate::buttons::Operator;
use crate::eval::{self, ERROR_SENTINEL};
use crate::numeric::{format_number, percent_text, round_result, trailing_number};

/// A completed computation, ready to be recorded in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub expression: String,
    pub result: String,
}

impl Commit {
    /// Whether the computation failed.
    pub fn is_error(&self) -> bool {
        self.result == ERROR_SENTINEL
    }
}

/// The expression being built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    expression: String,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.expression
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    /// Replace the whole expression.
    pub fn set_expression(&mut self, text: impl Into<String>) {
        self.expression = text.into();
    }

    /// Clear the expression.
    pub fn reset(&mut self) {
        self.expression.clear();
    }

    /// Append digits or symbols verbatim. Malformed sequences are left for
    /// evaluation to reject.
    pub fn append_digit_or_symbol(&mut self, text: &str) {
        self.expression.push_str(text);
    }

    /// Append a binary operator.
    ///
    /// Only `-` may start an expression. A trailing operator is replaced
    /// rather than followed, so `3+` then `-` gives `3-`.
    ///
    /// Returns `false` when the press was rejected.
    pub fn append_operator(&mut self, op: Operator) -> bool {
        if self.expression.is_empty() && op != Operator::Subtract {
            return false;
        }
        let ends_in_operator = self
            .expression
            .chars()
            .last()
            .and_then(Operator::from_symbol)
            .is_some();
        if ends_in_operator {
            self.expression.pop();
        }
        self.expression.push(op.symbol());
        true
    }

    /// Remove the final character. Returns `false` on an empty expression.
    pub fn delete_last(&mut self) -> bool {
        self.expression.pop().is_some()
    }

    /// Replace the trailing number with its base-10 logarithm.
    ///
    /// Rejected (no change, no commit) when there is no trailing number, it
    /// is not positive, or it is too long to parse as a finite `f64`.
    pub fn apply_log10(&mut self) -> Option<Commit> {
        let number = trailing_number(&self.expression)?;
        if !number.value.is_finite() || number.value <= 0.0 {
            return None;
        }
        let (start, value) = (number.start, number.value);
        let result = format_number(round_result(value.log10()));
        self.expression.replace_range(start.., &result);
        Some(Commit {
            expression: format!("log({})", format_number(value)),
            result,
        })
    }

    /// Replace the trailing number with its value divided by 100.
    ///
    /// The division is done on the literal text, so it is exact. Returns
    /// `false` when there is no trailing number.
    pub fn apply_percent(&mut self) -> bool {
        let Some(number) = trailing_number(&self.expression) else {
            return false;
        };
        let start = number.start;
        let scaled = percent_text(number.text);
        self.expression.replace_range(start.., &scaled);
        true
    }

    /// Evaluate the whole expression.
    ///
    /// The expression itself is left untouched. An empty expression
    /// evaluates as `0`. Failures produce the `"Error"` sentinel and are
    /// still returned as a commit.
    pub fn evaluate(&self) -> Commit {
        let expression = if self.expression.is_empty() {
            "0".to_string()
        } else {
            self.expression.clone()
        };
        let result = eval::evaluate_display(&expression);
        Commit { expression, result }
    }
}
