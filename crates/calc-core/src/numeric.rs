//! Numeric helpers shared by the engine and the evaluator.
//!
//! - trailing numeric literal lookup (`[0-9]+(\.[0-9]+)?` anchored at the end)
//! - 12-decimal rounding
//! - exact percent on literal text
//! - display formatting without exponent notation

/// Decimal places kept when rounding results.
pub const DISPLAY_DECIMALS: u32 = 12;

const ROUNDING_SCALE: f64 = 1e12;

/// A numeric literal found at the very end of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailingNumber<'a> {
    /// Byte offset where the literal starts
    pub start: usize,
    /// The literal text as typed
    pub text: &'a str,
    /// Parsed value
    pub value: f64,
}

/// Find the longest suffix of `text` matching `[0-9]+(\.[0-9]+)?`.
///
/// Only ASCII bytes are inspected, so the returned offset is always a char
/// boundary even when the expression holds `×` or `÷`.
pub fn trailing_number(text: &str) -> Option<TrailingNumber<'_>> {
    let bytes = text.as_bytes();
    let end = bytes.len();

    let mut start = end;
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == end {
        return None;
    }

    // Extend over a fractional part: digits '.' digits
    if start >= 2 && bytes[start - 1] == b'.' && bytes[start - 2].is_ascii_digit() {
        let mut int_start = start - 1;
        while int_start > 0 && bytes[int_start - 1].is_ascii_digit() {
            int_start -= 1;
        }
        start = int_start;
    }

    let literal = &text[start..];
    let value = literal.parse::<f64>().ok()?;
    Some(TrailingNumber {
        start,
        text: literal,
        value,
    })
}

/// Round to [`DISPLAY_DECIMALS`] places, half away from zero.
///
/// Values too large to carry a fractional part at that scale are returned
/// unchanged, which keeps big results free of scale-and-divide noise.
pub fn round_result(value: f64) -> f64 {
    let scaled = value * ROUNDING_SCALE;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value;
    }
    scaled.round() / ROUNDING_SCALE
}

/// Divide a `[0-9]+(\.[0-9]+)?` literal by 100 by moving its decimal point.
///
/// Exact on the text, so no digits are lost and the result is never in
/// exponent notation. Leading integer zeros and trailing fraction zeros are
/// trimmed: `50` gives `0.5`, `7` gives `0.07`, `200` gives `2`.
pub fn percent_text(literal: &str) -> String {
    let (int_part, frac_part) = literal.split_once('.').unwrap_or((literal, ""));
    let digits = format!("{}{}", int_part, frac_part);
    let point = int_part.len() as isize - 2;

    let (int_digits, frac_digits) = if point <= 0 {
        let zeros = "0".repeat(point.unsigned_abs());
        (String::new(), format!("{}{}", zeros, digits))
    } else {
        let (head, tail) = digits.split_at(point as usize);
        (head.to_string(), tail.to_string())
    };

    let int_digits = int_digits.trim_start_matches('0');
    let frac_digits = frac_digits.trim_end_matches('0');
    let int_digits = if int_digits.is_empty() { "0" } else { int_digits };
    if frac_digits.is_empty() {
        int_digits.to_string()
    } else {
        format!("{}.{}", int_digits, frac_digits)
    }
}

/// Format a number for the display.
///
/// Plain decimal notation only, so any displayed value can be loaded back
/// into an expression and parsed again. `-0` renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
