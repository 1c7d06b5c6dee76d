//! The fixed key set.
//!
//! Twenty-one descriptors in keypad order. Renderers lay them out; the
//! session dispatches on [`ButtonKind`] and label.

use serde::Serialize;

/// What pressing a key does to the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    /// Appended verbatim: digits, `.`, `(`, `)`
    DigitOrSymbol,
    /// Binary operator, subject to the coalescing rule
    Operator,
    /// `DEL`, `LOG`, `%`
    Function,
    /// `RESULT`
    Evaluate,
}

impl ButtonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigitOrSymbol => "digit_or_symbol",
            Self::Operator => "operator",
            Self::Function => "function",
            Self::Evaluate => "evaluate",
        }
    }
}

/// A single key on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonDescriptor {
    pub label: &'static str,
    pub kind: ButtonKind,
}

impl ButtonDescriptor {
    const fn new(label: &'static str, kind: ButtonKind) -> Self {
        Self { label, kind }
    }
}

pub const LABEL_DELETE: &str = "DEL";
pub const LABEL_LOG: &str = "LOG";
pub const LABEL_PERCENT: &str = "%";
pub const LABEL_RESULT: &str = "RESULT";

/// Every key, in keypad order.
pub const BUTTONS: [ButtonDescriptor; 21] = [
    ButtonDescriptor::new(LABEL_DELETE, ButtonKind::Function),
    ButtonDescriptor::new(LABEL_LOG, ButtonKind::Function),
    ButtonDescriptor::new("(", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new(")", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("7", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("8", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("9", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("÷", ButtonKind::Operator),
    ButtonDescriptor::new("4", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("5", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("6", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("×", ButtonKind::Operator),
    ButtonDescriptor::new("1", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("2", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("3", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("-", ButtonKind::Operator),
    ButtonDescriptor::new(".", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("0", ButtonKind::DigitOrSymbol),
    ButtonDescriptor::new("+", ButtonKind::Operator),
    ButtonDescriptor::new(LABEL_PERCENT, ButtonKind::Function),
    ButtonDescriptor::new(LABEL_RESULT, ButtonKind::Evaluate),
];

/// Look up a key by its exact label.
pub fn find(label: &str) -> Option<&'static ButtonDescriptor> {
    BUTTONS.iter().find(|b| b.label == label)
}

/// Look up a key by label or a typing-friendly alias.
///
/// Aliases: `*`/`x`/`X` for `×`, `/` for `÷`, `=` for `RESULT`, and
/// case-insensitive `del`, `log`, `result`.
pub fn resolve(input: &str) -> Option<&'static ButtonDescriptor> {
    if let Some(button) = find(input) {
        return Some(button);
    }
    let canonical = match input {
        "*" | "x" | "X" => "×",
        "/" => "÷",
        "=" => LABEL_RESULT,
        other if other.eq_ignore_ascii_case(LABEL_DELETE) => LABEL_DELETE,
        other if other.eq_ignore_ascii_case(LABEL_LOG) => LABEL_LOG,
        other if other.eq_ignore_ascii_case(LABEL_RESULT) => LABEL_RESULT,
        _ => return None,
    };
    find(canonical)
}

/// Binary operators in display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The glyph written into the expression.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' => Some(Self::Multiply),
            '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            _ => None,
        }
    }
}
