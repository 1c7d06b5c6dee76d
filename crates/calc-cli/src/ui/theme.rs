//! Badges, key symbols, and color styles.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
}

impl Badge {
    /// Badge for display, honoring the unicode setting.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Err => styles::error(),
        }
    }
}

/// Styles used across the CLI.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn error() -> Style {
        Style::new().red()
    }

    /// Large result line on the calculator screen.
    pub fn display() -> Style {
        Style::new().bold().bright_white()
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Key label for display. In ASCII mode `×`/`÷` become `*`/`/`.
pub fn key_label(label: &str, unicode: bool) -> &str {
    if unicode {
        return label;
    }
    match label {
        "\u{00D7}" => "*",
        "\u{00F7}" => "/",
        other => other,
    }
}

/// Expression text for display, with the same ASCII substitution.
pub fn expression_text(text: &str, unicode: bool) -> String {
    if unicode {
        text.to_string()
    } else {
        text.replace('\u{00D7}', "*").replace('\u{00F7}', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("42", styles::bold(), false), "42");
    }

    #[test]
    fn test_styled_with_color_adds_escape() {
        let out = styled("42", styles::bold(), true);
        assert!(out.contains("42"));
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn test_ascii_key_labels() {
        assert_eq!(key_label("×", false), "*");
        assert_eq!(key_label("÷", false), "/");
        assert_eq!(key_label("×", true), "×");
        assert_eq!(key_label("LOG", false), "LOG");
        assert_eq!(expression_text("6×7÷2", false), "6*7/2");
    }
}
