//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table as ComfyTable};

use calc_core::Screen;

use super::context::UiContext;
use super::format::{pad_left, truncate_left};
use super::mode::OutputMode;
use super::theme::{expression_text, styled, styles, Badge};

/// Widest the calculator screen is drawn, in columns.
const SCREEN_WIDTH: usize = 32;

/// Render a header line for a command.
///
/// Pretty mode: "Calc · command (context)"
/// Plain mode: "calc command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Calc", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("calc {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Render the calculator screen: expression line above the display line.
///
/// Pretty mode: both lines right-aligned, the display in bold
/// Plain mode: "expression=..." and "display=..." lines
pub fn screen(ctx: &UiContext, screen: &Screen) -> String {
    let expression = expression_text(&screen.expression, ctx.unicode);
    let display = expression_text(&screen.display, ctx.unicode);

    if !ctx.mode.is_pretty() {
        return format!("expression={}\ndisplay={}", expression, display);
    }

    let width = ctx.width.saturating_sub(2).clamp(8, SCREEN_WIDTH);
    let expression_line = pad_left(&truncate_left(&expression, width), width);
    let display_line = pad_left(&truncate_left(&display, width), width);

    format!(
        "  {}\n  {}",
        styled(&expression_line, styles::dim(), ctx.color),
        styled(&display_line, styles::display(), ctx.color)
    )
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
    pub align_right: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align_right: false,
        }
    }

    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            align_right: true,
        }
    }
}

/// Render a table using comfy-table for pretty mode.
///
/// Pretty mode: Styled table with borders
/// Plain mode: Tab-separated values (no header)
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();

        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(comfy_table::presets::ASCII_MARKDOWN);
        }

        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_width(ctx.width.min(u16::MAX as usize) as u16);

        let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        for (i, col) in columns.iter().enumerate() {
            if col.align_right {
                if let Some(column) = table.column_mut(i) {
                    column.set_cell_alignment(CellAlignment::Right);
                }
            }
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::HistoryEntry;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    fn sample_screen() -> Screen {
        Screen {
            display: "42".to_string(),
            expression: "6×7".to_string(),
            history: vec![HistoryEntry::new("6×7", "42")],
        }
    }

    #[test]
    fn test_header_modes() {
        assert_eq!(header(&plain_ctx(), "history", None), "calc history");
        let h = header(&pretty_ctx(), "history", Some("3 of 3"));
        assert!(h.contains("Calc"));
        assert!(h.contains("(3 of 3)"));
    }

    #[test]
    fn test_kv_plain() {
        assert_eq!(kv(&plain_ctx(), "Entry Count", "3"), "entry_count=3");
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain_ctx(), "calc keys"), "hint=calc keys");
    }

    #[test]
    fn test_receipt_plain() {
        let out = receipt(&plain_ctx(), "History cleared", &[("Removed", "4")]);
        assert_eq!(out, "status=ok\nremoved=4");
    }

    #[test]
    fn test_screen_plain_uses_ascii_symbols() {
        let out = screen(&plain_ctx(), &sample_screen());
        assert_eq!(out, "expression=6*7\ndisplay=42");
    }

    #[test]
    fn test_screen_pretty_right_aligns() {
        let out = screen(&pretty_ctx(), &sample_screen());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("6×7"));
        assert!(lines[1].ends_with("42"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_table_plain_is_tab_separated() {
        let columns = [Column::right("#"), Column::new("Expression")];
        let rows = vec![vec!["1".to_string(), "2+2".to_string()]];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "1\t2+2");
    }

    #[test]
    fn test_table_pretty_has_headers() {
        let columns = [Column::right("#"), Column::new("Expression")];
        let rows = vec![vec!["1".to_string(), "2+2".to_string()]];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Expression"));
        assert!(t.contains("2+2"));
    }

    #[test]
    fn test_error_message_plain() {
        let out = error_message(&plain_ctx(), "Unknown key: sin", Some("calc keys"));
        assert_eq!(out, "error=Unknown key: sin\nhint=calc keys");
    }
}
