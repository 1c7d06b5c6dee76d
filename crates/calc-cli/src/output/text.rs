//! Table rows for text output.

use calc_core::{ButtonDescriptor, HistoryEntry};

use crate::ui::format::truncate;
use crate::ui::theme::{expression_text, key_label};
use crate::ui::UiContext;

/// Rows of `#`, expression, result for the history table.
pub fn history_rows(ctx: &UiContext, entries: &[HistoryEntry]) -> Vec<Vec<String>> {
    // Leave room for the position and result columns.
    let max_expr = ctx.width.saturating_sub(24).max(16);
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let expression = expression_text(&entry.expression, ctx.unicode);
            let expression = if ctx.mode.is_pretty() {
                truncate(&expression, max_expr)
            } else {
                expression
            };
            vec![(i + 1).to_string(), expression, entry.result.clone()]
        })
        .collect()
}

/// Rows of label, kind, aliases for the keypad listing.
pub fn key_rows(ctx: &UiContext, keys: &[ButtonDescriptor]) -> Vec<Vec<String>> {
    keys.iter()
        .map(|key| {
            vec![
                key_label(key.label, ctx.unicode).to_string(),
                key.kind.as_str().to_string(),
                aliases(key.label).to_string(),
            ]
        })
        .collect()
}

fn aliases(label: &str) -> &'static str {
    match label {
        "\u{00D7}" => "* x",
        "\u{00F7}" => "/",
        "RESULT" => "= result",
        "DEL" => "del",
        "LOG" => "log",
        _ => "",
    }
}
