//! JSON output formatting.

use calc_core::{ButtonDescriptor, HistoryEntry, Screen, ERROR_SENTINEL};

/// Screen state after a run of key presses.
pub fn screen_json(screen: &Screen) -> serde_json::Value {
    serde_json::json!({
        "display": screen.display,
        "expression": screen.expression,
        "error": screen.display == ERROR_SENTINEL,
        "history_count": screen.history.len(),
    })
}

/// History entries with their 1-based positions (1 = newest).
pub fn history_json(entries: &[HistoryEntry]) -> Vec<serde_json::Value> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::json!({
                "position": i + 1,
                "expression": entry.expression,
                "result": entry.result,
            })
        })
        .collect()
}

pub fn keys_json(keys: &[ButtonDescriptor]) -> Vec<serde_json::Value> {
    keys.iter()
        .map(|key| {
            serde_json::json!({
                "label": key.label,
                "kind": key.kind,
            })
        })
        .collect()
}
