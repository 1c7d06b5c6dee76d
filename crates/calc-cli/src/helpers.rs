//! Parsing helpers for key sequences and history positions.

use calc_core::buttons::{self, ButtonDescriptor};

use crate::errors::CliError;

/// Turn user tokens into keypad presses.
///
/// A token is either a key label/alias (`7`, `×`, `*`, `LOG`, `=`) or a run
/// of single-character keys typed together (`12+3`, `(1+2)*3`).
pub fn parse_keys<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<&'static ButtonDescriptor>, CliError> {
    let mut keys = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        if let Some(button) = buttons::resolve(token) {
            keys.push(button);
            continue;
        }
        let mut expanded = Vec::new();
        for ch in token.chars() {
            let mut buf = [0u8; 4];
            match buttons::resolve(ch.encode_utf8(&mut buf)) {
                Some(button) => expanded.push(button),
                None => return Err(unknown_key(token)),
            }
        }
        if expanded.is_empty() {
            return Err(unknown_key(token));
        }
        keys.extend(expanded);
    }
    Ok(keys)
}

fn unknown_key(token: &str) -> CliError {
    CliError::invalid_input_with_hint(
        format!("Unknown key: {}", token),
        "Run `calc keys` to list the keypad.",
    )
}

/// Convert a 1-based history position (1 = newest) to an index.
pub fn history_index(position: usize, len: usize) -> Result<usize, CliError> {
    if position == 0 || position > len {
        let message = if len == 0 {
            format!("No history entry {} (history is empty)", position)
        } else {
            format!("No history entry {} (valid: 1-{})", position, len)
        };
        return Err(CliError::not_found(message, "Run `calc history` to list entries."));
    }
    Ok(position - 1)
}
