//! Output formatting helpers for the CLI.
//!
//! JSON shapes for scripts and row builders for tables.

mod json;
mod text;

pub use json::{history_json, keys_json, screen_json};
pub use text::{history_rows, key_rows};
