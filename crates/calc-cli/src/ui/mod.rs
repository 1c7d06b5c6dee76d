//! UI primitives for the Calc CLI.
//!
//! This module provides:
//! - **Context**: Terminal detection and display prefs (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and owo-colors styles
//! - **Render**: Screens, tables, headers, receipts, hints
//! - **Format**: String utilities (truncate, align)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{Prefs, UiContext, render};
//!
//! let ctx = UiContext::from_env(args.json, args.format.as_deref(), Prefs::default());
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", render::screen(&ctx, &calculator.snapshot()));
//! ```

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::{Prefs, UiContext};
pub use mode::OutputMode;

pub use render::{header, hint, kv, print, print_error, receipt, screen, table, Column};
