//! # Calc Core
//!
//! Core library for Aurora Calc - a button-driven arithmetic calculator with a
//! persisted history drawer.
//!
//! This crate holds the calculator's domain logic independent of any
//! rendering surface.
//!
//! ## Architecture
//!
//! - **eval**: Sanitize-then-evaluate pipeline (whitelist, percent rewrite,
//!   recursive-descent arithmetic)
//! - **engine**: Expression building rules applied per key press
//! - **buttons**: The fixed key descriptor table
//! - **history**: Bounded, newest-first ledger of past computations
//! - **storage**: Key-value persistence trait and implementations
//! - **calculator**: Session object tying engine, ledger and display together

pub mod buttons;
pub mod calculator;
pub mod engine;
pub mod error;
pub mod eval;
pub mod fs;
pub mod history;
pub mod numeric;
pub mod storage;

pub use buttons::{ButtonDescriptor, ButtonKind, Operator, BUTTONS};
pub use calculator::{Calculator, Screen};
pub use engine::{Commit, Engine};
pub use error::{CalcError, Result};
pub use eval::{evaluate, EvalError, ERROR_SENTINEL};
pub use history::{HistoryEntry, HistoryLedger, HISTORY_KEY, MAX_ENTRIES};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
