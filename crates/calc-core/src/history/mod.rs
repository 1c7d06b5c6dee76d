//! Bounded history of past computations.

mod entry;
mod ledger;

pub use entry::HistoryEntry;
pub use ledger::HistoryLedger;

/// Store key the ledger is persisted under.
pub const HISTORY_KEY: &str = "aurora_calc_history";

/// Maximum number of records kept; older ones are dropped.
pub const MAX_ENTRIES: usize = 50;
