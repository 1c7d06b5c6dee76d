//! Persistence backends.
//!
//! - [`KeyValueStore`]: the contract the history ledger depends on
//! - [`FileStore`]: JSON files in a data directory
//! - [`MemoryStore`]: process-local, for tests and ephemeral sessions

mod file;
mod memory;
mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
