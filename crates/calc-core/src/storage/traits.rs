//! Key-value store trait definition.
//!
//! The calculator persists exactly one value (the history ledger) under one
//! namespaced key. `KeyValueStore` is the whole contract a backend has to
//! meet, so the core stays independent of where bytes end up.

use crate::error::Result;

/// Byte-oriented key-value persistence.
///
/// Implementations must ensure:
/// - `save` replaces the value whole (no partial writes are observable)
/// - `load` after `clear` returns `Ok(None)`
/// - `clear` on an absent key succeeds
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Storage` if the backend cannot be read.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `bytes` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::Storage` if the write fails.
    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Remove the value under `key`.
    fn clear(&mut self, key: &str) -> Result<()>;
}
