//! The persisted history ledger.

use super::{HistoryEntry, HISTORY_KEY, MAX_ENTRIES};
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Newest-first list of at most [`MAX_ENTRIES`] records, mirrored to a
/// key-value store.
///
/// The full list is rewritten on every mutation. Store failures are logged
/// and swallowed: a broken store degrades to an in-memory history and the
/// calculator keeps working.
#[derive(Debug)]
pub struct HistoryLedger<S: KeyValueStore> {
    entries: Vec<HistoryEntry>,
    store: S,
}

impl<S: KeyValueStore> HistoryLedger<S> {
    /// Load the ledger from `store`.
    ///
    /// Missing, unreadable or malformed data yields an empty ledger.
    pub fn load(store: S) -> Self {
        let entries = match read_entries(&store) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable history");
                Vec::new()
            }
        };
        tracing::debug!(entries = entries.len(), "history loaded");
        Self { entries, store }
    }

    /// Record a new entry at the front and persist.
    ///
    /// Returns the updated list, newest first.
    pub fn append(&mut self, entry: HistoryEntry) -> &[HistoryEntry] {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_ENTRIES);
        if let Err(err) = self.persist() {
            tracing::warn!(error = %err, "failed to persist history");
        }
        &self.entries
    }

    /// Drop every entry and erase the stored copy.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Err(err) = self.store.clear(HISTORY_KEY) {
            tracing::warn!(error = %err, "failed to erase stored history");
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Give back the store, e.g. to reload from it.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<()> {
        let bytes = serde_json::to_vec(&self.entries)?;
        self.store.save(HISTORY_KEY, &bytes)?;
        tracing::debug!(entries = self.entries.len(), bytes = bytes.len(), "history saved");
        Ok(())
    }
}

fn read_entries<S: KeyValueStore>(store: &S) -> Result<Vec<HistoryEntry>> {
    let Some(bytes) = store.load(HISTORY_KEY)? else {
        return Ok(Vec::new());
    };
    let mut entries: Vec<HistoryEntry> = serde_json::from_slice(&bytes)?;
    entries.truncate(MAX_ENTRIES);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::storage::MemoryStore;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(format!("{}+0", n), n.to_string())
    }

    #[test]
    fn test_starts_empty_without_data() {
        let ledger = HistoryLedger::load(MemoryStore::new());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_append_is_newest_first() {
        let mut ledger = HistoryLedger::load(MemoryStore::new());
        ledger.append(entry(1));
        let list = ledger.append(entry(2));
        assert_eq!(list, &[entry(2), entry(1)]);
    }

    #[test]
    fn test_bounded_to_fifty() {
        let mut ledger = HistoryLedger::load(MemoryStore::new());
        for n in 1..=55 {
            ledger.append(entry(n));
        }
        assert_eq!(ledger.len(), MAX_ENTRIES);
        assert_eq!(ledger.get(0), Some(&entry(55)));
        assert_eq!(ledger.get(49), Some(&entry(6)));
        assert!(ledger.entries().iter().all(|e| e != &entry(5)));
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut ledger = HistoryLedger::load(MemoryStore::new());
        ledger.append(HistoryEntry::new("2+2", "4"));
        ledger.append(HistoryEntry::new("5÷0", "Error"));
        let expected = ledger.entries().to_vec();

        let reloaded = HistoryLedger::load(ledger.into_store());
        assert_eq!(reloaded.entries(), expected.as_slice());
    }

    #[test]
    fn test_clear_erases_store() {
        let mut ledger = HistoryLedger::load(MemoryStore::new());
        ledger.append(entry(1));
        ledger.clear();
        assert!(ledger.is_empty());

        let store = ledger.into_store();
        assert_eq!(store.load(HISTORY_KEY).unwrap(), None);
        assert!(HistoryLedger::load(store).is_empty());
    }

    #[test]
    fn test_malformed_data_loads_empty() {
        let mut store = MemoryStore::new();
        store.save(HISTORY_KEY, b"{not json").unwrap();
        assert!(HistoryLedger::load(store).is_empty());

        let mut store = MemoryStore::new();
        store.save(HISTORY_KEY, br#"[{"expression":1}]"#).unwrap();
        assert!(HistoryLedger::load(store).is_empty());
    }

    #[test]
    fn test_legacy_data_loads() {
        let mut store = MemoryStore::new();
        store
            .save(
                HISTORY_KEY,
                br#"[{"expr":"log(100)","result":"2"},{"expr":"1+1","result":2}]"#,
            )
            .unwrap();
        let ledger = HistoryLedger::load(store);
        assert_eq!(
            ledger.entries(),
            &[
                HistoryEntry::new("log(100)", "2"),
                HistoryEntry::new("1+1", "2")
            ]
        );
    }

    #[test]
    fn test_oversized_data_truncated_on_load() {
        let entries: Vec<HistoryEntry> = (0..60).map(entry).collect();
        let mut store = MemoryStore::new();
        store
            .save(HISTORY_KEY, &serde_json::to_vec(&entries).unwrap())
            .unwrap();
        let ledger = HistoryLedger::load(store);
        assert_eq!(ledger.len(), MAX_ENTRIES);
        assert_eq!(ledger.get(0), Some(&entry(0)));
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<Vec<u8>>> {
            Err(CalcError::Storage("unreadable".to_string()))
        }

        fn save(&mut self, _key: &str, _bytes: &[u8]) -> Result<()> {
            Err(CalcError::Storage("read-only".to_string()))
        }

        fn clear(&mut self, _key: &str) -> Result<()> {
            Err(CalcError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_store_failures_are_not_fatal() {
        let mut ledger = HistoryLedger::load(BrokenStore);
        assert!(ledger.is_empty());
        ledger.append(entry(1));
        assert_eq!(ledger.len(), 1);
        ledger.clear();
        assert!(ledger.is_empty());
    }
}
