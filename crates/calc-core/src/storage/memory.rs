//! In-memory store for tests and throwaway sessions.

use std::collections::HashMap;

use super::traits::KeyValueStore;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.values.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
