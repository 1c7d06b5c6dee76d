//! Directory-backed store: one JSON file per key.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStore;
use crate::error::{CalcError, Result};
use crate::fs::write_atomic;

/// Stores each key as `<dir>/<key>.json`.
///
/// The directory is created on first write. Writes replace the file
/// atomically.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidInput` for keys that are empty or contain
    /// anything besides ASCII letters, digits, `_` and `-`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if !valid {
            return Err(CalcError::InvalidInput(format!("invalid store key {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CalcError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            CalcError::Storage(format!(
                "Failed to create store directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        write_atomic(&path, bytes)
            .map_err(|e| CalcError::Storage(format!("Failed to write {}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "store written");
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(CalcError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_path_for_valid_key() {
        let store = FileStore::new("/tmp/calc");
        assert_eq!(
            store.path_for("aurora_calc_history").unwrap(),
            PathBuf::from("/tmp/calc/aurora_calc_history.json")
        );
    }

    #[test]
    fn test_path_for_rejects_traversal() {
        let store = FileStore::new("/tmp/calc");
        assert!(store.path_for("../etc/passwd").is_err());
        assert!(store.path_for("a/b").is_err());
        assert!(store.path_for("").is_err());
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.load("history").unwrap(), None);
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("calc");
        let mut store = FileStore::new(&nested);

        store.save("history", b"[]").unwrap();

        assert!(nested.join("history.json").exists());
        assert_eq!(store.load("history").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_clear_missing_is_ok() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.clear("history").unwrap();
    }
}
