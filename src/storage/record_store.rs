use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

use crate::error::{FolioError, Result};
use crate::storage::keys;

const FOLIO_DIR: &str = ".folio";

/// Key-value persistence facade: one JSON document per collection key,
/// stored under `<root>/.folio/`.
///
/// Reads never fail — an absent or unreadable document yields the caller's
/// default. Writes are best-effort: a failed write is logged and swallowed,
/// so in-memory state can diverge from disk. Both policies assume a single
/// writer and low-stakes data; there is no locking, no transaction spanning
/// keys, and no partial update of a document.
pub struct RecordStore {
    dir: PathBuf,
}

impl RecordStore {
    /// Create the store directory for a new project.
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(FOLIO_DIR);

        if dir.exists() {
            return Err(FolioError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open the store of an existing project.
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(FOLIO_DIR);

        if !dir.is_dir() {
            return Err(FolioError::NotInitialized);
        }

        Ok(Self { dir })
    }

    /// The store directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read the document under `key`, falling back to `default` when the
    /// document is absent or cannot be parsed. Corruption is masked by the
    /// default on purpose; it is only distinguishable from absence in logs.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.document_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => return default,
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "stored document unreadable, using default");
                default
            }
        }
    }

    /// Serialize `value` and store it under `key`, replacing the whole
    /// document. Failures are logged, not propagated: the caller's in-memory
    /// copy has already changed and is not rolled back.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let path = self.document_path(key);
        let json = match serde_json::to_vec_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                error!(key, error = %e, "failed to serialize document");
                return;
            }
        };

        if let Err(e) = fs::write(&path, json) {
            error!(key, error = %e, "failed to write document");
        }
    }

    /// Delete the document under `key`, best-effort.
    pub fn remove(&self, key: &str) {
        let path = self.document_path(key);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                error!(key, error = %e, "failed to remove document");
            }
        }
    }

    /// Delete every known collection document, best-effort. Documents
    /// outside the known key set (the admin session file in particular) are
    /// left alone.
    pub fn clear_all(&self) {
        for key in keys::ALL {
            self.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_folio_directory() {
        let tmp = TempDir::new().unwrap();
        let _store = RecordStore::init(tmp.path()).unwrap();

        assert!(tmp.path().join(".folio").exists());
    }

    #[test]
    fn test_init_fails_if_already_initialized() {
        let tmp = TempDir::new().unwrap();
        RecordStore::init(tmp.path()).unwrap();

        let result = RecordStore::init(tmp.path());
        assert!(matches!(result, Err(FolioError::AlreadyInitialized)));
    }

    #[test]
    fn test_open_fails_if_not_initialized() {
        let tmp = TempDir::new().unwrap();

        let result = RecordStore::open(tmp.path());
        assert!(matches!(result, Err(FolioError::NotInitialized)));
    }

    #[test]
    fn test_write_then_read_round_trips_on_fresh_open() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        let value = vec!["alpha".to_string(), "beta".to_string()];
        store.write(keys::SKILLS, &value);

        // Reopen to prove the value came from disk, not memory.
        let store2 = RecordStore::open(tmp.path()).unwrap();
        let loaded: Vec<String> = store2.read(keys::SKILLS, Vec::new());
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_read_absent_key_returns_default() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        let loaded: Vec<String> = store.read(keys::PROJECTS, vec!["fallback".to_string()]);
        assert_eq!(loaded, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_read_corrupt_document_returns_default() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        std::fs::write(
            tmp.path().join(".folio").join("portfolio_projects.json"),
            b"{not valid json",
        )
        .unwrap();

        let loaded: Vec<String> = store.read(keys::PROJECTS, vec!["fallback".to_string()]);
        assert_eq!(loaded, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_remove_deletes_document() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        store.write(keys::SKILLS, &vec![1, 2, 3]);
        store.remove(keys::SKILLS);

        let loaded: Vec<i32> = store.read(keys::SKILLS, Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_remove_missing_document_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        store.remove(keys::SKILLS);
    }

    #[test]
    fn test_clear_all_deletes_known_keys_only() {
        let tmp = TempDir::new().unwrap();
        let store = RecordStore::init(tmp.path()).unwrap();

        store.write(keys::SKILLS, &vec![1]);
        store.write(keys::PROJECTS, &vec![2]);
        let session_path = tmp.path().join(".folio").join("session.json");
        std::fs::write(&session_path, b"{}").unwrap();

        store.clear_all();

        let skills: Vec<i32> = store.read(keys::SKILLS, Vec::new());
        let projects: Vec<i32> = store.read(keys::PROJECTS, Vec::new());
        assert!(skills.is_empty());
        assert!(projects.is_empty());
        assert!(session_path.exists());
    }
}
