/// Key-value persistence for the app's named collections.
///
/// Every persisted piece of state lives in one redb table keyed by a fixed
/// `Collection` enum, so call sites never pass raw key strings. Values are
/// bincode-serialized blobs written synchronously, best effort.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Collections table: collection key → bincode-serialized blob.
const COLLECTIONS: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// The fixed set of persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// The kanban board with all tasks.
    Board,
    /// Completed focus-session counts per day.
    PomodoroTally,
    /// Last active view, visibility toggles.
    UiState,
}

impl Collection {
    /// The storage key for this collection.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Board => "board",
            Collection::PomodoroTally => "pomodoro_tally",
            Collection::UiState => "ui_state",
        }
    }

    /// All known collections, for wipes and diagnostics.
    pub fn all() -> [Collection; 3] {
        [
            Collection::Board,
            Collection::PomodoroTally,
            Collection::UiState,
        ]
    }
}

/// Cross-session UI state stored under `Collection::UiState`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiStateData {
    /// The view that was active when the app closed ("tasks", "board", "pomodoro").
    pub active_view: String,
}

/// Resolves the data directory path.
///
/// Resolution order:
/// 1. `KUNTARTIB_DATA_DIR` environment variable
/// 2. `.data/` directory next to the executable
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("KUNTARTIB_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let exe = std::env::current_exe().unwrap_or_else(|_| PathBuf::from("."));
    exe.parent().unwrap_or(Path::new(".")).join(".data")
}

/// Persistence adapter for the named collections, backed by redb.
pub struct DataStore {
    db: Database,
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore").finish()
    }
}

impl DataStore {
    /// Opens or creates the store database in the given directory.
    ///
    /// Creates the directory and database file if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the database
    /// cannot be opened.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        let db_path = data_dir.join("kuntartib.redb");
        let db = Database::create(&db_path)
            .with_context(|| format!("Failed to open data store: {}", db_path.display()))?;

        // Ensure the table exists
        let write_txn = db
            .begin_write()
            .context("Failed to begin initial write transaction")?;
        {
            let _ = write_txn
                .open_table(COLLECTIONS)
                .context("Failed to create collections table")?;
        }
        write_txn
            .commit()
            .context("Failed to commit initial transaction")?;

        Ok(Self { db })
    }

    /// Writes one collection, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write transaction fails.
    pub fn save<T: Serialize>(&self, collection: Collection, value: &T) -> Result<()> {
        let bytes = bincode::serialize(value)
            .with_context(|| format!("Failed to serialize collection '{}'", collection.key()))?;

        let write_txn = self
            .db
            .begin_write()
            .context("Failed to begin write transaction")?;
        {
            let mut table = write_txn
                .open_table(COLLECTIONS)
                .context("Failed to open collections table")?;
            table
                .insert(collection.key(), bytes.as_slice())
                .with_context(|| format!("Failed to insert collection '{}'", collection.key()))?;
        }
        write_txn
            .commit()
            .context("Failed to commit write transaction")?;
        Ok(())
    }

    /// Reads one collection, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the read transaction or deserialization fails.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Option<T>> {
        let read_txn = self
            .db
            .begin_read()
            .context("Failed to begin read transaction")?;
        let table = read_txn
            .open_table(COLLECTIONS)
            .context("Failed to open collections table")?;

        match table
            .get(collection.key())
            .with_context(|| format!("Failed to read collection '{}'", collection.key()))?
        {
            Some(guard) => {
                let value: T = bincode::deserialize(guard.value()).with_context(|| {
                    format!("Failed to deserialize collection '{}'", collection.key())
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Removes one collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the write transaction fails.
    pub fn delete(&self, collection: Collection) -> Result<()> {
        let write_txn = self
            .db
            .begin_write()
            .context("Failed to begin write transaction")?;
        {
            let mut table = write_txn
                .open_table(COLLECTIONS)
                .context("Failed to open collections table")?;
            let _ = table.remove(collection.key());
        }
        write_txn.commit().context("Failed to commit deletion")?;
        Ok(())
    }

    /// Removes every known collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the write transaction fails.
    pub fn wipe(&self) -> Result<()> {
        let write_txn = self
            .db
            .begin_write()
            .context("Failed to begin write transaction")?;
        {
            let mut table = write_txn
                .open_table(COLLECTIONS)
                .context("Failed to open collections table")?;
            for collection in Collection::all() {
                let _ = table.remove(collection.key());
            }
        }
        write_txn.commit().context("Failed to commit wipe")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Blob {
        names: Vec<String>,
        count: u32,
    }

    fn open_test_store() -> (DataStore, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let store = DataStore::open(dir.path()).expect("open store");
        (store, dir)
    }

    #[test]
    fn test_collection_keys_are_distinct() {
        let keys: Vec<&str> = Collection::all().iter().map(|c| c.key()).collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn test_load_missing_collection() {
        let (store, _dir) = open_test_store();
        let loaded: Option<Blob> = store.load(Collection::Board).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let (store, _dir) = open_test_store();
        let blob = Blob {
            names: vec!["a".to_string(), "b".to_string()],
            count: 7,
        };

        store.save(Collection::Board, &blob).expect("save");
        let loaded: Blob = store.load(Collection::Board).expect("load").expect("some");
        assert_eq!(loaded, blob);
    }

    #[test]
    fn test_save_overwrites() {
        let (store, _dir) = open_test_store();
        let first = Blob {
            names: vec!["first".to_string()],
            count: 1,
        };
        let second = Blob {
            names: vec!["second".to_string()],
            count: 2,
        };

        store.save(Collection::UiState, &first).expect("save");
        store.save(Collection::UiState, &second).expect("overwrite");

        let loaded: Blob = store
            .load(Collection::UiState)
            .expect("load")
            .expect("some");
        assert_eq!(loaded, second);
    }

    #[test]
    fn test_collections_are_isolated() {
        let (store, _dir) = open_test_store();
        let board = Blob {
            names: vec!["board".to_string()],
            count: 1,
        };
        let tally = Blob {
            names: vec!["tally".to_string()],
            count: 2,
        };

        store.save(Collection::Board, &board).expect("save board");
        store
            .save(Collection::PomodoroTally, &tally)
            .expect("save tally");

        let loaded: Blob = store.load(Collection::Board).expect("load").expect("some");
        assert_eq!(loaded.names, vec!["board"]);

        store.delete(Collection::Board).expect("delete");
        let gone: Option<Blob> = store.load(Collection::Board).expect("load");
        assert!(gone.is_none());
        let kept: Option<Blob> = store.load(Collection::PomodoroTally).expect("load");
        assert!(kept.is_some());
    }

    #[test]
    fn test_wipe_removes_everything() {
        let (store, _dir) = open_test_store();
        let blob = Blob {
            names: vec![],
            count: 0,
        };

        store.save(Collection::Board, &blob).expect("save");
        store.save(Collection::UiState, &blob).expect("save");
        store.wipe().expect("wipe");

        for collection in Collection::all() {
            let loaded: Option<Blob> = store.load(collection).expect("load");
            assert!(loaded.is_none());
        }
    }

    #[test]
    fn test_reopen_preserves_data() {
        let dir = TempDir::new().expect("create temp dir");
        let blob = Blob {
            names: vec!["persistent".to_string()],
            count: 9,
        };

        {
            let store = DataStore::open(dir.path()).expect("open");
            store.save(Collection::Board, &blob).expect("save");
        }

        {
            let store = DataStore::open(dir.path()).expect("reopen");
            let loaded: Blob = store.load(Collection::Board).expect("load").expect("some");
            assert_eq!(loaded, blob);
        }
    }

    #[test]
    fn test_deserialize_mismatch_is_an_error() {
        let (store, _dir) = open_test_store();
        store
            .save(Collection::Board, &"just a string")
            .expect("save");
        let result: Result<Option<Blob>> = store.load(Collection::Board);
        assert!(result.is_err());
    }
}
