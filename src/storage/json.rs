//! JSON file-based storage backend.
//!
//! A simple, human-readable document store using JSON serialization with
//! atomic file writes (write-to-temp + rename) to prevent corruption on
//! crashes. The whole dataset lives in memory and is written back on
//! modification, which is fine for a directory of this size.

use crate::domain::error::{HostelfinderError, Result};
use crate::storage::backend::ListingStorage;
use crate::storage::models::ListingRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// JSON container format.
///
/// Top-level structure serialized to disk. The version field exists for
/// future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    /// Stored listings, indexed by id.
    #[serde(default)]
    listings: HashMap<String, ListingRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            listings: HashMap::new(),
        }
    }
}

/// JSON file storage backend.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; designed for the single-threaded shim.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "listings": {
///     "1719310000000": {
///       "id": "1719310000000",
///       "name": "Sunrise Boys Hostel",
///       "price": 8000,
///       "hostel_type": "boys",
///       "room_type": "single",
///       "...": "..."
///     }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks whether data has been modified since the last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// Loads existing data when the file exists, otherwise starts empty.
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails, the file cannot
    /// be read, or it contains invalid JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hostelfinder::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/listings.json"))?;
    /// # Ok::<(), hostelfinder::domain::HostelfinderError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(listing_count = data.listings.len(), "storage initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &PathBuf) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| HostelfinderError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            listings = data.listings.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves storage data to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never left half-written even if the process crashes.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving storage data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| HostelfinderError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("storage saved");
        Ok(())
    }
}

impl ListingStorage for JsonStorage {
    fn load_all(&self) -> Result<Vec<ListingRecord>> {
        let _span = tracing::debug_span!("json_load_all").entered();

        let mut records: Vec<ListingRecord> = self.data.listings.values().cloned().collect();
        // The map is unordered; restore the newest-first contract.
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        tracing::debug!(count = records.len(), "retrieved listings");
        Ok(records)
    }

    fn get_by_id(&self, id: &str) -> Result<Option<ListingRecord>> {
        let _span = tracing::debug_span!("json_get_by_id", id = %id).entered();

        let record = self.data.listings.get(id).cloned();
        tracing::debug!(found = record.is_some(), "listing lookup complete");
        Ok(record)
    }

    fn replace_all(&mut self, records: &[ListingRecord]) -> Result<()> {
        let _span = tracing::debug_span!("json_replace_all", count = records.len()).entered();

        self.data.listings = records
            .iter()
            .map(|record| (record.id.clone(), record.clone()))
            .collect();

        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStorage {
    /// Flushes unsaved data on drop.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed_listings, ListingStore};

    fn snapshot() -> Vec<ListingRecord> {
        let mut store = ListingStore::new();
        for draft in seed_listings() {
            store.create(draft);
        }
        store.list().into_iter().map(ListingRecord::from).collect()
    }

    #[test]
    fn round_trips_snapshot_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");

        let records = snapshot();
        {
            let mut storage = JsonStorage::new(path.clone()).unwrap();
            storage.replace_all(&records).unwrap();
        }

        let reopened = JsonStorage::new(path).unwrap();
        let loaded = reopened.load_all().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn load_all_restores_newest_first_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");

        let records = snapshot();
        let mut storage = JsonStorage::new(path).unwrap();
        storage.replace_all(&records).unwrap();

        let loaded = storage.load_all().unwrap();
        let stamps: Vec<i64> = loaded.iter().map(|r| r.created_at).collect();
        let mut sorted = stamps.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(stamps, sorted);
    }

    #[test]
    fn replace_all_drops_deleted_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");

        let mut records = snapshot();
        let mut storage = JsonStorage::new(path).unwrap();
        storage.replace_all(&records).unwrap();

        let removed = records.remove(0);
        storage.replace_all(&records).unwrap();

        assert!(storage.get_by_id(&removed.id).unwrap().is_none());
        assert_eq!(storage.load_all().unwrap().len(), records.len());
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("fresh.json")).unwrap();
        assert!(storage.load_all().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonStorage::new(path).unwrap_err();
        assert!(matches!(err, HostelfinderError::Storage(_)));
    }
}
