use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Failure of the persistence medium underneath one file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Typed handle on one collection file.
///
/// A collection is a JSON array holding every record of one type; reads and
/// writes always cover the whole array, there is no partial persistence. The
/// handle itself carries no state beyond the path, so several handles may
/// point at the same file. It provides no locking either; keeping concurrent
/// writers from clobbering each other is the caller's job.
pub struct JsonStore<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Binds the handle to `path`, seeding an empty collection on first use
    /// so a fresh data directory starts out readable.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                    path: path.clone(),
                    source: Box::new(e),
                })?;
            }
            fs::write(&path, "[]").map_err(|e| StoreError::Write {
                path: path.clone(),
                source: Box::new(e),
            })?;
        }
        Ok(JsonStore {
            path,
            _record: PhantomData,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and deserializes the whole collection.
    pub fn load(&self) -> Result<Vec<T>, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: Box::new(e),
        })?;
        let records: Vec<T> = serde_json::from_str(&content).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: Box::new(e),
        })?;
        debug!(
            "loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    /// Serializes `records` and replaces the collection file.
    ///
    /// The new content goes to a temp file in the same directory first and
    /// is renamed over the target, so a reader never observes a half-written
    /// array.
    pub fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: Box::new(e),
        })?;

        let dir = self.path.parent().unwrap_or(Path::new("."));
        let tmp = dir.join(format!(".collection-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Write {
                path: self.path.clone(),
                source: Box::new(e),
            });
        }

        debug!(
            "saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::media::MediaRecord;
    use tempfile::TempDir;

    fn record(id: &str, title: &str) -> MediaRecord {
        MediaRecord {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: 2020,
            kind: "movie".to_string(),
            poster: "http://images.example.com/poster.jpg".to_string(),
        }
    }

    #[test]
    fn open_seeds_an_empty_collection() {
        let dir = TempDir::new().unwrap();
        let store: JsonStore<MediaRecord> =
            JsonStore::open(dir.path().join("media.json")).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn open_leaves_existing_content_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("media.json");
        let first: JsonStore<MediaRecord> = JsonStore::open(&path).unwrap();
        first.save(&[record("tt0000001", "First")]).unwrap();

        let second: JsonStore<MediaRecord> = JsonStore::open(&path).unwrap();
        assert_eq!(second.load().unwrap().len(), 1);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("media.json")).unwrap();
        let records = vec![record("tt0000001", "First"), record("tt0000002", "Second")];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn load_rejects_malformed_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("media.json");
        let store: JsonStore<MediaRecord> = JsonStore::open(&path).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Read { .. })));
    }

    #[test]
    fn save_cleans_up_its_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("media.json")).unwrap();
        store.save(&[record("tt0000001", "First")]).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["media.json"]);
    }

    #[test]
    fn persists_the_documented_field_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("media.json");
        let store = JsonStore::open(&path).unwrap();
        store.save(&[record("tt0133093", "The Matrix")]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        for field in ["imdbID", "Title", "Year", "Type", "Poster"] {
            assert!(raw.contains(&format!("\"{}\"", field)), "missing {}", field);
        }
    }
}
