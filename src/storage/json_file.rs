//! File-backed JSON store.

use std::{fs, io::ErrorKind, path::PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use super::{StoreAdapter, StoreError};

/// One JSON file per collection key inside a data directory.
///
/// Writes replace the whole collection, so two processes sharing a data
/// directory can lose an update between a load and the following save
/// (last writer wins). Commands run one at a time within a process, which
/// is the only access pattern this store is built for.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn collection_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StoreAdapter for JsonFileStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let raw = match fs::read_to_string(self.collection_path(key)) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(StoreError::Io(error)),
        };

        serde_json::from_str(&raw).map_err(StoreError::Deserialize)
    }

    fn save<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let raw = serde_json::to_string(items).map_err(StoreError::Serialize)?;

        fs::write(self.collection_path(key), raw)?;

        Ok(())
    }
}
