//! In-memory store for tests and embedding.

use rustc_hash::FxHashMap;
use serde::{Serialize, de::DeserializeOwned};

use super::{StoreAdapter, StoreError};

/// Map-backed [`StoreAdapter`] with the same collection semantics as the
/// file store. Payloads are kept as raw JSON so tests can plant data the
/// services must treat as unreadable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload for `key`, valid JSON or not.
    pub fn put_raw(&mut self, key: &str, payload: &str) {
        self.collections.insert(key.to_owned(), payload.to_owned());
    }
}

impl StoreAdapter for MemoryStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.collections.get(key) {
            Some(raw) => serde_json::from_str(raw).map_err(StoreError::Deserialize),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items).map_err(StoreError::Serialize)?;

        self.collections.insert(key.to_owned(), raw);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn round_trips_a_collection() -> TestResult {
        let mut store = MemoryStore::new();

        store.save("cart", &["Pizza".to_owned(), "Salad".to_owned()])?;

        let loaded: Vec<String> = store.load("cart")?;

        assert_eq!(loaded, vec!["Pizza".to_owned(), "Salad".to_owned()]);

        Ok(())
    }

    #[test]
    fn planted_garbage_is_a_deserialize_error() {
        let mut store = MemoryStore::new();

        store.put_raw("cart", "][");

        let result = store.load::<String>("cart");

        assert!(
            matches!(result, Err(StoreError::Deserialize(_))),
            "expected Deserialize error, got {result:?}"
        );
    }

    #[test]
    fn keys_are_independent() -> TestResult {
        let mut store = MemoryStore::new();

        store.save("cart", &["Pizza".to_owned()])?;

        let bookings: Vec<String> = store.load("bookings")?;

        assert!(bookings.is_empty(), "expected empty collection, got {bookings:?}");

        Ok(())
    }
}
