//! Local key-value storage.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;

/// Collection key for the shopping cart.
pub const CART_KEY: &str = "cart";

/// Collection key for the bookings log.
pub const BOOKINGS_KEY: &str = "bookings";

/// Storage failures. Read failures are recovered by
/// [`StoreAdapter::load_or_default`]; write failures surface through the
/// services.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o error")]
    Io(#[from] std::io::Error),

    #[error("stored collection is not a valid JSON sequence")]
    Deserialize(#[source] serde_json::Error),

    #[error("collection cannot be serialized")]
    Serialize(#[source] serde_json::Error),
}

/// Named JSON collections with whole-value replacement semantics.
pub trait StoreAdapter {
    /// Read the collection stored under `key`. An absent key is an empty
    /// collection, not an error.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError>;

    /// Serialize and store `items` under `key`, replacing any prior value.
    /// Last writer wins; there is no merge and no transaction across a
    /// load/save pair.
    fn save<T: Serialize>(&mut self, key: &str, items: &[T]) -> Result<(), StoreError>;

    /// Read a collection, substituting the empty one when the stored data
    /// cannot be read. The failure is logged and the prior state discarded.
    fn load_or_default<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.load(key) {
            Ok(items) => items,
            Err(error) => {
                warn!(key, %error, "discarding unreadable collection");

                Vec::new()
            }
        }
    }
}
