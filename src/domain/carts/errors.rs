//! Carts service errors.

use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// The cart could not be written back to the store.
    #[error("storage error")]
    Storage(#[from] StoreError),
}
