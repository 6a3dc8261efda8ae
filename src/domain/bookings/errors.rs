//! Bookings service errors.

use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum BookingsServiceError {
    /// A required booking field was left empty.
    #[error("please fill in all required fields")]
    MissingRequiredData,

    /// The bookings log could not be written back to the store.
    #[error("storage error")]
    Storage(#[from] StoreError),
}
