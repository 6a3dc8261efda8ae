//! Booking Models

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A confirmed table booking, as stored in the `bookings` log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Booking {
    #[tabled(rename = "Date")]
    pub date: String,

    #[tabled(rename = "Time")]
    pub time: String,

    #[tabled(rename = "Name")]
    pub name: String,

    #[tabled(rename = "Email")]
    pub email: String,

    #[tabled(rename = "Persons")]
    pub persons: String,

    #[tabled(rename = "Phone")]
    pub phone: String,

    /// Capture-time stamp set by the service, not the reservation date.
    /// Display-formatted, so not sortable.
    #[serde(rename = "bookingDate")]
    #[tabled(rename = "Booked on")]
    pub booking_date: String,
}

/// Mutable form state at the submission boundary.
///
/// Cleared only after an accepted submission; rejected input stays in
/// place for correction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub date: String,
    pub time: String,
    pub name: String,
    pub email: String,
    pub persons: String,
    pub phone: String,
}

impl BookingForm {
    /// Whether every required field holds a non-empty value.
    ///
    /// Non-empty is the whole check: `"0"` persons is a valid entry.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty()
            && !self.time.is_empty()
            && !self.name.is_empty()
            && !self.email.is_empty()
            && !self.persons.is_empty()
            && !self.phone.is_empty()
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
