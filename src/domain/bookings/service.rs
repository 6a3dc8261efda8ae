//! Bookings service.

use jiff::Zoned;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::bookings::{
        errors::BookingsServiceError,
        models::{Booking, BookingForm},
    },
    notify::{Notifier, Severity},
    storage::{BOOKINGS_KEY, StoreAdapter},
};

/// Store-backed [`BookingsService`].
#[derive(Debug, Clone)]
pub struct StoreBookingsService<S, N> {
    store: S,
    notifier: N,
}

impl<S: StoreAdapter, N: Notifier> StoreBookingsService<S, N> {
    #[must_use]
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    /// [`BookingsService::submit`] with the capture time pinned by the
    /// caller.
    pub fn submit_at(
        &mut self,
        form: &mut BookingForm,
        booked_at: &Zoned,
    ) -> Result<Booking, BookingsServiceError> {
        if !form.is_complete() {
            self.notifier
                .notify("Please fill in all required fields!", Severity::Error);

            return Err(BookingsServiceError::MissingRequiredData);
        }

        let booking = Booking {
            date: form.date.clone(),
            time: form.time.clone(),
            name: form.name.clone(),
            email: form.email.clone(),
            persons: form.persons.clone(),
            phone: form.phone.clone(),
            booking_date: booked_at.strftime("%-m/%-d/%Y").to_string(),
        };

        let mut bookings: Vec<Booking> = self.store.load_or_default(BOOKINGS_KEY);
        bookings.push(booking.clone());
        self.store.save(BOOKINGS_KEY, &bookings)?;

        self.notifier.notify(
            &format!(
                "Booking confirmed for {}! We'll contact you soon.",
                booking.name
            ),
            Severity::Success,
        );

        form.clear();

        debug!(?booking, "stored booking");

        Ok(booking)
    }
}

impl<S: StoreAdapter, N: Notifier> BookingsService for StoreBookingsService<S, N> {
    fn submit(&mut self, form: &mut BookingForm) -> Result<Booking, BookingsServiceError> {
        self.submit_at(form, &Zoned::now())
    }

    fn bookings(&self) -> Vec<Booking> {
        self.store.load_or_default(BOOKINGS_KEY)
    }
}

#[automock]
/// Booking operations.
pub trait BookingsService {
    /// Validate and append a booking; the form is cleared only when the
    /// submission is accepted.
    fn submit(&mut self, form: &mut BookingForm) -> Result<Booking, BookingsServiceError>;

    /// Every stored booking, oldest first.
    fn bookings(&self) -> Vec<Booking>;
}
