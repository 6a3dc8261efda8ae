use clap::Args;

use brasserie::{
    config::StorageConfig,
    domain::bookings::{BookingsService, StoreBookingsService, models::BookingForm},
    notify::ConsoleNotifier,
    storage::JsonFileStore,
};

/// Fields default to empty so the service's validation, not the parser,
/// decides what a rejected submission looks like.
#[derive(Debug, Args)]
pub(crate) struct CreateBookingArgs {
    /// Reservation date, e.g. 2026-08-14
    #[arg(long, default_value = "")]
    date: String,

    /// Reservation time, e.g. 19:00
    #[arg(long, default_value = "")]
    time: String,

    /// Name the booking is held under
    #[arg(long, default_value = "")]
    name: String,

    /// Contact email address
    #[arg(long, default_value = "")]
    email: String,

    /// Party size
    #[arg(long, default_value = "")]
    persons: String,

    /// Contact phone number
    #[arg(long, default_value = "")]
    phone: String,
}

pub(crate) fn run(args: CreateBookingArgs, storage: &StorageConfig) -> Result<(), String> {
    let store = JsonFileStore::new(storage.data_dir.clone());
    let mut service = StoreBookingsService::new(store, ConsoleNotifier);

    let mut form = BookingForm {
        date: args.date,
        time: args.time,
        name: args.name,
        email: args.email,
        persons: args.persons,
        phone: args.phone,
    };

    service
        .submit(&mut form)
        .map_err(|error| format!("booking rejected: {error}"))?;

    Ok(())
}
