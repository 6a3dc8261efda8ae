use tabled::{Table, settings::Style};

use brasserie::{
    config::StorageConfig,
    domain::bookings::{BookingsService, StoreBookingsService},
    notify::ConsoleNotifier,
    storage::JsonFileStore,
};

pub(crate) fn run(storage: &StorageConfig) -> Result<(), String> {
    let store = JsonFileStore::new(storage.data_dir.clone());
    let service = StoreBookingsService::new(store, ConsoleNotifier);

    let bookings = service.bookings();

    if bookings.is_empty() {
        println!("No bookings yet.");

        return Ok(());
    }

    let mut table = Table::new(&bookings);
    table.with(Style::rounded());

    println!("{table}");

    Ok(())
}
