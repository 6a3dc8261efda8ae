use tabled::{Table, settings::Style};

use brasserie::{
    config::StorageConfig,
    domain::carts::{CartsService, StoreCartsService},
    notify::{ConsoleBadge, ConsoleNotifier, Notifier, Severity},
    storage::JsonFileStore,
};

pub(crate) fn run(storage: &StorageConfig) -> Result<(), String> {
    let store = JsonFileStore::new(storage.data_dir.clone());
    let service = StoreCartsService::new(store, ConsoleBadge);

    let Some(summary) = service.summarize() else {
        ConsoleNotifier.notify("Your cart is empty!", Severity::Info);

        return Ok(());
    };

    let mut table = Table::new(&summary.lines);
    table.with(Style::rounded());

    println!("{table}");
    println!("Total: R{:.2}", summary.total);

    Ok(())
}
