use clap::Args;

use brasserie::{
    config::StorageConfig,
    domain::carts::{CartsService, StoreCartsService, models::NewCartItem},
    notify::{ConsoleBadge, ConsoleNotifier, Notifier, Severity},
    storage::JsonFileStore,
};

#[derive(Debug, Args)]
pub(crate) struct AddItemArgs {
    /// Dish display name
    #[arg(long)]
    name: String,

    /// Display price, e.g. "R120.00"
    #[arg(long)]
    price: String,
}

pub(crate) fn run(args: AddItemArgs, storage: &StorageConfig) -> Result<(), String> {
    let store = JsonFileStore::new(storage.data_dir.clone());
    let mut service = StoreCartsService::new(store, ConsoleBadge);

    let line = service
        .add_item(NewCartItem {
            name: args.name,
            price: args.price,
        })
        .map_err(|error| format!("failed to add item to cart: {error}"))?;

    ConsoleNotifier.notify(&format!("{} added to cart!", line.name), Severity::Info);

    Ok(())
}
