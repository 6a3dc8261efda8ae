use brasserie::{
    config::StorageConfig,
    domain::carts::{CartsService, StoreCartsService},
    notify::{CartBadge, ConsoleBadge},
    storage::JsonFileStore,
};

pub(crate) fn run(storage: &StorageConfig) -> Result<(), String> {
    let store = JsonFileStore::new(storage.data_dir.clone());
    let service = StoreCartsService::new(store, ConsoleBadge);

    ConsoleBadge.refresh(service.item_count());

    Ok(())
}
