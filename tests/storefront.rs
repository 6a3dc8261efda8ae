//! End-to-end storefront flows over the file-backed store.
//!
//! Each scenario drives the services exactly as the CLI does, with a fresh
//! data directory per test standing in for one browser profile. Dropping and
//! rebuilding a service simulates a new visit: state must come back from the
//! store, not from memory.

use rust_decimal::Decimal;
use tempfile::TempDir;
use testresult::TestResult;

use brasserie::{
    domain::{
        bookings::{BookingsService, StoreBookingsService, models::BookingForm},
        carts::{CartsService, StoreCartsService, models::{CartItem, NewCartItem}},
    },
    notify::{CartBadge, Notifier, Severity},
    storage::{CART_KEY, JsonFileStore, StoreAdapter},
};

/// Collaborators that swallow output; these tests assert on state.
#[derive(Debug, Clone, Copy, Default)]
struct QuietNotifier;

impl Notifier for QuietNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}

#[derive(Debug, Clone, Copy, Default)]
struct QuietBadge;

impl CartBadge for QuietBadge {
    fn refresh(&self, _count: u64) {}
}

fn cart_service(dir: &TempDir) -> StoreCartsService<JsonFileStore, QuietBadge> {
    StoreCartsService::new(JsonFileStore::new(dir.path().to_path_buf()), QuietBadge)
}

fn booking_service(dir: &TempDir) -> StoreBookingsService<JsonFileStore, QuietNotifier> {
    StoreBookingsService::new(JsonFileStore::new(dir.path().to_path_buf()), QuietNotifier)
}

fn dish(name: &str, price: &str) -> NewCartItem {
    NewCartItem {
        name: name.to_owned(),
        price: price.to_owned(),
    }
}

fn filled_form() -> BookingForm {
    BookingForm {
        date: "2026-08-14".to_owned(),
        time: "19:00".to_owned(),
        name: "Nadia".to_owned(),
        email: "nadia@example.com".to_owned(),
        persons: "4".to_owned(),
        phone: "0821234567".to_owned(),
    }
}

#[test]
fn cart_persists_across_sessions() -> TestResult {
    let dir = TempDir::new()?;

    {
        let mut service = cart_service(&dir);
        service.add_item(dish("Pizza", "R120.00"))?;
        service.add_item(dish("Pizza", "R120.00"))?;
        service.add_item(dish("Salad", "R45.50"))?;
    }

    // A new visit sees the same cart.
    let service = cart_service(&dir);

    assert_eq!(service.item_count(), 3);

    let summary = service.summarize().expect("restored cart should summarize");

    assert_eq!(summary.total, Decimal::new(28550, 2));
    assert_eq!(summary.lines.len(), 2);

    Ok(())
}

#[test]
fn cart_and_bookings_are_independent_collections() -> TestResult {
    let dir = TempDir::new()?;

    cart_service(&dir).add_item(dish("Pizza", "R120.00"))?;
    booking_service(&dir).submit(&mut filled_form())?;

    assert_eq!(cart_service(&dir).item_count(), 1);
    assert_eq!(booking_service(&dir).bookings().len(), 1);

    Ok(())
}

#[test]
fn rejected_booking_leaves_the_log_untouched() -> TestResult {
    let dir = TempDir::new()?;
    let mut service = booking_service(&dir);

    service.submit(&mut filled_form())?;

    let mut incomplete = filled_form();
    incomplete.phone = String::new();

    let result = service.submit(&mut incomplete);

    assert!(result.is_err(), "expected a validation rejection");
    assert_eq!(service.bookings().len(), 1);
    assert_eq!(incomplete.name, "Nadia");

    Ok(())
}

#[test]
fn bookings_append_across_sessions() -> TestResult {
    let dir = TempDir::new()?;

    booking_service(&dir).submit(&mut filled_form())?;

    let mut second = filled_form();
    second.name = "Pieter".to_owned();
    booking_service(&dir).submit(&mut second)?;

    let bookings = booking_service(&dir).bookings();
    let names: Vec<&str> = bookings.iter().map(|booking| booking.name.as_str()).collect();

    assert_eq!(names, ["Nadia", "Pieter"]);

    Ok(())
}

#[test]
fn corrupt_cart_file_degrades_to_an_empty_cart() -> TestResult {
    let dir = TempDir::new()?;

    std::fs::write(dir.path().join("cart.json"), "totally not json")?;

    let mut service = cart_service(&dir);

    assert_eq!(service.item_count(), 0);
    assert!(service.summarize().is_none());

    // The next add starts a fresh cart in place of the lost one.
    service.add_item(dish("Pizza", "R120.00"))?;

    assert_eq!(service.item_count(), 1);

    Ok(())
}

#[test]
fn stored_cart_round_trips_through_the_adapter() -> TestResult {
    let dir = TempDir::new()?;
    let mut store = JsonFileStore::new(dir.path().to_path_buf());

    let cart = vec![
        CartItem {
            name: "Pizza".to_owned(),
            price: "R120.00".to_owned(),
            quantity: 2,
        },
        CartItem {
            name: "Salad".to_owned(),
            price: "R45.50".to_owned(),
            quantity: 1,
        },
    ];

    store.save(CART_KEY, &cart)?;

    let loaded: Vec<CartItem> = store.load(CART_KEY)?;

    assert_eq!(loaded, cart);

    store.save(CART_KEY, &loaded)?;

    let reloaded: Vec<CartItem> = store.load(CART_KEY)?;

    assert_eq!(reloaded, cart);

    Ok(())
}
