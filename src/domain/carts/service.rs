//! Carts service.

use mockall::automock;
use rust_decimal::Decimal;

use crate::{
    domain::carts::{
        errors::CartsServiceError,
        models::{CartItem, CartSummary, NewCartItem, SummaryLine},
        pricing,
    },
    notify::CartBadge,
    storage::{CART_KEY, StoreAdapter},
};

/// Store-backed [`CartsService`].
#[derive(Debug, Clone)]
pub struct StoreCartsService<S, B> {
    store: S,
    badge: B,
}

impl<S: StoreAdapter, B: CartBadge> StoreCartsService<S, B> {
    #[must_use]
    pub fn new(store: S, badge: B) -> Self {
        Self { store, badge }
    }

    fn total_quantity(cart: &[CartItem]) -> u64 {
        cart.iter().map(|line| line.quantity).sum()
    }
}

impl<S: StoreAdapter, B: CartBadge> CartsService for StoreCartsService<S, B> {
    fn add_item(&mut self, item: NewCartItem) -> Result<CartItem, CartsServiceError> {
        let mut cart: Vec<CartItem> = self.store.load_or_default(CART_KEY);

        let line = if let Some(line) = cart.iter_mut().find(|line| line.name == item.name) {
            // Repeat adds keep the first-seen price string.
            line.quantity += 1;
            line.clone()
        } else {
            let line = CartItem {
                name: item.name,
                price: item.price,
                quantity: 1,
            };
            cart.push(line.clone());
            line
        };

        self.store.save(CART_KEY, &cart)?;
        self.badge.refresh(Self::total_quantity(&cart));

        Ok(line)
    }

    fn item_count(&self) -> u64 {
        let cart: Vec<CartItem> = self.store.load_or_default(CART_KEY);

        Self::total_quantity(&cart)
    }

    fn summarize(&self) -> Option<CartSummary> {
        let cart: Vec<CartItem> = self.store.load_or_default(CART_KEY);

        if cart.is_empty() {
            return None;
        }

        let mut total = Decimal::ZERO;

        let lines = cart
            .into_iter()
            .map(|line| {
                total += pricing::parse_amount(&line.price) * Decimal::from(line.quantity);

                SummaryLine {
                    name: line.name,
                    quantity: line.quantity,
                    price: line.price,
                }
            })
            .collect();

        Some(CartSummary {
            lines,
            total: total.round_dp(2),
        })
    }
}

#[automock]
/// Cart operations.
pub trait CartsService {
    /// Add one unit of the named dish, merging with an existing line of the
    /// same name.
    fn add_item(&mut self, item: NewCartItem) -> Result<CartItem, CartsServiceError>;

    /// Sum of quantities across every cart line.
    fn item_count(&self) -> u64;

    /// Itemised report with a grand total; `None` when the cart is empty.
    fn summarize(&self) -> Option<CartSummary>;
}
