//! Cart Models

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// One line of the shopping cart, as stored under the `cart` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Dish display name, unique within the cart.
    pub name: String,

    /// Display price as shown on the dish card, e.g. `"R120.00"`.
    pub price: String,

    pub quantity: u64,
}

/// New item request at the handler boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub name: String,
    pub price: String,
}

/// One rendered line of a cart summary. Carries the original price string.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct SummaryLine {
    #[tabled(rename = "Item")]
    pub name: String,

    #[tabled(rename = "Qty")]
    pub quantity: u64,

    #[tabled(rename = "Price")]
    pub price: String,
}

/// Itemised cart report with a grand total, rounded to two places.
///
/// A summary only exists for a non-empty cart; the empty case is the
/// `None` returned by [`super::CartsService::summarize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub lines: Vec<SummaryLine>,
    pub total: Decimal,
}

impl fmt::Display for CartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cart Items:")?;
        writeln!(f)?;

        for line in &self.lines {
            writeln!(f, "{} x{} - {}", line.name, line.quantity, line.price)?;
        }

        writeln!(f)?;
        write!(f, "Total: R{:.2}", self.total)
    }
}
