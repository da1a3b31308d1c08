//! In-memory cart aggregation for the customer shop flow.
//!
//! The cart never leaves the process and is never persisted: the backend
//! owns the final total and payment code at checkout, this module only
//! merges lines and projects the request payload.

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// One cart line. The cart holds at most one line per product id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    /// Unit price captured when the product was first added.
    pub unit_price: Price,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Checkout payload entry, one per distinct product in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product_id: ProductId,
    #[serde(rename = "qty")]
    pub quantity: u32,
}

/// Ordered sequence of cart lines keyed by product id.
///
/// Insertion order is preserved; adding a product that is already in the
/// cart bumps that line's quantity instead of appending a duplicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// If a line with the same product id exists its quantity is
    /// incremented and every other line is left untouched; otherwise a
    /// new line with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_id: product.id,
                title: product.title.clone(),
                unit_price: product.price,
                quantity: 1,
            });
        }
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Project the cart into the checkout request payload, one entry per
    /// line, order preserved.
    #[must_use]
    pub fn to_checkout_items(&self) -> Vec<CheckoutItem> {
        self.lines
            .iter()
            .map(|line| CheckoutItem {
                product_id: line.product_id,
                quantity: line.quantity,
            })
            .collect()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}
