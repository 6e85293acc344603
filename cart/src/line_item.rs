//! Products, cart line items, and subtotal arithmetic.

#[cfg(test)]
#[path = "line_item_test.rs"]
mod line_item_test;

use serde::{Deserialize, Serialize};

/// Stable product identifier.
pub type ProductId = i64;

/// Catalog product as seen by the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, non-negative.
    pub price: f64,
    /// Image references in display order. The first one is the thumbnail.
    #[serde(default)]
    pub images: Vec<String>,
}

/// One distinct product's presence in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product: Product,
    /// Intended to be at least 1. Not enforced here.
    pub quantity: i64,
}

impl CartLineItem {
    #[must_use]
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// `quantity × price` for this line.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.product.price
    }

    /// First image reference, if the product has any.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.product.images.first().map(String::as_str)
    }
}

/// Sum of `quantity × price` across all lines. No tax, discount, or shipping.
#[must_use]
pub fn subtotal(items: &[CartLineItem]) -> f64 {
    items.iter().map(CartLineItem::line_total).sum()
}

/// Total number of units across all lines, saturating at the `i64` bounds.
#[must_use]
pub fn item_count(items: &[CartLineItem]) -> i64 {
    items.iter().fold(0_i64, |acc, item| acc.saturating_add(item.quantity))
}

/// Format an amount with exactly two decimal places and no currency marker.
///
/// Values that round to zero print as `0.00`, never `-0.00`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0.00".to_owned();
    }
    format!("{rounded:.2}")
}
