//! Render model and intents for the cart panel.
//!
//! DESIGN
//! ======
//! The panel is a controlled view. [`project`] turns `(visible, items)` into a
//! [`PanelView`], and [`handle_event`] turns a user interaction into at most one
//! [`CartIntent`] for the state owner. Neither function touches state, so the
//! component that wraps them only has to wire callbacks.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::line_item::{CartLineItem, ProductId, format_amount, subtotal};
use crate::quantity::parse_quantity;

/// Logical route requested when the user checks out.
pub const CHECKOUT_ROUTE: &str = "/checkout";

/// One rendered cart row.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelRow {
    pub product_id: ProductId,
    pub name: String,
    /// Thumbnail reference. `None` renders the placeholder.
    pub image: Option<String>,
    pub unit_price_label: String,
    pub quantity: i64,
}

/// Everything the panel displays for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub visible: bool,
    pub rows: Vec<PanelRow>,
    pub subtotal: f64,
    pub subtotal_label: String,
}

impl PanelView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A user interaction inside the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    /// Close control, backdrop click, or Escape.
    Dismiss,
    Decrement { product_id: ProductId, current: i64 },
    Increment { product_id: ProductId, current: i64 },
    /// Raw text committed in a row's quantity field.
    EditQuantity { product_id: ProductId, raw: String },
    Checkout,
}

/// A state change requested from the panel's owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartIntent {
    SetVisible(bool),
    ChangeQuantity { product_id: ProductId, quantity: i64 },
    Navigate(String),
}

/// Build the render model for the current inputs.
#[must_use]
pub fn project(visible: bool, items: &[CartLineItem]) -> PanelView {
    let rows = items
        .iter()
        .map(|item| PanelRow {
            product_id: item.product.id,
            name: item.product.name.clone(),
            image: item.thumbnail().map(str::to_owned),
            unit_price_label: format_amount(item.product.price),
            quantity: item.quantity,
        })
        .collect();
    let total = subtotal(items);
    PanelView { visible, rows, subtotal: total, subtotal_label: format_amount(total) }
}

/// Map a panel interaction to the intent it requests.
///
/// Steppers never clamp, so decrementing from 1 asks for 0. A quantity edit
/// that does not parse returns `None`; every other event returns one intent.
#[must_use]
pub fn handle_event(event: PanelEvent) -> Option<CartIntent> {
    match event {
        PanelEvent::Dismiss => Some(CartIntent::SetVisible(false)),
        PanelEvent::Decrement { product_id, current } => {
            Some(CartIntent::ChangeQuantity { product_id, quantity: current.saturating_sub(1) })
        }
        PanelEvent::Increment { product_id, current } => {
            Some(CartIntent::ChangeQuantity { product_id, quantity: current.saturating_add(1) })
        }
        PanelEvent::EditQuantity { product_id, raw } => parse_quantity(&raw)
            .ok()
            .map(|quantity| CartIntent::ChangeQuantity { product_id, quantity }),
        PanelEvent::Checkout => Some(CartIntent::Navigate(CHECKOUT_ROUTE.to_owned())),
    }
}
