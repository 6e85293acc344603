//! Pure cart model shared by the storefront UI and its tests.
//!
//! This crate owns everything the cart panel computes: line items, the
//! subtotal, amount formatting, quantity parsing, and the mapping from panel
//! interactions to intents. It has no UI or I/O so the panel's behavior can be
//! tested without a browser.

pub mod line_item;
pub mod panel;
pub mod quantity;

pub use line_item::{CartLineItem, Product, ProductId, format_amount, item_count, subtotal};
pub use panel::{CHECKOUT_ROUTE, CartIntent, PanelEvent, PanelRow, PanelView, handle_event, project};
pub use quantity::{QuantityParseError, parse_quantity};
