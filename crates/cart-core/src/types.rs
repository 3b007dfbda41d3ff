//! # Domain Types
//!
//! The cart aggregate and its line items.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐         ┌─────────────────────┐               │
//! │  │     CartState       │ 1    n  │      LineItem       │               │
//! │  │  ─────────────────  │────────►│  ─────────────────  │               │
//! │  │  items (Vec)        │         │  sku (unique key)   │               │
//! │  │                     │         │  name               │               │
//! │  │                     │         │  price (Money)      │               │
//! │  │                     │         │  qty  (>= 1)        │               │
//! │  └─────────────────────┘         └─────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one `LineItem` per `sku`
//! - Item order in `items` carries no meaning; see [`crate::views`]

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One distinct product in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stock Keeping Unit - unique within a cart.
    pub sku: String,

    /// Display name.
    pub name: String,

    /// Unit price. Dollars on the wire, cents in memory.
    #[ts(type = "number")]
    pub price: Money,

    /// Units of this product in the cart.
    #[serde(rename = "qty")]
    pub quantity: i64,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price: Money, quantity: i64) -> Self {
        LineItem {
            sku: sku.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart aggregate.
///
/// Only [`crate::reducer::transition`] produces new states from old ones; a
/// `CartState` is never changed in place once handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState { items: Vec::new() }
    }

    /// Builds a cart from existing line items.
    ///
    /// When two items share a sku the later one wins and takes the later
    /// position, the same rule `transition` applies on Add.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut out: Vec<LineItem> = Vec::new();
        for item in items {
            out.retain(|existing| existing.sku != item.sku);
            out.push(item);
        }
        CartState { items: out }
    }

    /// Line items in storage order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up the line item for `sku`.
    pub fn get(&self, sku: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    /// Returns true if an item for `sku` is present.
    pub fn contains(&self, sku: &str) -> bool {
        self.get(sku).is_some()
    }

    /// Number of distinct line items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
