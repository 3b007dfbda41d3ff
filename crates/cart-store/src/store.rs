//! # Cart Store
//!
//! One cart session: the current `CartState`, the dispatch entry point and
//! the derived views consumers read.
//!
//! ## Ownership
//! The store is built once per session and passed explicitly (by `&` or
//! `&mut`) to whatever needs it. There is no global or ambient instance.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Caller                     CartStore                 cart-core         │
//! │  ──────                     ─────────                 ─────────         │
//! │                                                                         │
//! │  dispatch(action) ────────► transition(&state, &a) ─► Ok(next)          │
//! │                             state = next                                │
//! │                                                                         │
//! │  dispatch_json(text) ─────► serde_json ─► dispatch()                    │
//! │                                                                         │
//! │  total_items() ───────────► state.total_items()                         │
//! │  total_price() ───────────► format(state.total_price())                 │
//! │  cart() ──────────────────► state.display_order(digits)  (a copy)       │
//! │  view() ──────────────────► CartView { cart, totalItems, totalPrice }   │
//! │                                                                         │
//! │  NOTE: a failed dispatch leaves the state exactly as it was.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use cart_core::{
    transition, Action, ActionKind, CartState, CurrencyFormat, LineItem, Money,
    SKU_SORT_SUFFIX_LEN,
};

use crate::config::CartConfig;
use crate::error::StoreResult;

// =============================================================================
// Cart View
// =============================================================================

/// Everything a cart display needs, computed in one read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Items in display order.
    pub cart: Vec<LineItem>,

    /// Sum of quantities.
    pub total_items: i64,

    /// Formatted total price.
    pub total_price: String,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The cart store.
#[derive(Debug, Clone)]
pub struct CartStore {
    state: CartState,
    format: CurrencyFormat,
    sort_digits: usize,
    created_at: DateTime<Utc>,
    dispatch_count: u64,
}

impl CartStore {
    /// Creates a store with an empty cart and default display settings.
    pub fn new() -> Self {
        CartStore {
            state: CartState::new(),
            format: CurrencyFormat::default(),
            sort_digits: SKU_SORT_SUFFIX_LEN,
            created_at: Utc::now(),
            dispatch_count: 0,
        }
    }

    /// Creates a store with an empty cart using `config`'s display settings.
    pub fn from_config(config: &CartConfig) -> StoreResult<Self> {
        config.validate()?;
        Ok(CartStore {
            format: config.currency_format()?,
            sort_digits: config.display.sku_sort_digits,
            ..CartStore::new()
        })
    }

    /// Replaces the cart with `state` (restoring a session, seeding tests).
    pub fn with_state(mut self, state: CartState) -> Self {
        self.state = state;
        self
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Applies `action` to the cart.
    ///
    /// ## Errors
    /// `CoreError::MissingPayload` (wrapped) when ADD or REMOVE has no
    /// payload. The cart is unchanged in that case.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Action, Money};
    /// use cart_store::CartStore;
    ///
    /// let mut store = CartStore::new();
    /// store.dispatch(Action::add("AAAA0001", "Tea", Money::from_cents(1000))).unwrap();
    /// store.dispatch(Action::add("AAAA0001", "Tea", Money::from_cents(1000))).unwrap();
    /// store.dispatch(Action::add("BBBB0002", "Mug", Money::from_cents(500))).unwrap();
    ///
    /// assert_eq!(store.total_items(), 3);
    /// assert_eq!(store.total_price(), "$25.00");
    /// ```
    pub fn dispatch(&mut self, action: Action) -> StoreResult<()> {
        debug!(action = %action.kind, sku = ?action.sku(), "dispatch");

        let next = transition(&self.state, &action)?;
        self.dispatch_count += 1;

        if action.kind.resets() {
            self.created_at = Utc::now();
        }
        self.state = next;
        Ok(())
    }

    /// Decodes a JSON action (`{"type": "...", "payload": {...}}`) and
    /// dispatches it.
    pub fn dispatch_json(&mut self, json: &str) -> StoreResult<()> {
        let action: Action = serde_json::from_str(json)?;
        self.dispatch(action)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The current cart in storage order.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.state.total_items()
    }

    /// Total price, unformatted.
    pub fn total_price_money(&self) -> Money {
        self.state.total_price()
    }

    /// Total price, formatted with the configured currency.
    pub fn total_price(&self) -> String {
        self.format.format(self.state.total_price())
    }

    /// Items in display order. A fresh copy on every call.
    pub fn cart(&self) -> Vec<LineItem> {
        self.state.display_order(self.sort_digits)
    }

    /// Snapshot of every derived view.
    pub fn view(&self) -> CartView {
        CartView {
            cart: self.cart(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }

    /// The action kinds this store understands.
    pub fn action_kinds(&self) -> &'static [ActionKind] {
        &ActionKind::ALL
    }

    /// When the session started or was last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Number of successful dispatches.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
