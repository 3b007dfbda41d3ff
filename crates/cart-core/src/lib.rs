//! # cart-core: Pure Cart Logic
//!
//! This crate is the **heart** of the cart store. It holds the cart state,
//! the action-driven transition function and the derived views, all as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Store Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Front-end (excluded)                     │   │
//! │  │       Product List ──► Cart Line ──► Cart Summary               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch(action) / read views          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cart-store (CartStore)                       │   │
//! │  │        owns the state, config, tracing, replay binary           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  action   │  │  reducer  │  │   views   │  │   │
//! │  │   │ LineItem  │  │  Action   │  │transition │  │ totals +  │  │   │
//! │  │   │ CartState │  │ActionKind │  │           │  │ sort keys │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBALS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `LineItem` and `CartState`
//! - [`action`] - `Action`, `ActionKind`, `ActionPayload`
//! - [`reducer`] - the transition function
//! - [`views`] - derived values (item count, total, display order)
//! - [`money`] - integer `Money` and currency formatting
//! - [`error`] - domain error types
//! - [`validation`] - payload checks
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{transition, Action, CartState, Money};
//!
//! let state = CartState::new();
//! let state = transition(&state, &Action::add("AAAA0001", "Tea", Money::from_cents(1000))).unwrap();
//! let state = transition(&state, &Action::add("AAAA0001", "Tea", Money::from_cents(1000))).unwrap();
//! let state = transition(&state, &Action::add("BBBB0002", "Mug", Money::from_cents(500))).unwrap();
//!
//! assert_eq!(state.total_items(), 3);
//! assert_eq!(state.total_price().to_string(), "$25.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod error;
pub mod money;
pub mod reducer;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use action::{Action, ActionKind, ActionPayload};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{CurrencyFormat, Money};
pub use reducer::transition;
pub use types::{CartState, LineItem};
pub use views::sku_sort_key;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of trailing sku characters used as the display sort key.
///
/// Skus are expected to end in a four digit catalogue number
/// (`AAAA0001`, `BBBB0010`, ...).
pub const SKU_SORT_SUFFIX_LEN: usize = 4;
