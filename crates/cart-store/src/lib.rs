//! # cart-store: The Cart Store Component
//!
//! Wraps the pure `cart-core` transition in a session object that a UI layer
//! constructs once and passes to its consumers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Wiring                                    │
//! │                                                                         │
//! │  let config = CartConfig::load_or_default(None);                        │
//! │  let mut store = CartStore::from_config(&config)?;                      │
//! │                                                                         │
//! │        ┌──────────────┐   &mut store   ┌──────────────────┐            │
//! │        │  Product     │ ─────────────► │ store.dispatch() │            │
//! │        │  list        │                └──────────────────┘            │
//! │        └──────────────┘                                                 │
//! │        ┌──────────────┐   &store       ┌──────────────────┐            │
//! │        │  Cart        │ ─────────────► │ store.view()     │            │
//! │        │  summary     │                └──────────────────┘            │
//! │        └──────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`store`] - `CartStore` and the `CartView` snapshot
//! - [`config`] - `CartConfig` (TOML file + `CART_*` environment)
//! - [`replay`] - feeding a JSON-lines action log through a store
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - `StoreError`

pub mod config;
pub mod error;
pub mod logging;
pub mod replay;
pub mod store;

pub use config::{CartConfig, CurrencySettings, DisplaySettings};
pub use error::{StoreError, StoreResult};
pub use replay::replay;
pub use store::{CartStore, CartView};
