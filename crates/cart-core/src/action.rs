//! # Actions
//!
//! Tagged requests to move the cart from one state to the next.
//!
//! ## Wire Form
//! ```text
//! { "type": "ADD",    "payload": { "sku": "AAAA0001", "name": "Tea", "price": 9.99 } }
//! { "type": "REMOVE", "payload": { "sku": "AAAA0001" } }
//! { "type": "RESET" }
//! ```
//!
//! ## Kind Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ADD      ──► add one unit (payload required)                          │
//! │  REMOVE   ──► drop the line (payload required)                         │
//! │  QUANTITY ──┐                                                          │
//! │  SUBMIT   ──┼──► reset: clear every line                               │
//! │  RESET    ──┤                                                          │
//! │  <other>  ──┘                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! QUANTITY and SUBMIT are declared kinds with no behavior of their own; they
//! clear the cart like RESET does.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Action Kind
// =============================================================================

/// The tag of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    /// Add one unit of a product.
    Add,
    /// Remove a product's line entirely.
    Remove,
    /// Declared, not implemented: behaves as [`ActionKind::Reset`].
    Quantity,
    /// Declared, not implemented: behaves as [`ActionKind::Reset`].
    Submit,
    /// Clear the cart.
    Reset,
    /// Any tag this build does not recognise. Behaves as a reset.
    #[serde(other)]
    Unknown,
}

impl ActionKind {
    /// Every declared kind, in declaration order.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Add,
        ActionKind::Remove,
        ActionKind::Quantity,
        ActionKind::Submit,
        ActionKind::Reset,
    ];

    /// Returns the wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Add => "ADD",
            ActionKind::Remove => "REMOVE",
            ActionKind::Quantity => "QUANTITY",
            ActionKind::Submit => "SUBMIT",
            ActionKind::Reset => "RESET",
            ActionKind::Unknown => "UNKNOWN",
        }
    }

    /// Returns true if the kind cannot be applied without a payload.
    pub fn requires_payload(&self) -> bool {
        matches!(self, ActionKind::Add | ActionKind::Remove)
    }

    /// Returns true if the kind clears the cart.
    pub fn resets(&self) -> bool {
        !self.requires_payload()
    }

    /// Returns true if the kind has its own transition. The rest only clear
    /// the cart by falling through to reset.
    pub fn has_handler(&self) -> bool {
        matches!(self, ActionKind::Add | ActionKind::Remove | ActionKind::Reset)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a wire tag. Never fails: unrecognised tags map to `Unknown`.
impl FromStr for ActionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ADD" => ActionKind::Add,
            "REMOVE" => ActionKind::Remove,
            "QUANTITY" => ActionKind::Quantity,
            "SUBMIT" => ActionKind::Submit,
            "RESET" => ActionKind::Reset,
            _ => ActionKind::Unknown,
        })
    }
}

// =============================================================================
// Action Payload
// =============================================================================

/// The product an action refers to.
///
/// REMOVE only reads `sku`, so `name` and `price` default when absent.
/// `price` is a dollar amount on the wire and is rounded to the cent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionPayload {
    pub sku: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    #[ts(type = "number")]
    pub price: Money,
}

impl ActionPayload {
    /// Payload naming a product by sku only.
    pub fn sku(sku: impl Into<String>) -> Self {
        ActionPayload {
            sku: sku.into(),
            name: String::new(),
            price: Money::zero(),
        }
    }
}

// =============================================================================
// Action
// =============================================================================

/// A request to transition the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ActionPayload>,
}

impl Action {
    /// Builds an action from its parts, payload optional.
    pub fn new(kind: ActionKind, payload: Option<ActionPayload>) -> Self {
        Action { kind, payload }
    }

    /// Adds one unit of `sku`.
    pub fn add(sku: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Action::new(
            ActionKind::Add,
            Some(ActionPayload {
                sku: sku.into(),
                name: name.into(),
                price,
            }),
        )
    }

    /// Removes the line for `sku`.
    pub fn remove(sku: impl Into<String>) -> Self {
        Action::new(ActionKind::Remove, Some(ActionPayload::sku(sku)))
    }

    /// Clears the cart.
    pub fn reset() -> Self {
        Action::new(ActionKind::Reset, None)
    }

    /// The sku this action targets, if it carries a payload.
    pub fn sku(&self) -> Option<&str> {
        self.payload.as_ref().map(|p| p.sku.as_str())
    }
}
