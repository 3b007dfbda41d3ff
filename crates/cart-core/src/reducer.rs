//! # Transition Function
//!
//! `transition(state, action)` is the only way a cart changes.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  &CartState ──┐                                                         │
//! │               ├──► transition() ──► Ok(new CartState)                   │
//! │  &Action   ───┘          │                                              │
//! │                          └────────► Err(MissingPayload)                 │
//! │                                     (input state untouched)             │
//! │                                                                         │
//! │  ADD    : others + { sku, name, price, qty: old qty + 1 or 1 }          │
//! │  REMOVE : others                                                        │
//! │  *      : []                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The updated or inserted item is appended after the untouched items; the
//! storage order is not the display order (see [`crate::views`]).

use tracing::{trace, warn};

use crate::action::{Action, ActionKind, ActionPayload};
use crate::error::CoreResult;
use crate::types::{CartState, LineItem};
use crate::validation::require_payload;

/// Applies `action` to `state` and returns the resulting state.
///
/// Never mutates `state`. Fails only when ADD or REMOVE has no payload.
///
/// ## Example
/// ```rust
/// use cart_core::{transition, Action, CartState, Money};
///
/// let empty = CartState::new();
/// let one = transition(&empty, &Action::add("AAAA0001", "Tea", Money::from_cents(1000))).unwrap();
/// let two = transition(&one, &Action::add("AAAA0001", "Tea", Money::from_cents(1000))).unwrap();
///
/// assert_eq!(two.get("AAAA0001").unwrap().quantity, 2);
/// assert!(empty.is_empty());
/// ```
pub fn transition(state: &CartState, action: &Action) -> CoreResult<CartState> {
    match action.kind {
        ActionKind::Add => Ok(add(state, require_payload(action)?)),
        ActionKind::Remove => Ok(remove(state, &require_payload(action)?.sku)),
        kind => {
            if !kind.has_handler() {
                warn!(action = %kind, "action kind has no handler, clearing cart");
            }
            trace!(action = %kind, dropped = state.len(), "cart reset");
            Ok(CartState::new())
        }
    }
}

fn add(state: &CartState, payload: &ActionPayload) -> CartState {
    let quantity = state
        .get(&payload.sku)
        .map_or(1, |existing| existing.quantity + 1);

    let items = others(state, &payload.sku).chain(std::iter::once(LineItem {
        sku: payload.sku.clone(),
        name: payload.name.clone(),
        price: payload.price,
        quantity,
    }));

    CartState::from_items(items)
}

fn remove(state: &CartState, sku: &str) -> CartState {
    CartState::from_items(others(state, sku))
}

fn others<'a>(state: &'a CartState, sku: &'a str) -> impl Iterator<Item = LineItem> + 'a {
    state
        .items()
        .iter()
        .filter(move |item| item.sku != sku)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::money::Money;

    fn cart(items: &[(&str, i64, i64)]) -> CartState {
        CartState::from_items(items.iter().map(|(sku, cents, qty)| {
            LineItem::new(*sku, format!("Item {}", sku), Money::from_cents(*cents), *qty)
        }))
    }

    #[test]
    fn test_add_new_sku_inserts_with_quantity_one() {
        let state = cart(&[("AAAA0001", 1000, 2)]);
        let next = transition(&state, &Action::add("BBBB0002", "Mug", Money::from_cents(500))).unwrap();

        assert_eq!(next.len(), 2);
        let mug = next.get("BBBB0002").unwrap();
        assert_eq!(mug.quantity, 1);
        assert_eq!(mug.name, "Mug");
        assert_eq!(mug.price.cents(), 500);
    }

    #[test]
    fn test_add_existing_sku_increments_and_moves_last() {
        let state = cart(&[("AAAA0001", 1000, 2), ("BBBB0002", 500, 1)]);
        let next = transition(&state, &Action::add("AAAA0001", "Tea", Money::from_cents(1000))).unwrap();

        assert_eq!(next.len(), 2);
        assert_eq!(next.get("AAAA0001").unwrap().quantity, 3);
        assert_eq!(next.get("BBBB0002").unwrap().quantity, 1);
        assert_eq!(next.items().last().unwrap().sku, "AAAA0001");
    }

    #[test]
    fn test_add_takes_name_and_price_from_payload() {
        let state = cart(&[("AAAA0001", 1000, 1)]);
        let next = transition(&state, &Action::add("AAAA0001", "Tea (new)", Money::from_cents(1200))).unwrap();

        let tea = next.get("AAAA0001").unwrap();
        assert_eq!(tea.quantity, 2);
        assert_eq!(tea.name, "Tea (new)");
        assert_eq!(tea.price.cents(), 1200);
    }

    #[test]
    fn test_add_does_not_touch_input_state() {
        let state = cart(&[("AAAA0001", 1000, 1)]);
        let before = state.clone();
        let _ = transition(&state, &Action::add("AAAA0001", "Tea", Money::from_cents(1000))).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_drops_matching_item_only() {
        let state = cart(&[("AAAA0001", 1000, 2), ("BBBB0002", 500, 1)]);
        let next = transition(&state, &Action::remove("AAAA0001")).unwrap();

        assert!(!next.contains("AAAA0001"));
        assert_eq!(next.items(), &state.items()[1..]);
    }

    #[test]
    fn test_remove_missing_sku_is_noop() {
        let state = cart(&[("AAAA0001", 1000, 2)]);
        let next = transition(&state, &Action::remove("ZZZZ9999")).unwrap();
        assert_eq!(next, state);
    }

    #[test]
    fn test_reset_clears_everything() {
        let state = cart(&[("AAAA0001", 1000, 2), ("BBBB0002", 500, 1)]);
        let next = transition(&state, &Action::reset()).unwrap();
        assert!(next.is_empty());
    }

    /// QUANTITY and SUBMIT have no handler of their own and clear the cart.
    /// This locks in current behavior until their semantics are defined.
    #[test]
    fn test_quantity_and_submit_fall_through_to_reset() {
        let state = cart(&[("AAAA0001", 1000, 2)]);
        for kind in [ActionKind::Quantity, ActionKind::Submit, ActionKind::Unknown] {
            let with_payload = Action::new(kind, Some(ActionPayload::sku("AAAA0001")));
            assert!(transition(&state, &with_payload).unwrap().is_empty());
            assert!(transition(&state, &Action::new(kind, None)).unwrap().is_empty());
        }
    }

    #[test]
    fn test_missing_payload_is_an_error() {
        let state = cart(&[("AAAA0001", 1000, 2)]);

        let err = transition(&state, &Action::new(ActionKind::Add, None)).unwrap_err();
        assert_eq!(err, CoreError::MissingPayload { action: ActionKind::Add });

        let err = transition(&state, &Action::new(ActionKind::Remove, None)).unwrap_err();
        assert_eq!(err, CoreError::MissingPayload { action: ActionKind::Remove });

        assert_eq!(state.get("AAAA0001").unwrap().quantity, 2);
    }
}
