//! Property tests for the cart transition function.

use cart_core::{transition, Action, ActionKind, ActionPayload, CartState, LineItem, Money};
use proptest::prelude::*;

fn arb_sku() -> impl Strategy<Value = String> {
    ("[A-D]{4}", 0u32..20).prop_map(|(prefix, n)| format!("{}{:04}", prefix, n))
}

fn arb_item() -> impl Strategy<Value = LineItem> {
    (arb_sku(), 0i64..100_000, 1i64..50)
        .prop_map(|(sku, cents, qty)| LineItem::new(sku.clone(), sku, Money::from_cents(cents), qty))
}

fn arb_cart() -> impl Strategy<Value = CartState> {
    prop::collection::vec(arb_item(), 0..12).prop_map(CartState::from_items)
}

fn arb_reset_kind() -> impl Strategy<Value = ActionKind> {
    prop_oneof![
        Just(ActionKind::Reset),
        Just(ActionKind::Quantity),
        Just(ActionKind::Submit),
        Just(ActionKind::Unknown),
    ]
}

fn sorted_items(state: &CartState) -> Vec<LineItem> {
    let mut items = state.items().to_vec();
    items.sort_by(|a, b| a.sku.cmp(&b.sku));
    items
}

proptest! {
    #[test]
    fn test_add_absent_sku_inserts_one(cart in arb_cart(), sku in arb_sku(), cents in 0i64..10_000) {
        prop_assume!(!cart.contains(&sku));

        let next = transition(&cart, &Action::add(sku.clone(), "New", Money::from_cents(cents))).unwrap();

        prop_assert_eq!(next.items().iter().filter(|i| i.sku == sku).count(), 1);
        prop_assert_eq!(next.get(&sku).unwrap().quantity, 1);
        prop_assert_eq!(next.len(), cart.len() + 1);
    }

    #[test]
    fn test_add_present_sku_increments_only_that_line(cart in arb_cart(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!cart.is_empty());
        let target = pick.get(cart.items()).clone();

        let next = transition(&cart, &Action::add(target.sku.clone(), target.name.clone(), target.price)).unwrap();

        prop_assert_eq!(next.get(&target.sku).unwrap().quantity, target.quantity + 1);
        for item in cart.items().iter().filter(|i| i.sku != target.sku) {
            prop_assert_eq!(next.get(&item.sku), Some(item));
        }
        prop_assert_eq!(next.len(), cart.len());
    }

    #[test]
    fn test_remove_leaves_everything_else(cart in arb_cart(), sku in arb_sku()) {
        let next = transition(&cart, &Action::remove(sku.clone())).unwrap();

        prop_assert!(!next.contains(&sku));
        let expected: Vec<LineItem> = cart.items().iter().filter(|i| i.sku != sku).cloned().collect();
        prop_assert_eq!(next.items(), expected.as_slice());
    }

    #[test]
    fn test_reset_kinds_always_empty(cart in arb_cart(), kind in arb_reset_kind(), sku in arb_sku()) {
        let with_payload = Action::new(kind, Some(ActionPayload::sku(sku)));
        prop_assert!(transition(&cart, &with_payload).unwrap().is_empty());
        prop_assert!(transition(&cart, &Action::new(kind, None)).unwrap().is_empty());
    }

    #[test]
    fn test_item_count_tracks_adds(skus in prop::collection::vec(arb_sku(), 0..40)) {
        let mut cart = CartState::new();
        for sku in &skus {
            cart = transition(&cart, &Action::add(sku.clone(), "Item", Money::from_cents(100))).unwrap();
        }

        let sum: i64 = cart.items().iter().map(|i| i.quantity).sum();
        prop_assert_eq!(cart.total_items(), sum);
        prop_assert_eq!(cart.total_items(), skus.len() as i64);
        prop_assert_eq!(cart.total_price().cents(), 100 * skus.len() as i64);
    }

    #[test]
    fn test_add_then_remove_fresh_sku_restores_items(cart in arb_cart(), sku in arb_sku()) {
        prop_assume!(!cart.contains(&sku));

        let added = transition(&cart, &Action::add(sku.clone(), "Tmp", Money::from_cents(1))).unwrap();
        let removed = transition(&added, &Action::remove(sku)).unwrap();

        prop_assert_eq!(sorted_items(&removed), sorted_items(&cart));
    }

    #[test]
    fn test_missing_payload_never_changes_input(cart in arb_cart(), remove in any::<bool>()) {
        let before = cart.clone();
        let kind = if remove { ActionKind::Remove } else { ActionKind::Add };

        prop_assert!(transition(&cart, &Action::new(kind, None)).is_err());
        prop_assert_eq!(cart, before);
    }

    #[test]
    fn test_display_order_is_a_sorted_permutation(cart in arb_cart()) {
        let ordered = cart.display_order(cart_core::SKU_SORT_SUFFIX_LEN);

        prop_assert_eq!(ordered.len(), cart.len());
        let keys: Vec<i64> = ordered
            .iter()
            .map(|i| cart_core::sku_sort_key(&i.sku, 4).unwrap())
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));

        let mut a = ordered.clone();
        a.sort_by(|x, y| x.sku.cmp(&y.sku));
        prop_assert_eq!(a, sorted_items(&cart));
    }
}
