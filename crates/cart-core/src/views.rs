//! # Derived Views
//!
//! Values computed from a `CartState` on every read. Nothing is cached; carts
//! hold a few dozen lines at most.
//!
//! ## Display Order
//! ```text
//! sku            trailing 4    key
//! ─────────────  ──────────    ─────────
//! "BBBB0002"     "0002"        Some(2)
//! "AAAA0001"     "0001"        Some(1)      sorted: 0001, 0002, 0010, GIFT
//! "CCCC0010"     "0010"        Some(10)
//! "GIFT"         "GIFT"        None   ──►   keyless items go last
//! ```
//!
//! The comparison is numeric, not lexicographic. Items without a key keep
//! their relative storage order after every keyed item.

use crate::money::Money;
use crate::types::{CartState, LineItem};

/// Extracts the numeric display key from the last `suffix_len` characters of
/// `sku` (the whole sku when shorter).
///
/// Surrounding whitespace is ignored and an empty suffix reads as `0`. A
/// suffix that is not a base-10 integer has no key.
///
/// Only plain integers count. Decimal (`"1.50"`), exponent (`"1e03"`) and
/// hex (`"0x1F"`) suffixes are keyless on purpose, so they are placed after
/// every catalogue number instead of being ranked among them.
///
/// ## Example
/// ```rust
/// use cart_core::sku_sort_key;
///
/// assert_eq!(sku_sort_key("AAAA0010", 4), Some(10));
/// assert_eq!(sku_sort_key("12", 4), Some(12));
/// assert_eq!(sku_sort_key("GIFT", 4), None);
/// ```
pub fn sku_sort_key(sku: &str, suffix_len: usize) -> Option<i64> {
    let start = match suffix_len.checked_sub(1) {
        Some(back) => sku.char_indices().rev().nth(back).map_or(0, |(i, _)| i),
        None => sku.len(),
    };

    let suffix = sku[start..].trim();
    if suffix.is_empty() {
        return Some(0);
    }
    suffix.parse().ok()
}

impl CartState {
    /// Sum of quantities over all lines. Zero for an empty cart.
    pub fn total_items(&self) -> i64 {
        self.items().iter().map(|item| item.quantity).sum()
    }

    /// Sum of `price × quantity` over all lines, unformatted.
    ///
    /// Format the result once with [`crate::money::CurrencyFormat`].
    pub fn total_price(&self) -> Money {
        self.items().iter().map(LineItem::line_total).sum()
    }

    /// A copy of the items sorted for display by [`sku_sort_key`].
    ///
    /// The state itself is left in storage order.
    pub fn display_order(&self, suffix_len: usize) -> Vec<LineItem> {
        let mut items = self.items().to_vec();
        // (false, Some(k)) < (true, None): keyed first, ascending.
        items.sort_by_key(|item| {
            let key = sku_sort_key(&item.sku, suffix_len);
            (key.is_none(), key)
        });
        items
    }
}
