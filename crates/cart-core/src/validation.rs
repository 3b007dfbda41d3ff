//! # Validation Module
//!
//! The few checks the cart performs on its inputs.
//!
//! ## What Is (and Is Not) Checked
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checked                                                                │
//! │  ├── ADD / REMOVE carry a payload            → CoreError::MissingPayload│
//! │  └── Display settings (symbol, separators, sort digits)                 │
//! │                                                                         │
//! │  Accepted as-is                                                         │
//! │  ├── Negative or zero prices                                            │
//! │  ├── Sku format (empty, short, non-numeric suffix)                      │
//! │  └── Names                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Malformed skus and prices produce best-effort results downstream
//! (unordered display placement, odd totals), never errors.

use crate::action::{Action, ActionPayload};
use crate::error::{CoreError, CoreResult, ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest sku suffix accepted as a sort key width.
pub const MAX_SORT_DIGITS: usize = 16;

// =============================================================================
// Action Validators
// =============================================================================

/// Returns the payload of `action`, or `MissingPayload` naming its kind.
///
/// ## Example
/// ```rust
/// use cart_core::validation::require_payload;
/// use cart_core::{Action, ActionKind, CoreError};
///
/// assert!(require_payload(&Action::remove("AAAA0001")).is_ok());
///
/// let bare = Action::new(ActionKind::Add, None);
/// assert_eq!(
///     require_payload(&bare).unwrap_err(),
///     CoreError::MissingPayload { action: ActionKind::Add }
/// );
/// ```
pub fn require_payload(action: &Action) -> CoreResult<&ActionPayload> {
    action.payload.as_ref().ok_or(CoreError::MissingPayload {
        action: action.kind,
    })
}

// =============================================================================
// Display Settings Validators
// =============================================================================

/// Validates a currency symbol.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_currency_symbol(symbol: &str) -> ValidationResult<()> {
    if symbol.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency symbol".to_string(),
        });
    }
    Ok(())
}

/// Validates a separator setting and returns it as a character.
///
/// ## Rules
/// - Empty string means "no separator" (`None`)
/// - Otherwise exactly one character
///
/// ## Example
/// ```rust
/// use cart_core::validation::parse_separator;
///
/// assert_eq!(parse_separator("thousands_separator", ",").unwrap(), Some(','));
/// assert_eq!(parse_separator("thousands_separator", "").unwrap(), None);
/// assert!(parse_separator("thousands_separator", ",,").is_err());
/// ```
pub fn parse_separator(field: &str, value: &str) -> ValidationResult<Option<char>> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a single character".to_string(),
        }),
    }
}

/// Validates the number of trailing sku characters used for display order.
///
/// ## Rules
/// - Between 1 and [`MAX_SORT_DIGITS`]
pub fn validate_sort_digits(digits: usize) -> ValidationResult<()> {
    if digits == 0 || digits > MAX_SORT_DIGITS {
        return Err(ValidationError::OutOfRange {
            field: "sku_sort_digits".to_string(),
            min: 1,
            max: MAX_SORT_DIGITS as i64,
        });
    }
    Ok(())
}
