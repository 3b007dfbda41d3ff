//! # Error Types
//!
//! Domain-specific error types for cart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cart-core errors (this file)                                          │
//! │  ├── CoreError        - Transition failures                            │
//! │  └── ValidationError  - Display settings failures                      │
//! │                                                                         │
//! │  cart-store errors (separate crate)                                    │
//! │  └── StoreError       - Dispatch, decoding and config failures         │
//! │                                                                         │
//! │  Flow: CoreError / ValidationError → StoreError → caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing payload is a caller contract violation. It is surfaced
//! immediately and never retried.

use thiserror::Error;

use crate::action::ActionKind;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by the transition function.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An action that needs a payload was dispatched without one.
    ///
    /// ## When This Occurs
    /// ```text
    /// dispatch({ type: "ADD" })          ← no payload
    ///      │
    ///      ▼
    /// MissingPayload { action: ADD }
    ///      │
    ///      ▼
    /// State is left exactly as it was
    /// ```
    #[error("action.payload is missing in {action} action")]
    MissingPayload { action: ActionKind },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (e.g., a multi-character separator).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
