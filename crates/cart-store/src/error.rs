//! # Store Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │    Dispatch     │  │    Decoding     │  │     Configuration       │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Core           │  │  InvalidAction  │  │  InvalidConfig          │ │
//! │  │  (MissingPayload│  │  (bad JSON)     │  │  ConfigLoadFailed       │ │
//! │  │   from core)    │  │  Replay (line N)│  │  ConfigSaveFailed / Io  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use cart_core::{CoreError, ValidationError};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the cart store.
#[derive(Debug, Error)]
pub enum StoreError {
    // =========================================================================
    // Dispatch Errors
    // =========================================================================
    /// The transition rejected the action; the state was not changed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A wire action could not be decoded.
    #[error("Invalid action: {0}")]
    InvalidAction(#[from] serde_json::Error),

    /// A replayed line failed; earlier lines stay applied.
    #[error("line {line}: {source}")]
    Replay {
        line: usize,
        #[source]
        source: Box<StoreError>,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// A configuration value failed validation.
    #[error("Invalid cart configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to write the config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    /// File system error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::InvalidConfig(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::ConfigSaveFailed(err.to_string())
    }
}
