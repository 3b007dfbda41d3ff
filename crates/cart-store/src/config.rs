//! # Cart Configuration
//!
//! Display settings for a cart store: how totals are formatted and how the
//! display sort key is cut from a sku.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CART_CURRENCY_SYMBOL=€                                             │
//! │     CART_SKU_SORT_DIGITS=6                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/cart-store/cart.toml (Linux)                             │
//! │     ~/Library/Application Support/dev.cart-store.cart-store/cart.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     en-US dollars, 4 digit sku suffix                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # cart.toml
//! [currency]
//! code = "USD"
//! symbol = "$"
//! thousands_separator = ","   # "" disables grouping
//! decimal_separator = "."
//!
//! [display]
//! sku_sort_digits = 4
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use cart_core::validation::{parse_separator, validate_currency_symbol, validate_sort_digits};
use cart_core::{CurrencyFormat, SKU_SORT_SUFFIX_LEN};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Currency Settings
// =============================================================================

/// How totals are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 code.
    #[serde(default = "default_currency_code")]
    pub code: String,

    /// Symbol placed before the amount.
    #[serde(default = "default_currency_symbol")]
    pub symbol: String,

    /// Digit group separator; empty disables grouping.
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    /// Separator before the two minor digits.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
}

fn default_currency_code() -> String {
    "USD".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_thousands_separator() -> String {
    ",".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            code: default_currency_code(),
            symbol: default_currency_symbol(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// How the display order is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Trailing sku characters read as the numeric sort key.
    #[serde(default = "default_sku_sort_digits")]
    pub sku_sort_digits: usize,
}

fn default_sku_sort_digits() -> usize {
    SKU_SORT_SUFFIX_LEN
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            sku_sort_digits: default_sku_sort_digits(),
        }
    }
}

// =============================================================================
// Cart Config
// =============================================================================

/// Complete cart store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl CartConfig {
    /// Loads configuration: file (explicit path or platform default), then
    /// environment overrides, then validation.
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`CartConfig::load`], with `CART_*` overrides read through
    /// `lookup` instead of the process environment.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading cart config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load cart config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses and validates a TOML document. No environment overrides.
    pub fn from_toml_str(contents: &str) -> StoreResult<Self> {
        let config: CartConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Cart config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        self.currency_format()?;
        validate_sort_digits(self.display.sku_sort_digits)?;
        Ok(())
    }

    /// Builds the currency formatter described by `[currency]`.
    pub fn currency_format(&self) -> StoreResult<CurrencyFormat> {
        let currency = &self.currency;
        validate_currency_symbol(&currency.symbol)?;

        let thousands_separator =
            parse_separator("thousands_separator", &currency.thousands_separator)?;
        let decimal_separator = parse_separator("decimal_separator", &currency.decimal_separator)?
            .ok_or_else(|| StoreError::InvalidConfig("decimal_separator is required".into()))?;

        if thousands_separator == Some(decimal_separator) {
            return Err(StoreError::InvalidConfig(format!(
                "thousands_separator and decimal_separator are both '{}'",
                decimal_separator
            )));
        }

        Ok(CurrencyFormat {
            code: currency.code.clone(),
            symbol: currency.symbol.clone(),
            thousands_separator,
            decimal_separator,
        })
    }

    // =========================================================================
    // Overrides
    // =========================================================================

    /// Applies `CART_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup("CART_CURRENCY_CODE") {
            debug!(code = %code, "Overriding currency code from environment");
            self.currency.code = code;
        }

        if let Some(symbol) = lookup("CART_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.currency.symbol = symbol;
        }

        if let Some(sep) = lookup("CART_THOUSANDS_SEPARATOR") {
            self.currency.thousands_separator = sep;
        }

        if let Some(sep) = lookup("CART_DECIMAL_SEPARATOR") {
            self.currency.decimal_separator = sep;
        }

        if let Some(digits) = lookup("CART_SKU_SORT_DIGITS") {
            match digits.parse::<usize>() {
                Ok(d) => self.display.sku_sort_digits = d,
                Err(_) => warn!(value = %digits, "Ignoring non-numeric CART_SKU_SORT_DIGITS"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "cart-store", "cart-store")
            .map(|dirs| dirs.config_dir().join("cart.toml"))
    }
}
