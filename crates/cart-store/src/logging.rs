//! # Logging
//!
//! Structured logging setup for hosts of the cart store.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show every dispatch
//! - `RUST_LOG=cart_core=trace` - Include reset details from the transition
//! - Default: INFO, DEBUG for the cart crates
//!
//! Events go to stderr so stdout stays free for program output.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,cart=debug";

/// Installs the global tracing subscriber.
///
/// Does nothing if the host already installed one.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::debug!("still logging");
    }
}
