//! # Action Replay
//!
//! Feeds a log of wire actions, one JSON object per line, through a store.
//!
//! ## Input Format
//! ```text
//! # comments and blank lines are skipped
//! {"type":"ADD","payload":{"sku":"AAAA0001","name":"Tea","price":10}}
//!
//! {"type":"REMOVE","payload":{"sku":"AAAA0001"}}
//! ```
//!
//! The first line that fails to decode or dispatch stops the replay. Actions
//! before it stay applied.

use std::io::BufRead;

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::store::CartStore;

/// Dispatches every action in `reader` into `store`, in order.
///
/// Returns the number of actions dispatched.
///
/// ## Errors
/// `StoreError::Replay` carrying the 1-based line number and the underlying
/// decode or dispatch error.
///
/// ## Example
/// ```rust
/// use cart_store::{replay, CartStore};
///
/// let log = "# tea\n{\"type\":\"ADD\",\"payload\":{\"sku\":\"AAAA0001\",\"name\":\"Tea\",\"price\":10}}\n";
/// let mut store = CartStore::new();
/// assert_eq!(replay(log.as_bytes(), &mut store).unwrap(), 1);
/// assert_eq!(store.total_price(), "$10.00");
/// ```
pub fn replay<R: BufRead>(reader: R, store: &mut CartStore) -> StoreResult<usize> {
    let mut dispatched = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| at_line(line_no, e.into()))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        store
            .dispatch_json(line)
            .map_err(|e| at_line(line_no, e))?;
        dispatched += 1;
        debug!(line = line_no, "replayed action");
    }

    Ok(dispatched)
}

fn at_line(line: usize, source: StoreError) -> StoreError {
    StoreError::Replay {
        line,
        source: Box::new(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{ActionKind, CoreError};

    const SESSION: &str = r#"
# two teas and a mug
{"type":"ADD","payload":{"sku":"AAAA0001","name":"Tea","price":10}}
{"type":"ADD","payload":{"sku":"AAAA0001","name":"Tea","price":10}}

{"type":"ADD","payload":{"sku":"BBBB0002","name":"Mug","price":5}}
"#;

    #[test]
    fn test_replay_skips_comments_and_blank_lines() {
        let mut store = CartStore::new();
        let count = replay(SESSION.as_bytes(), &mut store).unwrap();

        assert_eq!(count, 3);
        let view = store.view();
        assert_eq!(view.total_items, 3);
        assert_eq!(view.total_price, "$25.00");
        assert_eq!(view.cart[0].sku, "AAAA0001");
    }

    #[test]
    fn test_replay_stops_at_first_failure() {
        let log = "\
{\"type\":\"ADD\",\"payload\":{\"sku\":\"AAAA0001\",\"name\":\"Tea\",\"price\":9.99}}
# no payload below
{\"type\":\"REMOVE\"}
{\"type\":\"ADD\",\"payload\":{\"sku\":\"BBBB0002\",\"name\":\"Mug\",\"price\":5}}
";
        let mut store = CartStore::new();
        let err = replay(log.as_bytes(), &mut store).unwrap_err();

        match &err {
            StoreError::Replay { line, source } => {
                assert_eq!(*line, 3);
                assert!(matches!(
                    **source,
                    StoreError::Core(CoreError::MissingPayload {
                        action: ActionKind::Remove
                    })
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            err.to_string(),
            "line 3: action.payload is missing in REMOVE action"
        );

        // The first line stays applied; the line after the failure never runs.
        assert_eq!(store.total_items(), 1);
        assert_eq!(store.total_price(), "$9.99");
        assert_eq!(store.dispatch_count(), 1);
    }

    #[test]
    fn test_replay_reports_bad_json_line() {
        let mut store = CartStore::new();
        let err = replay("{\"type\":\"RESET\"}\nnot json\n".as_bytes(), &mut store).unwrap_err();

        assert!(matches!(
            err,
            StoreError::Replay { line: 2, ref source } if matches!(**source, StoreError::InvalidAction(_))
        ));
    }

    #[test]
    fn test_replay_empty_input() {
        let mut store = CartStore::new();
        assert_eq!(replay("".as_bytes(), &mut store).unwrap(), 0);
        assert_eq!(store.total_price(), "$0.00");
    }
}
