//! Lenient decoding of the documents served by the remote store.
//!
//! The store is schemaless, so nothing here fails on unexpected shapes: missing or mistyped
//! fields simply decode as absent.

use serde_json::Value;
use tracing::debug;

use crate::history::{HistoryEntry, HistoryRecord};
use crate::position::Position;

/// The root document holding the device's live fix and GPS-active flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationDocument {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub active: bool,
}

impl LocationDocument {
    /// The reported position, present only when both coordinates are numbers.
    pub fn position(&self) -> Option<Position> {
        Some(Position::new(self.latitude?, self.longitude?))
    }
}

impl From<&Value> for LocationDocument {
    fn from(value: &Value) -> Self {
        Self {
            latitude: value.get("latitude").and_then(Value::as_f64),
            longitude: value.get("longitude").and_then(Value::as_f64),
            active: value.get("active").is_some_and(is_active_flag),
        }
    }
}

impl From<Value> for LocationDocument {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

/// The device counts as active only when the flag is the number `1` or the string `"1"`.
fn is_active_flag(flag: &Value) -> bool {
    match flag {
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s == "1",
        _ => false,
    }
}

/// Decode the history collection, a map from store-assigned id to entry body.
///
/// A `null` collection is empty. Entries whose body does not decode are skipped. The result is
/// in store order; callers impose their own ordering.
pub fn parse_history(value: Value) -> Vec<HistoryEntry> {
    let Value::Object(map) = value else {
        return Vec::new();
    };

    map.into_iter()
        .filter_map(
            |(id, body)| match serde_json::from_value::<HistoryRecord>(body) {
                Ok(record) => Some(HistoryEntry::from_record(id, record)),
                Err(e) => {
                    debug!(id = %id, error = %e, "Skipping malformed history entry");
                    None
                }
            },
        )
        .collect()
}
