//! Transport to the remote JSON document store holding the live fix and the history collection.
//!
//! The store exposes two resources:
//! - the root document, carrying `latitude`, `longitude` and the GPS-active flag `active`;
//! - the `history` collection, a map from store-assigned id to
//!   `{ latitude, longitude, timestamp }`.
//!
//! [`RestStore`] talks to a realtime-database style HTTP endpoint, [`MemoryStore`] keeps
//! everything in process and can be told to fail.

use std::future::Future;

mod error;
mod memory;
mod rest;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use rest::RestStore;

use crate::document::LocationDocument;
use crate::history::{HistoryEntry, HistoryRecord};

/// Path of the root document, relative to the store base URL.
pub const ROOT_DOCUMENT_PATH: &str = ".json";

/// Path of the history collection, relative to the store base URL.
pub const HISTORY_PATH: &str = "history.json";

/// The operations the sync client needs from a remote store.
///
/// All futures must be `Send` so a client can drive them from a spawned polling task.
pub trait LocationStore: Send + Sync + 'static {
    /// Read the root document.
    fn fetch_document(&self) -> impl Future<Output = Result<LocationDocument, StoreError>> + Send;

    /// Append a record to the history collection, returning the id the store assigned.
    fn append_history(
        &self,
        record: HistoryRecord,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// Read the whole history collection, in no particular order.
    fn fetch_history(&self) -> impl Future<Output = Result<Vec<HistoryEntry>, StoreError>> + Send;

    /// Delete the whole history collection.
    fn clear_history(&self) -> impl Future<Output = Result<(), StoreError>> + Send;
}

impl<S: LocationStore> LocationStore for std::sync::Arc<S> {
    fn fetch_document(&self) -> impl Future<Output = Result<LocationDocument, StoreError>> + Send {
        (**self).fetch_document()
    }

    fn append_history(
        &self,
        record: HistoryRecord,
    ) -> impl Future<Output = Result<String, StoreError>> + Send {
        (**self).append_history(record)
    }

    fn fetch_history(&self) -> impl Future<Output = Result<Vec<HistoryEntry>, StoreError>> + Send {
        (**self).fetch_history()
    }

    fn clear_history(&self) -> impl Future<Output = Result<(), StoreError>> + Send {
        (**self).clear_history()
    }
}
