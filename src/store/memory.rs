use std::collections::BTreeMap;
use std::sync::Mutex;

use serde_json::Value;
use uuid::Uuid;

use super::{LocationStore, StoreError};
use crate::document::LocationDocument;
use crate::history::{HistoryEntry, HistoryRecord};

#[derive(Debug, Default)]
struct MemoryState {
    document: Value,
    history: BTreeMap<String, HistoryRecord>,
    document_fetches: usize,
    appends: usize,
    fail_document: bool,
    fail_append: bool,
    fail_history_fetch: bool,
    fail_clear: bool,
}

/// An in-process [`LocationStore`] with per-operation failure switches and request counters.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose root document is `document`.
    pub fn with_document(document: Value) -> Self {
        let store = Self::new();
        store.set_document(document);
        store
    }

    pub fn set_document(&self, document: Value) {
        self.lock().document = document;
    }

    /// Insert a history record directly, as another writer would.
    pub fn insert_history(&self, id: impl Into<String>, record: HistoryRecord) {
        self.lock().history.insert(id.into(), record);
    }

    pub fn history_records(&self) -> Vec<HistoryRecord> {
        self.lock().history.values().copied().collect()
    }

    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }

    /// Number of root document reads attempted, failed ones included.
    pub fn document_fetches(&self) -> usize {
        self.lock().document_fetches
    }

    /// Number of successful history appends.
    pub fn appends(&self) -> usize {
        self.lock().appends
    }

    pub fn fail_document(&self, fail: bool) {
        self.lock().fail_document = fail;
    }

    pub fn fail_append(&self, fail: bool) {
        self.lock().fail_append = fail;
    }

    pub fn fail_history_fetch(&self, fail: bool) {
        self.lock().fail_history_fetch = fail;
    }

    pub fn fail_clear(&self, fail: bool) {
        self.lock().fail_clear = fail;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().expect("memory store lock poisoned")
    }
}

impl LocationStore for MemoryStore {
    async fn fetch_document(&self) -> Result<LocationDocument, StoreError> {
        let mut state = self.lock();
        state.document_fetches += 1;
        if state.fail_document {
            return Err(StoreError::Simulated("document fetch"));
        }
        Ok(LocationDocument::from(&state.document))
    }

    async fn append_history(&self, record: HistoryRecord) -> Result<String, StoreError> {
        let mut state = self.lock();
        if state.fail_append {
            return Err(StoreError::Simulated("history append"));
        }
        let id = Uuid::new_v4().simple().to_string();
        state.history.insert(id.clone(), record);
        state.appends += 1;
        Ok(id)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        let state = self.lock();
        if state.fail_history_fetch {
            return Err(StoreError::Simulated("history fetch"));
        }
        Ok(state
            .history
            .iter()
            .map(|(id, record)| HistoryEntry::from_record(id.clone(), *record))
            .collect())
    }

    async fn clear_history(&self) -> Result<(), StoreError> {
        let mut state = self.lock();
        if state.fail_clear {
            return Err(StoreError::Simulated("history clear"));
        }
        state.history.clear();
        Ok(())
    }
}
