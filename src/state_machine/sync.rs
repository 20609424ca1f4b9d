use std::collections::VecDeque;

use tracing::debug;

use super::StateMachine;
use crate::client::error::CycleError;
use crate::clock::EpochMillis;
use crate::document::LocationDocument;
use crate::history::{self, HistoryEntry, HistoryPage, HistoryRecord};
use crate::position::{Position, PositionKey};
use crate::trail::{self, Trail};

/// The locally cached view of the remote store, as published to consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncState {
    pub position: Position,
    pub is_active: bool,
    pub is_loading: bool,
    pub last_updated: Option<EpochMillis>,
    pub last_error: Option<CycleError>,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
    /// Key of the last entry this client appended itself, never one fetched from the store.
    pub last_saved_key: Option<PositionKey>,
}

impl SyncState {
    /// The newest `limit` history entries.
    pub fn history_page(&self, limit: usize) -> HistoryPage<'_> {
        history::latest(&self.history, limit)
    }

    /// The movement trail through the recorded history, if there are at least two entries.
    pub fn trail(&self) -> Option<Trail> {
        trail::project(&self.history)
    }
}

/// Reconciles poll results into [`SyncState`] and decides when a history entry must be written.
///
/// A poll cycle feeds [`SyncInput::CycleStarted`], then either [`SyncInput::DocumentFetched`] or
/// [`SyncInput::DocumentFetchFailed`]. After a fetched document the owner drains
/// [`SyncOutput::AppendHistory`] requests, confirms each successful write with
/// [`SyncInput::HistoryAppended`], feeds the re-read collection as [`SyncInput::HistoryFetched`]
/// and closes the cycle with [`SyncInput::CycleFinished`].
#[derive(Debug, Default)]
pub struct SyncMachine {
    state: SyncState,
    pending_appends: VecDeque<HistoryRecord>,
    last_written_at: Option<EpochMillis>,
}

impl SyncMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn pending_count(&self) -> usize {
        self.pending_appends.len()
    }

    fn start_cycle(&mut self) {
        self.state.is_loading = true;
    }

    fn finish_cycle(&mut self) {
        self.state.is_loading = false;
    }

    fn apply_document(&mut self, document: LocationDocument, now: EpochMillis) {
        self.state.is_active = document.active;
        self.state.last_error = None;

        let Some(position) = document.position() else {
            debug!("Document has no usable position, keeping previous");
            return;
        };

        self.state.position = position;
        self.state.last_updated = Some(now);

        if document.active {
            self.request_append(position, now);
        }
    }

    fn apply_fetch_failure(&mut self, error: CycleError) {
        self.state.last_error = Some(error);
    }

    fn request_append(&mut self, position: Position, now: EpochMillis) {
        let key = position.key();

        if self.state.last_saved_key.as_ref() == Some(&key) {
            return;
        }
        if self.pending_appends.iter().any(|pending| pending.key() == key) {
            return;
        }

        // Keep this client's write timestamps non-decreasing even if the clock steps back.
        let timestamp = self.last_written_at.map_or(now, |last| last.max(now));
        self.pending_appends.push_back(HistoryRecord::new(position, timestamp));
    }

    fn confirm_append(&mut self, record: HistoryRecord) {
        self.state.last_saved_key = Some(record.key());
        self.last_written_at = Some(
            self.last_written_at
                .map_or(record.timestamp, |last| last.max(record.timestamp)),
        );
    }

    fn replace_history(&mut self, mut entries: Vec<HistoryEntry>) {
        history::sort_newest_first(&mut entries);
        self.state.history = entries;
    }

    fn poll_append(&mut self) -> Option<HistoryRecord> {
        self.pending_appends.pop_front()
    }
}

pub enum SyncInput {
    CycleStarted,
    DocumentFetched {
        document: LocationDocument,
        now: EpochMillis,
    },
    DocumentFetchFailed(CycleError),
    HistoryAppended(HistoryRecord),
    HistoryFetched(Vec<HistoryEntry>),
    CycleFinished,
}

#[derive(Debug, PartialEq)]
pub enum SyncOutput {
    AppendHistory(HistoryRecord),
}

impl StateMachine for SyncMachine {
    type Input = SyncInput;
    type Output = SyncOutput;

    fn process_input(&mut self, input: Self::Input) {
        match input {
            SyncInput::CycleStarted => self.start_cycle(),
            SyncInput::DocumentFetched { document, now } => self.apply_document(document, now),
            SyncInput::DocumentFetchFailed(error) => self.apply_fetch_failure(error),
            SyncInput::HistoryAppended(record) => self.confirm_append(record),
            SyncInput::HistoryFetched(entries) => self.replace_history(entries),
            SyncInput::CycleFinished => self.finish_cycle(),
        }
    }

    fn poll_output(&mut self) -> Option<Self::Output> {
        self.poll_append().map(SyncOutput::AppendHistory)
    }
}
