//! Error types for the location sync client.

use std::fmt;

use crate::store::StoreError;

/// Which step of the client failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Reading the root document. Fails the poll cycle.
    Fetch,
    /// Appending to history. Logged and ignored.
    HistoryWrite,
    /// Re-reading history. Logged and ignored.
    HistoryRead,
    /// A caller-requested history clear.
    ClearHistory,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Fetch => "fetch",
            ErrorKind::HistoryWrite => "history write",
            ErrorKind::HistoryRead => "history read",
            ErrorKind::ClearHistory => "clear history",
        };
        f.write_str(name)
    }
}

/// Errors surfaced by [`LocationSyncClient`](super::LocationSyncClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("failed to fetch location data")]
    Fetch(#[source] StoreError),

    #[error("failed to save history entry")]
    HistoryWrite(#[source] StoreError),

    #[error("failed to fetch history")]
    HistoryRead(#[source] StoreError),

    #[error("failed to clear history")]
    ClearHistory(#[source] StoreError),
}

impl SyncError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::Fetch(_) => ErrorKind::Fetch,
            SyncError::HistoryWrite(_) => ErrorKind::HistoryWrite,
            SyncError::HistoryRead(_) => ErrorKind::HistoryRead,
            SyncError::ClearHistory(_) => ErrorKind::ClearHistory,
        }
    }

    pub fn store_error(&self) -> &StoreError {
        match self {
            SyncError::Fetch(e)
            | SyncError::HistoryWrite(e)
            | SyncError::HistoryRead(e)
            | SyncError::ClearHistory(e) => e,
        }
    }
}

/// A failure recorded in published state, detached from its non-cloneable source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CycleError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&SyncError> for CycleError {
    fn from(error: &SyncError) -> Self {
        Self::new(error.kind(), format!("{error}: {}", error.store_error()))
    }
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind, self.message)
    }
}
