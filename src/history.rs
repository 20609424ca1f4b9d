use serde::{Deserialize, Serialize};

use crate::clock::EpochMillis;
use crate::position::{Position, PositionKey};

/// A recorded position as published to consumers.
///
/// `id` is the key assigned by the store when the entry was appended.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: EpochMillis,
}

impl HistoryEntry {
    pub fn from_record(id: impl Into<String>, record: HistoryRecord) -> Self {
        Self {
            id: id.into(),
            latitude: record.latitude,
            longitude: record.longitude,
            timestamp: record.timestamp,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude)
    }
}

/// The body of a history entry as stored in, and written to, the remote collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: EpochMillis,
}

impl HistoryRecord {
    pub fn new(position: Position, timestamp: EpochMillis) -> Self {
        Self {
            latitude: position.latitude,
            longitude: position.longitude,
            timestamp,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.latitude, self.longitude)
    }

    pub fn key(&self) -> PositionKey {
        self.position().key()
    }
}

/// Sort entries newest first. Entries sharing a timestamp keep no guaranteed relative order.
pub fn sort_newest_first(entries: &mut [HistoryEntry]) {
    entries.sort_unstable_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

/// Number of entries a history listing shows when no limit is configured.
pub const DEFAULT_LISTING_LIMIT: usize = 20;

/// A bounded, newest-first page over the published history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryPage<'a> {
    pub entries: &'a [HistoryEntry],
    pub total: usize,
}

impl HistoryPage<'_> {
    /// Whether older entries were left out of this page.
    pub fn is_truncated(&self) -> bool {
        self.total > self.entries.len()
    }
}

/// Take the newest `limit` entries from a newest-first history.
pub fn latest(history: &[HistoryEntry], limit: usize) -> HistoryPage<'_> {
    HistoryPage {
        entries: &history[..history.len().min(limit)],
        total: history.len(),
    }
}
