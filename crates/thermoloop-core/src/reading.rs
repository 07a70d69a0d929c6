use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// A single timestamped temperature observation.
///
/// The timestamp is assigned by the datastore at ingestion, not by the
/// producer, so arrival order has a consistent basis even when producer
/// clocks disagree. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature: f64,
    pub timestamp: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// HistoryStore
// ---------------------------------------------------------------------------

/// Append-only, insertion-ordered reading history.
///
/// "Most recent" always means the highest insertion index, never the stored
/// timestamp. Readings are never evicted: the store grows for the life of
/// the process and dies with it.
#[derive(Debug, Default)]
pub struct HistoryStore {
    readings: Vec<Reading>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            readings: Vec::new(),
        }
    }

    /// Stamp `temperature` with the current UTC instant and append it.
    /// Returns the record as stored.
    pub fn append(&mut self, temperature: f64) -> Reading {
        let reading = Reading {
            temperature,
            timestamp: Utc::now(),
        };
        self.readings.push(reading.clone());
        reading
    }

    /// The last `limit` readings by arrival order, newest first.
    ///
    /// A `limit` larger than the history returns everything; zero returns
    /// an empty list.
    pub fn recent(&self, limit: usize) -> Vec<Reading> {
        self.readings.iter().rev().take(limit).cloned().collect()
    }

    /// The most recently appended reading, if any.
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.last()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
