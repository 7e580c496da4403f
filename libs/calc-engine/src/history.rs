//! Bounded operation history
//!
//! Sliding window over the most recent operation descriptions: appending
//! past the cap drops the oldest entries first.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of entries retained in the log
pub const MAX_ENTRIES: usize = 50;

/// Confirmation message returned when the history is cleared
pub const CLEARED_MESSAGE: &str = "Historial limpiado";

/// One recorded operation with its creation time
///
/// Serialized with the original wire field name `operacion` for the
/// description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "operacion")]
    pub description: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
}

/// Append-only log of operation descriptions, capped at [`MAX_ENTRIES`]
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Append a description stamped with the current time
    pub fn append(&mut self, description: impl Into<String>) {
        self.entries.push_back(HistoryEntry {
            description: description.into(),
            timestamp: Utc::now().to_rfc3339(),
        });

        // keep only the most recent entries
        while self.entries.len() > MAX_ENTRIES {
            self.entries.pop_front();
        }
    }

    /// Snapshot of all entries, oldest first
    ///
    /// Returns an owned copy so callers cannot bypass the cap invariant.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries and return the fixed confirmation message
    pub fn clear(&mut self) -> &'static str {
        self.entries.clear();
        CLEARED_MESSAGE
    }
}
