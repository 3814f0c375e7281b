// src/history.rs
// Bounded in-memory mood history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tokio::sync::Mutex;

use crate::chat::MoodCategory;

/// Default number of entries kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodHistoryEntry {
    pub message: String,
    pub mood: MoodCategory,
    pub score: i32,
    pub timestamp: DateTime<Utc>,
}

impl MoodHistoryEntry {
    pub fn new(message: impl Into<String>, mood: MoodCategory, score: i32) -> Self {
        Self {
            message: message.into(),
            mood,
            score,
            timestamp: Utc::now(),
        }
    }
}

/// FIFO buffer holding the most recent `capacity` entries.
///
/// All access goes through one mutex so concurrent appends can't break the
/// size bound. Lives only as long as the process.
#[derive(Debug)]
pub struct MoodHistory {
    entries: Mutex<VecDeque<MoodHistoryEntry>>,
    capacity: usize,
}

impl MoodHistory {
    /// Capacity is clamped to at least one entry
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an entry, evicting the oldest past capacity. Returns the
    /// buffer contents after the append, oldest first.
    pub async fn append(&self, entry: MoodHistoryEntry) -> Vec<MoodHistoryEntry> {
        let mut entries = self.entries.lock().await;
        entries.push_back(entry);
        while entries.len() > self.capacity {
            entries.pop_front();
        }
        entries.iter().cloned().collect()
    }

    /// Current entries, oldest first
    pub async fn snapshot(&self) -> Vec<MoodHistoryEntry> {
        self.entries.lock().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for MoodHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
