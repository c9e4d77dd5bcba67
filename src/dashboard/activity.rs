//! Recent-activity feed
//!
//! Bounded, newest-first log of human-readable pipeline events
//! ("New content flagged (Website)", "User deleted: ..."). Only the
//! most recent entries are retained.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of entries retained by default
pub const DEFAULT_ACTIVITY_CAPACITY: usize = 10;

/// A single activity entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// When the event happened
    pub time: DateTime<Utc>,
    /// Human-readable description
    pub action: String,
}

/// Bounded newest-first activity log
#[derive(Debug)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_ACTIVITY_CAPACITY)
    }
}

impl ActivityLog {
    /// Create a log with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log retaining at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an event, evicting the oldest entry when full.
    pub fn record(&mut self, action: impl Into<String>) {
        self.entries.push_front(ActivityEntry {
            time: Utc::now(),
            action: action.into(),
        });
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
