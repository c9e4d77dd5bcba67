//! In-memory content store
//!
//! Holds moderated content newest-first and backs the list view:
//! status filter, case-insensitive content search, human override with
//! attribution, counts, and JSON export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ModerationConfig;
use crate::engine::{Category, ClassificationResult, ContentStatus};
use crate::error::{Error, Result};

/// Attribution label for automated decisions
pub const AUTO_MODERATOR: &str = "AI System";

/// A moderated piece of content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Unique identifier (content-<uuid>)
    pub id: String,

    /// The submitted text
    pub content: String,

    /// When the content was classified
    pub timestamp: DateTime<Utc>,

    /// Moderation outcome
    pub status: ContentStatus,

    /// Engine confidence at classification time
    pub confidence: f64,

    /// Detected categories, in detection order
    pub categories: Vec<Category>,

    /// Where the content came from (e.g. "Website", "Social Media")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Who made the current status decision.
    ///
    /// The automated label when auto-moderation applied the decision,
    /// a moderator name after a human override, unset while pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moderated_by: Option<String>,
}

impl ContentItem {
    /// Wrap a classification result into a persisted record.
    ///
    /// Attribution goes to the automated system only when auto-moderation
    /// is enabled and the engine reached a terminal decision.
    pub fn from_result(
        content: impl Into<String>,
        source: Option<String>,
        config: &ModerationConfig,
        result: ClassificationResult,
    ) -> Self {
        let moderated_by = (config.auto_moderation && result.status != ContentStatus::Pending)
            .then(|| AUTO_MODERATOR.to_string());

        Self {
            id: format!("content-{}", uuid::Uuid::new_v4()),
            content: content.into(),
            timestamp: Utc::now(),
            status: result.status,
            confidence: result.confidence,
            categories: result.categories,
            source,
            moderated_by,
        }
    }
}

/// List view filter: status and/or content search term
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    /// Only items with this status
    pub status: Option<ContentStatus>,
    /// Only items whose content contains this term (case-insensitive)
    pub search: Option<String>,
}

impl ContentFilter {
    fn matches(&self, item: &ContentItem) -> bool {
        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }
        if let Some(ref term) = self.search {
            if !item
                .content
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Item counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentCounts {
    pub approved: usize,
    pub flagged: usize,
    pub pending: usize,
    pub total: usize,
}

/// In-memory store of moderated content, newest first
#[derive(Debug, Default)]
pub struct ContentStore {
    items: Vec<ContentItem>,
}

impl ContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item at the front (newest first).
    pub fn insert(&mut self, item: ContentItem) {
        self.items.insert(0, item);
    }

    /// All items, newest first.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Items matching the filter, newest first.
    pub fn filtered(&self, filter: &ContentFilter) -> Vec<ContentItem> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Override an item's status, recording who decided.
    pub fn update_status(
        &mut self,
        id: &str,
        status: ContentStatus,
        moderator: &str,
    ) -> Result<&ContentItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Error::ContentNotFound(id.to_string()))?;
        item.status = status;
        item.moderated_by = Some(moderator.to_string());
        Ok(item)
    }

    /// Count items per status.
    pub fn counts(&self) -> ContentCounts {
        let mut counts = ContentCounts {
            total: self.items.len(),
            ..Default::default()
        };
        for item in &self.items {
            match item.status {
                ContentStatus::Approved => counts.approved += 1,
                ContentStatus::Flagged => counts.flagged += 1,
                ContentStatus::Pending => counts.pending += 1,
            }
        }
        counts
    }

    /// Mean confidence across all items (0.0 for an empty store).
    pub fn average_confidence(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.items.iter().map(|item| item.confidence).sum();
        sum / self.items.len() as f64
    }

    /// Export the filtered items as pretty-printed JSON.
    pub fn export_json(&self, filter: &ContentFilter) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.filtered(filter))?)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
