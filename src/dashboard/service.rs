//! Moderation pipeline service
//!
//! Bundles the analysis backend, content store, activity feed, and user
//! directory behind a single API so callers do not have to coordinate
//! them manually. Configuration is passed into each submission — the
//! service holds no mutable settings of its own.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::config::ModerationConfig;
use crate::dashboard::activity::{ActivityEntry, ActivityLog};
use crate::dashboard::content::{ContentFilter, ContentItem, ContentStore};
use crate::dashboard::users::{User, UserDirectory, UserRole, UserUpdate};
use crate::engine::{ClassificationResult, ContentStatus, ModerationBackend, RuleBackend};
use crate::error::{Error, Result};

/// Store counts plus mean confidence, for the dashboard's stat cards
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct ModerationStats {
    pub approved: usize,
    pub flagged: usize,
    pub pending: usize,
    pub total: usize,
    pub average_confidence: f64,
}

/// Content moderation pipeline
pub struct ModerationService {
    backend: Arc<dyn ModerationBackend>,
    store: RwLock<ContentStore>,
    activity: RwLock<ActivityLog>,
    users: RwLock<UserDirectory>,
}

impl ModerationService {
    /// Create a service around the given backend.
    pub fn new(backend: Arc<dyn ModerationBackend>) -> Self {
        Self {
            backend,
            store: RwLock::new(ContentStore::new()),
            activity: RwLock::new(ActivityLog::new()),
            users: RwLock::new(UserDirectory::new()),
        }
    }

    /// Convenience constructor using the default rule-based backend.
    pub fn rule_based() -> Self {
        Self::new(Arc::new(RuleBackend::new()))
    }

    /// Backend name, for logs and diagnostics.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Submit content for classification and record the outcome.
    ///
    /// Empty or whitespace-only content is rejected before the backend
    /// is invoked. A backend failure is not a silent drop: the
    /// submission is recorded as pending with zero confidence so a
    /// human picks it up.
    ///
    /// The call is atomic with respect to cancellation — nothing is
    /// recorded until a full classification result is in hand.
    pub async fn submit(
        &self,
        content: &str,
        source: Option<&str>,
        config: &ModerationConfig,
    ) -> Result<ContentItem> {
        if content.trim().is_empty() {
            return Err(Error::EmptyContent);
        }

        let result = match self.backend.analyze(content, config).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    backend = self.backend.name(),
                    error = %e,
                    "classification failed, queuing submission for review"
                );
                ClassificationResult {
                    status: ContentStatus::Pending,
                    confidence: 0.0,
                    categories: Vec::new(),
                }
            }
        };

        let item = ContentItem::from_result(content, source.map(str::to_string), config, result);
        debug!(
            id = %item.id,
            status = %item.status,
            confidence = item.confidence,
            "content classified"
        );

        self.store.write().await.insert(item.clone());
        self.activity.write().await.record(format!(
            "New content {} ({})",
            item.status,
            source.unwrap_or("unknown")
        ));

        Ok(item)
    }

    /// Human override of a stored item's status.
    pub async fn moderate(
        &self,
        id: &str,
        status: ContentStatus,
        moderator: &str,
    ) -> Result<ContentItem> {
        let item = {
            let mut store = self.store.write().await;
            store.update_status(id, status, moderator)?.clone()
        };
        self.activity
            .write()
            .await
            .record(format!("Content {} by {}", status, moderator));
        Ok(item)
    }

    /// Items matching the filter, newest first.
    pub async fn items(&self, filter: &ContentFilter) -> Vec<ContentItem> {
        self.store.read().await.filtered(filter)
    }

    /// Status counts plus mean confidence.
    pub async fn stats(&self) -> ModerationStats {
        let store = self.store.read().await;
        let counts = store.counts();
        ModerationStats {
            approved: counts.approved,
            flagged: counts.flagged,
            pending: counts.pending,
            total: counts.total,
            average_confidence: store.average_confidence(),
        }
    }

    /// Export the filtered items as pretty-printed JSON.
    pub async fn export(&self, filter: &ContentFilter) -> Result<String> {
        self.store.read().await.export_json(filter)
    }

    /// Recent activity entries, newest first.
    pub async fn activity(&self) -> Vec<ActivityEntry> {
        self.activity.read().await.recent().cloned().collect()
    }

    /// Add a user and record the event.
    pub async fn add_user(
        &self,
        name: &str,
        role: UserRole,
        avatar: &str,
    ) -> User {
        let user = self.users.write().await.add(name, role, avatar).clone();
        self.activity
            .write()
            .await
            .record(format!("New user added: {} ({})", user.name, user.role));
        user
    }

    /// Apply a partial update to a user and record the event.
    pub async fn update_user(&self, id: &str, update: UserUpdate) -> Result<User> {
        let user = {
            let mut users = self.users.write().await;
            users.update(id, update)?.clone()
        };
        self.activity
            .write()
            .await
            .record(format!("User updated: {}", user.name));
        Ok(user)
    }

    /// Remove a user and record the event.
    pub async fn remove_user(&self, id: &str) -> Result<User> {
        let user = self.users.write().await.remove(id)?;
        self.activity
            .write()
            .await
            .record(format!("User deleted: {}", user.name));
        Ok(user)
    }

    /// All users, in insertion order.
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.list().to_vec()
    }
}
