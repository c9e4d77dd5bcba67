//! Dashboard state management
//!
//! The caller side of the pipeline: content store, activity feed,
//! analytics aggregations, user directory, and the orchestrating
//! [`ModerationService`]. Everything lives in process memory; the only
//! persistence surface is JSON export of the content list.

mod activity;
mod analytics;
mod content;
mod service;
mod users;

pub use activity::{ActivityEntry, ActivityLog, DEFAULT_ACTIVITY_CAPACITY};
pub use analytics::{
    category_distribution, confidence_histogram, daily_volume, CategoryCount, ConfidenceBucket,
    DailyVolume,
};
pub use content::{ContentCounts, ContentFilter, ContentItem, ContentStore, AUTO_MODERATOR};
pub use service::{ModerationService, ModerationStats};
pub use users::{User, UserDirectory, UserRole, UserUpdate};
