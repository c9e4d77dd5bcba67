//! # a3s-moderation
//!
//! Rule-based content classification and moderation pipeline for the A3S
//! ecosystem.
//!
//! ## Overview
//!
//! `a3s-moderation` classifies submitted text into a moderation outcome —
//! approved, flagged, or pending human review — with a confidence score
//! and detected categories, driven by keyword lexicons and a
//! sensitivity/auto-moderation policy. Around the engine sits an
//! in-memory pipeline: content store, activity feed, analytics
//! aggregations, and a user directory.
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_moderation::{Category, ModerationConfig, RuleBasedClassifier, SensitivityLevel};
//!
//! let classifier = RuleBasedClassifier::new();
//! let config = ModerationConfig {
//!     sensitivity_level: SensitivityLevel::High,
//!     ..Default::default()
//! };
//!
//! let result = classifier.classify("This product is terrible and a scam.", &config);
//! assert!(result.categories.contains(&Category::Negative));
//! assert!(result.categories.contains(&Category::Accusation));
//! ```
//!
//! Or run the full pipeline:
//!
//! ```rust
//! use a3s_moderation::{ModerationConfig, ModerationService};
//!
//! # async fn example() -> a3s_moderation::Result<()> {
//! let service = ModerationService::rule_based();
//! let config = ModerationConfig::default();
//!
//! let item = service
//!     .submit("Thanks, the support team was helpful!", Some("Website"), &config)
//!     .await?;
//! println!("{} → {}", item.id, item.status);
//!
//! let stats = service.stats().await;
//! println!("{} items, {:.0}% mean confidence", stats.total, stats.average_confidence * 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **RuleBasedClassifier** — lexicon scan, category assignment,
//!   confidence estimation, status policy
//! - **ModerationBackend** trait — strategy seam; the rule-based backend
//!   ships, a model-backed one would plug in behind the same contract
//! - **ConfidenceJitter** trait — the engine's only non-determinism,
//!   injectable so tests can pin exact outcomes
//! - **ModerationService** — content store, activity feed, and user
//!   directory behind one API; configuration is passed per call, never
//!   held as process-wide mutable state
//!
//! ## Modules
//!
//! - [`engine`]: classification engine and backend seam
//! - [`dashboard`]: content store, activity, analytics, users, service
//! - [`config`]: moderation configuration
//! - [`error`]: error types

pub mod config;
pub mod dashboard;
pub mod engine;
pub mod error;

// Re-export core types
pub use config::{ModerationConfig, SensitivityLevel};
pub use dashboard::{
    category_distribution, confidence_histogram, daily_volume, ActivityEntry, ActivityLog,
    CategoryCount, ConfidenceBucket, ContentCounts, ContentFilter, ContentItem, ContentStore,
    DailyVolume, ModerationService, ModerationStats, User, UserDirectory, UserRole, UserUpdate,
};
pub use engine::{
    Category, ClassificationResult, ConfidenceJitter, ContentStatus, FixedJitter, Lexicon,
    ModerationBackend, RuleBackend, RuleBasedClassifier, SeededJitter, StatusPolicy,
    ThreadRngJitter,
};
pub use error::{Error, Result};
