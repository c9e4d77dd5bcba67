//! Status decision policy
//!
//! Maps the lexicon signal plus the confidence score and the caller's
//! configuration to a terminal moderation status. Negative content is
//! flagged or queued for human review depending on sensitivity and the
//! auto-moderation gate; everything else is approved unless confidence
//! is too low to trust.

use serde::{Deserialize, Serialize};

use crate::config::{ModerationConfig, SensitivityLevel};

/// Confidence above which medium sensitivity flags negative content
const MEDIUM_FLAG_THRESHOLD: f64 = 0.7;

/// Confidence above which auto-moderation may flag without review
const AUTO_FLAG_THRESHOLD: f64 = 0.8;

/// Confidence below which non-negative content is queued for review
const APPROVAL_THRESHOLD: f64 = 0.65;

/// Terminal moderation outcome for a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    /// Content is allowed
    Approved,
    /// Content violates policy
    Flagged,
    /// A human moderator must decide
    Pending,
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Flagged => write!(f, "flagged"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// Status decision policy for classified content
pub struct StatusPolicy;

impl StatusPolicy {
    /// Decide the status for a classified piece of content.
    pub fn decide(
        has_negative: bool,
        confidence: f64,
        config: &ModerationConfig,
    ) -> ContentStatus {
        if has_negative {
            let sensitivity_flag = match config.sensitivity_level {
                SensitivityLevel::High => true,
                SensitivityLevel::Medium => confidence > MEDIUM_FLAG_THRESHOLD,
                SensitivityLevel::Low => false,
            };
            let auto_flag = config.auto_moderation && confidence > AUTO_FLAG_THRESHOLD;

            if sensitivity_flag || auto_flag {
                ContentStatus::Flagged
            } else {
                ContentStatus::Pending
            }
        } else if confidence < APPROVAL_THRESHOLD {
            ContentStatus::Pending
        } else {
            ContentStatus::Approved
        }
    }
}
