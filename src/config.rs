//! Moderation configuration management
//!
//! Configuration is an explicit value supplied by the caller with every
//! classification call. There is no process-wide mutable settings object;
//! callers that let users edit settings hold the current value themselves
//! and pass it in.
//!
//! All fields carry serde defaults so a partial JSON document parses, and
//! unknown fields are ignored rather than rejected. Wire names are
//! camelCase (`sensitivityLevel`, `autoModeration`, `aiModel`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Sensitivity level controlling how aggressively negative content is flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl Default for SensitivityLevel {
    fn default() -> Self {
        Self::Medium
    }
}

/// Moderation configuration, immutable per classification call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModerationConfig {
    /// How aggressively negative content is flagged vs. left pending
    pub sensitivity_level: SensitivityLevel,

    /// Whether automatic flagging without human review is permitted
    pub auto_moderation: bool,

    /// Per-category enable toggles.
    ///
    /// Accepted and carried for forward compatibility; the current rule
    /// policy does not consult it. Disabling a category here does NOT
    /// suppress its detection.
    pub categories: HashMap<String, bool>,

    /// Per-source enable toggles. Not consumed by the decision policy.
    pub sources: HashMap<String, bool>,

    /// Model selector label. Not consumed by the decision policy.
    pub ai_model: String,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            sensitivity_level: SensitivityLevel::default(),
            auto_moderation: false,
            categories: default_category_toggles(),
            sources: default_source_toggles(),
            ai_model: "advanced".to_string(),
        }
    }
}

impl ModerationConfig {
    /// Parse configuration from a JSON string.
    ///
    /// Missing fields fall back to defaults; unknown fields are ignored.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse moderation config: {}", e)))
    }

    /// Load configuration from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}

/// Default category toggles (all enabled)
pub fn default_category_toggles() -> HashMap<String, bool> {
    [
        "hate",
        "violence",
        "harassment",
        "spam",
        "misinformation",
        "adult",
        "profanity",
    ]
    .into_iter()
    .map(|name| (name.to_string(), true))
    .collect()
}

/// Default source toggles (all enabled)
pub fn default_source_toggles() -> HashMap<String, bool> {
    [
        "website",
        "socialMedia",
        "email",
        "customerReview",
        "forum",
    ]
    .into_iter()
    .map(|name| (name.to_string(), true))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitivity_level_ordering() {
        assert!(SensitivityLevel::High > SensitivityLevel::Medium);
        assert!(SensitivityLevel::Medium > SensitivityLevel::Low);
    }

    #[test]
    fn test_defaults() {
        let config = ModerationConfig::default();
        assert_eq!(config.sensitivity_level, SensitivityLevel::Medium);
        assert!(!config.auto_moderation);
        assert_eq!(config.ai_model, "advanced");
        assert_eq!(config.categories.get("hate"), Some(&true));
        assert_eq!(config.sources.get("forum"), Some(&true));
    }

    #[test]
    fn test_parse_partial_config() {
        let config = ModerationConfig::from_json(r#"{"sensitivityLevel": "high"}"#).unwrap();
        assert_eq!(config.sensitivity_level, SensitivityLevel::High);
        assert!(!config.auto_moderation);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ModerationConfig::from_json("{}").unwrap();
        assert_eq!(config.sensitivity_level, SensitivityLevel::Medium);
        assert!(!config.auto_moderation);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let config = ModerationConfig::from_json(
            r#"{"autoModeration": true, "retentionDays": 30, "webhookUrl": "https://example.com"}"#,
        )
        .unwrap();
        assert!(config.auto_moderation);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = serde_json::to_string(&ModerationConfig::default()).unwrap();
        assert!(json.contains("sensitivityLevel"));
        assert!(json.contains("autoModeration"));
        assert!(json.contains("aiModel"));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ModerationConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
