//! Rule-based content classifier
//!
//! Maps raw text plus a [`ModerationConfig`] to a [`ClassificationResult`]:
//! a terminal status, a confidence score, and the detected categories in
//! detection order. The rule policy is deterministic apart from the
//! confidence jitter draw, which is injectable for testing.

use serde::{Deserialize, Serialize};

use crate::config::ModerationConfig;
use crate::engine::jitter::{ConfidenceJitter, ThreadRngJitter};
use crate::engine::lexicon::{Lexicon, LexiconScan, ACCUSATION_PATTERNS, HATE_PATTERN, PROMOTIONAL_PATTERNS};
use crate::engine::policy::{ContentStatus, StatusPolicy};

/// Base confidence before bonuses
const BASE_CONFIDENCE: f64 = 0.5;

/// Width of the uniform jitter added to the base
const JITTER_RANGE: f64 = 0.3;

/// Bonus for long content and for a lexicon match
const CONFIDENCE_BONUS: f64 = 0.1;

/// Character count above which content earns the length bonus
const LONG_CONTENT_CHARS: usize = 100;

/// Upper clamp on the reported confidence
const MAX_CONFIDENCE: f64 = 0.98;

/// Detected content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "hate speech")]
    HateSpeech,
    #[serde(rename = "accusation")]
    Accusation,
    #[serde(rename = "promotional")]
    Promotional,
}

impl Category {
    /// Wire name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::HateSpeech => "hate speech",
            Self::Accusation => "accusation",
            Self::Promotional => "promotional",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification outcome for a piece of content
///
/// `categories` is never empty: it always contains at least one of
/// negative, positive, or neutral, in detection order. Text matching both
/// lexicons carries both negative and positive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Terminal moderation outcome
    pub status: ContentStatus,
    /// Self-reported certainty in `[0.5, 0.98]`
    pub confidence: f64,
    /// Detected categories, insertion order = detection order
    pub categories: Vec<Category>,
}

/// Rule-based classifier
///
/// Stateless apart from the jitter source; concurrent calls are fully
/// independent. Construction is infallible: the default lexicons are
/// plain substrings, nothing to compile.
pub struct RuleBasedClassifier {
    lexicon: Lexicon,
    jitter: Box<dyn ConfidenceJitter>,
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedClassifier {
    /// Create a classifier with the default lexicons and thread-RNG jitter.
    pub fn new() -> Self {
        Self::with_jitter(Box::new(ThreadRngJitter))
    }

    /// Create a classifier with an explicit jitter source.
    pub fn with_jitter(jitter: Box<dyn ConfidenceJitter>) -> Self {
        Self {
            lexicon: Lexicon::default(),
            jitter,
        }
    }

    /// Replace the keyword lexicons.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Classify a piece of text under the given configuration.
    ///
    /// Never fails: empty or whitespace-only input degrades to the
    /// neutral branch, and the config's category/source toggles are
    /// accepted without being consulted.
    pub fn classify(&self, text: &str, config: &ModerationConfig) -> ClassificationResult {
        let scan = self.lexicon.scan(text);
        let categories = assign_categories(&scan);
        let confidence = self.estimate_confidence(text, &scan);
        let status = StatusPolicy::decide(scan.has_negative, confidence, config);

        ClassificationResult {
            status,
            confidence,
            categories,
        }
    }

    fn estimate_confidence(&self, text: &str, scan: &LexiconScan) -> f64 {
        let mut confidence = BASE_CONFIDENCE + self.jitter.draw() * JITTER_RANGE;

        // Longer content classifies more confidently
        if text.chars().count() > LONG_CONTENT_CHARS {
            confidence += CONFIDENCE_BONUS;
        }

        // So does a lexicon match in either direction
        if scan.any_match() {
            confidence += CONFIDENCE_BONUS;
        }

        confidence.min(MAX_CONFIDENCE)
    }
}

/// Assign categories in fixed detection order.
///
/// Negative tags lead (with their hate-speech/accusation refinements),
/// then positive, neutral only when neither matched, and promotional
/// independently of tone.
fn assign_categories(scan: &LexiconScan) -> Vec<Category> {
    let mut categories = Vec::new();

    if scan.has_negative {
        categories.push(Category::Negative);

        if scan.mentions(HATE_PATTERN) {
            categories.push(Category::HateSpeech);
        }
        if scan.mentions_any(ACCUSATION_PATTERNS) {
            categories.push(Category::Accusation);
        }
    }

    if scan.has_positive {
        categories.push(Category::Positive);
    }

    if !scan.has_negative && !scan.has_positive {
        categories.push(Category::Neutral);
    }

    if scan.mentions_any(PROMOTIONAL_PATTERNS) {
        categories.push(Category::Promotional);
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SensitivityLevel;
    use crate::engine::jitter::FixedJitter;

    fn classifier(draw: f64) -> RuleBasedClassifier {
        RuleBasedClassifier::with_jitter(Box::new(FixedJitter(draw)))
    }

    fn config(level: SensitivityLevel, auto: bool) -> ModerationConfig {
        ModerationConfig {
            sensitivity_level: level,
            auto_moderation: auto,
            ..Default::default()
        }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {} ≈ {}", a, b);
    }

    #[test]
    fn test_negative_text_excludes_neutral() {
        let result = classifier(0.5).classify("what a terrible idea", &ModerationConfig::default());
        assert!(result.categories.contains(&Category::Negative));
        assert!(!result.categories.contains(&Category::Neutral));
    }

    #[test]
    fn test_plain_text_is_neutral_only() {
        let result = classifier(0.5).classify("The sky is blue today", &ModerationConfig::default());
        assert_eq!(result.categories, vec![Category::Neutral]);
    }

    #[test]
    fn test_neutral_promotional() {
        let result =
            classifier(0.5).classify("Use code SAVE10 for a discount", &ModerationConfig::default());
        assert_eq!(result.categories, vec![Category::Neutral, Category::Promotional]);
    }

    #[test]
    fn test_hate_speech_refinement() {
        let result = classifier(0.5).classify("I hate everything about this", &ModerationConfig::default());
        assert_eq!(
            result.categories,
            vec![Category::Negative, Category::HateSpeech]
        );
    }

    #[test]
    fn test_accusation_refinement() {
        let result = classifier(0.5).classify(
            "This product is terrible and the company is a scam.",
            &ModerationConfig::default(),
        );
        assert_eq!(
            result.categories,
            vec![Category::Negative, Category::Accusation]
        );
    }

    #[test]
    fn test_mixed_tone_keeps_both_categories() {
        let result =
            classifier(0.5).classify("I love that this is not a scam", &ModerationConfig::default());
        assert!(result.categories.contains(&Category::Negative));
        assert!(result.categories.contains(&Category::Positive));
    }

    #[test]
    fn test_category_order_is_stable() {
        let text = "I hate this scam but love the discount";
        let a = classifier(0.1).classify(text, &ModerationConfig::default());
        let b = classifier(0.9).classify(text, &ModerationConfig::default());
        assert_eq!(a.categories, b.categories);
        assert_eq!(
            a.categories,
            vec![
                Category::Negative,
                Category::HateSpeech,
                Category::Accusation,
                Category::Positive,
                Category::Promotional,
            ]
        );
    }

    #[test]
    fn test_confidence_base_range() {
        // No bonuses: confidence = 0.5 + draw * 0.3
        let result = classifier(0.0).classify("plain words", &ModerationConfig::default());
        assert_close(result.confidence, 0.5);

        let result = classifier(0.999).classify("plain words", &ModerationConfig::default());
        assert!(result.confidence < 0.8);
    }

    #[test]
    fn test_confidence_bonuses_and_clamp() {
        let long_negative = "terrible ".repeat(20); // 180 chars, negative match
        let result = classifier(0.999).classify(&long_negative, &ModerationConfig::default());
        // 0.5 + ~0.3 + 0.1 + 0.1 clamps at 0.98
        assert_close(result.confidence, 0.98);

        let result = classifier(0.0).classify(&long_negative, &ModerationConfig::default());
        assert_close(result.confidence, 0.7);
    }

    #[test]
    fn test_length_bonus_counts_chars() {
        // 101 multibyte chars, no lexicon match
        let text: String = "ä".repeat(101);
        let result = classifier(0.0).classify(&text, &ModerationConfig::default());
        assert_close(result.confidence, 0.6);
    }

    #[test]
    fn test_confidence_always_within_bounds() {
        let classifier = RuleBasedClassifier::new();
        let config = ModerationConfig::default();
        for text in ["", "great", "hate", &"terrible and amazing ".repeat(10)] {
            let result = classifier.classify(text, &config);
            assert!(result.confidence >= 0.5);
            assert!(result.confidence <= 0.98);
        }
    }

    #[test]
    fn test_high_sensitivity_flags_regardless_of_draw() {
        for draw in [0.0, 0.5, 0.999] {
            let result = classifier(draw).classify(
                "this is garbage",
                &config(SensitivityLevel::High, false),
            );
            assert_eq!(result.status, ContentStatus::Flagged);
        }
    }

    #[test]
    fn test_low_sensitivity_low_confidence_pending() {
        // draw 0.0 → confidence 0.6 ≤ 0.7 → pending
        let result =
            classifier(0.0).classify("this is garbage", &config(SensitivityLevel::Low, false));
        assert_eq!(result.status, ContentStatus::Pending);
    }

    #[test]
    fn test_scenario_terrible_scam_medium_auto() {
        let cfg = config(SensitivityLevel::Medium, true);
        let text = "This product is terrible and the company is a scam.";

        // draw 0.5 → confidence 0.75 > 0.7 → flagged
        let result = classifier(0.5).classify(text, &cfg);
        assert!(result.categories.contains(&Category::Negative));
        assert!(result.categories.contains(&Category::Accusation));
        assert_eq!(result.status, ContentStatus::Flagged);

        // draw 0.1 → confidence 0.63 → pending
        let result = classifier(0.1).classify(text, &cfg);
        assert_eq!(result.status, ContentStatus::Pending);
    }

    #[test]
    fn test_scenario_positive_review() {
        let text = "I really enjoyed using this product. The features are well-designed \
                    and the customer service team was very helpful when I had questions.";
        let cfg = ModerationConfig::default();

        // Long positive text: confidence = 0.7 + 0.3*draw, always ≥ 0.65
        let result = classifier(0.9).classify(text, &cfg);
        assert_eq!(result.categories, vec![Category::Positive]);
        assert_eq!(result.status, ContentStatus::Approved);
    }

    #[test]
    fn test_short_positive_low_draw_pending() {
        // draw 0.0 → confidence 0.6 < 0.65 → pending
        let result = classifier(0.0).classify(
            "The support team was helpful.",
            &ModerationConfig::default(),
        );
        assert_eq!(result.categories, vec![Category::Positive]);
        assert_eq!(result.status, ContentStatus::Pending);
    }

    #[test]
    fn test_empty_text_degrades_to_neutral() {
        let cfg = ModerationConfig::default();
        let result = classifier(0.9).classify("", &cfg);
        assert_eq!(result.categories, vec![Category::Neutral]);
        assert_eq!(result.status, ContentStatus::Approved);

        let result = classifier(0.0).classify("   \t\n", &cfg);
        assert_eq!(result.categories, vec![Category::Neutral]);
        assert_eq!(result.status, ContentStatus::Pending);
    }

    #[test]
    fn test_category_toggles_are_inert() {
        // Disabling "hate" in the config does not suppress detection
        let mut cfg = ModerationConfig::default();
        cfg.categories.insert("hate".to_string(), false);
        let result = classifier(0.5).classify("I hate this", &cfg);
        assert!(result.categories.contains(&Category::HateSpeech));
    }

    #[test]
    fn test_result_serialization_shape() {
        let result = classifier(0.5).classify("I hate this scam", &ModerationConfig::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "flagged");
        assert_eq!(json["categories"][0], "negative");
        assert_eq!(json["categories"][1], "hate speech");
    }
}
