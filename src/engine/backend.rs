//! Pluggable analysis backend
//!
//! [`ModerationBackend`] is the seam between the moderation pipeline and
//! whatever produces classification results. [`RuleBackend`] wraps the
//! rule-based classifier; a model-backed strategy would implement the
//! same trait and swap in without touching callers.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::ModerationConfig;
use crate::engine::classifier::{ClassificationResult, RuleBasedClassifier};
use crate::error::Result;

/// Analysis strategy behind the moderation pipeline
#[async_trait]
pub trait ModerationBackend: Send + Sync {
    /// Classify text under the given configuration.
    ///
    /// A full result or an error — never a partial outcome. Errors are
    /// distinct from a valid pending classification; the caller owns the
    /// fallback policy.
    async fn analyze(&self, text: &str, config: &ModerationConfig)
        -> Result<ClassificationResult>;

    /// Human-readable backend name (used in logs).
    fn name(&self) -> &str;
}

/// Rule-based backend
///
/// The optional delay models the original pipeline's simulated processing
/// time: a cancellable suspension that happens before the result is
/// computed, so cancellation can never record a partial outcome.
pub struct RuleBackend {
    classifier: RuleBasedClassifier,
    delay: Option<Duration>,
}

impl Default for RuleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBackend {
    /// Create a backend with the default classifier and no delay.
    pub fn new() -> Self {
        Self::with_classifier(RuleBasedClassifier::new())
    }

    /// Create a backend around an explicit classifier.
    pub fn with_classifier(classifier: RuleBasedClassifier) -> Self {
        Self {
            classifier,
            delay: None,
        }
    }

    /// Add an artificial processing delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl ModerationBackend for RuleBackend {
    async fn analyze(
        &self,
        text: &str,
        config: &ModerationConfig,
    ) -> Result<ClassificationResult> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.classifier.classify(text, config))
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::classifier::Category;
    use crate::engine::jitter::FixedJitter;

    fn backend(draw: f64) -> RuleBackend {
        RuleBackend::with_classifier(RuleBasedClassifier::with_jitter(Box::new(FixedJitter(
            draw,
        ))))
    }

    #[tokio::test]
    async fn test_analyze_matches_classifier() {
        let result = backend(0.5)
            .analyze("I hate this scam", &ModerationConfig::default())
            .await
            .unwrap();
        assert_eq!(
            result.categories,
            vec![Category::Negative, Category::HateSpeech, Category::Accusation]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_does_not_change_result() {
        let delayed = backend(0.25).with_delay(Duration::from_millis(500));
        let immediate = backend(0.25);
        let config = ModerationConfig::default();

        let a = delayed.analyze("wonderful", &config).await.unwrap();
        let b = immediate.analyze("wonderful", &config).await.unwrap();
        assert_eq!(a.categories, b.categories);
        assert_eq!(a.status, b.status);
        assert!((a.confidence - b.confidence).abs() < 1e-9);
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(RuleBackend::new().name(), "rule-based");
    }
}
