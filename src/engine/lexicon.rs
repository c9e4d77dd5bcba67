//! Keyword lexicons for rule-based matching
//!
//! Matching is case-insensitive substring containment, not
//! word-boundary-aware: "hateful" matches the "hate" entry. The input is
//! lower-cased once per scan and secondary checks reuse that buffer.

/// Default negative lexicon
pub const NEGATIVE_PATTERNS: &[&str] = &[
    "hate", "terrible", "scam", "awful", "worst", "stupid", "idiot", "garbage", "useless", "fraud",
];

/// Default positive lexicon
pub const POSITIVE_PATTERNS: &[&str] = &[
    "great",
    "excellent",
    "amazing",
    "good",
    "love",
    "helpful",
    "best",
    "wonderful",
    "fantastic",
    "recommend",
];

/// Keywords that mark content as promotional, independent of tone
pub const PROMOTIONAL_PATTERNS: &[&str] = &["buy", "discount", "offer"];

/// Substring that escalates negative content to hate speech
pub(crate) const HATE_PATTERN: &str = "hate";

/// Substrings that tag negative content as an accusation
pub(crate) const ACCUSATION_PATTERNS: &[&str] = &["scam", "fraud"];

/// Negative/positive keyword lists used by the rule-based classifier
#[derive(Debug, Clone)]
pub struct Lexicon {
    negative: Vec<String>,
    positive: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(
            NEGATIVE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            POSITIVE_PATTERNS.iter().map(|p| p.to_string()).collect(),
        )
    }
}

impl Lexicon {
    /// Create a lexicon from custom keyword lists.
    ///
    /// Entries are lower-cased at construction; empty entries are dropped
    /// so they cannot match everything.
    pub fn new(negative: Vec<String>, positive: Vec<String>) -> Self {
        let normalize = |patterns: Vec<String>| {
            patterns
                .into_iter()
                .filter(|p| !p.is_empty())
                .map(|p| p.to_lowercase())
                .collect()
        };
        Self {
            negative: normalize(negative),
            positive: normalize(positive),
        }
    }

    /// Scan text against both keyword lists.
    pub fn scan(&self, text: &str) -> LexiconScan {
        let lowered = text.to_lowercase();
        let has_negative = self.negative.iter().any(|p| lowered.contains(p.as_str()));
        let has_positive = self.positive.iter().any(|p| lowered.contains(p.as_str()));
        LexiconScan {
            has_negative,
            has_positive,
            lowered,
        }
    }
}

/// Outcome of scanning a piece of text against a [`Lexicon`]
#[derive(Debug, Clone)]
pub struct LexiconScan {
    /// Any negative lexicon entry matched
    pub has_negative: bool,
    /// Any positive lexicon entry matched
    pub has_positive: bool,
    lowered: String,
}

impl LexiconScan {
    /// Either keyword list matched.
    pub fn any_match(&self) -> bool {
        self.has_negative || self.has_positive
    }

    /// The lower-cased text contains `pattern`.
    pub fn mentions(&self, pattern: &str) -> bool {
        self.lowered.contains(pattern)
    }

    /// The lower-cased text contains any of `patterns`.
    pub fn mentions_any(&self, patterns: &[&str]) -> bool {
        patterns.iter().any(|p| self.lowered.contains(p))
    }
}
