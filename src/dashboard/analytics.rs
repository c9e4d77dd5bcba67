//! Analytics aggregations over moderated content
//!
//! Pure functions feeding the dashboard's charts: category distribution,
//! confidence histogram, and per-day volume. Status counts come from
//! [`ContentStore::counts`](crate::dashboard::ContentStore::counts).

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::dashboard::content::ContentItem;
use crate::engine::{Category, ContentStatus};

/// Occurrence count for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Count category occurrences across all items, most frequent first.
///
/// Ties break on the category's wire name so the ordering is stable.
pub fn category_distribution(items: &[ContentItem]) -> Vec<CategoryCount> {
    let mut counts: HashMap<Category, usize> = HashMap::new();
    for item in items {
        for category in &item.categories {
            *counts.entry(*category).or_insert(0) += 1;
        }
    }

    let mut distribution: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    distribution.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });
    distribution
}

/// One confidence histogram bucket
#[derive(Debug, Clone, Serialize)]
pub struct ConfidenceBucket {
    /// Display label ("90-100%")
    pub label: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound
    pub max: f64,
    /// Items whose confidence falls in `[min, max)`
    pub count: usize,
}

/// Bucket items by confidence into the dashboard's fixed ranges.
pub fn confidence_histogram(items: &[ContentItem]) -> Vec<ConfidenceBucket> {
    let mut buckets = vec![
        ConfidenceBucket { label: "90-100%", min: 0.9, max: 1.0, count: 0 },
        ConfidenceBucket { label: "80-90%", min: 0.8, max: 0.9, count: 0 },
        ConfidenceBucket { label: "70-80%", min: 0.7, max: 0.8, count: 0 },
        ConfidenceBucket { label: "60-70%", min: 0.6, max: 0.7, count: 0 },
        ConfidenceBucket { label: "<60%", min: 0.0, max: 0.6, count: 0 },
    ];

    for item in items {
        if let Some(bucket) = buckets
            .iter_mut()
            .find(|b| item.confidence >= b.min && item.confidence < b.max)
        {
            bucket.count += 1;
        }
    }

    buckets
}

/// Per-day status counts for the timeline chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub approved: usize,
    pub flagged: usize,
    pub pending: usize,
}

/// Per-day status counts over the trailing `days` days, oldest first.
///
/// Derived from item timestamps; days with no activity appear with zero
/// counts so the timeline has no gaps.
pub fn daily_volume(items: &[ContentItem], days: usize) -> Vec<DailyVolume> {
    let today = Utc::now().date_naive();

    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let mut volume = DailyVolume {
                date,
                approved: 0,
                flagged: 0,
                pending: 0,
            };
            for item in items.iter().filter(|i| i.timestamp.date_naive() == date) {
                match item.status {
                    ContentStatus::Approved => volume.approved += 1,
                    ContentStatus::Flagged => volume.flagged += 1,
                    ContentStatus::Pending => volume.pending += 1,
                }
            }
            volume
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModerationConfig;
    use crate::engine::ClassificationResult;

    fn item(status: ContentStatus, confidence: f64, categories: Vec<Category>) -> ContentItem {
        ContentItem::from_result(
            "text",
            None,
            &ModerationConfig::default(),
            ClassificationResult {
                status,
                confidence,
                categories,
            },
        )
    }

    #[test]
    fn test_category_distribution_sorted_desc() {
        let items = vec![
            item(ContentStatus::Flagged, 0.8, vec![Category::Negative, Category::Accusation]),
            item(ContentStatus::Flagged, 0.8, vec![Category::Negative]),
            item(ContentStatus::Approved, 0.8, vec![Category::Positive]),
        ];
        let distribution = category_distribution(&items);
        assert_eq!(distribution[0].category, Category::Negative);
        assert_eq!(distribution[0].count, 2);
        // Ties (accusation=1, positive=1) break alphabetically
        assert_eq!(distribution[1].category, Category::Accusation);
        assert_eq!(distribution[2].category, Category::Positive);
    }

    #[test]
    fn test_category_distribution_empty() {
        assert!(category_distribution(&[]).is_empty());
    }

    #[test]
    fn test_confidence_histogram_edges() {
        let items = vec![
            item(ContentStatus::Approved, 0.98, vec![Category::Neutral]),
            item(ContentStatus::Approved, 0.9, vec![Category::Neutral]),
            item(ContentStatus::Approved, 0.6, vec![Category::Neutral]),
            item(ContentStatus::Pending, 0.5, vec![Category::Neutral]),
        ];
        let buckets = confidence_histogram(&items);
        assert_eq!(buckets[0].label, "90-100%");
        assert_eq!(buckets[0].count, 2); // 0.98 and 0.9
        assert_eq!(buckets[3].label, "60-70%");
        assert_eq!(buckets[3].count, 1); // 0.6 lands on the inclusive edge
        assert_eq!(buckets[4].label, "<60%");
        assert_eq!(buckets[4].count, 1);
    }

    #[test]
    fn test_daily_volume_buckets_by_day() {
        let mut yesterday = item(ContentStatus::Flagged, 0.8, vec![Category::Negative]);
        yesterday.timestamp = Utc::now() - Duration::days(1);
        let items = vec![
            item(ContentStatus::Approved, 0.8, vec![Category::Neutral]),
            yesterday,
        ];

        let volume = daily_volume(&items, 7);
        assert_eq!(volume.len(), 7);
        // Oldest first; last entry is today
        assert_eq!(volume[6].approved, 1);
        assert_eq!(volume[5].flagged, 1);
        assert_eq!(volume[0].approved + volume[0].flagged + volume[0].pending, 0);
    }
}
