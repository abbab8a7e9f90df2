//! Summary Store - Capacity-bounded log of weekly summaries
//!
//! Newest first, at most one summary per distinct week start.

use serde::{Deserialize, Serialize};

use crate::domain::entities::WeeklySummary;
use crate::domain::errors::PipelineError;

/// Maximum number of retained weekly summaries
pub const SUMMARY_CAPACITY: usize = 12;

/// Newest-first log of weekly summaries, bounded at 12
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStore {
    summaries: Vec<WeeklySummary>,
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    SUMMARY_CAPACITY
}

impl Default for SummaryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryStore {
    pub fn new() -> Self {
        Self {
            summaries: Vec::new(),
            capacity: SUMMARY_CAPACITY,
        }
    }

    /// Prepend a summary, rejecting a duplicate week start, and evict
    /// beyond capacity, oldest first
    pub fn insert(&mut self, summary: WeeklySummary) -> Result<(), PipelineError> {
        if self
            .summaries
            .iter()
            .any(|s| s.week_start == summary.week_start)
        {
            return Err(PipelineError::Conflict(format!(
                "summary for week starting {} already exists",
                summary.week_start
            )));
        }
        self.summaries.insert(0, summary);
        self.summaries.truncate(self.capacity);
        Ok(())
    }

    /// Most recently generated summary
    pub fn latest(&self) -> Option<&WeeklySummary> {
        self.summaries.first()
    }

    /// All retained summaries, newest first
    pub fn list(&self) -> &[WeeklySummary] {
        &self.summaries
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Mood, MoodDistribution};
    use chrono::{Duration, TimeZone, Utc};

    fn summary(week_offset: i64) -> WeeklySummary {
        let week_start =
            Utc.with_ymd_and_hms(2026, 8, 23, 0, 0, 0).unwrap() - Duration::weeks(week_offset);
        WeeklySummary {
            week_start,
            week_end: week_start + Duration::days(7),
            entries: Vec::new(),
            dominant_mood: Mood::Calm,
            mood_distribution: MoodDistribution::new(),
            average_confidence: 75.0,
            insights: vec!["steady week".to_string()],
            recommendations: vec!["keep journaling".to_string()],
        }
    }

    #[test]
    fn test_insert_prepends_and_latest() {
        let mut store = SummaryStore::new();
        store.insert(summary(2)).unwrap();
        store.insert(summary(1)).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.latest().unwrap().week_start, summary(1).week_start);
    }

    #[test]
    fn test_duplicate_week_start_rejected() {
        let mut store = SummaryStore::new();
        store.insert(summary(1)).unwrap();
        let err = store.insert(summary(1)).unwrap_err();
        assert!(matches!(err, PipelineError::Conflict(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut store = SummaryStore::new();
        for offset in (0..20).rev() {
            store.insert(summary(offset)).unwrap();
        }
        assert_eq!(store.len(), SUMMARY_CAPACITY);
        assert_eq!(store.latest().unwrap().week_start, summary(0).week_start);
    }
}
