//! WeeklySummary - Per-calendar-week aggregate with narrative

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::MoodEntry;
use crate::domain::value_objects::{Mood, MoodDistribution};

/// A persisted weekly aggregate plus gateway-generated narrative.
///
/// Immutable after creation. The `entries` field is a by-value snapshot
/// of the week's entries at generation time; later patches to the live
/// entries do not flow back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Start of the summarized week (Sunday, local midnight)
    pub week_start: DateTime<Utc>,
    /// Exclusive end of the summarized week
    pub week_end: DateTime<Utc>,
    /// Snapshot of the entries that fell inside the week, newest first
    pub entries: Vec<MoodEntry>,
    /// Most frequent mood of the week
    pub dominant_mood: Mood,
    /// Frequency counts in first-seen order
    pub mood_distribution: MoodDistribution,
    /// Mean classifier confidence over the week's entries
    pub average_confidence: f32,
    /// Narrative observations from the gateway
    pub insights: Vec<String>,
    /// Narrative suggestions from the gateway
    pub recommendations: Vec<String>,
}
