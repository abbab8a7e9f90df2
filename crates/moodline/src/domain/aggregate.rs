//! Aggregation - Pure functions over entry sequences
//!
//! No side effects; everything here is computed locally from the entries
//! handed in. Input sequences are newest-first, matching the entry store.

use crate::domain::entities::MoodEntry;
use crate::domain::value_objects::{Mood, MoodDistribution, Trend};

/// Default window for trend classification
pub const TREND_WINDOW: usize = 5;

/// Count mood occurrences, preserving first-seen key order
pub fn frequency_of(entries: &[MoodEntry]) -> MoodDistribution {
    entries.iter().map(|e| e.mood).collect()
}

/// Mood with the highest count; ties go to the first-seen mood
pub fn dominant_mood(distribution: &MoodDistribution) -> Option<Mood> {
    distribution.dominant()
}

/// Arithmetic mean of classifier confidence; `None` on empty input.
/// Callers only invoke this with at least 3 entries.
pub fn average_confidence(entries: &[MoodEntry]) -> Option<f32> {
    if entries.is_empty() {
        return None;
    }
    let sum: f32 = entries.iter().map(|e| e.confidence).sum();
    Some(sum / entries.len() as f32)
}

/// Classify the rolling trend over the most recent `window_size` entries.
///
/// Fewer than 2 entries is `none`. Otherwise, count entries whose mood is
/// positive (happy, excited, calm, motivated) within the window: 3 or more
/// is `positive`, 1 or fewer is `concerning`, anything else `mixed`.
pub fn trend(entries: &[MoodEntry], window_size: usize) -> Trend {
    if entries.len() < 2 {
        return Trend::None;
    }

    let window = &entries[..entries.len().min(window_size)];
    let positive = window.iter().filter(|e| e.mood.is_positive()).count();

    if positive >= 3 {
        Trend::Positive
    } else if positive <= 1 {
        Trend::Concerning
    } else {
        Trend::Mixed
    }
}
