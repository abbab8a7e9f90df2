//! MoodDistribution - Insertion-ordered mood frequency counts
//!
//! Stored as a vector of pairs rather than a hash map so that the order
//! moods were first encountered is preserved; dominant-mood ties resolve
//! to the earlier-seen mood.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Mood;

/// Frequency counts of moods, keyed in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodDistribution {
    counts: Vec<(Mood, u32)>,
}

impl MoodDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for a mood, registering it on first sight
    pub fn increment(&mut self, mood: Mood) {
        match self.counts.iter_mut().find(|(m, _)| *m == mood) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((mood, 1)),
        }
    }

    pub fn count(&self, mood: Mood) -> u32 {
        self.counts
            .iter()
            .find(|(m, _)| *m == mood)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Sum of all counts; equals the number of entries counted
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Mood with the highest count. A later-seen mood must strictly
    /// exceed the current leader, so ties go to the first-seen mood.
    pub fn dominant(&self) -> Option<Mood> {
        let mut best: Option<(Mood, u32)> = None;
        for &(mood, count) in &self.counts {
            match best {
                Some((_, lead)) if count <= lead => {}
                _ => best = Some((mood, count)),
            }
        }
        best.map(|(mood, _)| mood)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Mood, u32)> + '_ {
        self.counts.iter().copied()
    }
}

impl FromIterator<Mood> for MoodDistribution {
    fn from_iter<T: IntoIterator<Item = Mood>>(iter: T) -> Self {
        let mut dist = MoodDistribution::new();
        for mood in iter {
            dist.increment(mood);
        }
        dist
    }
}
