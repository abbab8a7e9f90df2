//! Domain Entities
//!
//! Core models owned by the pipeline stores.

pub mod mood_entry;
pub mod pattern_insight;
pub mod weekly_summary;

pub use mood_entry::MoodEntry;
pub use pattern_insight::PatternInsight;
pub use weekly_summary::WeeklySummary;
