//! Moodline API Routes
//!
//! - /journal/entries - entry submission and history
//! - /journal/trend - rolling trend
//! - /journal/insights - pattern insights
//! - /journal/summaries - weekly summaries

pub mod insights;
pub mod journal;
pub mod summaries;
pub mod swagger;
