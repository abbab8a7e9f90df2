//! PatternInsight - Gateway-derived observation about recurring moods
//!
//! Ephemeral: held only in process memory and regenerated wholesale on
//! each trigger, never persisted or merged.

use serde::{Deserialize, Serialize};

/// A short observation about recurring mood behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternInsight {
    /// Short name of the pattern
    pub pattern: String,
    /// How often the pattern shows up, 0-100
    pub frequency: f32,
    /// One or two sentences describing the pattern
    pub description: String,
    /// Suggested action
    pub recommendation: String,
    /// Human-readable window the pattern was observed over
    pub timeframe: String,
}
