//! Trend - Rolling classification of recent moods

use serde::{Deserialize, Serialize};

/// Trend over the most recent window of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Concerning,
    Mixed,
    /// Not enough entries to judge (fewer than 2)
    #[default]
    None,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Positive => write!(f, "positive"),
            Trend::Concerning => write!(f, "concerning"),
            Trend::Mixed => write!(f, "mixed"),
            Trend::None => write!(f, "none"),
        }
    }
}
