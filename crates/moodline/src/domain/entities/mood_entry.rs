//! MoodEntry - One classified mood observation
//!
//! Owned exclusively by the entry store. `content` is attached once,
//! asynchronously, after creation; entries are never deleted individually,
//! only evicted oldest-first when the store is over capacity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{InputMethod, Mood};

/// A user-submitted mood observation and its classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique identifier for the entry
    pub id: String,
    /// When the entry was submitted
    pub timestamp: DateTime<Utc>,
    /// The free text the user entered
    pub text: String,
    /// Dominant emotion as classified by the gateway
    pub mood: Mood,
    /// Classifier confidence, 0-100
    pub confidence: f32,
    /// Supportive content, attached after classification when the
    /// elaborate call completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// How the entry was captured
    #[serde(default)]
    pub input_method: InputMethod,
}

impl MoodEntry {
    /// Create a new entry with generated ID and current timestamp
    pub fn new(text: String, mood: Mood, confidence: f32, input_method: InputMethod) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            text,
            mood,
            confidence: confidence.clamp(0.0, 100.0),
            content: None,
            input_method,
        }
    }
}
