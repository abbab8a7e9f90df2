//! Classifier Gateway Port
//!
//! Abstract interface for the hosted model that classifies entries and
//! generates narrative content. Four call shapes, all the same pattern:
//! submit structured context, receive JSON matching a fixed schema.
//! Every call is fallible and nothing here retries automatically.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{MoodEntry, PatternInsight};
use crate::domain::errors::PipelineError;
use crate::domain::value_objects::{Mood, MoodDistribution};

/// Result of classifying free text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Dominant emotion, constrained to the eight-value enum
    pub mood: Mood,
    /// Confidence, 0-100
    pub confidence: f32,
    /// Short explanation of the classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Locally computed aggregates handed to the gateway for summary narration
#[derive(Debug, Clone, Serialize)]
pub struct SummaryContext {
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub entry_count: usize,
    pub dominant_mood: Mood,
    pub distribution: MoodDistribution,
    pub average_confidence: f32,
    /// Up to 5 entries from the week, as narrative grounding
    pub sample: Vec<MoodEntry>,
}

/// Narrative halves of a weekly summary, generated by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryNarrative {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// A recent entry as presented to the pattern call, text pre-truncated
#[derive(Debug, Clone, Serialize)]
pub struct PatternEntry {
    pub timestamp: DateTime<Utc>,
    pub mood: Mood,
    pub text: String,
}

/// Context for pattern-insight generation
#[derive(Debug, Clone, Serialize)]
pub struct PatternContext {
    /// Up to the 20 most recent entries, newest first
    pub recent: Vec<PatternEntry>,
    pub distribution: MoodDistribution,
}

/// Classifier gateway interface.
///
/// Implementations must be swappable: the hosted Gemini client and the
/// offline keyword fallback both live behind this trait.
#[async_trait]
pub trait MoodClassifier: Send + Sync {
    /// Classify free text into a mood with confidence
    async fn classify(&self, text: &str) -> Result<Classification, PipelineError>;

    /// Produce 2-3 sentences of supportive text for a classified entry
    async fn elaborate(&self, mood: Mood, text: &str) -> Result<String, PipelineError>;

    /// Produce 3-4 insights and 3-4 recommendations for a closed week
    async fn summarize(&self, context: &SummaryContext)
        -> Result<SummaryNarrative, PipelineError>;

    /// Produce 3-5 pattern insights over recent entries. A response that
    /// is not a JSON array must surface as `PipelineError::SchemaMismatch`.
    async fn patterns(
        &self,
        context: &PatternContext,
    ) -> Result<Vec<PatternInsight>, PipelineError>;

    /// Name of the backing provider ("gemini", "keyword", ...)
    fn provider_name(&self) -> &str;
}
