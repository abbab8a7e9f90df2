//! API Models - Request/response DTOs
//!
//! Wire types are kept separate from domain types; moods and trends
//! cross the wire as lowercase strings.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use moodline::{MoodEntry, PatternInsight, PipelineError, WeeklySummary};

/// Map pipeline errors onto HTTP responses
pub fn error_response(err: PipelineError) -> (StatusCode, String) {
    let status = match &err {
        PipelineError::Validation(_) => StatusCode::BAD_REQUEST,
        PipelineError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        PipelineError::Gateway(_)
        | PipelineError::Api { .. }
        | PipelineError::Parse(_)
        | PipelineError::SchemaMismatch(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Conflict(_) => StatusCode::CONFLICT,
        PipelineError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitEntryRequest {
    /// Free text describing how the user feels
    pub text: String,
    /// "text", "voice" or "photo"; defaults to "text"
    #[serde(default)]
    pub input_method: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntryResponse {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub mood: String,
    pub emoji: String,
    pub color: String,
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub input_method: String,
}

impl From<MoodEntry> for EntryResponse {
    fn from(entry: MoodEntry) -> Self {
        Self {
            id: entry.id,
            timestamp: entry.timestamp,
            text: entry.text,
            mood: entry.mood.to_string(),
            emoji: entry.mood.emoji().to_string(),
            color: entry.mood.color().to_string(),
            confidence: entry.confidence,
            content: entry.content,
            input_method: entry.input_method.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrendResponse {
    /// "positive", "concerning", "mixed" or "none"
    pub trend: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InsightResponse {
    pub pattern: String,
    pub frequency: f32,
    pub description: String,
    pub recommendation: String,
    pub timeframe: String,
}

impl From<PatternInsight> for InsightResponse {
    fn from(insight: PatternInsight) -> Self {
        Self {
            pattern: insight.pattern,
            frequency: insight.frequency,
            description: insight.description,
            recommendation: insight.recommendation,
            timeframe: insight.timeframe,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RefreshInsightsResponse {
    /// Whether a new insight set was installed by this call
    pub refreshed: bool,
    pub insights: Vec<InsightResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MoodCount {
    pub mood: String,
    pub count: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub entry_count: usize,
    pub dominant_mood: String,
    pub mood_distribution: Vec<MoodCount>,
    pub average_confidence: f32,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

impl From<WeeklySummary> for SummaryResponse {
    fn from(summary: WeeklySummary) -> Self {
        Self {
            week_start: summary.week_start,
            week_end: summary.week_end,
            entry_count: summary.entries.len(),
            dominant_mood: summary.dominant_mood.to_string(),
            mood_distribution: summary
                .mood_distribution
                .iter()
                .map(|(mood, count)| MoodCount {
                    mood: mood.to_string(),
                    count,
                })
                .collect(),
            average_confidence: summary.average_confidence,
            insights: summary.insights,
            recommendations: summary.recommendations,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RunSummaryResponse {
    /// Whether a summary was generated by this call
    pub generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryResponse>,
}
