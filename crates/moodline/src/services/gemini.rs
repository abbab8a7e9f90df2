//! Gemini Classifier Gateway
//!
//! Implements the classifier port against Gemini's `generateContent`
//! endpoint. Every call follows the same shape: natural-language
//! instruction plus embedded JSON context in, a single JSON value out.
//! Requests carry a bounded timeout; a timeout surfaces as its own
//! failure kind. No call retries automatically.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::PatternInsight;
use crate::domain::errors::PipelineError;
use crate::domain::value_objects::Mood;
use crate::ports::classifier::{
    Classification, MoodClassifier, PatternContext, SummaryContext, SummaryNarrative,
};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Classifier gateway backed by the Gemini API
#[derive(Clone)]
pub struct GeminiClassifier {
    client: Client,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiClassifier {
    /// Creates a new gateway using the provided API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the Gemini model name if needed
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// One prompt in, the concatenated candidate text out
    async fn generate(&self, prompt: String) -> Result<String, PipelineError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let request = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    PipelineError::Timeout(self.timeout)
                } else {
                    PipelineError::Gateway(err.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| PipelineError::Parse(err.to_string()))?;

        extract_text(&payload)
            .ok_or_else(|| PipelineError::Parse("response contained no text parts".to_string()))
    }
}

#[async_trait]
impl MoodClassifier for GeminiClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, PipelineError> {
        let moods = Mood::ALL.map(|m| m.to_string()).join(", ");
        let prompt = format!(
            "You classify the dominant emotion of personal mood journal entries.\n\
             Classify the entry below as exactly one of: {moods}.\n\
             Respond with only a JSON object, no markdown, of the form\n\
             {{\"mood\": \"<one of the listed moods>\", \"confidence\": <number 0-100>, \"reasoning\": \"<one short sentence>\"}}\n\n\
             Entry:\n{text}"
        );
        parse_classification(&self.generate(prompt).await?)
    }

    async fn elaborate(&self, mood: Mood, text: &str) -> Result<String, PipelineError> {
        let prompt = format!(
            "A person wrote this mood journal entry and it was classified as '{mood}':\n\
             \"{text}\"\n\n\
             Write 2-3 warm, supportive sentences responding to how they feel. \
             Speak directly to them. Respond with plain text only, no JSON, no markdown."
        );
        Ok(self.generate(prompt).await?.trim().to_string())
    }

    async fn summarize(
        &self,
        context: &SummaryContext,
    ) -> Result<SummaryNarrative, PipelineError> {
        let context_json = serde_json::to_string(context)
            .map_err(|e| PipelineError::Parse(e.to_string()))?;
        let prompt = format!(
            "You summarize a week of mood journal entries. The aggregates below were \
             computed locally; do not recompute them, narrate them.\n\
             Context JSON:\n{context_json}\n\n\
             Respond with only a JSON object, no markdown, of the form\n\
             {{\"insights\": [\"...\", ...], \"recommendations\": [\"...\", ...]}}\n\
             with 3-4 short strings in each list."
        );
        parse_narrative(&self.generate(prompt).await?)
    }

    async fn patterns(
        &self,
        context: &PatternContext,
    ) -> Result<Vec<PatternInsight>, PipelineError> {
        let context_json = serde_json::to_string(context)
            .map_err(|e| PipelineError::Parse(e.to_string()))?;
        let prompt = format!(
            "You find recurring patterns in recent mood journal entries.\n\
             Context JSON (recent entries newest first, plus mood frequency counts):\n\
             {context_json}\n\n\
             Respond with only a JSON array, no markdown, of 3-5 objects of the form\n\
             {{\"pattern\": \"<short name>\", \"frequency\": <number 0-100>, \
             \"description\": \"...\", \"recommendation\": \"...\", \"timeframe\": \"...\"}}"
        );
        parse_insights(&self.generate(prompt).await?)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// ============================================
// Response parsing
// ============================================

#[derive(Deserialize)]
struct ClassificationPayload {
    mood: Mood,
    confidence: f32,
    #[serde(default)]
    reasoning: Option<String>,
}

fn parse_classification(text: &str) -> Result<Classification, PipelineError> {
    let payload: ClassificationPayload = serde_json::from_str(strip_code_fences(text))
        .map_err(|e| PipelineError::Parse(format!("classification: {}", e)))?;
    Ok(Classification {
        mood: payload.mood,
        confidence: payload.confidence.clamp(0.0, 100.0),
        reasoning: payload.reasoning,
    })
}

fn parse_narrative(text: &str) -> Result<SummaryNarrative, PipelineError> {
    serde_json::from_str(strip_code_fences(text))
        .map_err(|e| PipelineError::Parse(format!("summary narrative: {}", e)))
}

/// The pattern call is the one place the shape is explicitly checked:
/// anything that parses but is not an array is a schema mismatch.
fn parse_insights(text: &str) -> Result<Vec<PatternInsight>, PipelineError> {
    let value: Value = serde_json::from_str(strip_code_fences(text))
        .map_err(|e| PipelineError::Parse(format!("pattern insights: {}", e)))?;
    if !value.is_array() {
        return Err(PipelineError::SchemaMismatch(
            "pattern insights response is not a JSON array".to_string(),
        ));
    }
    serde_json::from_value(value)
        .map_err(|e| PipelineError::Parse(format!("pattern insights: {}", e)))
}

/// Models often wrap JSON in markdown fences despite instructions
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn extract_text(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let mut collected = Vec::new();
    for candidate in candidates {
        if let Some(parts) = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        collected.push(trimmed.to_string());
                    }
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n\n"))
    }
}

fn map_http_error(status: StatusCode, body: String) -> PipelineError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    PipelineError::Api {
        status: status.as_u16(),
        message,
    }
}
