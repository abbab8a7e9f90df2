//! Moodline API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API Client for the Moodline server
pub struct MoodlineClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct EntryResponse {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub text: String,
    pub mood: String,
    pub emoji: String,
    pub confidence: f32,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrendResponse {
    pub trend: String,
}

#[derive(Debug, Deserialize)]
pub struct InsightResponse {
    pub pattern: String,
    pub frequency: f32,
    pub description: String,
    pub recommendation: String,
    pub timeframe: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshInsightsResponse {
    pub refreshed: bool,
    pub insights: Vec<InsightResponse>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub entry_count: usize,
    pub dominant_mood: String,
    pub average_confidence: f32,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
struct SubmitEntryRequest<'a> {
    text: &'a str,
}

impl MoodlineClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Submit an entry for classification
    pub async fn submit(&self, text: &str) -> Result<EntryResponse> {
        let url = format!("{}/journal/entries", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&SubmitEntryRequest { text })
            .send()
            .await
            .context("Failed to connect to Moodline API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Fetch entry history, newest first
    pub async fn history(&self, limit: Option<usize>) -> Result<Vec<EntryResponse>> {
        let url = match limit {
            Some(limit) => format!("{}/journal/entries?limit={}", self.base_url, limit),
            None => format!("{}/journal/entries", self.base_url),
        };
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Moodline API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Fetch the current trend
    pub async fn trend(&self) -> Result<TrendResponse> {
        let url = format!("{}/journal/trend", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Moodline API")?;

        if !resp.status().is_success() {
            bail!("API error ({})", resp.status());
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Fetch the current pattern-insight set
    pub async fn insights(&self) -> Result<Vec<InsightResponse>> {
        let url = format!("{}/journal/insights", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Moodline API")?;

        if !resp.status().is_success() {
            bail!("API error ({})", resp.status());
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Ask the server to regenerate pattern insights
    pub async fn refresh_insights(&self) -> Result<RefreshInsightsResponse> {
        let url = format!("{}/journal/insights/refresh", self.base_url);
        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to connect to Moodline API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Fetch weekly summaries, newest first
    pub async fn summaries(&self) -> Result<Vec<SummaryResponse>> {
        let url = format!("{}/journal/summaries", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Moodline API")?;

        if !resp.status().is_success() {
            bail!("API error ({})", resp.status());
        }

        resp.json().await.context("Failed to parse response")
    }
}
