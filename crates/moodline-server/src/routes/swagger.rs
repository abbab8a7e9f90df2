//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    EntryResponse, InsightResponse, MoodCount, RefreshInsightsResponse, RunSummaryResponse,
    SubmitEntryRequest, SummaryResponse, TrendResponse,
};
use crate::routes::{insights, journal, summaries};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Moodline API",
        version = "0.1.0",
        description = "Mood journal pipeline: entry classification, rolling trends, pattern insights and weekly summaries.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    paths(
        journal::submit_entry,
        journal::list_entries,
        journal::get_trend,
        insights::list_insights,
        insights::refresh_insights,
        summaries::list_summaries,
        summaries::run_summary_check,
    ),
    tags(
        (name = "Journal", description = "Entry submission, history and trend"),
        (name = "Insights", description = "Gateway-derived pattern insights (ephemeral)"),
        (name = "Summaries", description = "Weekly summaries (persisted)"),
    ),
    components(
        schemas(
            SubmitEntryRequest,
            EntryResponse,
            TrendResponse,
            InsightResponse,
            RefreshInsightsResponse,
            MoodCount,
            SummaryResponse,
            RunSummaryResponse,
        )
    ),
)]
pub struct ApiDoc;
