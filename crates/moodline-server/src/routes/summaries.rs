//! Summary Routes - Weekly summaries

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};

use crate::models::{error_response, RunSummaryResponse, SummaryResponse};
use crate::AppState;

/// Retained weekly summaries, newest first
#[utoipa::path(
    get,
    path = "/journal/summaries",
    responses(
        (status = 200, description = "Weekly summaries", body = Vec<SummaryResponse>)
    ),
    tag = "Summaries"
)]
pub async fn list_summaries(State(state): State<AppState>) -> Json<Vec<SummaryResponse>> {
    let summaries = state.journal.summaries().await;
    Json(summaries.into_iter().map(SummaryResponse::from).collect())
}

/// Evaluate the weekly-summary trigger now.
///
/// The trigger also runs after every entry submission; this endpoint
/// exists for catch-up after the app was closed over a week boundary.
#[utoipa::path(
    post,
    path = "/journal/summaries/run",
    responses(
        (status = 200, description = "Trigger evaluated", body = RunSummaryResponse),
        (status = 502, description = "Classifier gateway failure"),
        (status = 504, description = "Classifier gateway timeout")
    ),
    tag = "Summaries"
)]
pub async fn run_summary_check(
    State(state): State<AppState>,
) -> Result<Json<RunSummaryResponse>, (StatusCode, String)> {
    let summary = state
        .journal
        .check_weekly_summary()
        .await
        .map_err(error_response)?;
    Ok(Json(RunSummaryResponse {
        generated: summary.is_some(),
        summary: summary.map(SummaryResponse::from),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/journal/summaries", get(list_summaries))
        .route("/journal/summaries/run", post(run_summary_check))
}
