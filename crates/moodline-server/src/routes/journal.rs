//! Journal Routes - Entry submission, history and trend

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use moodline::InputMethod;

use crate::models::{error_response, EntryResponse, SubmitEntryRequest, TrendResponse};
use crate::AppState;

/// Submit free text for classification
#[utoipa::path(
    post,
    path = "/journal/entries",
    request_body = SubmitEntryRequest,
    responses(
        (status = 201, description = "Entry classified and recorded", body = EntryResponse),
        (status = 400, description = "Empty entry text"),
        (status = 502, description = "Classifier gateway failure"),
        (status = 504, description = "Classifier gateway timeout")
    ),
    tag = "Journal"
)]
pub async fn submit_entry(
    State(state): State<AppState>,
    Json(payload): Json<SubmitEntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), (StatusCode, String)> {
    let input_method = match payload.input_method.as_deref() {
        None | Some("") => InputMethod::Text,
        Some(raw) => raw
            .parse()
            .map_err(|e: String| (StatusCode::BAD_REQUEST, e))?,
    };

    let entry = state
        .journal
        .submit(&payload.text, input_method)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(entry.into())))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// Browse retained entries, newest first
#[utoipa::path(
    get,
    path = "/journal/entries",
    params(("limit" = Option<usize>, Query, description = "Maximum entries to return")),
    responses(
        (status = 200, description = "Entry history", body = Vec<EntryResponse>)
    ),
    tag = "Journal"
)]
pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<EntryResponse>> {
    let mut history = state.journal.history().await;
    if let Some(limit) = query.limit {
        history.truncate(limit);
    }
    Json(history.into_iter().map(EntryResponse::from).collect())
}

/// Rolling trend over the most recent entries
#[utoipa::path(
    get,
    path = "/journal/trend",
    responses(
        (status = 200, description = "Current trend", body = TrendResponse)
    ),
    tag = "Journal"
)]
pub async fn get_trend(State(state): State<AppState>) -> Json<TrendResponse> {
    let trend = state.journal.current_trend().await;
    Json(TrendResponse {
        trend: trend.to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/journal/entries",
            get(list_entries).post(submit_entry),
        )
        .route("/journal/trend", get(get_trend))
}
