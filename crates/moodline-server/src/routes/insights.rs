//! Insight Routes - Pattern insights (ephemeral, regenerated on demand)

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};

use crate::models::{error_response, InsightResponse, RefreshInsightsResponse};
use crate::AppState;

/// Current pattern-insight set (possibly empty)
#[utoipa::path(
    get,
    path = "/journal/insights",
    responses(
        (status = 200, description = "Current insight set", body = Vec<InsightResponse>)
    ),
    tag = "Insights"
)]
pub async fn list_insights(State(state): State<AppState>) -> Json<Vec<InsightResponse>> {
    let insights = state.journal.insights().await;
    Json(insights.into_iter().map(InsightResponse::from).collect())
}

/// Regenerate the insight set through the gateway.
///
/// Returns the (possibly unchanged) set; a request already in flight or
/// too few entries leaves `refreshed` false.
#[utoipa::path(
    post,
    path = "/journal/insights/refresh",
    responses(
        (status = 200, description = "Refresh attempted", body = RefreshInsightsResponse),
        (status = 502, description = "Classifier gateway failure"),
        (status = 504, description = "Classifier gateway timeout")
    ),
    tag = "Insights"
)]
pub async fn refresh_insights(
    State(state): State<AppState>,
) -> Result<Json<RefreshInsightsResponse>, (StatusCode, String)> {
    let refreshed = state
        .journal
        .refresh_pattern_insights()
        .await
        .map_err(error_response)?;
    let insights = state.journal.insights().await;
    Ok(Json(RefreshInsightsResponse {
        refreshed,
        insights: insights.into_iter().map(InsightResponse::from).collect(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/journal/insights", get(list_insights))
        .route("/journal/insights/refresh", post(refresh_insights))
}
