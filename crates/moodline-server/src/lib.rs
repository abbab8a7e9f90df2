//! Moodline API Server
//!
//! HTTP surface over the mood journal pipeline:
//! - /journal/entries - submit and browse entries
//! - /journal/trend - rolling trend
//! - /journal/insights - pattern insights
//! - /journal/summaries - weekly summaries

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use moodline::MoodJournal;

pub mod models;
pub mod routes;

/// Shared state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub journal: Arc<MoodJournal>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthCheck {
    status: String,
    classifier: String,
    version: String,
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        classifier: state.journal.provider_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full application router around a journal
pub fn app(journal: Arc<MoodJournal>) -> Router {
    let state = AppState { journal };

    Router::new()
        .route("/health", get(health_check))
        .merge(routes::journal::router())
        .merge(routes::insights::router())
        .merge(routes::summaries::router())
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            routes::swagger::ApiDoc::openapi(),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
