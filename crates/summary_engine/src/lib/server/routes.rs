//! HTTP routes for the summarizer web UI.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::length::LengthSpec;
use crate::llm::CompletionBackend;

use super::state::AppState;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

pub fn create_router<B>(state: Arc<AppState<B>>) -> Router
where
    B: CompletionBackend + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/summarize", post(summarize))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "summary-web",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Summarize request body. `length` is either a symbolic tag or an
/// approximate word count; both optional fields carry the documented
/// defaults.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub length: LengthSpec,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Always responds 200 with a `SummaryResult`; failures ride in the body's
/// `error` field rather than the status code.
async fn summarize<B>(
    State(state): State<Arc<AppState<B>>>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse
where
    B: CompletionBackend + Send + Sync + 'static,
{
    let result = state
        .summarizer
        .summarize(&request.text, &request.length, &request.language)
        .await;
    Json(result)
}
