//! HTTP gateway (Axum) exposing the catalog and the prioritizer.
//!
//! This module is primarily used by the `folio` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{list_projects_handler, prioritize_handler};
pub use state::HandlerState;

/// Response header carrying the outcome label of a request.
pub const FOLIO_STATUS_HEADER: &str = "x-folio-status";
pub const FOLIO_STATUS_OK: &str = "ok";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/projects", get(list_projects_handler))
        .route("/v1/projects/prioritize", post(prioritize_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    pub status: &'static str,
    pub model: String,
    pub strategy: &'static str,
    pub timeout_ms: u64,
}

pub(crate) fn status_headers(label: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(FOLIO_STATUS_HEADER, HeaderValue::from_static(label));
    headers
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        status_headers(FOLIO_STATUS_OK),
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let body = ReadyResponse {
        status: "ok",
        model: state.model_name.to_string(),
        strategy: state.strategy.as_str(),
        timeout_ms: state.prioritizer.timeout().as_millis() as u64,
    };

    (StatusCode::OK, status_headers(FOLIO_STATUS_OK), Json(body)).into_response()
}
