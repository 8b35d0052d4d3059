use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::constants::{DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, description_within_policy};
use crate::orchestrator::PrioritizeResponse;
use crate::project::{Project, ReorderRequest};

use super::error::GatewayError;
use super::state::HandlerState;
use super::{FOLIO_STATUS_OK, status_headers};

/// Body of `POST /v1/projects/prioritize`.
///
/// When `projects` is absent the configured catalog is ranked.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizeBody {
    #[serde(default)]
    pub projects: Option<Vec<Project>>,
    pub user_description: String,
}

#[instrument(skip(state))]
pub async fn list_projects_handler(State(state): State<HandlerState>) -> Response {
    (
        StatusCode::OK,
        status_headers(FOLIO_STATUS_OK),
        Json(state.catalog.as_ref().clone()),
    )
        .into_response()
}

#[instrument(skip(state, body), fields(source = tracing::field::Empty))]
pub async fn prioritize_handler(
    State(state): State<HandlerState>,
    body: Result<Json<PrioritizeBody>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(body) = body.map_err(|e| {
        warn!(error = %e, "Rejected malformed prioritize body");
        GatewayError::InvalidRequest(e.body_text())
    })?;

    check_description(&body.user_description)?;

    let projects = match body.projects {
        Some(projects) => {
            tracing::Span::current().record("source", "request");
            projects
        }
        None => {
            tracing::Span::current().record("source", "catalog");
            state.catalog.as_ref().clone()
        }
    };

    debug!(count = projects.len(), "Prioritizing projects");

    let request = ReorderRequest::new(projects, body.user_description);
    let ordered = state.prioritizer.run(request).await?;

    Ok((
        StatusCode::OK,
        status_headers(FOLIO_STATUS_OK),
        Json(PrioritizeResponse::ok(ordered)),
    )
        .into_response())
}

pub(crate) fn check_description(text: &str) -> Result<(), GatewayError> {
    if description_within_policy(text) {
        return Ok(());
    }

    let len = text.trim().chars().count();
    warn!(len, "User description outside length policy");
    Err(GatewayError::InvalidRequest(format!(
        "user description must be {}-{} characters, got {}",
        DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS, len
    )))
}
