use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::orchestrator::{ErrorKind, OrchestratorError, PrioritizeResponse};

use super::status_headers;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Prioritize(#[from] OrchestratorError),
}

impl GatewayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::InvalidRequest(_) => ErrorKind::InvalidInput,
            GatewayError::Prioritize(e) => e.kind(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = match kind {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ErrorKind::UpstreamFailure => StatusCode::BAD_GATEWAY,
        };

        (
            status,
            status_headers(kind.as_label()),
            Json(PrioritizeResponse::failure(kind)),
        )
            .into_response()
    }
}
