use serde::{Deserialize, Serialize};

use crate::project::Project;

use super::error::{ErrorKind, OrchestratorError};

/// Uniform result handed to the presentation layer.
///
/// Serializes as `{"success":true,"data":[...]}` or
/// `{"success":false,"error":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrioritizeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PrioritizeResponse {
    pub fn ok(projects: Vec<Project>) -> Self {
        Self {
            success: true,
            data: Some(projects),
            error: None,
        }
    }

    pub fn failure(kind: ErrorKind) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(kind.message().to_string()),
        }
    }
}

impl From<Result<Vec<Project>, OrchestratorError>> for PrioritizeResponse {
    fn from(result: Result<Vec<Project>, OrchestratorError>) -> Self {
        match result {
            Ok(projects) => Self::ok(projects),
            Err(e) => Self::failure(e.kind()),
        }
    }
}
