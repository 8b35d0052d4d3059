use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, instrument, warn};

use crate::constants::DEFAULT_TIMEOUT;
use crate::project::{Project, ReorderRequest};
use crate::reorder::ProjectRanker;

use super::error::OrchestratorError;
use super::response::PrioritizeResponse;

/// Validates a reorder request, races it against a deadline and reduces every
/// failure to an [`OrchestratorError`].
#[derive(Clone)]
pub struct Prioritizer {
    ranker: Arc<dyn ProjectRanker>,
    timeout: Duration,
}

impl std::fmt::Debug for Prioritizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prioritizer")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Prioritizer {
    /// Creates a prioritizer with the default 15 s deadline.
    pub fn new(ranker: Arc<dyn ProjectRanker>) -> Self {
        Self {
            ranker,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Reorders `request.projects`, giving up after `timeout`.
    ///
    /// The ranking runs in its own task. When the deadline wins, that task is
    /// detached rather than aborted and its eventual result is dropped.
    pub async fn prioritize(
        &self,
        request: ReorderRequest,
        timeout: Duration,
    ) -> Result<Vec<Project>, OrchestratorError> {
        validate_request(&request)?;

        let ranker = Arc::clone(&self.ranker);
        let task = tokio::spawn(async move { ranker.reorder(&request).await });

        tokio::select! {
            joined = task => match joined {
                Ok(Ok(projects)) => Ok(projects),
                Ok(Err(e)) => Err(OrchestratorError::UpstreamFailure(e.to_string())),
                Err(e) => Err(OrchestratorError::UpstreamFailure(format!(
                    "reorder task failed: {}",
                    e
                ))),
            },
            _ = tokio::time::sleep(timeout) => {
                debug!(?timeout, "Deadline reached, abandoning in-flight ranking");
                Err(OrchestratorError::Timeout { timeout })
            }
        }
    }

    /// [`prioritize`](Self::prioritize) with the configured deadline, logging
    /// the outcome.
    #[instrument(
        skip_all,
        fields(request_id = %uuid::Uuid::new_v4(), projects = request.projects.len())
    )]
    pub async fn run(&self, request: ReorderRequest) -> Result<Vec<Project>, OrchestratorError> {
        let started = Instant::now();
        let result = self.prioritize(request, self.timeout).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(projects) => info!(count = projects.len(), elapsed_ms, "Projects prioritized"),
            Err(e @ OrchestratorError::InvalidInput { .. }) => {
                warn!(error = %e, "Rejected prioritize request")
            }
            Err(e @ OrchestratorError::Timeout { .. }) => {
                warn!(error = %e, elapsed_ms, "Prioritize request timed out")
            }
            Err(e @ OrchestratorError::UpstreamFailure(_)) => {
                error!(error = %e, elapsed_ms, "Error prioritizing projects")
            }
        }

        result
    }

    /// [`run`](Self::run) reduced to the uniform response shape.
    pub async fn respond(&self, request: ReorderRequest) -> PrioritizeResponse {
        self.run(request).await.into()
    }
}

fn validate_request(request: &ReorderRequest) -> Result<(), OrchestratorError> {
    if request.user_description.is_blank() {
        return Err(OrchestratorError::InvalidInput {
            reason: "user description is empty".to_string(),
        });
    }

    for project in &request.projects {
        project
            .validate()
            .map_err(|e| OrchestratorError::InvalidInput {
                reason: e.to_string(),
            })?;
    }

    Ok(())
}
