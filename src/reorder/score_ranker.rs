use std::cmp::Ordering;

use async_trait::async_trait;
use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::project::{Project, ReorderRequest};
use crate::scoring::{RelevanceScore, RelevanceScorer};

use super::ProjectRanker;
use super::contract::{ensure_permutation, trivial_order};
use super::error::ReorderError;

/// Ranks by scoring every project directly and sorting by descending score.
///
/// Scoring runs concurrently. A project whose scoring fails gets
/// [`RelevanceScore::NEUTRAL`]; ties keep their input order.
///
/// Unlike the per-project rule, a request where every project fails to score
/// is not answered with the input order: an all-neutral ranking carries no
/// relevance information, so it fails with [`ReorderError::ScoringUnavailable`].
pub struct ScoreRanker<S> {
    scorer: S,
}

impl<S: RelevanceScorer> ScoreRanker<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}

#[async_trait]
impl<S: RelevanceScorer> ProjectRanker for ScoreRanker<S> {
    async fn reorder(&self, request: &ReorderRequest) -> Result<Vec<Project>, ReorderError> {
        if let Some(order) = trivial_order(request) {
            debug!(count = order.len(), "Trivial reorder, skipping scoring");
            return Ok(order);
        }

        let results = join_all(
            request
                .projects
                .iter()
                .map(|project| self.scorer.score(project, &request.user_description)),
        )
        .await;

        let mut failures = 0usize;
        let mut scored: Vec<(RelevanceScore, &Project)> = results
            .into_iter()
            .zip(&request.projects)
            .map(|(result, project)| match result {
                Ok(score) => (score, project),
                Err(e) => {
                    failures += 1;
                    warn!(title = %project.title, error = %e, "Scoring failed, using neutral score");
                    (RelevanceScore::NEUTRAL, project)
                }
            })
            .collect();

        if failures == request.projects.len() {
            return Err(ReorderError::ScoringUnavailable { failures });
        }

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        let ranked: Vec<Project> = scored.into_iter().map(|(_, p)| p.clone()).collect();
        ensure_permutation(&request.projects, &ranked)?;

        info!(count = ranked.len(), failures, "Projects reordered by score");
        Ok(ranked)
    }
}
