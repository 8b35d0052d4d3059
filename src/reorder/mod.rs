//! Reordering a project list by relevance to a user description.
//!
//! Two [`ProjectRanker`] strategies are available:
//!
//! - [`ModelRanker`] (default): one aggregate model conversation in which the
//!   model may call the relevance scorer as a tool, then answers with the list.
//! - [`ScoreRanker`]: score every project directly and sort.
//!
//! Whatever the strategy, a successful result is a permutation of the input.
//! Empty and single-project inputs are returned without any model call.

pub mod contract;
pub mod error;
pub mod model_ranker;
pub mod parse;
pub mod score_ranker;


use std::str::FromStr;

use async_trait::async_trait;

use crate::project::{Project, ReorderRequest};

pub use contract::{ensure_permutation, trivial_order};
pub use error::ReorderError;
pub use model_ranker::ModelRanker;
pub use parse::parse_ranked_projects;
pub use score_ranker::ScoreRanker;

/// Produces the request's projects ordered most to least relevant.
#[async_trait]
pub trait ProjectRanker: Send + Sync {
    async fn reorder(&self, request: &ReorderRequest) -> Result<Vec<Project>, ReorderError>;
}

#[async_trait]
impl<T: ProjectRanker + ?Sized> ProjectRanker for std::sync::Arc<T> {
    async fn reorder(&self, request: &ReorderRequest) -> Result<Vec<Project>, ReorderError> {
        (**self).reorder(request).await
    }
}

/// Which ranker the server builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingStrategy {
    /// [`ModelRanker`].
    #[default]
    Model,
    /// [`ScoreRanker`].
    Scores,
}

impl RankingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingStrategy::Model => "model",
            RankingStrategy::Scores => "scores",
        }
    }
}

impl FromStr for RankingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "model" => Ok(RankingStrategy::Model),
            "scores" | "score" => Ok(RankingStrategy::Scores),
            other => Err(format!("unknown ranking strategy '{}'", other)),
        }
    }
}

impl std::fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
