use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::model::ModelError;
use crate::project::{Project, UserDescription};

use super::error::ScoringError;
use super::scorer::RelevanceScorer;
use super::types::RelevanceScore;

/// [`RelevanceScorer`] answering from a fixed title → score table.
///
/// Titles without an entry get the fallback score; titles marked as failing
/// return a model error.
#[derive(Default)]
pub struct MockScorer {
    scores: HashMap<String, f32>,
    failing: Vec<String>,
    fallback: f32,
    calls: AtomicUsize,
}

impl MockScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, title: impl Into<String>, score: f32) -> Self {
        self.scores.insert(title.into(), score);
        self
    }

    pub fn failing_for(mut self, title: impl Into<String>) -> Self {
        self.failing.push(title.into());
        self
    }

    pub fn with_fallback(mut self, score: f32) -> Self {
        self.fallback = score;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RelevanceScorer for MockScorer {
    async fn score(
        &self,
        project: &Project,
        _user_description: &UserDescription,
    ) -> Result<RelevanceScore, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.iter().any(|t| t == &project.title) {
            return Err(ScoringError::Model(ModelError::RequestFailed {
                model: "mock".to_string(),
                message: format!("scoring '{}' failed", project.title),
            }));
        }

        let raw = self
            .scores
            .get(&project.title)
            .copied()
            .unwrap_or(self.fallback);
        Ok(RelevanceScore::clamped(raw))
    }
}
