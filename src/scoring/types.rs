use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RELEVANCE_SCORE;

/// Relevance of one project to one user description, always in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct RelevanceScore(f32);

impl RelevanceScore {
    pub const MAX: Self = Self(1.0);
    /// Substituted for missing or failed judgements.
    pub const NEUTRAL: Self = Self(DEFAULT_RELEVANCE_SCORE);

    /// Builds a score, clamping out-of-range values and mapping NaN to
    /// [`RelevanceScore::NEUTRAL`].
    pub fn clamped(value: f32) -> Self {
        if value.is_nan() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for RelevanceScore {
    fn from(value: f32) -> Self {
        Self::clamped(value)
    }
}

impl From<RelevanceScore> for f32 {
    fn from(score: RelevanceScore) -> Self {
        score.0
    }
}

impl Default for RelevanceScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl std::fmt::Display for RelevanceScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
