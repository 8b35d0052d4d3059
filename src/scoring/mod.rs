//! Per-project relevance scoring.
//!
//! A [`RelevanceScorer`] turns one (project, user description) pair into a
//! [`RelevanceScore`]. The judgement itself belongs to the model; this module
//! only builds the prompt and guarantees the result stays in `[0, 1]`:
//!
//! - no reply text: [`RelevanceScore::NEUTRAL`]
//! - a number outside the range: clamped
//! - text with no number in it: [`ScoringError::MalformedResponse`]

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockScorer;
pub use scorer::{PromptScorer, RelevanceScorer};
pub use types::RelevanceScore;
