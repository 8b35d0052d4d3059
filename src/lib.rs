//! Folio library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Types
//! - [`Project`], [`UserDescription`], [`ReorderRequest`] - Ranking inputs
//! - [`Config`], [`ConfigError`] - Server configuration
//!
//! ## Ranking
//! - [`ChatModel`], [`GenaiChatModel`] - Chat-completion capability
//! - [`RelevanceScorer`], [`PromptScorer`], [`RelevanceScore`] - Per-project scoring
//! - [`ProjectRanker`], [`ModelRanker`], [`ScoreRanker`] - Reordering strategies
//!
//! ## Orchestration
//! - [`Prioritizer`] - Validation and the timeout race
//! - [`PrioritizeResponse`], [`ErrorKind`] - Uniform outcome reported to callers
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod gateway;
pub mod model;
pub mod orchestrator;
pub mod project;
pub mod reorder;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_MODEL, DEFAULT_TIMEOUT, DEFAULT_TIMEOUT_MS, DESCRIPTION_MAX_CHARS,
    DESCRIPTION_MIN_CHARS, description_within_policy,
};
pub use gateway::{FOLIO_STATUS_HEADER, HandlerState, create_router_with_state};
#[cfg(any(test, feature = "mock"))]
pub use model::MockChatModel;
pub use model::{ChatModel, ChatReply, ChatRequest, GenaiChatModel, ModelError};
pub use orchestrator::{
    ErrorKind, INVALID_INPUT_MESSAGE, OrchestratorError, PrioritizeResponse, Prioritizer,
    TIMEOUT_MESSAGE, UPSTREAM_FAILURE_MESSAGE,
};
pub use project::{Project, ProjectError, ReorderRequest, UserDescription, default_projects};
pub use reorder::{ModelRanker, ProjectRanker, RankingStrategy, ReorderError, ScoreRanker};
#[cfg(any(test, feature = "mock"))]
pub use scoring::MockScorer;
pub use scoring::{PromptScorer, RelevanceScore, RelevanceScorer, ScoringError};
