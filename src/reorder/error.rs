use thiserror::Error;

use crate::model::ModelError;

#[derive(Debug, Error)]
pub enum ReorderError {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("malformed ranking reply: {reason}")]
    MalformedResponse { reason: String },

    /// The model's list is not a permutation of the input.
    #[error("ranking is not a permutation of the input: {reason}")]
    ContractViolation { reason: String },

    #[error("model kept calling tools after {rounds} rounds")]
    ToolRoundsExceeded { rounds: usize },

    #[error("no project could be scored ({failures} failures)")]
    ScoringUnavailable { failures: usize },
}
