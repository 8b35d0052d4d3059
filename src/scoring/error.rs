use thiserror::Error;

use crate::model::ModelError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("model reply is not a score: {reply:?}")]
    MalformedResponse { reply: String },
}
