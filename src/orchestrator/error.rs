use std::time::Duration;

use thiserror::Error;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input provided.";
pub const TIMEOUT_MESSAGE: &str =
    "The AI service took too long to respond. Please try again later.";
pub const UPSTREAM_FAILURE_MESSAGE: &str =
    "Failed to prioritize projects due to an AI service error.";

/// The three failure categories visible to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Timeout,
    UpstreamFailure,
}

impl ErrorKind {
    /// Fixed, user-facing message for this category.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => INVALID_INPUT_MESSAGE,
            ErrorKind::Timeout => TIMEOUT_MESSAGE,
            ErrorKind::UpstreamFailure => UPSTREAM_FAILURE_MESSAGE,
        }
    }

    /// Short machine-readable label (used in the `x-folio-status` header).
    pub fn as_label(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Timeout => "timeout",
            ErrorKind::UpstreamFailure => "upstream_failure",
        }
    }
}

/// Why a prioritize call failed. The `Display` text is for logs only; callers
/// show [`OrchestratorError::user_message`].
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("ranking did not finish within {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("upstream failure: {0}")]
    UpstreamFailure(String),
}

impl OrchestratorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrchestratorError::InvalidInput { .. } => ErrorKind::InvalidInput,
            OrchestratorError::Timeout { .. } => ErrorKind::Timeout,
            OrchestratorError::UpstreamFailure(_) => ErrorKind::UpstreamFailure,
        }
    }

    pub fn user_message(&self) -> &'static str {
        self.kind().message()
    }
}
