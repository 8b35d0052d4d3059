use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by a [`ChatModel`](super::ChatModel).
pub enum ModelError {
    /// The provider call failed (network, auth, quota, provider error body).
    #[error("model request to '{model}' failed: {message}")]
    RequestFailed {
        /// Model name.
        model: String,
        /// Error message.
        message: String,
    },

    /// The request could not be expressed for the provider.
    #[error("invalid model request: {reason}")]
    InvalidRequest {
        /// Why the request was rejected.
        reason: String,
    },

    /// A scripted test double ran out of replies.
    #[error("mock model script exhausted after {calls} calls")]
    ScriptExhausted {
        /// Calls served before exhaustion.
        calls: usize,
    },
}
