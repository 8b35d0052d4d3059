//! Generative-text model capability.
//!
//! Everything that talks to a language model goes through [`ChatModel`], so
//! ranking and scoring can run against [`GenaiChatModel`] in production and a
//! deterministic double in tests.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod provider;
pub mod types;

#[cfg(test)]
mod tests;

use async_trait::async_trait;

pub use error::ModelError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockChatModel;
pub use provider::GenaiChatModel;
pub use types::{ChatMessage, ChatReply, ChatRequest, ToolCall, ToolSpec};

/// Opaque, possibly slow, possibly failing chat completion.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ModelError>;

    /// Model identifier, used in logs.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: ChatModel + ?Sized> ChatModel for std::sync::Arc<T> {
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ModelError> {
        (**self).complete(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
