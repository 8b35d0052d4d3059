use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::ChatModel;
use super::error::ModelError;
use super::types::{ChatReply, ChatRequest};

type Responder = Box<dyn Fn(&ChatRequest) -> Result<ChatReply, ModelError> + Send + Sync>;

enum Behavior {
    Script(Mutex<VecDeque<Result<ChatReply, ModelError>>>),
    Respond(Responder),
    Hang,
}

/// Deterministic [`ChatModel`] for tests.
///
/// Counts calls and records every request it receives.
pub struct MockChatModel {
    behavior: Behavior,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockChatModel {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::from_fn(move |_| Ok(ChatReply::text(text.clone())))
    }

    /// Answers with each scripted reply in turn, then fails.
    pub fn scripted(replies: Vec<Result<ChatReply, ModelError>>) -> Self {
        Self::with_behavior(Behavior::Script(Mutex::new(replies.into())))
    }

    /// Computes each reply from the incoming request.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&ChatRequest) -> Result<ChatReply, ModelError> + Send + Sync + 'static,
    {
        Self::with_behavior(Behavior::Respond(Box::new(f)))
    }

    /// Always fails as a provider error would.
    pub fn failing(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::from_fn(move |_| {
            Err(ModelError::RequestFailed {
                model: "mock".to_string(),
                message: message.clone(),
            })
        })
    }

    /// Never completes.
    pub fn hanging() -> Self {
        Self::with_behavior(Behavior::Hang)
    }

    /// Sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ModelError> {
        let served = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behavior {
            Behavior::Hang => std::future::pending().await,
            Behavior::Respond(f) => f(&request),
            Behavior::Script(script) => {
                let next = script
                    .lock()
                    .map_err(|_| ModelError::InvalidRequest {
                        reason: "mock script lock poisoned".to_string(),
                    })?
                    .pop_front();
                next.unwrap_or(Err(ModelError::ScriptExhausted { calls: served }))
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
