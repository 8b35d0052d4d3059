//! [`ChatModel`] backed by the `genai` multi-provider client.
//!
//! Provider selection follows the model name (`gemini-*`, `gpt-*`, `claude-*`,
//! ...) and credentials come from the provider's usual environment variables.

use async_trait::async_trait;
use genai::Client;
use genai::chat::{
    ChatMessage as GenaiMessage, ChatRequest as GenaiRequest, ChatResponse, ContentPart,
    MessageContent, Tool, ToolCall as GenaiToolCall, ToolResponse,
};
use tracing::{debug, error};

use super::ChatModel;
use super::error::ModelError;
use super::types::{ChatMessage, ChatReply, ChatRequest, ToolCall, ToolSpec};

#[derive(Clone)]
pub struct GenaiChatModel {
    client: Client,
    model: String,
}

impl std::fmt::Debug for GenaiChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenaiChatModel")
            .field("model", &self.model)
            .finish()
    }
}

impl GenaiChatModel {
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_client(Client::default(), model)
    }

    pub fn with_client(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatModel for GenaiChatModel {
    async fn complete(&self, request: ChatRequest) -> Result<ChatReply, ModelError> {
        let genai_req = to_genai_request(request);

        debug!(model = %self.model, "Sending chat request to provider");

        let resp = self
            .client
            .exec_chat(&self.model, genai_req, None)
            .await
            .map_err(|e| {
                error!(model = %self.model, "Provider error: {}", e);
                ModelError::RequestFailed {
                    model: self.model.clone(),
                    message: e.to_string(),
                }
            })?;

        Ok(from_genai_response(resp))
    }

    fn name(&self) -> &str {
        &self.model
    }
}

pub(crate) fn to_genai_request(req: ChatRequest) -> GenaiRequest {
    let messages: Vec<GenaiMessage> = req.messages.into_iter().map(to_genai_message).collect();

    let mut genai_req = GenaiRequest::new(messages);

    if let Some(system) = req.system {
        genai_req = genai_req.with_system(system);
    }

    if !req.tools.is_empty() {
        genai_req = genai_req.with_tools(req.tools.into_iter().map(to_genai_tool).collect::<Vec<_>>());
    }

    genai_req
}

fn to_genai_tool(spec: ToolSpec) -> Tool {
    Tool::new(spec.name)
        .with_description(spec.description)
        .with_schema(spec.schema)
}

fn to_genai_message(m: ChatMessage) -> GenaiMessage {
    match m {
        ChatMessage::User(text) => GenaiMessage::user(text),
        ChatMessage::Assistant(text) => GenaiMessage::assistant(text),
        ChatMessage::ToolCalls(calls) => {
            let mut content = MessageContent::default();
            for call in calls {
                content.push(ContentPart::ToolCall(GenaiToolCall {
                    call_id: call.call_id,
                    fn_name: call.name,
                    fn_arguments: call.arguments,
                }));
            }
            GenaiMessage::assistant(content)
        }
        ChatMessage::ToolResult { call_id, content } => {
            GenaiMessage::from(ToolResponse::new(call_id, content))
        }
    }
}

pub(crate) fn from_genai_response(resp: ChatResponse) -> ChatReply {
    let tool_calls = resp
        .tool_calls()
        .into_iter()
        .map(|tc| ToolCall {
            call_id: tc.call_id.clone(),
            name: tc.fn_name.clone(),
            arguments: tc.fn_arguments.clone(),
        })
        .collect();

    ChatReply {
        text: resp.first_text().map(str::to_string),
        tool_calls,
    }
}
