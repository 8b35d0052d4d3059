use async_trait::async_trait;
use futures_util::future::join_all;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::constants::{MAX_TOOL_ROUNDS, RELEVANCE_TOOL_NAME};
use crate::model::{ChatMessage, ChatModel, ChatRequest, ToolCall, ToolSpec};
use crate::project::{Project, ReorderRequest, UserDescription};
use crate::scoring::{RelevanceScore, RelevanceScorer};

use super::ProjectRanker;
use super::contract::{ensure_permutation, trivial_order};
use super::error::ReorderError;
use super::parse::parse_ranked_projects;

const RANKER_SYSTEM_PROMPT: &str = "You order portfolio projects by how relevant they are to a \
visitor. Use the assessProjectRelevance tool to judge each project. Reply with only a JSON \
array containing exactly the project objects you were given, unchanged, ordered from most to \
least relevant.";

/// Arguments of the relevance tool as the model sends them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RelevanceToolInput {
    project: Project,
    #[serde(default)]
    user_description: Option<UserDescription>,
}

/// Ranks with one aggregate model conversation.
///
/// The model is offered the scorer as the `assessProjectRelevance` tool and
/// answers with the reordered list, which is checked against the input before
/// it is returned.
pub struct ModelRanker<M, S> {
    model: M,
    scorer: S,
    max_tool_rounds: Option<usize>,
}

impl<M: ChatModel, S: RelevanceScorer> ModelRanker<M, S> {
    pub fn new(model: M, scorer: S) -> Self {
        Self {
            model,
            scorer,
            max_tool_rounds: None,
        }
    }

    /// Fixes the tool-round bound instead of deriving it from the request.
    pub fn with_max_tool_rounds(mut self, rounds: usize) -> Self {
        self.max_tool_rounds = Some(rounds);
        self
    }

    /// Rounds allowed for `request`: enough for one tool call per turn per
    /// project plus a spare, and never fewer than [`MAX_TOOL_ROUNDS`].
    pub fn tool_round_limit(&self, request: &ReorderRequest) -> usize {
        self.max_tool_rounds
            .unwrap_or_else(|| MAX_TOOL_ROUNDS.max(request.projects.len() + 1))
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    async fn answer_tool_calls(
        &self,
        calls: &[ToolCall],
        user_description: &UserDescription,
    ) -> Vec<ChatMessage> {
        let answers = join_all(
            calls
                .iter()
                .map(|call| self.answer_tool_call(call, user_description)),
        )
        .await;

        calls
            .iter()
            .zip(answers)
            .map(|(call, content)| ChatMessage::ToolResult {
                call_id: call.call_id.clone(),
                content,
            })
            .collect()
    }

    async fn answer_tool_call(&self, call: &ToolCall, user_description: &UserDescription) -> String {
        if call.name != RELEVANCE_TOOL_NAME {
            warn!(tool = %call.name, "Model called an unknown tool");
            return serde_json::json!({ "error": format!("unknown tool '{}'", call.name) })
                .to_string();
        }

        let score = match serde_json::from_value::<RelevanceToolInput>(call.arguments.clone()) {
            Ok(input) => {
                let description = input
                    .user_description
                    .filter(|d| !d.is_blank())
                    .unwrap_or_else(|| user_description.clone());
                match self.scorer.score(&input.project, &description).await {
                    Ok(score) => score,
                    Err(e) => {
                        warn!(title = %input.project.title, error = %e, "Scoring failed, using neutral score");
                        RelevanceScore::NEUTRAL
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Unparseable tool arguments, using neutral score");
                RelevanceScore::NEUTRAL
            }
        };

        score.value().to_string()
    }
}

#[async_trait]
impl<M: ChatModel, S: RelevanceScorer> ProjectRanker for ModelRanker<M, S> {
    async fn reorder(&self, request: &ReorderRequest) -> Result<Vec<Project>, ReorderError> {
        if let Some(order) = trivial_order(request) {
            debug!(count = order.len(), "Trivial reorder, skipping model call");
            return Ok(order);
        }

        if request.user_description.is_blank() {
            return Err(ReorderError::InvalidInput {
                reason: "user description is empty".to_string(),
            });
        }

        let mut chat = ChatRequest::new(vec![ChatMessage::User(ranking_prompt(request))])
            .with_system(RANKER_SYSTEM_PROMPT)
            .with_tools(vec![relevance_tool_spec()]);

        let max_rounds = self.tool_round_limit(request);
        let mut rounds = 0usize;
        loop {
            let reply = self.model.complete(chat.clone()).await?;

            if reply.has_tool_calls() {
                rounds += 1;
                if rounds > max_rounds {
                    return Err(ReorderError::ToolRoundsExceeded { rounds: max_rounds });
                }

                debug!(round = rounds, calls = reply.tool_calls.len(), "Answering tool calls");
                let results = self
                    .answer_tool_calls(&reply.tool_calls, &request.user_description)
                    .await;
                chat.messages.push(ChatMessage::ToolCalls(reply.tool_calls));
                chat.messages.extend(results);
                continue;
            }

            let text = reply
                .trimmed_text()
                .ok_or_else(|| ReorderError::MalformedResponse {
                    reason: "model returned an empty reply".to_string(),
                })?;

            let ranked = parse_ranked_projects(text)?;
            ensure_permutation(&request.projects, &ranked)?;

            info!(
                count = ranked.len(),
                tool_rounds = rounds,
                model = self.model.name(),
                "Projects reordered by model"
            );
            return Ok(ranked);
        }
    }
}

pub(crate) fn relevance_tool_spec() -> ToolSpec {
    ToolSpec {
        name: RELEVANCE_TOOL_NAME.to_string(),
        description: "Determines the relevance of a project to a user based on the project \
description and user description. Returns a number between 0 and 1; higher is more relevant."
            .to_string(),
        schema: serde_json::json!({
            "type": "object",
            "properties": {
                "project": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "description": { "type": "string" },
                        "githubLink": { "type": "string", "format": "uri" }
                    },
                    "required": ["title", "description"]
                },
                "userDescription": { "type": "string" }
            },
            "required": ["project", "userDescription"]
        }),
    }
}

pub(crate) fn ranking_prompt(request: &ReorderRequest) -> String {
    let projects = serde_json::to_string_pretty(&request.projects).unwrap_or_else(|_| {
        request
            .projects
            .iter()
            .map(|p| format!("{}: {}", p.title, p.description))
            .collect::<Vec<_>>()
            .join("\n")
    });

    format!(
        "Visitor description: {}\n\nProjects:\n{}\n\nPrioritize the projects based on their \
relevance to the visitor description. Return the projects in order of relevance, most \
relevant first.",
        request.user_description, projects
    )
}
