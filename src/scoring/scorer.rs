use async_trait::async_trait;
use tracing::{debug, warn};

use crate::model::{ChatMessage, ChatModel, ChatRequest};
use crate::project::{Project, UserDescription};

use super::error::ScoringError;
use super::types::RelevanceScore;

const SCORER_SYSTEM_PROMPT: &str = "You judge how relevant a portfolio project is to a visitor \
based on the visitor's own description of their interests. Answer with a single number \
between 0 and 1, where 1 means highly relevant. Do not add any other text.";

/// Judges how relevant one project is to one user description.
#[async_trait]
pub trait RelevanceScorer: Send + Sync {
    async fn score(
        &self,
        project: &Project,
        user_description: &UserDescription,
    ) -> Result<RelevanceScore, ScoringError>;
}

#[async_trait]
impl<T: RelevanceScorer + ?Sized> RelevanceScorer for std::sync::Arc<T> {
    async fn score(
        &self,
        project: &Project,
        user_description: &UserDescription,
    ) -> Result<RelevanceScore, ScoringError> {
        (**self).score(project, user_description).await
    }
}

/// Scorer that asks a [`ChatModel`] for a number and coerces it into range.
pub struct PromptScorer<M> {
    model: M,
}

impl<M: ChatModel> std::fmt::Debug for PromptScorer<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptScorer")
            .field("model", &self.model.name())
            .finish()
    }
}

impl<M: ChatModel> PromptScorer<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}

#[async_trait]
impl<M: ChatModel> RelevanceScorer for PromptScorer<M> {
    async fn score(
        &self,
        project: &Project,
        user_description: &UserDescription,
    ) -> Result<RelevanceScore, ScoringError> {
        check_input(project, user_description)?;

        let request = ChatRequest::new(vec![ChatMessage::User(score_prompt(
            project,
            user_description,
        ))])
        .with_system(SCORER_SYSTEM_PROMPT);

        let reply = self.model.complete(request).await?;

        let score = match reply.trimmed_text() {
            Some(text) => parse_score(text)?,
            None => {
                warn!(title = %project.title, "Model returned no score, using default");
                RelevanceScore::NEUTRAL
            }
        };

        debug!(title = %project.title, score = score.value(), "Scored project");
        Ok(score)
    }
}

fn check_input(project: &Project, user_description: &UserDescription) -> Result<(), ScoringError> {
    if project.title.trim().is_empty() {
        return Err(ScoringError::InvalidInput {
            reason: "project title is empty".to_string(),
        });
    }
    if project.description.trim().is_empty() {
        return Err(ScoringError::InvalidInput {
            reason: format!("project '{}' has an empty description", project.title),
        });
    }
    if user_description.is_blank() {
        return Err(ScoringError::InvalidInput {
            reason: "user description is empty".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn score_prompt(project: &Project, user_description: &UserDescription) -> String {
    let mut prompt = format!(
        "Visitor description: {}\n\nProject title: {}\nProject description: {}\n",
        user_description, project.title, project.description
    );
    if let Some(ref link) = project.github_link {
        prompt.push_str(&format!("Project link: {}\n", link));
    }
    prompt.push_str("\nRelevance score (0 to 1):");
    prompt
}

/// Takes the first number in `text` and clamps it into `[0, 1]`.
pub(crate) fn parse_score(text: &str) -> Result<RelevanceScore, ScoringError> {
    text.split(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .map(|token| token.trim_end_matches('.'))
        .filter(|token| !token.is_empty())
        .find_map(|token| token.parse::<f32>().ok())
        .map(RelevanceScore::clamped)
        .ok_or_else(|| ScoringError::MalformedResponse {
            reply: text.to_string(),
        })
}
