use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::error::ProjectError;

/// One portfolio project card.
///
/// Identity is structural: two projects with the same title, description and
/// link are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            github_link: None,
        }
    }

    pub fn with_github_link(mut self, link: impl Into<String>) -> Self {
        self.github_link = Some(link.into());
        self
    }

    /// Checks required fields and that `github_link`, if any, is an absolute URL.
    pub fn validate(&self) -> Result<(), ProjectError> {
        if self.title.trim().is_empty() {
            return Err(ProjectError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ProjectError::EmptyDescription {
                title: self.title.clone(),
            });
        }
        if let Some(ref link) = self.github_link {
            Url::parse(link).map_err(|e| ProjectError::InvalidGithubLink {
                title: self.title.clone(),
                link: link.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}

/// Free-text description of what the visitor is interested in.
///
/// Length policy lives at the HTTP boundary; the core only refuses blank text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDescription(String);

impl UserDescription {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the description is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for UserDescription {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserDescription {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UserDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Projects to reorder plus the description to reorder them against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub projects: Vec<Project>,
    pub user_description: UserDescription,
}

impl ReorderRequest {
    pub fn new(projects: Vec<Project>, user_description: impl Into<UserDescription>) -> Self {
        Self {
            projects,
            user_description: user_description.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }
}
