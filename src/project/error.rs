use std::path::PathBuf;
use thiserror::Error;

/// Reasons a [`Project`](super::Project) or catalog fails validation.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("project title must not be empty")]
    EmptyTitle,

    #[error("project '{title}' has an empty description")]
    EmptyDescription { title: String },

    #[error("project '{title}' has an invalid github link '{link}': {reason}")]
    InvalidGithubLink {
        title: String,
        link: String,
        reason: String,
    },

    #[error("failed to read catalog at {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog at {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
