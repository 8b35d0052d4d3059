//! The portfolio's project list.
//!
//! A built-in default mirrors the cards shipped with the site. Deployments can
//! replace it with a JSON array of projects via `FOLIO_CATALOG_PATH`.

use std::path::Path;

use tracing::info;

use super::error::ProjectError;
use super::types::Project;

const PLACEHOLDER_LINK: &str = "https://github.com";

/// Returns the built-in project cards in display order.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new(
            "Sales Dashboard",
            "Developed an interactive sales dashboard using Tableau to track KPIs and sales performance, providing actionable insights for the sales team.",
        )
        .with_github_link(PLACEHOLDER_LINK),
        Project::new(
            "Customer Churn Prediction",
            "Built a machine learning model in Python to predict customer churn, helping the business to proactively retain customers.",
        )
        .with_github_link(PLACEHOLDER_LINK),
        Project::new(
            "Market Basket Analysis",
            "Conducted market basket analysis using SQL and Python to identify product associations and inform cross-selling strategies.",
        )
        .with_github_link(PLACEHOLDER_LINK),
        Project::new(
            "E-commerce Website A/B Testing",
            "Analyzed A/B test results for a new website feature, providing a statistical summary and recommendation to leadership.",
        )
        .with_github_link(PLACEHOLDER_LINK),
        Project::new(
            "Business Process Optimization",
            "Mapped and analyzed existing business processes, identifying bottlenecks and recommending improvements that led to a 15% increase in efficiency.",
        )
        .with_github_link(PLACEHOLDER_LINK),
    ]
}

/// Loads and validates a catalog file (a JSON array of projects).
pub fn load_catalog(path: &Path) -> Result<Vec<Project>, ProjectError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ProjectError::CatalogRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let projects: Vec<Project> =
        serde_json::from_str(&raw).map_err(|e| ProjectError::CatalogParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_all(&projects)?;

    info!(path = %path.display(), count = projects.len(), "Loaded project catalog");
    Ok(projects)
}

/// Validates every project, stopping at the first failure.
pub fn validate_all(projects: &[Project]) -> Result<(), ProjectError> {
    projects.iter().try_for_each(Project::validate)
}
