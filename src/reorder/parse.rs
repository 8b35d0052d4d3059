use crate::project::Project;

use super::error::ReorderError;

/// Parses the model's final answer as a JSON array of projects.
///
/// Models often wrap JSON in markdown fences or a sentence of prose, so the
/// outermost `[...]` span is extracted before parsing.
pub fn parse_ranked_projects(text: &str) -> Result<Vec<Project>, ReorderError> {
    let start = text.find('[');
    let end = text.rfind(']');

    let json = match (start, end) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => {
            return Err(ReorderError::MalformedResponse {
                reason: "reply contains no JSON array".to_string(),
            });
        }
    };

    serde_json::from_str(json).map_err(|e| ReorderError::MalformedResponse {
        reason: format!("reply is not a list of projects: {}", e),
    })
}
