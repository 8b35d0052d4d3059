use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_project_serializes_camel_case() {
    let project = Project::new("Sales Dashboard", "Tableau KPIs").with_github_link("https://github.com/x/y");
    let json = serde_json::to_value(&project).unwrap();

    assert_eq!(json["title"], "Sales Dashboard");
    assert_eq!(json["githubLink"], "https://github.com/x/y");
    assert!(json.get("github_link").is_none());
}

#[test]
fn test_project_omits_missing_link() {
    let json = serde_json::to_value(Project::new("A", "data viz")).unwrap();
    assert!(json.get("githubLink").is_none());

    let parsed: Project = serde_json::from_str(r#"{"title":"A","description":"data viz"}"#).unwrap();
    assert_eq!(parsed, Project::new("A", "data viz"));
}

#[test]
fn test_project_validate_ok() {
    assert!(Project::new("A", "data viz").validate().is_ok());
    assert!(
        Project::new("A", "data viz")
            .with_github_link("https://github.com/a/b")
            .validate()
            .is_ok()
    );
}

#[test]
fn test_project_validate_empty_fields() {
    assert!(matches!(
        Project::new("  ", "data viz").validate(),
        Err(ProjectError::EmptyTitle)
    ));
    assert!(matches!(
        Project::new("A", "").validate(),
        Err(ProjectError::EmptyDescription { .. })
    ));
}

#[test]
fn test_project_validate_rejects_relative_link() {
    let err = Project::new("A", "data viz")
        .with_github_link("github.com/a/b")
        .validate()
        .unwrap_err();
    assert!(matches!(err, ProjectError::InvalidGithubLink { .. }));
    assert!(err.to_string().contains("github.com/a/b"));
}

#[test]
fn test_user_description_blank() {
    assert!(UserDescription::from("").is_blank());
    assert!(UserDescription::from(" \n\t ").is_blank());
    assert!(!UserDescription::from("dashboards").is_blank());
}

#[test]
fn test_reorder_request_wire_shape() {
    let request: ReorderRequest = serde_json::from_value(serde_json::json!({
        "projects": [{"title": "A", "description": "data viz"}],
        "userDescription": "I love dashboards"
    }))
    .unwrap();

    assert_eq!(request.len(), 1);
    assert_eq!(request.user_description.as_str(), "I love dashboards");
}

#[test]
fn test_default_catalog_is_valid() {
    let projects = default_projects();
    assert_eq!(projects.len(), 5);
    assert!(validate_all(&projects).is_ok());
    assert_eq!(projects[0].title, "Sales Dashboard");
}

#[test]
fn test_load_catalog_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"title":"A","description":"data viz","githubLink":"https://github.com/a"}},
            {{"title":"B","description":"backend APIs"}}]"#
    )
    .unwrap();

    let projects = load_catalog(file.path()).unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1], Project::new("B", "backend APIs"));
}

#[test]
fn test_load_catalog_rejects_invalid_project() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"[{{"title":"","description":"data viz"}}]"#).unwrap();

    assert!(matches!(
        load_catalog(file.path()),
        Err(ProjectError::EmptyTitle)
    ));
}

#[test]
fn test_load_catalog_parse_and_read_errors() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(matches!(
        load_catalog(file.path()),
        Err(ProjectError::CatalogParse { .. })
    ));

    let missing = std::path::Path::new("/nonexistent/folio/catalog.json");
    assert!(matches!(
        load_catalog(missing),
        Err(ProjectError::CatalogRead { .. })
    ));
}
