//! Acceptance tests over a real catalog tree
//!
//! The server is wired through the same composition root as the binary,
//! then driven with wire-level tool names and JSON arguments.

use serde_json::json;
use uicb_domain::value_objects::ComponentEntry;
use uicb_server::tools::route_call;

use crate::test_utils::test_fixtures::{
    BUTTON_SOURCE, RULES_TEXT, arguments, create_temp_project, extract_text_content,
    filesystem_server, is_error, no_arguments, write,
};

fn listed_names(text: &str) -> Vec<String> {
    let entries: Vec<ComponentEntry> = serde_json::from_str(text).expect("JSON payload");
    let mut names: Vec<String> = entries.into_iter().map(|entry| entry.name).collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_listing_reports_only_directories_with_source_files() {
    let project = create_temp_project();
    let server = filesystem_server(project.path());

    let result = route_call("list_components", no_arguments(), server.handlers()).await;

    assert!(!is_error(&result));
    let text = extract_text_content(&result);
    assert_eq!(listed_names(&text), vec!["Button", "Input"]);

    let entries: Vec<ComponentEntry> = serde_json::from_str(&text).expect("JSON payload");
    let button = entries
        .iter()
        .find(|entry| entry.name == "Button")
        .expect("Button listed");
    assert_eq!(button.path, "/demo/src/components/ui/Button");
}

#[tokio::test]
async fn test_category_filter_matches_path_case_insensitively() {
    let project = create_temp_project();
    let server = filesystem_server(project.path());

    let result = route_call(
        "list_components",
        arguments(json!({"category": "INPUT"})),
        server.handlers(),
    )
    .await;
    assert_eq!(listed_names(&extract_text_content(&result)), vec!["Input"]);

    let everything = route_call(
        "list_components",
        arguments(json!({"category": "components/ui"})),
        server.handlers(),
    )
    .await;
    assert_eq!(
        listed_names(&extract_text_content(&everything)),
        vec!["Button", "Input"]
    );
}

#[tokio::test]
async fn test_missing_component_root_lists_nothing() {
    let project = tempfile::TempDir::new().expect("temp dir");
    let server = filesystem_server(project.path());

    let result = route_call("list_components", None, server.handlers()).await;

    assert!(!is_error(&result));
    assert_eq!(extract_text_content(&result), "[]");
}

#[tokio::test]
async fn test_component_info_prefers_named_file_over_index() {
    let project = create_temp_project();
    write(
        &project
            .path()
            .join("demo/src/components/ui/Button/index.tsx"),
        "export * from './Button';\n",
    );
    let server = filesystem_server(project.path());

    let result = route_call(
        "get_component_info",
        arguments(json!({"componentName": "Button"})),
        server.handlers(),
    )
    .await;

    assert_eq!(
        extract_text_content(&result),
        format!("Component: Button\n\nSource:\n{BUTTON_SOURCE}")
    );
}

#[tokio::test]
async fn test_component_info_falls_back_to_index_file() {
    let project = create_temp_project();
    let server = filesystem_server(project.path());

    let result = route_call(
        "get_component_info",
        arguments(json!({"componentName": "Input"})),
        server.handlers(),
    )
    .await;

    assert!(!is_error(&result));
    assert!(extract_text_content(&result).starts_with("Component: Input\n\nSource:\n"));
}

#[tokio::test]
async fn test_component_without_main_file_is_not_found() {
    let project = create_temp_project();
    let server = filesystem_server(project.path());

    let result = route_call(
        "get_component_info",
        arguments(json!({"componentName": "utils"})),
        server.handlers(),
    )
    .await;

    assert!(is_error(&result));
    assert!(extract_text_content(&result).contains("utils"));
}

#[tokio::test]
async fn test_examples_default_to_basic() {
    let project = create_temp_project();
    let server = filesystem_server(project.path());

    let basic = route_call(
        "get_component_example",
        arguments(json!({"componentName": "Button"})),
        server.handlers(),
    )
    .await;
    assert_eq!(extract_text_content(&basic), "# Basic button\n");

    let advanced = route_call(
        "get_component_example",
        arguments(json!({"componentName": "Button", "exampleType": "Advanced"})),
        server.handlers(),
    )
    .await;
    assert_eq!(extract_text_content(&advanced), "# Advanced button\n");
}

#[tokio::test]
async fn test_missing_example_has_no_fallback() {
    let project = create_temp_project();
    let server = filesystem_server(project.path());

    let result = route_call(
        "get_component_example",
        arguments(json!({"componentName": "Input"})),
        server.handlers(),
    )
    .await;

    assert!(is_error(&result));
    let text = extract_text_content(&result);
    assert!(text.contains("Input"));
    assert!(text.contains("Basic"));
}

#[tokio::test]
async fn test_rules_are_returned_and_reads_are_idempotent() {
    let project = create_temp_project();
    let server = filesystem_server(project.path());

    let first = route_call("get_rules", no_arguments(), server.handlers()).await;
    let second = route_call("get_rules", no_arguments(), server.handlers()).await;

    assert_eq!(extract_text_content(&first), RULES_TEXT);
    assert_eq!(extract_text_content(&first), extract_text_content(&second));
}

#[tokio::test]
async fn test_missing_rules_file_is_an_error_envelope() {
    let project = create_temp_project();
    std::fs::remove_file(project.path().join("UIGOD-RULES.MD")).expect("remove rules");
    let server = filesystem_server(project.path());

    let result = route_call("get_rules", None, server.handlers()).await;

    assert!(is_error(&result));
    assert!(extract_text_content(&result).starts_with("Error: "));
}

#[tokio::test]
async fn test_files_are_reread_on_every_call() {
    let project = create_temp_project();
    let server = filesystem_server(project.path());
    let rules_path = project.path().join("UIGOD-RULES.MD");

    let before = route_call("get_rules", None, server.handlers()).await;
    write(&rules_path, "updated\n");
    let after = route_call("get_rules", None, server.handlers()).await;

    assert_eq!(extract_text_content(&before), RULES_TEXT);
    assert_eq!(extract_text_content(&after), "updated\n");
}
