//! Tests for ResponseFormatter

use uicb_domain::error::{Error, NotFoundReason};
use uicb_domain::value_objects::{ComponentEntry, ComponentSource, SourceDocument};
use uicb_server::formatter::ResponseFormatter;

use crate::test_utils::test_fixtures::{extract_text_content, is_error, sample_entries};

#[test]
fn test_component_list_is_pretty_json() {
    let result = ResponseFormatter::format_component_list(&sample_entries()).expect("format");
    let text = extract_text_content(&result);

    assert!(!is_error(&result));
    assert!(text.starts_with("[\n  {"));

    let parsed: Vec<ComponentEntry> = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(parsed, sample_entries());

    let raw: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(raw[0]["type"], "component");
    assert_eq!(raw[0].as_object().map(|o| o.len()), Some(3));
}

#[test]
fn test_empty_component_list() {
    let result = ResponseFormatter::format_component_list(&[]).expect("format");
    assert_eq!(extract_text_content(&result), "[]");
}

#[test]
fn test_component_source_layout() {
    let source = ComponentSource {
        name: "Button".to_string(),
        document: SourceDocument::new("/ui/Button/Button.tsx", "export {};\n"),
    };

    let result = ResponseFormatter::format_component_source(&source);

    assert_eq!(
        extract_text_content(&result),
        "Component: Button\n\nSource:\nexport {};\n"
    );
}

#[test]
fn test_document_is_passed_through_verbatim() {
    let content = "# Title\r\n\n  indented\t\n";
    let result = ResponseFormatter::format_document(&SourceDocument::new("/doc.md", content));
    assert_eq!(extract_text_content(&result), content);
}

#[test]
fn test_error_envelope() {
    let error = Error::component_not_found("Ghost", NotFoundReason::MissingDirectory);
    let result = ResponseFormatter::format_error(&error);

    assert!(is_error(&result));
    let text = extract_text_content(&result);
    assert!(text.starts_with("Error: "));
    assert!(text.contains("Ghost"));
}
