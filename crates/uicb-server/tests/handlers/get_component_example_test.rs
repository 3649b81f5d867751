//! Tests for GetComponentExampleHandler

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use uicb_domain::Error;
use uicb_server::args::GetComponentExampleArgs;
use uicb_server::handlers::GetComponentExampleHandler;

use crate::test_utils::mock_services::MockExampleService;
use crate::test_utils::test_fixtures::extract_text_content;

fn handler() -> GetComponentExampleHandler {
    GetComponentExampleHandler::new(Arc::new(MockExampleService::new()))
}

fn args(component: &str, example_type: Option<&str>) -> Parameters<GetComponentExampleArgs> {
    Parameters(GetComponentExampleArgs {
        component_name: component.to_string(),
        example_type: example_type.map(str::to_string),
    })
}

#[tokio::test]
async fn test_absent_example_type_uses_service_default() {
    let result = handler()
        .handle(args("Button", None))
        .await
        .expect("Expected successful response");

    assert_eq!(extract_text_content(&result), "# Button Basic\n");
}

#[tokio::test]
async fn test_explicit_example_type() {
    let result = handler()
        .handle(args("Button", Some("Advanced")))
        .await
        .expect("Expected successful response");

    assert_eq!(extract_text_content(&result), "# Button Advanced\n");
}

#[tokio::test]
async fn test_missing_example() {
    let result = handler().handle(args("Button", Some("Missing"))).await;
    assert!(matches!(result, Err(Error::ExampleNotFound { .. })));
}

#[tokio::test]
async fn test_invalid_example_type() {
    let result = handler().handle(args("Button", Some("a/b"))).await;
    assert!(matches!(result, Err(Error::InvalidArgument { .. })));
}
