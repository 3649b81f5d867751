//! Get Component Example Tool Handler

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use uicb_application::ExampleServiceInterface;
use uicb_domain::error::Result;

use super::validate_args;
use crate::args::GetComponentExampleArgs;
use crate::formatter::ResponseFormatter;

/// Handler for usage example lookups
pub struct GetComponentExampleHandler {
    example_service: Arc<dyn ExampleServiceInterface>,
}

impl GetComponentExampleHandler {
    /// Create a new get_component_example handler
    pub fn new(example_service: Arc<dyn ExampleServiceInterface>) -> Self {
        Self { example_service }
    }

    /// Handle the get_component_example tool request
    ///
    /// An absent `exampleType` is resolved by the example service.
    pub async fn handle(
        &self,
        Parameters(args): Parameters<GetComponentExampleArgs>,
    ) -> Result<CallToolResult> {
        validate_args(&args)?;

        let document = self
            .example_service
            .get_example(&args.component_name, args.example_type.as_deref())
            .await?;

        Ok(ResponseFormatter::format_document(&document))
    }
}
