//! Get Component Info Tool Handler

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use uicb_application::ComponentReaderInterface;
use uicb_domain::error::Result;

use super::validate_args;
use crate::args::GetComponentInfoArgs;
use crate::formatter::ResponseFormatter;

/// Handler for reading a component's main source file
pub struct GetComponentInfoHandler {
    component_reader: Arc<dyn ComponentReaderInterface>,
}

impl GetComponentInfoHandler {
    /// Create a new get_component_info handler
    pub fn new(component_reader: Arc<dyn ComponentReaderInterface>) -> Self {
        Self { component_reader }
    }

    /// Handle the get_component_info tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<GetComponentInfoArgs>,
    ) -> Result<CallToolResult> {
        validate_args(&args)?;

        let source = self
            .component_reader
            .read_component(&args.component_name)
            .await?;

        Ok(ResponseFormatter::format_component_source(&source))
    }
}
