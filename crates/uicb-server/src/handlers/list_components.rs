//! List Components Tool Handler

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use uicb_application::ComponentIndexInterface;
use uicb_domain::error::Result;

use super::validate_args;
use crate::args::ListComponentsArgs;
use crate::formatter::ResponseFormatter;

/// Handler for component listing
pub struct ListComponentsHandler {
    component_index: Arc<dyn ComponentIndexInterface>,
}

impl ListComponentsHandler {
    /// Create a new list_components handler
    pub fn new(component_index: Arc<dyn ComponentIndexInterface>) -> Self {
        Self { component_index }
    }

    /// Handle the list_components tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<ListComponentsArgs>,
    ) -> Result<CallToolResult> {
        validate_args(&args)?;

        let components = self
            .component_index
            .list_components(args.category.as_deref())
            .await?;

        ResponseFormatter::format_component_list(&components)
    }
}
