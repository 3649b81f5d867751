//! Get Rules Tool Handler

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use uicb_application::RulesServiceInterface;
use uicb_domain::error::Result;

use crate::args::GetRulesArgs;
use crate::formatter::ResponseFormatter;

/// Handler for the rules document
pub struct GetRulesHandler {
    rules_service: Arc<dyn RulesServiceInterface>,
}

impl GetRulesHandler {
    /// Create a new get_rules handler
    pub fn new(rules_service: Arc<dyn RulesServiceInterface>) -> Self {
        Self { rules_service }
    }

    /// Handle the get_rules tool request
    pub async fn handle(
        &self,
        Parameters(_args): Parameters<GetRulesArgs>,
    ) -> Result<CallToolResult> {
        let rules = self.rules_service.get_rules().await?;
        Ok(ResponseFormatter::format_document(&rules))
    }
}
